// 🏦 Account type mapping
// The Zengin record carries the deposit type as a single-digit code.
// This enum is the single source of truth: both the kana label and the
// numeric code map into it, and the emitted description is the code.

use serde::{Deserialize, Serialize};

/// Deposit account type under the Zengin scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    /// 普通 - ordinary (savings/checking) account, code "1"
    Ordinary,

    /// 当座 - current (checking for businesses) account, code "2"
    Current,

    /// 貯蓄 - savings deposit account, code "4"
    Savings,
}

impl AccountType {
    /// Parse a request value. Accepts the kana label or its numeric code;
    /// anything else is unrecognized (not an error, callers degrade to
    /// [`AccountType::describe`]'s "Unknown").
    pub fn from_input(value: &str) -> Option<AccountType> {
        match value.trim() {
            "普通" | "1" => Some(AccountType::Ordinary),
            "当座" | "2" => Some(AccountType::Current),
            "貯蓄" | "4" => Some(AccountType::Savings),
            _ => None,
        }
    }

    /// Single-digit Zengin type code.
    pub fn code(&self) -> &'static str {
        match self {
            AccountType::Ordinary => "1",
            AccountType::Current => "2",
            AccountType::Savings => "4",
        }
    }

    /// Kana label as it appears on transfer forms.
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Ordinary => "普通",
            AccountType::Current => "当座",
            AccountType::Savings => "貯蓄",
        }
    }

    /// Description emitted in the result: the type code for recognized
    /// values, "Unknown" otherwise. Lenient by contract - an unrecognized
    /// account type never fails the request.
    pub fn describe(value: &str) -> String {
        match AccountType::from_input(value) {
            Some(t) => t.code().to_string(),
            None => "Unknown".to_string(),
        }
    }
}
