// 💴 Transfer field validation and formatting
// The one operation this service exists for: take six raw request fields,
// check the codes against the reference tables, and emit the normalized
// Zengin-ready record. Linear pipeline, early exit on the first failure.

use crate::account_type::AccountType;
use crate::error::TransferError;
use crate::kana;
use crate::reference::ReferenceSource;
use serde::{Deserialize, Serialize};

// ============================================================================
// REQUEST / RESULT
// ============================================================================

/// Raw request fields as received from the caller.
///
/// `bank_code`, `branch_code`, and `account_number` are required; the rest
/// default to empty / zero and degrade gracefully.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferRequest {
    pub bank_code: String,
    pub branch_code: String,
    #[serde(default)]
    pub account_type: String,
    pub account_number: String,
    #[serde(default)]
    pub account_holder_kana: String,
    #[serde(default)]
    pub amount: u64,
}

/// The normalized output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResult {
    /// Bank code, zero-padded to 4 digits
    pub formatted_bank_code: String,

    /// Branch code, zero-padded to 3 digits
    pub formatted_branch_code: String,

    /// Account number, passed through as received
    pub formatted_account_number: String,

    /// Single-digit account type code, or "Unknown"
    pub account_type_description: String,

    /// Amount, zero-padded to 10 digits. Amounts wider than 10 digits are
    /// emitted whole; the padding never truncates.
    pub formatted_amount: String,

    /// Holder name converted to half-width kana
    pub account_holder_kana_normalized: String,

    /// Display name from the bank table
    pub resolved_bank_name: String,

    /// Display name from the branch table
    pub resolved_branch_name: String,
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Left-pad a code with zeros to the given width. Already-wide-enough codes
/// pass through unchanged, so the operation is idempotent.
fn pad_code(raw: &str, width: usize) -> String {
    format!("{:0>width$}", raw, width = width)
}

/// Validate a transfer request against the reference tables and produce the
/// formatted record.
///
/// Fails with the first error encountered: a missing required field, an
/// unknown bank or branch code, or an unreadable reference table. An
/// unrecognized account type is NOT an error; it resolves to "Unknown".
pub fn validate_and_format<S: ReferenceSource>(
    source: &S,
    request: &TransferRequest,
) -> Result<TransferResult, TransferError> {
    // 1. Required fields, after trimming
    let bank_code = request.bank_code.trim();
    let branch_code = request.branch_code.trim();
    let account_number = request.account_number.trim();

    if bank_code.is_empty() {
        return Err(TransferError::MissingParameter("bank_code"));
    }
    if branch_code.is_empty() {
        return Err(TransferError::MissingParameter("branch_code"));
    }
    if account_number.is_empty() {
        return Err(TransferError::MissingParameter("account_number"));
    }

    // 2. Bank code resolution
    let formatted_bank_code = pad_code(bank_code, 4);
    let bank = source
        .bank(&formatted_bank_code)?
        .ok_or_else(|| TransferError::InvalidBankCode {
            raw: bank_code.to_string(),
            formatted: formatted_bank_code.clone(),
        })?;
    log::debug!("Resolved bank {}: {}", formatted_bank_code, bank.name);

    // 3. Branch code resolution, within the resolved bank's partition
    let formatted_branch_code = pad_code(branch_code, 3);
    let branch = source
        .branch(&formatted_bank_code, &formatted_branch_code)?
        .ok_or_else(|| TransferError::InvalidBranchCode {
            raw: branch_code.to_string(),
            formatted: formatted_branch_code.clone(),
            bank_code: formatted_bank_code.clone(),
        })?;
    log::debug!(
        "Resolved branch {}/{}: {}",
        formatted_bank_code,
        formatted_branch_code,
        branch.name
    );

    // 4-7. Pure formatting; nothing past this point can fail
    Ok(TransferResult {
        formatted_bank_code,
        formatted_branch_code,
        formatted_account_number: account_number.to_string(),
        account_type_description: AccountType::describe(&request.account_type),
        formatted_amount: format!("{:010}", request.amount),
        account_holder_kana_normalized: kana::to_halfwidth(&request.account_holder_kana),
        resolved_bank_name: bank.name,
        resolved_branch_name: branch.name,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{BankEntry, BranchEntry, InMemoryTables};

    fn fixture_tables() -> InMemoryTables {
        let mut tables = InMemoryTables::new();
        tables.insert_bank(
            "0001",
            BankEntry {
                name: "みずほ銀行".to_string(),
                kana: Some("ミズホ".to_string()),
                roma: None,
            },
        );
        tables.insert_branch(
            "0001",
            "001",
            BranchEntry {
                name: "東京営業部".to_string(),
                kana: None,
                roma: None,
            },
        );
        tables
    }

    fn base_request() -> TransferRequest {
        TransferRequest {
            bank_code: "0001".to_string(),
            branch_code: "001".to_string(),
            account_type: "普通".to_string(),
            account_number: "1234567".to_string(),
            account_holder_kana: "ﾀﾞﾉｸ".to_string(),
            amount: 1000,
        }
    }

    #[test]
    fn test_end_to_end_success() {
        let tables = fixture_tables();
        let result = validate_and_format(&tables, &base_request()).unwrap();

        assert_eq!(result.formatted_bank_code, "0001");
        assert_eq!(result.formatted_branch_code, "001");
        assert_eq!(result.formatted_account_number, "1234567");
        assert_eq!(result.account_type_description, "1");
        assert_eq!(result.formatted_amount, "0000001000");
        assert_eq!(result.account_holder_kana_normalized, "ﾀﾞﾉｸ");
        assert_eq!(result.resolved_bank_name, "みずほ銀行");
        assert_eq!(result.resolved_branch_name, "東京営業部");
    }

    #[test]
    fn test_fullwidth_holder_name_is_normalized() {
        let tables = fixture_tables();
        let mut request = base_request();
        request.account_holder_kana = "ダノク".to_string();

        let result = validate_and_format(&tables, &request).unwrap();
        assert_eq!(result.account_holder_kana_normalized, "ﾀﾞﾉｸ");
    }

    #[test]
    fn test_short_codes_are_padded() {
        let tables = fixture_tables();
        let mut request = base_request();
        request.bank_code = "1".to_string();
        request.branch_code = "1".to_string();

        let result = validate_and_format(&tables, &request).unwrap();
        assert_eq!(result.formatted_bank_code, "0001");
        assert_eq!(result.formatted_branch_code, "001");
    }

    #[test]
    fn test_padding_is_idempotent() {
        assert_eq!(pad_code("0001", 4), "0001");
        assert_eq!(pad_code("1", 4), "0001");
        assert_eq!(pad_code("001", 3), "001");
        // Over-wide codes pass through rather than truncating
        assert_eq!(pad_code("12345", 4), "12345");
    }

    #[test]
    fn test_missing_bank_code() {
        let tables = fixture_tables();
        let mut request = base_request();
        request.bank_code = "  ".to_string();

        let err = validate_and_format(&tables, &request).unwrap_err();
        assert_eq!(err, TransferError::MissingParameter("bank_code"));
    }

    #[test]
    fn test_missing_branch_code() {
        let tables = fixture_tables();
        let mut request = base_request();
        request.branch_code = String::new();

        let err = validate_and_format(&tables, &request).unwrap_err();
        assert_eq!(err, TransferError::MissingParameter("branch_code"));
    }

    #[test]
    fn test_missing_account_number() {
        let tables = fixture_tables();
        let mut request = base_request();
        request.account_number = String::new();

        let err = validate_and_format(&tables, &request).unwrap_err();
        assert_eq!(err, TransferError::MissingParameter("account_number"));
    }

    #[test]
    fn test_required_checks_run_before_lookups() {
        // An empty bank code reports MissingParameter even though the
        // reference tables are empty too
        let tables = InMemoryTables::new();
        let mut request = base_request();
        request.bank_code = String::new();

        let err = validate_and_format(&tables, &request).unwrap_err();
        assert_eq!(err, TransferError::MissingParameter("bank_code"));
    }

    #[test]
    fn test_unknown_bank_code() {
        let tables = fixture_tables();
        let mut request = base_request();
        request.bank_code = "9999".to_string();

        let err = validate_and_format(&tables, &request).unwrap_err();
        assert_eq!(
            err,
            TransferError::InvalidBankCode {
                raw: "9999".to_string(),
                formatted: "9999".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_branch_code() {
        let tables = fixture_tables();
        let mut request = base_request();
        request.branch_code = "7".to_string();

        let err = validate_and_format(&tables, &request).unwrap_err();
        assert_eq!(
            err,
            TransferError::InvalidBranchCode {
                raw: "7".to_string(),
                formatted: "007".to_string(),
                bank_code: "0001".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_account_type_is_not_an_error() {
        let tables = fixture_tables();
        let mut request = base_request();
        request.account_type = "定期".to_string();

        let result = validate_and_format(&tables, &request).unwrap();
        assert_eq!(result.account_type_description, "Unknown");
    }

    #[test]
    fn test_amount_formatting() {
        let tables = fixture_tables();

        let mut request = base_request();
        request.amount = 123;
        let result = validate_and_format(&tables, &request).unwrap();
        assert_eq!(result.formatted_amount, "0000000123");

        request.amount = 0;
        let result = validate_and_format(&tables, &request).unwrap();
        assert_eq!(result.formatted_amount, "0000000000");
    }

    #[test]
    fn test_amount_over_ten_digits_passes_through() {
        let tables = fixture_tables();
        let mut request = base_request();
        request.amount = 12_345_678_901;

        let result = validate_and_format(&tables, &request).unwrap();
        assert_eq!(result.formatted_amount, "12345678901");
    }

    #[test]
    fn test_bank_name_round_trip() {
        // Any bank present in the table resolves to exactly its stored name
        let mut tables = InMemoryTables::new();
        for (code, name) in [("0001", "みずほ銀行"), ("0005", "三菱ＵＦＪ銀行"), ("0009", "三井住友銀行")] {
            tables.insert_bank(
                code,
                BankEntry {
                    name: name.to_string(),
                    kana: None,
                    roma: None,
                },
            );
            tables.insert_branch(
                code,
                "001",
                BranchEntry {
                    name: "本店".to_string(),
                    kana: None,
                    roma: None,
                },
            );
        }

        for (code, name) in [("0001", "みずほ銀行"), ("5", "三菱ＵＦＪ銀行"), ("9", "三井住友銀行")] {
            let mut request = base_request();
            request.bank_code = code.to_string();
            let result = validate_and_format(&tables, &request).unwrap();
            assert_eq!(result.resolved_bank_name, name);
        }
    }
}
