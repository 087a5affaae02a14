// API response envelope
// Shared by the HTTP server and the CLI so both surfaces emit the same JSON.

use crate::transfer::TransferResult;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Echo of the parameters as received, before any defaulting. Fields the
/// caller never sent serialize as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceivedParameters {
    pub bank_code: Option<String>,
    pub branch_code: Option<String>,
    pub account_type: Option<String>,
    pub account_number: Option<String>,
    pub account_holder_kana: Option<String>,
    pub amount: Option<u64>,
}

/// Response envelope for one validation request.
///
/// Success carries the formatted result; failure carries the error message.
/// Both echo the received parameters and a server-side timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub received_parameters: ReceivedParameters,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TransferResult>,

    /// Server time, `YYYY-MM-DD hh:mm:ss`
    pub timestamp: String,
}

fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

impl TransferResponse {
    pub fn ok(received: ReceivedParameters, result: TransferResult) -> Self {
        TransferResponse {
            success: true,
            error: None,
            received_parameters: received,
            result: Some(result),
            timestamp: now_stamp(),
        }
    }

    pub fn failure(error: impl Into<String>, received: ReceivedParameters) -> Self {
        TransferResponse {
            success: false,
            error: Some(error.into()),
            received_parameters: received,
            result: None,
            timestamp: now_stamp(),
        }
    }
}
