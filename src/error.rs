// Transfer validation errors
// Every failure a request can hit, as explicit values instead of exceptions

use thiserror::Error;

/// Terminal errors for a transfer-field validation request.
///
/// All four kinds end the request; none are retried and none carry partial
/// results. The boundary (CLI or HTTP handler) converts them into the failure
/// response envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// A required field was empty or absent after trimming.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The zero-padded bank code has no entry in the bank table.
    #[error("Invalid bank code: {raw} (formatted: {formatted})")]
    InvalidBankCode { raw: String, formatted: String },

    /// The zero-padded branch code has no entry in the bank's branch table.
    #[error("Invalid branch code: {raw} (formatted: {formatted}) for bank code: {bank_code}")]
    InvalidBranchCode {
        raw: String,
        formatted: String,
        bank_code: String,
    },

    /// A reference table is missing or unreadable. Distinct from the invalid-code
    /// kinds so a host can split statuses, even though the reference deployment
    /// maps both to 400.
    #[error("Reference data unavailable: {0}")]
    ReferenceDataUnavailable(String),
}
