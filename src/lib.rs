// Zengin Gateway - Core Library
// Validation and formatting for Japanese domestic bank-transfer fields.
// Exposes all modules for use in the CLI, API server, and tests.

pub mod account_type;
pub mod error;
pub mod kana;
pub mod reference;
pub mod response;
pub mod transfer;

// Re-export commonly used types
pub use account_type::AccountType;
pub use error::TransferError;
pub use kana::to_halfwidth;
pub use reference::{
    load_banks_csv, load_branches_csv, BankEntry, BranchEntry, FileStore, InMemoryTables,
    ReferenceSource,
};
pub use response::{ReceivedParameters, TransferResponse};
pub use transfer::{validate_and_format, TransferRequest, TransferResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
