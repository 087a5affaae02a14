// 🗄 Reference data - bank and branch master tables
// The validator never touches files itself; it gets a ReferenceSource.
// Two implementations: in-memory tables (fixtures, embedded use) and a
// FileStore over the banks.json / branches/<code>.json directory layout.

use crate::error::TransferError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

// ============================================================================
// ENTRIES
// ============================================================================

/// One bank in the master table, keyed externally by its 4-digit code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankEntry {
    /// Display name, e.g. "みずほ銀行"
    pub name: String,

    /// Phonetic name in katakana, when the dataset carries it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kana: Option<String>,

    /// Romanized name, when the dataset carries it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roma: Option<String>,
}

/// One branch in a bank's branch table, keyed externally by its 3-digit code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchEntry {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kana: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roma: Option<String>,
}

// ============================================================================
// SOURCE TRAIT
// ============================================================================

/// Read-only lookup over the reference tables.
///
/// `Ok(None)` means the code has no entry (a client input problem);
/// `Err(ReferenceDataUnavailable)` means the table itself could not be
/// read (a deployment problem). The validator keeps the two apart.
pub trait ReferenceSource {
    /// Look up a bank by its zero-padded 4-digit code.
    fn bank(&self, formatted_code: &str) -> Result<Option<BankEntry>, TransferError>;

    /// Look up a branch by zero-padded bank (4-digit) and branch (3-digit) codes.
    fn branch(
        &self,
        formatted_bank_code: &str,
        formatted_branch_code: &str,
    ) -> Result<Option<BranchEntry>, TransferError>;
}

// ============================================================================
// IN-MEMORY TABLES
// ============================================================================

/// Reference tables held entirely in memory.
///
/// Built programmatically or from the CSV loaders below. A missing branch
/// partition reads as "not found" rather than "unavailable": in-memory data
/// has no file to be missing.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTables {
    banks: HashMap<String, BankEntry>,
    branches: HashMap<String, HashMap<String, BranchEntry>>,
}

impl InMemoryTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bank, zero-padding the code to 4 digits.
    pub fn insert_bank(&mut self, code: &str, entry: BankEntry) {
        self.banks.insert(format!("{:0>4}", code), entry);
    }

    /// Insert a branch under a bank, zero-padding both codes.
    pub fn insert_branch(&mut self, bank_code: &str, branch_code: &str, entry: BranchEntry) {
        self.branches
            .entry(format!("{:0>4}", bank_code))
            .or_default()
            .insert(format!("{:0>3}", branch_code), entry);
    }

    /// Replace the entire branch partition for one bank.
    pub fn set_branches(&mut self, bank_code: &str, table: HashMap<String, BranchEntry>) {
        self.branches.insert(format!("{:0>4}", bank_code), table);
    }

    pub fn bank_count(&self) -> usize {
        self.banks.len()
    }
}

impl ReferenceSource for InMemoryTables {
    fn bank(&self, formatted_code: &str) -> Result<Option<BankEntry>, TransferError> {
        Ok(self.banks.get(formatted_code).cloned())
    }

    fn branch(
        &self,
        formatted_bank_code: &str,
        formatted_branch_code: &str,
    ) -> Result<Option<BranchEntry>, TransferError> {
        Ok(self
            .branches
            .get(formatted_bank_code)
            .and_then(|table| table.get(formatted_branch_code))
            .cloned())
    }
}

// ============================================================================
// CSV LOADERS
// ============================================================================

#[derive(Debug, Deserialize)]
struct BankCsvRow {
    code: String,
    name: String,
    #[serde(default)]
    kana: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BranchCsvRow {
    code: String,
    name: String,
    #[serde(default)]
    kana: Option<String>,
}

/// Load a bank table from `code,name,kana` CSV rows. Codes are zero-padded
/// to 4 digits on the way in; rows that fail to deserialize are skipped
/// with a warning rather than aborting the load.
pub fn load_banks_csv<R: io::Read>(reader: R) -> Result<HashMap<String, BankEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut banks = HashMap::new();
    for result in rdr.deserialize::<BankCsvRow>() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed bank row: {}", e);
                continue;
            }
        };
        banks.insert(
            format!("{:0>4}", row.code),
            BankEntry {
                name: row.name,
                kana: row.kana,
                roma: None,
            },
        );
    }
    Ok(banks)
}

/// Load one bank's branch table from `code,name,kana` CSV rows, zero-padding
/// branch codes to 3 digits.
pub fn load_branches_csv<R: io::Read>(reader: R) -> Result<HashMap<String, BranchEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut branches = HashMap::new();
    for result in rdr.deserialize::<BranchCsvRow>() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed branch row: {}", e);
                continue;
            }
        };
        branches.insert(
            format!("{:0>3}", row.code),
            BranchEntry {
                name: row.name,
                kana: row.kana,
                roma: None,
            },
        );
    }
    Ok(branches)
}

// ============================================================================
// FILE STORE
// ============================================================================

/// Reference tables backed by a directory:
///
/// ```text
/// <dir>/banks.json            {"0001": {"name": "..."}, ...}
/// <dir>/branches/0001.json    {"001": {"name": "..."}, ...}
/// ```
///
/// Tables load lazily on first use and are then shared immutably for the
/// process lifetime. A missing or malformed file surfaces as
/// `ReferenceDataUnavailable` on every request that needs it, so a
/// misconfigured deployment fails loudly instead of at startup.
pub struct FileStore {
    dir: PathBuf,
    banks: RwLock<Option<Arc<HashMap<String, BankEntry>>>>,
    branches: RwLock<HashMap<String, Arc<HashMap<String, BranchEntry>>>>,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore {
            dir: dir.into(),
            banks: RwLock::new(None),
            branches: RwLock::new(HashMap::new()),
        }
    }

    fn load_banks(&self) -> Result<Arc<HashMap<String, BankEntry>>, TransferError> {
        if let Some(banks) = self.banks.read().unwrap().as_ref() {
            return Ok(Arc::clone(banks));
        }

        let table = self.read_table::<BankEntry>(self.dir.join("banks.json"), "banks.json")?;
        let table = Arc::new(table);

        let mut slot = self.banks.write().unwrap();
        // Another thread may have loaded while we read the file
        if let Some(existing) = slot.as_ref() {
            return Ok(Arc::clone(existing));
        }
        *slot = Some(Arc::clone(&table));
        Ok(table)
    }

    fn load_branches(
        &self,
        formatted_bank_code: &str,
    ) -> Result<Arc<HashMap<String, BranchEntry>>, TransferError> {
        if let Some(table) = self.branches.read().unwrap().get(formatted_bank_code) {
            return Ok(Arc::clone(table));
        }

        let rel = format!("branches/{}.json", formatted_bank_code);
        let table = self.read_table::<BranchEntry>(self.dir.join(&rel), &rel)?;
        let table = Arc::new(table);

        let mut cache = self.branches.write().unwrap();
        let entry = cache
            .entry(formatted_bank_code.to_string())
            .or_insert_with(|| Arc::clone(&table));
        Ok(Arc::clone(entry))
    }

    fn read_table<T: serde::de::DeserializeOwned>(
        &self,
        path: PathBuf,
        table_name: &str,
    ) -> Result<HashMap<String, T>, TransferError> {
        let raw = fs::read_to_string(&path).map_err(|e| {
            log::warn!("Cannot read reference table {:?}: {}", path, e);
            TransferError::ReferenceDataUnavailable(table_name.to_string())
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            log::warn!("Malformed reference table {:?}: {}", path, e);
            TransferError::ReferenceDataUnavailable(table_name.to_string())
        })
    }
}

impl ReferenceSource for FileStore {
    fn bank(&self, formatted_code: &str) -> Result<Option<BankEntry>, TransferError> {
        Ok(self.load_banks()?.get(formatted_code).cloned())
    }

    fn branch(
        &self,
        formatted_bank_code: &str,
        formatted_branch_code: &str,
    ) -> Result<Option<BranchEntry>, TransferError> {
        // Missing branch file for a known bank reads as unavailable, the
        // same way the reference deployment treated it
        Ok(self
            .load_branches(formatted_bank_code)?
            .get(formatted_branch_code)
            .cloned())
    }
}

// ============================================================================
// TESTS
// ============================================================================
