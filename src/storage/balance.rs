//! Company balance baseline storage
//!
//! The stored balance is a single manually-adjustable baseline, owned by one
//! writer. It is a starting offset, not a cached sum: the effective company
//! balance is always recomputed as baseline plus the signed transaction sum.
//! Concurrent replacements are last-write-wins.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// Serializable balance data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BalanceData {
    balance: Money,
}

/// Repository for the company balance baseline
pub struct BalanceRepository {
    path: PathBuf,
    data: RwLock<Money>,
}

impl BalanceRepository {
    /// Create a new balance repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Money::zero()),
        }
    }

    /// Load the baseline from disk (zero if the file doesn't exist)
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: BalanceData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.balance;
        Ok(())
    }

    /// Save the baseline to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &BalanceData { balance: *data })
    }

    /// Get the stored baseline
    pub fn get(&self) -> Result<Money, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(*data)
    }

    /// Replace the stored baseline, returning the previous value
    pub fn replace(&self, balance: Money) -> Result<Money, LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let previous = *data;
        *data = balance;
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BalanceRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("balance.json");
        let repo = BalanceRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_defaults_to_zero() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), Money::zero());
    }

    #[test]
    fn test_replace_returns_previous() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let previous = repo.replace(Money::from_cents(100000)).unwrap();
        assert_eq!(previous, Money::zero());

        let previous = repo.replace(Money::from_cents(250000)).unwrap();
        assert_eq!(previous.cents(), 100000);
        assert_eq!(repo.get().unwrap().cents(), 250000);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.replace(Money::from_cents(123456)).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("balance.json");
        let repo2 = BalanceRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.get().unwrap().cents(), 123456);
    }
}
