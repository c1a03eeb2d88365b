//! Transaction repository for JSON storage
//!
//! Manages loading and saving transaction records to transactions.json,
//! with a secondary index by employee for payroll lookups.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{EmployeeId, TransactionId, TransactionRecord};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<TransactionRecord>,
}

/// Repository for transaction persistence with indexing
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, TransactionRecord>>,
    /// Index: employee_id -> transaction_ids
    by_employee: RwLock<HashMap<EmployeeId, Vec<TransactionId>>>,
}

/// Most recent first, IDs breaking date ties so the order is deterministic
fn sort_register(transactions: &mut [TransactionRecord]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_employee: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and build indexes
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_employee = self
            .by_employee
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_employee.clear();

        for txn in file_data.transactions {
            if let Some(employee_id) = txn.employee_id {
                by_employee.entry(employee_id).or_default().push(txn.id);
            }
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_register(&mut transactions);

        let file_data = TransactionData { transactions };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<TransactionRecord>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, most recent first
    pub fn get_all(&self) -> Result<Vec<TransactionRecord>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_register(&mut transactions);
        Ok(transactions)
    }

    /// Get all transactions for one employee, most recent first
    pub fn get_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<TransactionRecord>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_employee = self
            .by_employee
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_employee
            .get(&employee_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        sort_register(&mut transactions);
        Ok(transactions)
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: TransactionRecord) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_employee = self
            .by_employee
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Remove from old index if updating
        if let Some(old) = data.get(&txn.id) {
            if let Some(employee_id) = old.employee_id {
                if let Some(ids) = by_employee.get_mut(&employee_id) {
                    ids.retain(|&id| id != txn.id);
                }
            }
        }

        if let Some(employee_id) = txn.employee_id {
            by_employee.entry(employee_id).or_default().push(txn.id);
        }

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> Result<bool, LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_employee = self
            .by_employee
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(txn) = data.remove(&id) {
            if let Some(employee_id) = txn.employee_id {
                if let Some(ids) = by_employee.get_mut(&employee_id) {
                    ids.retain(|&tid| tid != id);
                }
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Delete all transactions belonging to one employee, returning how many
    pub fn delete_by_employee(&self, employee_id: EmployeeId) -> Result<usize, LedgerError> {
        let ids: Vec<TransactionId> = {
            let by_employee = self
                .by_employee
                .read()
                .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
            by_employee.get(&employee_id).cloned().unwrap_or_default()
        };

        for id in &ids {
            self.delete(*id)?;
        }
        Ok(ids.len())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
