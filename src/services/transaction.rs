//! Transaction service: register mutations and queries
//!
//! All register writes go through here: validation, then the repository
//! upsert, then the save, then an audit log line. Reads delegate to the
//! query engine so pagination semantics stay in one place.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{TransactionId, TransactionRecord};
use crate::storage::Storage;

use super::query::{run_query, Page, TransactionFilter};

/// Service for transaction operations
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    ///
    /// Payroll-scoped categories must reference an existing employee.
    pub fn create(&self, txn: TransactionRecord) -> LedgerResult<TransactionRecord> {
        txn.validate()?;
        self.verify_employee_link(&txn)?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;
        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            format!("{} {} on {}", txn.category, txn.amount, txn.date),
        )?;

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> LedgerResult<TransactionRecord> {
        self.storage
            .transactions
            .get(id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))
    }

    /// Query the register: filter, order most recent first, return one page
    pub fn query(
        &self,
        filter: &TransactionFilter,
        page: usize,
        page_size: usize,
    ) -> LedgerResult<Page<TransactionRecord>> {
        let transactions = self.storage.transactions.get_all()?;
        run_query(&transactions, filter, page, page_size)
    }

    /// The whole register, most recent first
    pub fn list_all(&self) -> LedgerResult<Vec<TransactionRecord>> {
        self.storage.transactions.get_all()
    }

    /// Update an existing transaction
    ///
    /// The replacement keeps the original ID and creation time; the
    /// modification timestamp is stamped here.
    pub fn update(&self, id: TransactionId, mut updated: TransactionRecord) -> LedgerResult<TransactionRecord> {
        let existing = self.get(id)?;

        updated.id = existing.id;
        updated.created_at = existing.created_at;
        updated.touch();
        updated.validate()?;
        self.verify_employee_link(&updated)?;

        self.storage.transactions.upsert(updated.clone())?;
        self.storage.transactions.save()?;
        self.storage.log_update(
            EntityType::Transaction,
            updated.id.to_string(),
            format!("{} {} on {}", updated.category, updated.amount, updated.date),
        )?;

        Ok(updated)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> LedgerResult<()> {
        if !self.storage.transactions.delete(id)? {
            return Err(LedgerError::transaction_not_found(id.to_string()));
        }
        self.storage.transactions.save()?;
        self.storage
            .log_delete(EntityType::Transaction, id.to_string(), "Transaction deleted")?;
        Ok(())
    }

    fn verify_employee_link(&self, txn: &TransactionRecord) -> LedgerResult<()> {
        if let Some(employee_id) = txn.employee_id {
            if self.storage.employees.get(employee_id)?.is_none() {
                return Err(LedgerError::employee_not_found(employee_id.to_string()));
            }
        }
        Ok(())
    }
}
