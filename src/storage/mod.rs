//! Storage layer for LedgerDesk
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. This layer is the persistence collaborator the aggregation core
//! reads from; it owns no domain rules beyond indexing.

pub mod attendance;
pub mod balance;
pub mod employees;
pub mod file_io;
pub mod transactions;

pub use attendance::AttendanceRepository;
pub use balance::BalanceRepository;
pub use employees::EmployeeRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::audit::{AuditAction, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    audit: AuditLogger,
    pub employees: EmployeeRepository,
    pub transactions: TransactionRepository,
    pub attendance: AttendanceRepository,
    pub balance: BalanceRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            employees: EmployeeRepository::new(paths.employees_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            attendance: AttendanceRepository::new(paths.attendance_file()),
            balance: BalanceRepository::new(paths.balance_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.employees.load()?;
        self.transactions.load()?;
        self.attendance.load()?;
        self.balance.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), LedgerError> {
        self.employees.save()?;
        self.transactions.save()?;
        self.attendance.save()?;
        self.balance.save()?;
        Ok(())
    }

    /// Log a create to the audit log
    pub fn log_create(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.audit
            .log(&AuditEntry::new(AuditAction::Create, entity_type, entity_id, summary))
    }

    /// Log an update to the audit log
    pub fn log_update(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.audit
            .log(&AuditEntry::new(AuditAction::Update, entity_type, entity_id, summary))
    }

    /// Log a delete to the audit log
    pub fn log_delete(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.audit
            .log(&AuditEntry::new(AuditAction::Delete, entity_type, entity_id, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.employees.count().unwrap(), 0);
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_audit_helpers_append() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_create(EntityType::Employee, "emp-1", "created")
            .unwrap();
        storage
            .log_delete(EntityType::Employee, "emp-1", "deleted")
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
    }
}
