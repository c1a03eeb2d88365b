//! Employee service: CRUD, payroll, and attendance
//!
//! Deleting an employee cascades to their payroll transactions and
//! attendance records so the register never carries dangling references.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    AttendanceRecord, Employee, EmployeeId, Money, TransactionCategory, TransactionRecord,
};
use crate::storage::Storage;

use super::balance::{compute_employee_balance, EmployeeBalanceInfo};

/// Service for employee operations
pub struct EmployeeService<'a> {
    storage: &'a Storage,
}

impl<'a> EmployeeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new employee
    pub fn create(&self, employee: Employee) -> LedgerResult<Employee> {
        employee
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.employees.upsert(employee.clone())?;
        self.storage.employees.save()?;
        self.storage.log_create(
            EntityType::Employee,
            employee.id.to_string(),
            format!("Hired {} as {}", employee.name, employee.position),
        )?;

        Ok(employee)
    }

    /// Get an employee by ID
    pub fn get(&self, id: EmployeeId) -> LedgerResult<Employee> {
        self.storage
            .employees
            .get(id)?
            .ok_or_else(|| LedgerError::employee_not_found(id.to_string()))
    }

    /// Find an employee by exact name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> LedgerResult<Employee> {
        self.storage
            .employees
            .get_by_name(name)?
            .ok_or_else(|| LedgerError::employee_not_found(name))
    }

    /// All employees, sorted by name
    pub fn list(&self) -> LedgerResult<Vec<Employee>> {
        self.storage.employees.get_all()
    }

    /// Update an existing employee
    ///
    /// The replacement keeps the original ID and creation time.
    pub fn update(&self, id: EmployeeId, mut updated: Employee) -> LedgerResult<Employee> {
        let existing = self.get(id)?;

        updated.id = existing.id;
        updated.created_at = existing.created_at;
        updated.touch();
        updated
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.employees.upsert(updated.clone())?;
        self.storage.employees.save()?;
        self.storage.log_update(
            EntityType::Employee,
            updated.id.to_string(),
            format!("Updated {}", updated.name),
        )?;

        Ok(updated)
    }

    /// Delete an employee and everything attached to them
    ///
    /// Returns how many payroll transactions were removed in the cascade.
    pub fn delete(&self, id: EmployeeId) -> LedgerResult<usize> {
        let employee = self.get(id)?;

        let removed_txns = self.storage.transactions.delete_by_employee(id)?;
        let removed_attendance = self.storage.attendance.delete_by_employee(id)?;
        self.storage.employees.delete(id)?;

        self.storage.employees.save()?;
        self.storage.transactions.save()?;
        self.storage.attendance.save()?;
        self.storage.log_delete(
            EntityType::Employee,
            id.to_string(),
            format!(
                "Removed {} ({} transactions, {} attendance records)",
                employee.name, removed_txns, removed_attendance
            ),
        )?;

        Ok(removed_txns)
    }

    /// Record a payroll transaction for an employee
    pub fn add_payroll_transaction(
        &self,
        employee_id: EmployeeId,
        category: TransactionCategory,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> LedgerResult<TransactionRecord> {
        if !category.is_payroll() {
            return Err(LedgerError::Validation(format!(
                "Category '{}' is not payroll-scoped",
                category
            )));
        }
        // Fails with NotFound if the employee doesn't exist
        self.get(employee_id)?;

        let txn = TransactionRecord::payroll(employee_id, category, amount, date, description);
        txn.validate()?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;
        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            format!("{} {} on {}", txn.category, txn.amount, txn.date),
        )?;

        Ok(txn)
    }

    /// Payroll history for one employee, most recent first
    pub fn payroll_history(&self, employee_id: EmployeeId) -> LedgerResult<Vec<TransactionRecord>> {
        self.get(employee_id)?;
        self.storage.transactions.get_by_employee(employee_id)
    }

    /// Record one day of attendance
    pub fn record_attendance(&self, record: AttendanceRecord) -> LedgerResult<AttendanceRecord> {
        record.validate()?;
        // Fails with NotFound if the employee doesn't exist
        self.get(record.employee_id)?;

        self.storage.attendance.upsert(record.clone())?;
        self.storage.attendance.save()?;
        self.storage.log_create(
            EntityType::Attendance,
            record.id.to_string(),
            format!("{} on {}", record.status, record.date),
        )?;

        Ok(record)
    }

    /// Attendance history for one employee, most recent first
    pub fn list_attendance(&self, employee_id: EmployeeId) -> LedgerResult<Vec<AttendanceRecord>> {
        self.get(employee_id)?;
        self.storage.attendance.get_by_employee(employee_id)
    }

    /// Balance view for one employee
    pub fn balance(&self, employee_id: EmployeeId) -> LedgerResult<EmployeeBalanceInfo> {
        let employee = self.get(employee_id)?;
        let transactions = self.storage.transactions.get_by_employee(employee_id)?;
        Ok(compute_employee_balance(&employee, &transactions))
    }
}
