//! Employee repository for JSON storage
//!
//! Manages loading and saving employees to employees.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Employee, EmployeeId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable employee data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EmployeeData {
    employees: Vec<Employee>,
}

/// Repository for employee persistence
pub struct EmployeeRepository {
    path: PathBuf,
    data: RwLock<HashMap<EmployeeId, Employee>>,
}

impl EmployeeRepository {
    /// Create a new employee repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load employees from disk
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: EmployeeData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for employee in file_data.employees {
            data.insert(employee.id, employee);
        }

        Ok(())
    }

    /// Save employees to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut employees: Vec<_> = data.values().cloned().collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name));

        let file_data = EmployeeData { employees };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an employee by ID
    pub fn get(&self, id: EmployeeId) -> Result<Option<Employee>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all employees, sorted by name
    pub fn get_all(&self) -> Result<Vec<Employee>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut employees: Vec<_> = data.values().cloned().collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    /// Find an employee by exact name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Employee>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Insert or update an employee
    pub fn upsert(&self, employee: Employee) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(employee.id, employee);
        Ok(())
    }

    /// Delete an employee
    pub fn delete(&self, id: EmployeeId) -> Result<bool, LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count employees
    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
