//! Attendance repository for JSON storage
//!
//! Manages loading and saving attendance records to attendance.json,
//! indexed by employee.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{AttendanceId, AttendanceRecord, EmployeeId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable attendance data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AttendanceData {
    records: Vec<AttendanceRecord>,
}

/// Repository for attendance persistence
pub struct AttendanceRepository {
    path: PathBuf,
    data: RwLock<HashMap<AttendanceId, AttendanceRecord>>,
    /// Index: employee_id -> attendance_ids
    by_employee: RwLock<HashMap<EmployeeId, Vec<AttendanceId>>>,
}

impl AttendanceRepository {
    /// Create a new attendance repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_employee: RwLock::new(HashMap::new()),
        }
    }

    /// Load attendance records from disk and build the employee index
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: AttendanceData = read_json(&self.path)?;

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

        for record in file_data.records {
            by_employee
                .entry(record.employee_id)
                .or_default()
                .push(record.id);
            data.insert(record.id, record);
        }

        Ok(())
    }

    /// Save attendance records to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        let file_data = AttendanceData { records };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an attendance record by ID
    pub fn get(&self, id: AttendanceId) -> Result<Option<AttendanceRecord>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all attendance records for one employee, most recent first
    pub fn get_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<AttendanceRecord>, LedgerError> {
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
        let mut records: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    /// Insert or update an attendance record
    pub fn upsert(&self, record: AttendanceRecord) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_employee = self
            .by_employee
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if !data.contains_key(&record.id) {
            by_employee
                .entry(record.employee_id)
                .or_default()
                .push(record.id);
        }
        data.insert(record.id, record);
        Ok(())
    }

    /// Delete all attendance records for one employee, returning how many
    pub fn delete_by_employee(&self, employee_id: EmployeeId) -> Result<usize, LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_employee = self
            .by_employee
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let ids = by_employee.remove(&employee_id).unwrap_or_default();
        for id in &ids {
            data.remove(id);
        }
        Ok(ids.len())
    }

    /// Count attendance records
    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
