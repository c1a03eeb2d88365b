//! Employee model
//!
//! Employees are the aggregation root for their payroll transactions and
//! attendance records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EmployeeId;
use super::money::Money;

/// An employee on the payroll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier
    pub id: EmployeeId,

    /// Full name
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Job title
    pub position: String,

    /// Monthly base salary, non-negative
    pub base_salary: Money,

    /// Date of hire
    pub hire_date: NaiveDate,

    /// When the employee record was created
    pub created_at: DateTime<Utc>,

    /// When the employee record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Create a new employee
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        base_salary: Money,
        hire_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            email: String::new(),
            position: position.into(),
            base_salary,
            hire_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the employee record
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.name.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyName);
        }
        if self.base_salary.is_negative() {
            return Err(EmployeeValidationError::NegativeSalary(self.base_salary));
        }
        Ok(())
    }

    /// Touch the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}

/// Validation errors for employee records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    EmptyName,
    NegativeSalary(Money),
}

impl fmt::Display for EmployeeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Employee name is required"),
            Self::NegativeSalary(salary) => {
                write!(f, "Base salary must be non-negative, got {}", salary)
            }
        }
    }
}

impl std::error::Error for EmployeeValidationError {}
