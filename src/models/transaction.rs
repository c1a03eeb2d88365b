//! Transaction record model
//!
//! A ledger entry stores a non-negative amount; the direction (debit/credit)
//! is derived from the category, never stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::TransactionCategory;
use super::ids::{EmployeeId, TransactionId};
use super::money::Money;

/// A single ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique identifier, assigned on creation
    pub id: TransactionId,

    /// Category, which determines the sign of the amount
    pub category: TransactionCategory,

    /// Amount, always non-negative; sign comes from the category
    pub amount: Money,

    /// Calendar date the transaction is attributed to
    pub date: NaiveDate,

    /// Free-text description, required
    pub description: String,

    /// Counterparty company, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Linked employee; required for payroll categories, absent otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Create a new transaction record
    pub fn new(
        category: TransactionCategory,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            category,
            amount,
            date,
            description: description.into(),
            company_name: None,
            employee_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a payroll transaction attached to an employee
    pub fn payroll(
        employee_id: EmployeeId,
        category: TransactionCategory,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(category, amount, date, description);
        txn.employee_id = Some(employee_id);
        txn
    }

    /// Signed amount: `sign(category) * amount`
    pub fn signed_amount(&self) -> Money {
        if self.category.sign() < 0 {
            -self.amount
        } else {
            self.amount
        }
    }

    /// Whether this record belongs to an employee's payroll history
    pub fn is_payroll(&self) -> bool {
        self.category.is_payroll()
    }

    /// Validate the record
    ///
    /// Enforces: non-negative amount, non-empty description, and employee
    /// linkage exactly when the category is payroll-scoped.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.category.is_payroll() && self.employee_id.is_none() {
            return Err(TransactionValidationError::MissingEmployee(self.category));
        }

        if !self.category.is_payroll() && self.employee_id.is_some() {
            return Err(TransactionValidationError::UnexpectedEmployee(self.category));
        }

        Ok(())
    }

    /// Touch the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// Validation errors for transaction records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    EmptyDescription,
    MissingEmployee(TransactionCategory),
    UnexpectedEmployee(TransactionCategory),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount must be non-negative, got {}", amount)
            }
            Self::EmptyDescription => write!(f, "Transaction description is required"),
            Self::MissingEmployee(category) => write!(
                f,
                "Category '{}' is payroll-scoped and requires an employee",
                category
            ),
            Self::UnexpectedEmployee(category) => write!(
                f,
                "Category '{}' is company-scoped and cannot reference an employee",
                category
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

impl From<TransactionValidationError> for crate::error::LedgerError {
    fn from(err: TransactionValidationError) -> Self {
        match err {
            TransactionValidationError::NegativeAmount(_) => Self::InvalidAmount(err.to_string()),
            other => Self::Validation(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = TransactionRecord::new(
            TransactionCategory::Sales,
            Money::from_cents(40000),
            test_date(),
            "Invoice #42",
        );

        assert_eq!(txn.category, TransactionCategory::Sales);
        assert_eq!(txn.amount.cents(), 40000);
        assert!(txn.employee_id.is_none());
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_signed_amount() {
        let sale = TransactionRecord::new(
            TransactionCategory::Sales,
            Money::from_cents(40000),
            test_date(),
            "Invoice #42",
        );
        assert_eq!(sale.signed_amount().cents(), 40000);

        let purchase = TransactionRecord::new(
            TransactionCategory::Purchase,
            Money::from_cents(15000),
            test_date(),
            "Office supplies",
        );
        assert_eq!(purchase.signed_amount().cents(), -15000);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let txn = TransactionRecord::new(
            TransactionCategory::Sales,
            Money::from_cents(-100),
            test_date(),
            "Bad entry",
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_empty_description_rejected() {
        let txn = TransactionRecord::new(
            TransactionCategory::Sales,
            Money::from_cents(100),
            test_date(),
            "   ",
        );
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_payroll_requires_employee() {
        let txn = TransactionRecord::new(
            TransactionCategory::Salary,
            Money::from_cents(300000),
            test_date(),
            "January salary",
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::MissingEmployee(_))
        ));

        let payroll = TransactionRecord::payroll(
            EmployeeId::new(),
            TransactionCategory::Salary,
            Money::from_cents(300000),
            test_date(),
            "January salary",
        );
        assert!(payroll.validate().is_ok());
        assert!(payroll.is_payroll());
    }

    #[test]
    fn test_company_scope_rejects_employee() {
        let mut txn = TransactionRecord::new(
            TransactionCategory::Purchase,
            Money::from_cents(5000),
            test_date(),
            "Printer ink",
        );
        txn.employee_id = Some(EmployeeId::new());
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::UnexpectedEmployee(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let txn = TransactionRecord::payroll(
            EmployeeId::new(),
            TransactionCategory::Bonus,
            Money::from_cents(20000),
            test_date(),
            "Q4 bonus",
        );

        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.category, deserialized.category);
        assert_eq!(txn.amount, deserialized.amount);
        assert_eq!(txn.employee_id, deserialized.employee_id);
    }
}
