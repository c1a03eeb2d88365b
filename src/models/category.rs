//! Transaction categories and the debit/credit sign policy
//!
//! This is the single place category semantics live. The historical data
//! carried several overlapping category sets (an "HR" umbrella type, a
//! company-side set, and a separate payroll set); they are unified here into
//! one canonical enum. The sign table in [`TransactionCategory::sign`] is
//! the source of truth for how each category moves a balance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Canonical set of transaction categories
///
/// Payroll-scoped categories (salary, bonus, deduction, advance) attach to an
/// employee; the remaining categories are company-scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    /// Salary payment to an employee (money out)
    Salary,
    /// Bonus credited to an employee
    Bonus,
    /// Deduction from an employee's pay
    Deduction,
    /// Advance credited to an employee
    Advance,
    /// Company purchase (money out)
    Purchase,
    /// Sales revenue (money in)
    Sales,
    /// Other company income
    OtherIncome,
    /// Generic income
    Income,
    /// Generic expense
    Expense,
}

impl TransactionCategory {
    /// All categories, in a stable order (useful for exhaustive tests and help text)
    pub const ALL: [TransactionCategory; 9] = [
        Self::Salary,
        Self::Bonus,
        Self::Deduction,
        Self::Advance,
        Self::Purchase,
        Self::Sales,
        Self::OtherIncome,
        Self::Income,
        Self::Expense,
    ];

    /// The debit/credit sign for this category
    ///
    /// Debit (-1): money paid out — deductions, purchases, salaries, expenses.
    /// Credit (+1): money coming in — bonuses, advances, sales, income.
    pub fn sign(&self) -> i64 {
        match self {
            Self::Deduction | Self::Purchase | Self::Salary | Self::Expense => -1,
            Self::Bonus | Self::Advance | Self::Sales | Self::OtherIncome | Self::Income => 1,
        }
    }

    /// Whether this category is payroll-scoped (attached to an employee)
    pub fn is_payroll(&self) -> bool {
        matches!(
            self,
            Self::Salary | Self::Bonus | Self::Deduction | Self::Advance
        )
    }

    /// Whether this category counts toward the company balance
    pub fn is_company_scope(&self) -> bool {
        !self.is_payroll()
    }

    /// The snake_case name used in storage and on the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Bonus => "bonus",
            Self::Deduction => "deduction",
            Self::Advance => "advance",
            Self::Purchase => "purchase",
            Self::Sales => "sales",
            Self::OtherIncome => "other_income",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionCategory {
    type Err = LedgerError;

    /// Parse a category name; unrecognized names are an error, never
    /// silently treated as credit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salary" => Ok(Self::Salary),
            "bonus" => Ok(Self::Bonus),
            "deduction" => Ok(Self::Deduction),
            "advance" => Ok(Self::Advance),
            "purchase" => Ok(Self::Purchase),
            "sales" => Ok(Self::Sales),
            "other_income" | "otherincome" => Ok(Self::OtherIncome),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_table_exhaustive() {
        // The debit/credit table, spelled out category by category
        let expected = [
            (TransactionCategory::Salary, -1),
            (TransactionCategory::Bonus, 1),
            (TransactionCategory::Deduction, -1),
            (TransactionCategory::Advance, 1),
            (TransactionCategory::Purchase, -1),
            (TransactionCategory::Sales, 1),
            (TransactionCategory::OtherIncome, 1),
            (TransactionCategory::Income, 1),
            (TransactionCategory::Expense, -1),
        ];

        assert_eq!(expected.len(), TransactionCategory::ALL.len());
        for (category, sign) in expected {
            assert_eq!(category.sign(), sign, "sign mismatch for {}", category);
        }
    }

    #[test]
    fn test_payroll_scope() {
        assert!(TransactionCategory::Salary.is_payroll());
        assert!(TransactionCategory::Bonus.is_payroll());
        assert!(TransactionCategory::Deduction.is_payroll());
        assert!(TransactionCategory::Advance.is_payroll());

        assert!(TransactionCategory::Purchase.is_company_scope());
        assert!(TransactionCategory::Sales.is_company_scope());
        assert!(TransactionCategory::OtherIncome.is_company_scope());
        assert!(TransactionCategory::Income.is_company_scope());
        assert!(TransactionCategory::Expense.is_company_scope());
    }

    #[test]
    fn test_parse_round_trip() {
        for category in TransactionCategory::ALL {
            let parsed: TransactionCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_parse_unknown_is_error() {
        for bad in ["refund", "HR", "", "salaries"] {
            let result = bad.parse::<TransactionCategory>();
            assert!(
                matches!(result, Err(LedgerError::InvalidCategory(_))),
                "expected InvalidCategory for '{}'",
                bad
            );
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TransactionCategory::OtherIncome).unwrap();
        assert_eq!(json, "\"other_income\"");

        let parsed: TransactionCategory = serde_json::from_str("\"sales\"").unwrap();
        assert_eq!(parsed, TransactionCategory::Sales);
    }
}
