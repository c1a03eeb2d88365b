//! Balance aggregation
//!
//! Balances are never stored as running totals. The company balance is a
//! manually-set baseline plus the signed sum of company-scope transactions;
//! an employee balance is their base salary plus the signed sum of their
//! payroll transactions. Both are recomputed from the register on demand, so
//! the fold is order-independent by construction.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Employee, EmployeeId, Money, TransactionRecord};
use crate::storage::Storage;

use crate::audit::EntityType;

/// The three figures that make up an employee's balance view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeBalanceInfo {
    /// Contracted base salary
    pub base_salary: Money,
    /// Signed sum of the employee's payroll transactions
    pub transaction_balance: Money,
    /// `base_salary + transaction_balance`
    pub current_balance: Money,
}

/// Effective company balance: baseline plus signed company-scope sum
///
/// Payroll transactions are excluded; they move employee balances, not the
/// company figure.
pub fn compute_company_balance(baseline: Money, transactions: &[TransactionRecord]) -> Money {
    let delta: Money = transactions
        .iter()
        .filter(|t| t.category.is_company_scope())
        .map(|t| t.signed_amount())
        .sum();
    baseline + delta
}

/// Employee balance from their payroll history
///
/// Records for other employees and company-scope records are ignored, so the
/// caller can pass either a pre-filtered slice or the whole register.
pub fn compute_employee_balance(
    employee: &Employee,
    transactions: &[TransactionRecord],
) -> EmployeeBalanceInfo {
    let transaction_balance: Money = transactions
        .iter()
        .filter(|t| t.is_payroll() && t.employee_id == Some(employee.id))
        .map(|t| t.signed_amount())
        .sum();

    EmployeeBalanceInfo {
        base_salary: employee.base_salary,
        transaction_balance,
        current_balance: employee.base_salary + transaction_balance,
    }
}

/// Service for balance queries and baseline adjustment
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the stored baseline
    pub fn baseline(&self) -> LedgerResult<Money> {
        self.storage.balance.get()
    }

    /// Replace the baseline, returning the previous value
    pub fn set_baseline(&self, baseline: Money) -> LedgerResult<Money> {
        let previous = self.storage.balance.replace(baseline)?;
        self.storage.balance.save()?;
        self.storage.log_update(
            EntityType::Balance,
            "company",
            format!("Baseline changed from {} to {}", previous, baseline),
        )?;
        Ok(previous)
    }

    /// Effective company balance: baseline plus signed company-scope sum
    pub fn effective_balance(&self) -> LedgerResult<Money> {
        let baseline = self.storage.balance.get()?;
        let transactions = self.storage.transactions.get_all()?;
        Ok(compute_company_balance(baseline, &transactions))
    }

    /// Balance view for one employee
    pub fn employee_balance(&self, employee_id: EmployeeId) -> LedgerResult<EmployeeBalanceInfo> {
        let employee = self
            .storage
            .employees
            .get(employee_id)?
            .ok_or_else(|| LedgerError::employee_not_found(employee_id.to_string()))?;
        let transactions = self.storage.transactions.get_by_employee(employee_id)?;
        Ok(compute_employee_balance(&employee, &transactions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionCategory;
    use chrono::NaiveDate;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn dollars(amount: i64) -> Money {
        Money::from_cents(amount * 100)
    }

    fn company_txn(category: TransactionCategory, cents: i64) -> TransactionRecord {
        TransactionRecord::new(category, Money::from_cents(cents), test_date(), "entry")
    }

    fn payroll_txn(
        employee_id: EmployeeId,
        category: TransactionCategory,
        cents: i64,
    ) -> TransactionRecord {
        TransactionRecord::payroll(
            employee_id,
            category,
            Money::from_cents(cents),
            test_date(),
            "entry",
        )
    }

    #[test]
    fn test_company_balance_identity() {
        let baseline = Money::from_cents(777);
        assert_eq!(compute_company_balance(baseline, &[]), baseline);
    }

    #[test]
    fn test_company_balance_signed_sum() {
        // 1000 baseline + 400 sales - 150 purchase = 1250
        let baseline = dollars(1000);
        let register = vec![
            company_txn(TransactionCategory::Sales, 40000),
            company_txn(TransactionCategory::Purchase, 15000),
        ];

        let balance = compute_company_balance(baseline, &register);
        assert_eq!(balance, dollars(1250));
    }

    #[test]
    fn test_company_balance_ignores_payroll() {
        let baseline = dollars(1000);
        let register = vec![
            company_txn(TransactionCategory::Sales, 40000),
            payroll_txn(EmployeeId::new(), TransactionCategory::Salary, 300000),
        ];

        let balance = compute_company_balance(baseline, &register);
        assert_eq!(balance, dollars(1400));
    }

    #[test]
    fn test_company_balance_order_independent() {
        let baseline = dollars(500);
        let mut register = vec![
            company_txn(TransactionCategory::Sales, 40000),
            company_txn(TransactionCategory::Purchase, 15000),
            company_txn(TransactionCategory::Expense, 2500),
            company_txn(TransactionCategory::OtherIncome, 1200),
        ];

        let forward = compute_company_balance(baseline, &register);
        register.reverse();
        let backward = compute_company_balance(baseline, &register);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_employee_balance_figures() {
        // 3000 base, -500 salary paid, +200 bonus: transaction balance -300,
        // current balance 2700
        let employee = Employee::new(
            "Dana Whitfield",
            "Clerk",
            dollars(3000),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        );
        let register = vec![
            payroll_txn(employee.id, TransactionCategory::Salary, 50000),
            payroll_txn(employee.id, TransactionCategory::Bonus, 20000),
        ];

        let info = compute_employee_balance(&employee, &register);
        assert_eq!(info.base_salary, dollars(3000));
        assert_eq!(info.transaction_balance, dollars(-300));
        assert_eq!(info.current_balance, dollars(2700));
    }

    #[test]
    fn test_employee_balance_ignores_other_employees() {
        let employee = Employee::new(
            "Dana Whitfield",
            "Clerk",
            dollars(3000),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        );
        let register = vec![
            payroll_txn(EmployeeId::new(), TransactionCategory::Bonus, 99999),
            company_txn(TransactionCategory::Sales, 12345),
        ];

        let info = compute_employee_balance(&employee, &register);
        assert_eq!(info.transaction_balance, Money::zero());
        assert_eq!(info.current_balance, dollars(3000));
    }
}
