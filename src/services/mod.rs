//! Business logic services for LedgerDesk
//!
//! Services sit between the CLI and storage: they validate, persist, audit,
//! and compute. Balance figures are always derived from the register, never
//! read from a stored total.

pub mod balance;
pub mod employee;
pub mod query;
pub mod transaction;

pub use balance::{
    compute_company_balance, compute_employee_balance, BalanceService, EmployeeBalanceInfo,
};
pub use employee::EmployeeService;
pub use query::{paginate, run_query, Page, PaginationInfo, TransactionFilter};
pub use transaction::TransactionService;
