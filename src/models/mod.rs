//! Core data models for LedgerDesk
//!
//! This module contains all the data structures that represent the ledger
//! domain: transactions, categories, employees, and attendance.

pub mod attendance;
pub mod category;
pub mod employee;
pub mod ids;
pub mod money;
pub mod transaction;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use category::TransactionCategory;
pub use employee::Employee;
pub use ids::{AttendanceId, EmployeeId, TransactionId};
pub use money::Money;
pub use transaction::TransactionRecord;
