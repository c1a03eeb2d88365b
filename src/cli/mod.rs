//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod attendance;
pub mod balance;
pub mod employee;
pub mod transaction;

pub use attendance::{handle_attendance_command, AttendanceCommands};
pub use balance::{handle_balance_command, BalanceCommands};
pub use employee::{handle_employee_command, EmployeeCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD format", s))
    })
}
