//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod balance;
pub mod employee;
pub mod transaction;

pub use balance::format_company_balance;
pub use employee::{
    format_attendance_list, format_employee_balance, format_employee_details, format_employee_list,
};
pub use transaction::{
    format_pagination_footer, format_register, format_register_page, format_transaction_details,
};
