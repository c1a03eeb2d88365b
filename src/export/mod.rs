//! Export module for LedgerDesk
//!
//! CSV export of the transaction register and the employee roster.

pub mod csv;

pub use csv::{export_employees_csv, export_transactions_csv};
