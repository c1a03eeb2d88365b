//! LedgerDesk - Back-office ledger for small businesses
//!
//! This library provides the core functionality for LedgerDesk: a single
//! transaction register with category-driven debit/credit signs, employee
//! payroll and attendance tracking, and balance aggregation that is always
//! recomputed from the register rather than stored as running totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, employees, attendance)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (queries, balances, payroll)
//! - `audit`: Append-only audit logging
//! - `display`: Terminal output formatting
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerdesk::config::{paths::LedgerPaths, settings::Settings};
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
