//! CSV export functionality
//!
//! Exports the (optionally filtered) transaction register and the employee
//! roster to CSV, spreadsheet-compatible.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::services::TransactionFilter;
use crate::storage::Storage;

/// Export the transaction register to CSV
///
/// Rows follow the register order: most recent first. The filter narrows by
/// date range and category, same as a query.
pub fn export_transactions_csv<W: Write>(
    storage: &Storage,
    filter: &TransactionFilter,
    writer: &mut W,
) -> LedgerResult<()> {
    // Employee name lookup for payroll rows
    let employees = storage.employees.get_all()?;
    let employee_names: HashMap<_, _> = employees.iter().map(|e| (e.id, e.name.clone())).collect();

    writeln!(
        writer,
        "ID,Date,Category,Amount,Signed Amount,Description,Company,Employee"
    )
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    let transactions = storage.transactions.get_all()?;

    for txn in transactions.iter().filter(|t| filter.matches(t)) {
        let employee_name = txn
            .employee_id
            .and_then(|id| employee_names.get(&id).cloned())
            .unwrap_or_default();

        writeln!(
            writer,
            "{},{},{},{:.2},{:.2},{},{},{}",
            txn.id,
            txn.date,
            txn.category,
            txn.amount.cents() as f64 / 100.0,
            txn.signed_amount().cents() as f64 / 100.0,
            escape_csv(&txn.description),
            escape_csv(txn.company_name.as_deref().unwrap_or("")),
            escape_csv(&employee_name)
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export the employee roster to CSV
pub fn export_employees_csv<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "ID,Name,Email,Position,Base Salary,Hire Date")
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for employee in storage.employees.get_all()? {
        writeln!(
            writer,
            "{},{},{},{},{:.2},{}",
            employee.id,
            escape_csv(&employee.name),
            escape_csv(&employee.email),
            escape_csv(&employee.position),
            employee.base_salary.cents() as f64 / 100.0,
            employee.hire_date
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a CSV field (quote if it contains comma, quote, or newline)
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
