//! Transaction display formatting
//!
//! Register views for the terminal, including the pagination footer used by
//! the query command.

use crate::models::TransactionRecord;
use crate::services::{Page, PaginationInfo};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &TransactionRecord) -> String {
    let direction = if txn.category.sign() < 0 { "-" } else { "+" };

    format!(
        "{} {:12} {} {:>12} {}",
        txn.date.format("%Y-%m-%d"),
        txn.category.as_str(),
        direction,
        format!("{}", txn.amount),
        truncate(&txn.description, 30)
    )
}

/// Format a list of transactions as a register
pub fn format_register(transactions: &[TransactionRecord]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:12} {:1} {:>12} {}\n",
        "Date", "Category", "", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Format one page of query results with a pagination footer
pub fn format_register_page(page: &Page<TransactionRecord>) -> String {
    let mut output = format_register(&page.items);
    output.push('\n');
    output.push_str(&format_pagination_footer(&page.pagination));
    output
}

/// Format the pagination footer line
pub fn format_pagination_footer(info: &PaginationInfo) -> String {
    let mut footer = format!(
        "Page {} of {} ({} records)",
        info.current_page, info.total_pages, info.total_records
    );
    if info.has_previous_page {
        footer.push_str("  [prev]");
    }
    if info.has_next_page {
        footer.push_str("  [next]");
    }
    footer.push('\n');
    footer
}

/// Format full transaction details for display
pub fn format_transaction_details(txn: &TransactionRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Amount:      {}\n", txn.amount));
    output.push_str(&format!("Signed:      {}\n", txn.signed_amount()));
    output.push_str(&format!("Description: {}\n", txn.description));

    if let Some(company) = &txn.company_name {
        output.push_str(&format!("Company:     {}\n", company));
    }
    if let Some(employee_id) = txn.employee_id {
        output.push_str(&format!("Employee:    {}\n", employee_id));
    }

    output
}

/// Truncate a string to a maximum length, counting chars so multibyte
/// text never splits mid-character
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
