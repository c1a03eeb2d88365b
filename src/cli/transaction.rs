//! Transaction CLI commands
//!
//! Implements CLI commands for the transaction register.

use clap::Subcommand;

use crate::display::{format_register_page, format_transaction_details};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TransactionCategory, TransactionId, TransactionRecord};
use crate::services::{TransactionFilter, TransactionService};
use crate::storage::Storage;

use super::parse_date;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Category (salary, bonus, deduction, advance, purchase, sales, other_income, income, expense)
        category: String,
        /// Amount (e.g., "150.00" or "150"), always non-negative
        amount: String,
        /// Description
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Counterparty company
        #[arg(short, long)]
        company: Option<String>,
        /// Employee name, required for payroll categories
        #[arg(short, long)]
        employee: Option<String>,
    },
    /// List transactions, one page at a time
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Records per page (defaults to the configured page size)
        #[arg(short = 's', long)]
        page_size: Option<usize>,
        /// Only transactions on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Only transactions on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Only transactions in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction's amount or description
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    default_page_size: usize,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            description,
            date,
            company,
            employee,
        } => {
            let category: TransactionCategory = category.parse()?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let mut txn = if category.is_payroll() {
                let name = employee.ok_or_else(|| {
                    LedgerError::Validation(format!(
                        "Category '{}' is payroll-scoped; use --employee",
                        category
                    ))
                })?;
                let employee = storage
                    .employees
                    .get_by_name(&name)?
                    .ok_or_else(|| LedgerError::employee_not_found(&name))?;
                TransactionRecord::payroll(employee.id, category, amount, date, description)
            } else {
                TransactionRecord::new(category, amount, date, description)
            };
            txn.company_name = company;

            let created = service.create(txn)?;
            println!("Recorded {} {} on {}", created.category, created.amount, created.date);
            println!("  ID: {}", created.id);
        }

        TransactionCommands::List {
            page,
            page_size,
            from,
            to,
            category,
        } => {
            let mut filter = TransactionFilter::all();
            if let Some(from) = from {
                filter = filter.from_date(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter = filter.to_date(parse_date(&to)?);
            }
            if let Some(category) = category {
                filter = filter.with_category(category.parse()?);
            }

            let result = service.query(&filter, page, page_size.unwrap_or(default_page_size))?;
            print!("{}", format_register_page(&result));
        }

        TransactionCommands::Show { id } => {
            let txn = service.get(parse_transaction_id(&id)?)?;
            print!("{}", format_transaction_details(&txn));
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
        } => {
            if amount.is_none() && description.is_none() {
                println!("No changes specified. Use --amount or --description.");
                return Ok(());
            }

            let mut txn = service.get(parse_transaction_id(&id)?)?;
            if let Some(amount) = amount {
                txn.amount = parse_amount(&amount)?;
            }
            if let Some(description) = description {
                txn.description = description;
            }

            let updated = service.update(txn.id, txn)?;
            println!("Updated transaction {}", updated.id);
        }

        TransactionCommands::Delete { id } => {
            let id = parse_transaction_id(&id)?;
            service.delete(id)?;
            println!("Deleted transaction {}", id);
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount: '{}'. Use format like '150.00' or '150'. Error: {}",
            s, e
        ))
    })
}

fn parse_transaction_id(s: &str) -> LedgerResult<TransactionId> {
    s.parse()
        .map_err(|_| LedgerError::transaction_not_found(s))
}
