//! Employee CLI commands
//!
//! Implements CLI commands for employee management and payroll.

use clap::Subcommand;

use crate::display::{
    format_employee_balance, format_employee_details, format_employee_list, format_register,
};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Employee, Money, TransactionCategory};
use crate::services::EmployeeService;
use crate::storage::Storage;

use super::parse_date;

/// Employee subcommands
#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// Add a new employee
    Add {
        /// Full name
        name: String,
        /// Job title
        position: String,
        /// Monthly base salary (e.g., "3000.00" or "3000")
        salary: String,
        /// Hire date (YYYY-MM-DD), defaults to today
        #[arg(short = 'd', long)]
        hire_date: Option<String>,
        /// Contact email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// List all employees
    List,
    /// Show employee details
    Show {
        /// Employee name
        name: String,
    },
    /// Edit an employee
    Edit {
        /// Employee name
        name: String,
        /// New name
        #[arg(long)]
        new_name: Option<String>,
        /// New position
        #[arg(short, long)]
        position: Option<String>,
        /// New base salary
        #[arg(short, long)]
        salary: Option<String>,
        /// New email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Remove an employee and their payroll and attendance history
    Remove {
        /// Employee name
        name: String,
    },
    /// Record a payroll transaction (salary, bonus, deduction, advance)
    Pay {
        /// Employee name
        name: String,
        /// Payroll category
        category: String,
        /// Amount
        amount: String,
        /// Description
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show an employee's payroll history
    History {
        /// Employee name
        name: String,
    },
    /// Show an employee's balance
    Balance {
        /// Employee name
        name: String,
    },
}

/// Handle an employee command
pub fn handle_employee_command(storage: &Storage, cmd: EmployeeCommands) -> LedgerResult<()> {
    let service = EmployeeService::new(storage);

    match cmd {
        EmployeeCommands::Add {
            name,
            position,
            salary,
            hire_date,
            email,
        } => {
            let salary = parse_amount(&salary)?;
            let hire_date = match hire_date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let mut employee = Employee::new(name, position, salary, hire_date);
            if let Some(email) = email {
                employee.email = email;
            }

            let created = service.create(employee)?;
            println!("Added employee: {}", created.name);
            println!("  Position:    {}", created.position);
            println!("  Base salary: {}", created.base_salary);
            println!("  ID:          {}", created.id);
        }

        EmployeeCommands::List => {
            let employees = service.list()?;
            print!("{}", format_employee_list(&employees));
        }

        EmployeeCommands::Show { name } => {
            let employee = service.get_by_name(&name)?;
            print!("{}", format_employee_details(&employee));
        }

        EmployeeCommands::Edit {
            name,
            new_name,
            position,
            salary,
            email,
        } => {
            if new_name.is_none() && position.is_none() && salary.is_none() && email.is_none() {
                println!(
                    "No changes specified. Use --new-name, --position, --salary, or --email."
                );
                return Ok(());
            }

            let mut employee = service.get_by_name(&name)?;
            if let Some(new_name) = new_name {
                employee.name = new_name;
            }
            if let Some(position) = position {
                employee.position = position;
            }
            if let Some(salary) = salary {
                employee.base_salary = parse_amount(&salary)?;
            }
            if let Some(email) = email {
                employee.email = email;
            }

            let updated = service.update(employee.id, employee)?;
            println!("Updated employee: {}", updated.name);
        }

        EmployeeCommands::Remove { name } => {
            let employee = service.get_by_name(&name)?;
            let removed_txns = service.delete(employee.id)?;
            println!(
                "Removed {} and {} payroll transaction(s)",
                employee.name, removed_txns
            );
        }

        EmployeeCommands::Pay {
            name,
            category,
            amount,
            description,
            date,
        } => {
            let employee = service.get_by_name(&name)?;
            let category: TransactionCategory = category.parse()?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let txn =
                service.add_payroll_transaction(employee.id, category, amount, date, description)?;
            println!(
                "Recorded {} {} for {} on {}",
                txn.category, txn.amount, employee.name, txn.date
            );
        }

        EmployeeCommands::History { name } => {
            let employee = service.get_by_name(&name)?;
            let history = service.payroll_history(employee.id)?;
            println!("Payroll history for {}", employee.name);
            print!("{}", format_register(&history));
        }

        EmployeeCommands::Balance { name } => {
            let employee = service.get_by_name(&name)?;
            let info = service.balance(employee.id)?;
            print!("{}", format_employee_balance(&employee, &info));
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount: '{}'. Use format like '3000.00' or '3000'. Error: {}",
            s, e
        ))
    })
}
