use anyhow::Result;
use clap::{Parser, Subcommand};

use ledgerdesk::cli::{
    handle_attendance_command, handle_balance_command, handle_employee_command,
    handle_transaction_command,
};
use ledgerdesk::config::{paths::LedgerPaths, settings::Settings};
use ledgerdesk::export::{export_employees_csv, export_transactions_csv};
use ledgerdesk::services::TransactionFilter;
use ledgerdesk::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledgerdesk",
    version,
    about = "Back-office ledger for small businesses",
    long_about = "LedgerDesk keeps a small business's books from the command line: \
                  a single transaction register with category-driven debit/credit \
                  signs, employee payroll and attendance tracking, and balances \
                  that are always recomputed from the register."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Employee management commands
    #[command(subcommand, alias = "emp")]
    Employee(ledgerdesk::cli::EmployeeCommands),

    /// Transaction register commands
    #[command(subcommand, alias = "txn")]
    Transaction(ledgerdesk::cli::TransactionCommands),

    /// Attendance commands
    #[command(subcommand, alias = "att")]
    Attendance(ledgerdesk::cli::AttendanceCommands),

    /// Company balance commands
    #[command(subcommand)]
    Balance(ledgerdesk::cli::BalanceCommands),

    /// Export data to CSV
    Export {
        /// What to export (transactions, employees)
        target: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Initialize a new ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Employee(cmd)) => {
            handle_employee_command(&storage, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, settings.default_page_size, cmd)?;
        }
        Some(Commands::Attendance(cmd)) => {
            handle_attendance_command(&storage, cmd)?;
        }
        Some(Commands::Balance(cmd)) => {
            handle_balance_command(&storage, cmd)?;
        }
        Some(Commands::Export { target, output }) => {
            handle_export(&storage, &target, output.as_deref())?;
        }
        Some(Commands::Init) => {
            println!("Initializing LedgerDesk at: {}", paths.data_dir().display());
            storage.save_all()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'ledgerdesk employee add' to add your first employee.");
            println!("Run 'ledgerdesk transaction add' to record a transaction.");
        }
        Some(Commands::Config) => {
            println!("LedgerDesk Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Default page size: {}", settings.default_page_size);
        }
        None => {
            println!("LedgerDesk - Back-office ledger for small businesses");
            println!();
            println!("Run 'ledgerdesk --help' for usage information.");
            println!("Run 'ledgerdesk init' to set up a new ledger.");
        }
    }

    Ok(())
}

fn handle_export(storage: &Storage, target: &str, output: Option<&str>) -> Result<()> {
    let mut buffer = Vec::new();

    match target {
        "transactions" => {
            export_transactions_csv(storage, &TransactionFilter::all(), &mut buffer)?
        }
        "employees" => export_employees_csv(storage, &mut buffer)?,
        other => anyhow::bail!("Unknown export target: '{}'. Use 'transactions' or 'employees'", other),
    }

    match output {
        Some(path) => {
            std::fs::write(path, &buffer)?;
            println!("Exported {} to {}", target, path);
        }
        None => {
            print!("{}", String::from_utf8_lossy(&buffer));
        }
    }

    Ok(())
}
