//! Company balance CLI commands

use clap::Subcommand;

use crate::display::format_company_balance;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::BalanceService;
use crate::storage::Storage;

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Show the effective company balance
    Show,
    /// Set the company balance baseline
    Set {
        /// New baseline (e.g., "1000.00")
        baseline: String,
    },
}

/// Handle a balance command
pub fn handle_balance_command(storage: &Storage, cmd: BalanceCommands) -> LedgerResult<()> {
    let service = BalanceService::new(storage);

    match cmd {
        BalanceCommands::Show => {
            let baseline = service.baseline()?;
            let effective = service.effective_balance()?;
            print!("{}", format_company_balance(baseline, effective));
        }

        BalanceCommands::Set { baseline } => {
            let baseline = Money::parse(&baseline).map_err(|e| {
                LedgerError::Validation(format!("Invalid baseline: '{}'. Error: {}", baseline, e))
            })?;

            let previous = service.set_baseline(baseline)?;
            println!("Baseline changed from {} to {}", previous, baseline);
            println!("Effective balance: {}", service.effective_balance()?);
        }
    }

    Ok(())
}
