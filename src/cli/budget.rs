//! Budget CLI commands
//!
//! Implements CLI commands for per-user budget ceilings.

use clap::Subcommand;

use crate::bot::command::parse_amount;
use crate::config::Settings;
use crate::display::format_budget;
use crate::error::TrackerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the current budget
    Show,

    /// Set the budget ceiling
    Set {
        /// Amount (e.g., "500" or "500.00")
        amount: String,
    },

    /// Remove the budget ceiling
    Clear,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    user_id: i64,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let mut service = BudgetService::new(&mut storage.budgets);
    let currency = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Show => {
            println!("{}", format_budget(service.get(user_id).as_ref(), currency));
        }
        BudgetCommands::Set { amount } => {
            let budget = service.set(user_id, parse_amount(&amount)?)?;
            println!("{}", format_budget(Some(&budget), currency));
        }
        BudgetCommands::Clear => {
            if service.clear(user_id)? {
                println!("Budget cleared.");
            } else {
                println!("No budget set.");
            }
        }
    }

    Ok(())
}
