use std::io::BufRead;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::bot::Bot;
use expense_tracker::cli::{
    handle_add, handle_budget_command, handle_categories, handle_history, handle_summary,
    BudgetCommands,
};
use expense_tracker::config::{BotConfig, Settings, TrackerPaths};
use expense_tracker::events::EventJournal;
use expense_tracker::storage::{json_file_valid, LoadOutcome, Storage};

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    author = "GKRBROS",
    version,
    about = "Log expenses and get spending summaries by category",
    long_about = "Expense Tracker records what you spend, keeps it in a single JSON \
                  ledger and summarizes it by category over rolling windows. The same \
                  operations are available to chat users through the bot front end."
)]
struct Cli {
    /// User the command acts for
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_USER", default_value_t = 0)]
    user: i64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Optional description
        description: Vec<String>,
    },

    /// Show recent expenses, most recent first
    History {
        /// Only include the last N days
        #[arg(short, long)]
        days: Option<i64>,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a spending summary by category
    Summary {
        /// Window in days (defaults to the configured value)
        #[arg(short, long)]
        days: Option<i64>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List suggested categories
    Categories,

    /// Budget ceiling commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Start the chat bot (requires TELEGRAM_BOT_TOKEN)
    ///
    /// Each line read from standard input is handled as a chat message
    /// from the selected user.
    Bot,

    /// Write default settings to disk
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            description,
        }) => {
            let mut storage = Storage::open(paths, &settings)?;
            handle_add(&mut storage, &settings, cli.user, &amount, &category, &description)?;
        }
        Some(Commands::History { days, limit }) => {
            let storage = Storage::open(paths, &settings)?;
            handle_history(&storage, &settings, cli.user, days, limit)?;
        }
        Some(Commands::Summary { days, json }) => {
            let storage = Storage::open(paths, &settings)?;
            handle_summary(&storage, &settings, cli.user, days, json)?;
        }
        Some(Commands::Categories) => handle_categories(),
        Some(Commands::Budget(cmd)) => {
            let mut storage = Storage::open(paths, &settings)?;
            handle_budget_command(&mut storage, &settings, cli.user, cmd)?;
        }
        Some(Commands::Bot) => run_bot(paths, settings, cli.user)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized expense tracker at: {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Budgets file:   {}", paths.budgets_file().display());
            println!("Event log:      {}", paths.event_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Default summary days: {}", settings.default_summary_days);
            println!("  History limit:        {}", settings.history_limit);
            println!("  Event log enabled:    {}", settings.event_log_enabled);

            if settings.event_log_enabled {
                match EventJournal::new(paths.event_log()).read_all() {
                    Ok(records) => {
                        println!("  Events recorded:      {}", records.len());
                        if let Some(last) = records.last() {
                            println!("  Last event:           {}", last.format_human_readable());
                        }
                    }
                    Err(err) => println!("  Events recorded:      unreadable ({})", err),
                }
            }

            let expenses = paths.expenses_file();
            if expenses.exists() && !json_file_valid(&expenses) {
                println!();
                println!("Warning: the expenses file is not valid JSON and will be ignored.");
            }
        }
        None => {
            println!("Expense Tracker - log expenses, get summaries");
            println!();
            println!("Run 'expense-tracker --help' for usage information.");
        }
    }

    Ok(())
}

fn run_bot(paths: TrackerPaths, settings: Settings, user_id: i64) -> Result<()> {
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: Please set the TELEGRAM_BOT_TOKEN environment variable");
            return Err(err.into());
        }
    };

    let storage = Storage::open(paths, &settings)?;
    if storage.ledger.last_load().is_some_and(LoadOutcome::is_failure) {
        log::warn!("Starting with an empty ledger");
    }
    if storage.budgets.last_load().is_some_and(LoadOutcome::is_failure) {
        log::warn!("Starting without budgets");
    }

    let mut bot = Bot::new(config, settings, storage);
    log::info!("Starting Expense Tracker Bot...");
    bot.start();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", bot.handle(user_id, &line));
    }

    log::info!("Bot stopped");
    Ok(())
}
