//! Chat bot front end
//!
//! Maps chat commands onto the ledger, summary and budget operations and
//! renders the replies as text. The network transport itself is not wired
//! up: [`Bot::start`] only checks its configuration and reports that it is
//! listening, and [`Bot::handle`] is what a transport would call for each
//! incoming message.

pub mod command;

pub use command::{BotCommand, BudgetAction};

use crate::config::{BotConfig, Settings};
use crate::display::{format_budget, format_expense, format_summary};
use crate::error::TrackerResult;
use crate::models::SUGGESTED_CATEGORIES;
use crate::services::{BudgetService, SummaryService};
use crate::storage::Storage;

const WELCOME: &str = "👋 Welcome to the Expense Tracker!\n\n\
    Log what you spend and get summaries by category.\n\
    Send /help to see what I can do.";

const HELP: &str = "Available commands:\n\
    /add <amount> <category> [description] - Log an expense\n\
    /history [days] - Show recent expenses\n\
    /summary [days] - Spending summary (default 30 days)\n\
    /categories - Suggested categories\n\
    /budget [amount|clear] - Show, set or clear your budget\n\
    /help - Show this message";

/// Chat front end over the expense storage
pub struct Bot {
    config: BotConfig,
    settings: Settings,
    storage: Storage,
}

impl Bot {
    /// Create a bot over already opened storage
    pub fn new(config: BotConfig, settings: Settings, storage: Storage) -> Self {
        Self {
            config,
            settings,
            storage,
        }
    }

    /// Start listening for messages
    pub fn start(&self) {
        log::info!(
            "Bot started with {} expenses loaded, listening for messages...",
            self.storage.ledger.len()
        );
        log::debug!("Using credentials {:?}", self.config);
    }

    /// Handle one incoming message and produce the reply
    pub fn handle(&mut self, user_id: i64, text: &str) -> String {
        match BotCommand::parse(text).and_then(|cmd| self.dispatch(user_id, cmd)) {
            Ok(reply) => reply,
            Err(err) => {
                log::warn!("Rejected message from user {}: {}", user_id, err);
                format!("❌ {}\nSend /help for usage.", err)
            }
        }
    }

    /// Run a parsed command for a user
    pub fn dispatch(&mut self, user_id: i64, command: BotCommand) -> TrackerResult<String> {
        let currency = self.settings.currency_symbol.clone();

        let reply = match command {
            BotCommand::Start => WELCOME.to_string(),
            BotCommand::Help => HELP.to_string(),
            BotCommand::Categories => {
                let mut reply = String::from("Suggested categories:\n");
                for category in SUGGESTED_CATEGORIES {
                    reply.push_str(&format!("  • {}\n", category));
                }
                reply.push_str("Any other name works too.");
                reply
            }
            BotCommand::Add {
                amount,
                category,
                description,
            } => {
                let expense = self
                    .storage
                    .ledger
                    .add(user_id, amount, category, description);
                format!("✅ Expense added!\n\n{}", format_expense(&expense, &currency))
            }
            BotCommand::History { days } => {
                let service = SummaryService::new(&self.storage.ledger);
                let expenses = service.recent(user_id, days, self.settings.history_limit);
                if expenses.is_empty() {
                    "No expenses found.".to_string()
                } else {
                    expenses
                        .iter()
                        .map(|e| format_expense(e, &currency))
                        .collect::<Vec<_>>()
                        .join("\n\n")
                }
            }
            BotCommand::Summary { days } => {
                let days = days.unwrap_or(self.settings.default_summary_days);
                let summary = SummaryService::new(&self.storage.ledger).get_summary(user_id, days);
                format_summary(&summary, &currency)
            }
            BotCommand::Budget(action) => {
                let mut service = BudgetService::new(&mut self.storage.budgets);
                match action {
                    BudgetAction::Show => format_budget(service.get(user_id).as_ref(), &currency),
                    BudgetAction::Set(limit) => {
                        let budget = service.set(user_id, limit)?;
                        format!("✅ {}", format_budget(Some(&budget), &currency))
                    }
                    BudgetAction::Clear => {
                        if service.clear(user_id)? {
                            "Budget cleared.".to_string()
                        } else {
                            "No budget set.".to_string()
                        }
                    }
                }
            }
        };

        Ok(reply)
    }

    /// The underlying storage
    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use tempfile::TempDir;

    fn create_test_bot() -> (TempDir, Bot) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::open(paths, &settings).unwrap();
        let bot = Bot::new(BotConfig::new("test-token"), settings, storage);
        (temp_dir, bot)
    }

    #[test]
    fn test_start_and_help() {
        let (_temp_dir, mut bot) = create_test_bot();
        bot.start();

        assert!(bot.handle(1, "/start").contains("Welcome"));
        assert!(bot.handle(1, "/help").contains("/summary"));
    }

    #[test]
    fn test_add_then_summary() {
        let (_temp_dir, mut bot) = create_test_bot();

        assert!(bot.handle(1, "/add 10 Food").starts_with("✅ Expense added!"));
        bot.handle(1, "/add 5.50 Food snack");
        bot.handle(1, "/add 20 Transport taxi");
        bot.handle(2, "/add 99 Bills");

        let reply = bot.handle(1, "/summary");

        assert!(reply.contains("Total: $35.50"));
        assert!(reply.contains("Transactions: 3"));
        assert!(reply.contains("Transport: $20.00"));
        assert_eq!(bot.storage().ledger.len(), 4);
    }

    #[test]
    fn test_history_is_per_user() {
        let (_temp_dir, mut bot) = create_test_bot();
        bot.handle(1, "/add 3 Food coffee");
        bot.handle(2, "/add 4 Food tea");

        let reply = bot.handle(1, "/history");
        assert!(reply.contains("coffee"));
        assert!(!reply.contains("tea"));

        assert_eq!(bot.handle(3, "/history"), "No expenses found.");
    }

    #[test]
    fn test_empty_summary() {
        let (_temp_dir, mut bot) = create_test_bot();
        assert_eq!(
            bot.handle(1, "/summary 7"),
            "No expenses recorded in this period."
        );
    }

    #[test]
    fn test_budget_flow() {
        let (_temp_dir, mut bot) = create_test_bot();

        assert_eq!(bot.handle(1, "/budget"), "No budget set.");
        assert_eq!(bot.handle(1, "/budget 200"), "✅ Budget: $200.00");
        assert_eq!(bot.handle(1, "/budget"), "Budget: $200.00");
        assert_eq!(bot.handle(1, "/budget clear"), "Budget cleared.");
        assert!(bot.handle(1, "/budget -5").starts_with("❌"));
    }

    #[test]
    fn test_categories() {
        let (_temp_dir, mut bot) = create_test_bot();
        let reply = bot.handle(1, "/categories");
        for category in SUGGESTED_CATEGORIES {
            assert!(reply.contains(category));
        }
    }

    #[test]
    fn test_bad_input_reply() {
        let (_temp_dir, mut bot) = create_test_bot();

        let reply = bot.handle(1, "/add abc Food");
        assert!(reply.starts_with("❌"));
        assert!(reply.contains("/help"));
        assert!(bot.storage().ledger.is_empty());
    }
}
