//! Chat command parsing
//!
//! Turns a raw chat message into a [`BotCommand`]. Commands start with `/`
//! and may carry a `@botname` suffix, as group chats send them.

use crate::error::{TrackerError, TrackerResult};

/// A parsed chat command
#[derive(Debug, Clone, PartialEq)]
pub enum BotCommand {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// `/add <amount> <category> [description...]`
    Add {
        amount: f64,
        category: String,
        description: String,
    },
    /// `/history [days]`
    History { days: Option<i64> },
    /// `/summary [days]`
    Summary { days: Option<i64> },
    /// `/categories`
    Categories,
    /// `/budget [amount|clear]`
    Budget(BudgetAction),
}

/// What `/budget` should do
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetAction {
    Show,
    Set(f64),
    Clear,
}

impl BotCommand {
    /// Parse a chat message
    pub fn parse(text: &str) -> TrackerResult<Self> {
        let mut words = text.split_whitespace();

        let head = words
            .next()
            .ok_or_else(|| TrackerError::Parse("empty message".into()))?;
        let name = head
            .strip_prefix('/')
            .ok_or_else(|| TrackerError::Parse(format!("'{}' is not a command", head)))?;
        let name = name.split('@').next().unwrap_or(name).to_ascii_lowercase();

        let args: Vec<&str> = words.collect();

        match name.as_str() {
            "start" => Ok(BotCommand::Start),
            "help" => Ok(BotCommand::Help),
            "categories" => Ok(BotCommand::Categories),
            "add" => parse_add(&args),
            "history" => Ok(BotCommand::History {
                days: parse_days(&args)?,
            }),
            "summary" => Ok(BotCommand::Summary {
                days: parse_days(&args)?,
            }),
            "budget" => parse_budget(&args),
            other => Err(TrackerError::Parse(format!("unknown command /{}", other))),
        }
    }
}

fn parse_add(args: &[&str]) -> TrackerResult<BotCommand> {
    let (amount, category, rest) = match args {
        [amount, category, rest @ ..] => (amount, category, rest),
        _ => {
            return Err(TrackerError::Parse(
                "usage: /add <amount> <category> [description]".into(),
            ))
        }
    };

    Ok(BotCommand::Add {
        amount: parse_amount(amount)?,
        category: category.to_string(),
        description: rest.join(" "),
    })
}

fn parse_budget(args: &[&str]) -> TrackerResult<BotCommand> {
    match args {
        [] => Ok(BotCommand::Budget(BudgetAction::Show)),
        [word] if word.eq_ignore_ascii_case("clear") => Ok(BotCommand::Budget(BudgetAction::Clear)),
        [amount] => Ok(BotCommand::Budget(BudgetAction::Set(parse_amount(amount)?))),
        _ => Err(TrackerError::Parse("usage: /budget [amount|clear]".into())),
    }
}

/// Parse an amount, allowing a leading `$`
///
/// Only rejects text that is not a finite number; sign and size are the
/// ledger's business.
pub fn parse_amount(text: &str) -> TrackerResult<f64> {
    let trimmed = text.trim().trim_start_matches('$');
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(TrackerError::Parse(format!("'{}' is not an amount", text))),
    }
}

fn parse_days(args: &[&str]) -> TrackerResult<Option<i64>> {
    match args {
        [] => Ok(None),
        [days] => days
            .parse::<i64>()
            .map(Some)
            .map_err(|_| TrackerError::Parse(format!("'{}' is not a number of days", days))),
        _ => Err(TrackerError::Parse("expected at most one number of days".into())),
    }
}
