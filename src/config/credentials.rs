//! Chat transport credentials
//!
//! The bot token is read from the process environment at startup. Only the
//! chat front end needs it; the ledger and summaries work without it.

use std::fmt;

use crate::error::TrackerError;

/// Environment variable holding the chat bot token
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Startup configuration for the chat front end
#[derive(Clone)]
pub struct BotConfig {
    token: String,
}

impl BotConfig {
    /// Create a config from an explicit token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Read the token from `TELEGRAM_BOT_TOKEN`
    pub fn from_env() -> Result<Self, TrackerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the token through an arbitrary lookup function
    ///
    /// An empty or whitespace-only value counts as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TrackerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BOT_TOKEN_ENV) {
            Some(token) if !token.trim().is_empty() => {
                log::debug!("{} read from environment", BOT_TOKEN_ENV);
                Ok(Self::new(token.trim()))
            }
            _ => Err(TrackerError::MissingCredential(BOT_TOKEN_ENV)),
        }
    }

    /// The raw token
    pub fn token(&self) -> &str {
        &self.token
    }
}

// Never print the token itself.
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}
