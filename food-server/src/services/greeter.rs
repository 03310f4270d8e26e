//! Greeter - 每日问候语

use crate::core::Config;

/// Fallback when no greeting is configured
pub const DEFAULT_GREETING: &str = "Greetings";

/// Message-of-the-day provider
pub trait Greeter: Send + Sync {
    fn message_of_the_day(&self) -> String;
}

/// Greeter backed by the `GREETING` setting
#[derive(Debug, Clone)]
pub struct ConfigGreeter {
    message: String,
}

impl ConfigGreeter {
    pub fn new(config: &Config) -> Self {
        Self::from_setting(config.greeting.as_deref())
    }

    /// Blank or missing settings fall back to [`DEFAULT_GREETING`]
    pub fn from_setting(greeting: Option<&str>) -> Self {
        let message = greeting
            .filter(|g| !g.trim().is_empty())
            .unwrap_or(DEFAULT_GREETING)
            .to_string();
        Self { message }
    }
}

impl Greeter for ConfigGreeter {
    fn message_of_the_day(&self) -> String {
        self.message.clone()
    }
}
