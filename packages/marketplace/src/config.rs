use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::domains::support_chat::ChatConfig;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
    pub support_reply_delay: Duration,
    pub support_greeting: String,
    pub support_auto_reply: String,
    pub currency: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = ChatConfig::default();

        let reply_delay_ms: u64 = match env::var("SUPPORT_REPLY_DELAY_MS") {
            Ok(raw) => raw
                .parse()
                .context("SUPPORT_REPLY_DELAY_MS must be a whole number of milliseconds")?,
            Err(_) => defaults.reply_delay.as_millis() as u64,
        };

        Ok(Self {
            log_filter: env::var("LOG_FILTER")
                .unwrap_or_else(|_| "info,marketplace_core=debug".to_string()),
            support_reply_delay: Duration::from_millis(reply_delay_ms),
            support_greeting: env::var("SUPPORT_GREETING").unwrap_or(defaults.greeting),
            support_auto_reply: env::var("SUPPORT_AUTO_REPLY").unwrap_or(defaults.auto_reply),
            currency: env::var("DEFAULT_CURRENCY").unwrap_or_else(|_| "USD".to_string()),
        })
    }

    /// Chat settings derived from this configuration
    pub fn chat_config(&self) -> ChatConfig {
        ChatConfig {
            reply_delay: self.support_reply_delay,
            greeting: self.support_greeting.clone(),
            auto_reply: self.support_auto_reply.clone(),
        }
    }
}
