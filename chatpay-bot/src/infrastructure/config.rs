use std::env;

use anyhow::{anyhow, Result};
use ethers::types::Address;
use serde::{Deserialize, Serialize};

use chatpay_core::shared::constants::{DEFAULT_TRIGGER_KEYWORD, TOKEN_REGISTRY_URL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub rpc_url: String,
    /// Keyword that triggers payment handling in shared channels.
    pub trigger_keyword: String,
    pub registry_url: String,
    pub identity_api_url: String,
    /// The bot's own chat identity, excluded when picking a recipient
    /// from mentions.
    pub bot_user_id: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| anyhow!("PORT must be a number: {e}"))?;

        Ok(Self {
            environment: env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
            port,
            rpc_url: env::var("RPC_URL").unwrap_or_else(|_| "https://mainnet.base.org".to_string()),
            trigger_keyword: env::var("BOT_NAME")
                .unwrap_or_else(|_| DEFAULT_TRIGGER_KEYWORD.to_string()),
            registry_url: env::var("TOKEN_REGISTRY_URL")
                .unwrap_or_else(|_| TOKEN_REGISTRY_URL.to_string()),
            identity_api_url: env::var("IDENTITY_API_URL").unwrap_or_default(),
            bot_user_id: env::var("BOT_USER_ID").ok(),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Collect startup validation errors instead of stopping at the first.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.rpc_url.is_empty() {
            errors.push("RPC_URL is required".to_string());
        }
        if self.registry_url.is_empty() {
            errors.push("TOKEN_REGISTRY_URL must not be empty".to_string());
        }
        if self.identity_api_url.is_empty() {
            errors.push("IDENTITY_API_URL is required".to_string());
        }
        if self.trigger_keyword.trim().is_empty() {
            errors.push("BOT_NAME must not be blank".to_string());
        }
        if let Some(id) = &self.bot_user_id {
            if id.parse::<Address>().is_err() {
                errors.push(format!("BOT_USER_ID is not a valid address: {id}"));
            }
        }

        errors
    }

    pub fn bot_address(&self) -> Option<Address> {
        self.bot_user_id.as_deref().and_then(|id| id.parse().ok())
    }
}
