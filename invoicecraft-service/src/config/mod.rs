use invoicecraft_core::config as core_config;
use invoicecraft_core::error::AppError;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    64
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl ServiceConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix.
        let common = core_config::Config::load()?;

        let capacity = env::var("NOTIFICATIONS_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_capacity);

        Ok(ServiceConfig {
            common,
            notifications: NotificationConfig { capacity },
        })
    }
}
