//! Process settings loaded from the environment.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors from loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Runtime settings for the worker host.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the host binds to. `NOTEWORK_BIND`.
    pub bind_addr: SocketAddr,
    /// Default tracing filter when `RUST_LOG` is unset. `NOTEWORK_LOG`.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: ([127, 0, 0, 1], 8787).into(),
            log_filter: "notework=info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        if let Ok(bind) = std::env::var("NOTEWORK_BIND") {
            settings.bind_addr = bind.parse().map_err(|e| SettingsError::InvalidValue {
                var: "NOTEWORK_BIND".to_string(),
                reason: format!("{e}"),
            })?;
        }

        if let Ok(filter) = std::env::var("NOTEWORK_LOG") {
            settings.log_filter = filter;
        }

        Ok(settings)
    }
}
