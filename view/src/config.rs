//! Application configuration
//!
//! Read once at startup from the process environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TODO_CONTAINER` | `#container` | Mount point selector (`#id` or `.class`) |
//! | `TODO_DEVTOOLS` | off | Attach the tracing dev-tools inspector |
//! | `TODO_BROADCAST_CAPACITY` | `16` | Action broadcast buffer size |

use crate::host::{Container, ParseSelectorError};
use composable_todo_runtime::StoreConfig;
use thiserror::Error;

/// Mount point selector
pub const CONTAINER_VAR: &str = "TODO_CONTAINER";
/// Dev-tools switch
pub const DEVTOOLS_VAR: &str = "TODO_DEVTOOLS";
/// Action broadcast buffer size
pub const BROADCAST_CAPACITY_VAR: &str = "TODO_BROADCAST_CAPACITY";

/// Configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `TODO_CONTAINER` is not a usable selector
    #[error("TODO_CONTAINER: {0}")]
    Container(#[from] ParseSelectorError),

    /// A switch variable holds something other than a boolean word
    #[error("{var} must be one of 1|true|yes|on|0|false|no|off, got {value:?}")]
    InvalidFlag {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },

    /// A size variable is not a positive integer
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidCapacity {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the root view is mounted
    pub container: Container,
    /// Attach the dev-tools inspector to the store
    pub devtools: bool,
    /// Buffer size of the store's action broadcast channel
    pub broadcast_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            container: Container::default(),
            devtools: false,
            broadcast_capacity: StoreConfig::default().action_broadcast_capacity,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(selector) = lookup(CONTAINER_VAR) {
            config.container = selector.parse()?;
        }

        if let Some(value) = lookup(DEVTOOLS_VAR) {
            config.devtools = parse_flag(DEVTOOLS_VAR, &value)?;
        }

        if let Some(value) = lookup(BROADCAST_CAPACITY_VAR) {
            config.broadcast_capacity = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or_else(|| ConfigError::InvalidCapacity {
                    var: BROADCAST_CAPACITY_VAR,
                    value: value.clone(),
                })?;
        }

        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Store settings derived from this configuration
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.broadcast_capacity)
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
