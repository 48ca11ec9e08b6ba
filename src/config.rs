//! Form configuration.
//!
//! The only tunable is how long the success indicator stays up before the
//! form resets itself. It can be set through [`FormConfig::builder`] or read
//! from JSON:
//!
//! ```rust
//! use formguard::config::FormConfig;
//! use std::time::Duration;
//!
//! let config = FormConfig::from_json(r#"{ "reset_delay_ms": 2000 }"#).unwrap();
//! assert_eq!(config.reset_delay(), Duration::from_millis(2000));
//!
//! let config = FormConfig::builder().build().unwrap();
//! assert_eq!(config.reset_delay(), Duration::from_millis(3000));
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Delay before a successful form resets itself.
pub const DEFAULT_RESET_DELAY_MS: u64 = 3000;

/// Longest accepted reset delay (one hour).
pub const MAX_RESET_DELAY_MS: u64 = 60 * 60 * 1000;

/// Errors that can occur when loading or building a [`FormConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed form configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Reset delay must be positive")]
    ZeroResetDelay,

    #[error("Reset delay {found_ms}ms exceeds the maximum of {max_ms}ms")]
    ResetDelayTooLong { found_ms: u64, max_ms: u64 },
}

/// Validated form configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    reset_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
        }
    }
}

impl FormConfig {
    pub fn builder() -> FormConfigBuilder {
        FormConfigBuilder::new()
    }

    /// Parse and validate a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.validated()
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.reset_delay_ms == 0 {
            return Err(ConfigError::ZeroResetDelay);
        }
        if self.reset_delay_ms > MAX_RESET_DELAY_MS {
            return Err(ConfigError::ResetDelayTooLong {
                found_ms: self.reset_delay_ms,
                max_ms: MAX_RESET_DELAY_MS,
            });
        }
        Ok(self)
    }
}

/// Builder for [`FormConfig`]
pub struct FormConfigBuilder {
    reset_delay: Duration,
}

impl FormConfigBuilder {
    pub fn new() -> Self {
        Self {
            reset_delay: Duration::from_millis(DEFAULT_RESET_DELAY_MS),
        }
    }

    /// Set how long the success indicator stays before the form resets
    pub fn reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn build(self) -> Result<FormConfig, ConfigError> {
        let reset_delay_ms = u64::try_from(self.reset_delay.as_millis()).unwrap_or(u64::MAX);
        FormConfig { reset_delay_ms }.validated()
    }
}

impl Default for FormConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
