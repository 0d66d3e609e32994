//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive for the subscriber. A non-empty `RUST_LOG` value
    /// passed as `env_override` wins over the configured level.
    pub fn filter_directive(&self, env_override: Option<&str>) -> String {
        match env_override.map(str::trim) {
            Some(directive) if !directive.is_empty() => directive.to_string(),
            _ => self.level.clone(),
        }
    }

    /// Whether records are emitted as JSON lines.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}
