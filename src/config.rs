//! Runtime configuration from the environment.
//!
//! `.env` loading happens once in `main`; everything here reads plain
//! environment variables. Malformed values fall back to defaults.

use std::str::FromStr;

/// Default debounce delay for the interactive mode, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored label/value table.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

/// Configuration for the adapters around the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Default output format (`SUBNET_CALC_FORMAT`), overridable per flag.
    pub output: OutputFormat,
    /// Interactive-mode debounce delay (`SUBNET_CALC_DEBOUNCE_MS`).
    pub debounce_ms: u64,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Config {
        let output = std::env::var("SUBNET_CALC_FORMAT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(OutputFormat::Text);
        let debounce_ms = std::env::var("SUBNET_CALC_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        Config {
            output,
            debounce_ms,
        }
    }
}
