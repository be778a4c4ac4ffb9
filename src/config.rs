//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, overridden by command-line flags
//! and validated before any input is read.
//!
//! ```bash
//! export WORDFREQ_FORMAT="grouped"
//! export WORDFREQ_WORDS_PER_LINE="4"
//! ```
//!
//! ## Optional Variables
//!
//! - `WORDFREQ_FORMAT` - Report format: `grouped`, `listing` or `json` (default: `grouped`)
//! - `WORDFREQ_WORDS_PER_LINE` - Words per line in the grouped report (default: 4, range: 1-64)
//! - `WORDFREQ_MIN_FREQUENCY` - Lowest frequency included in the report (default: 1)
//! - `WORDFREQ_ORDER` - Chain order before rendering: `alphabetical` or `frequency` (default: `alphabetical`)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::env;

/// Output layout of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Words grouped under a banner per frequency
    #[default]
    Grouped,
    /// One block per word with its count
    Listing,
    /// Machine-readable JSON report
    Json,
}

/// Order of the chain when the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    /// Ordinal word order, as maintained by insertion
    #[default]
    Alphabetical,
    /// Resorted by frequency before rendering
    Frequency,
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub format: ReportFormat,
    pub words_per_line: usize,
    pub min_frequency: u64,
    pub order: SortOrder,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            words_per_line: 4,
            min_frequency: 1,
            order: SortOrder::default(),
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `WORDFREQ_FORMAT` or `WORDFREQ_ORDER` hold an
    /// unknown value.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let format = match env::var("WORDFREQ_FORMAT") {
            Ok(value) => parse_choice::<ReportFormat>(&value)
                .context("Failed to parse WORDFREQ_FORMAT")?,
            Err(_) => defaults.format,
        };

        let order = match env::var("WORDFREQ_ORDER") {
            Ok(value) => {
                parse_choice::<SortOrder>(&value).context("Failed to parse WORDFREQ_ORDER")?
            }
            Err(_) => defaults.order,
        };

        let words_per_line = env::var("WORDFREQ_WORDS_PER_LINE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.words_per_line);

        let min_frequency = env::var("WORDFREQ_MIN_FREQUENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.min_frequency);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            format,
            words_per_line,
            min_frequency,
            order,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `words_per_line` is outside 1-64
    /// - `min_frequency` is 0
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.words_per_line == 0 || self.words_per_line > 64 {
            anyhow::bail!(
                "WORDFREQ_WORDS_PER_LINE must be between 1 and 64, got {}",
                self.words_per_line
            );
        }

        if self.min_frequency == 0 {
            anyhow::bail!("WORDFREQ_MIN_FREQUENCY must be at least 1");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Report format: {:?}", self.format);
        tracing::info!("  Words per line: {}", self.words_per_line);
        tracing::info!("  Minimum frequency: {}", self.min_frequency);
        tracing::info!("  Order: {:?}", self.order);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses a case-insensitive `ValueEnum` choice.
fn parse_choice<T: ValueEnum>(value: &str) -> Result<T> {
    T::from_str(value.trim(), true).map_err(|e| anyhow::anyhow!(e))
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable holds an unknown value or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
