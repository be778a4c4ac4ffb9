//! Report renderers.
//!
//! Provides a [`ReportRenderer`] trait with three implementations:
//! - [`GroupedRenderer`] - Words under a banner per frequency, N per line
//! - [`ListingRenderer`] - One block per entry in chain order
//! - [`JsonRenderer`] - The [`crate::application::services::FrequencyReport`] as JSON

mod grouped;
mod json;
mod listing;

pub use grouped::GroupedRenderer;
pub use json::JsonRenderer;
pub use listing::ListingRenderer;

use std::io::{self, Write};

use crate::domain::registry::WordRegistry;
use crate::error::AppError;

/// Width of the `*` rule framing report headers.
pub(crate) const RULE_WIDTH: usize = 58;

/// Writes a human- or machine-readable report of a registry.
pub trait ReportRenderer {
    /// Renders `registry` into `out` without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if writing fails and
    /// [`AppError::Serialization`] if encoding fails.
    fn render(&self, registry: &WordRegistry, out: &mut dyn Write) -> Result<(), AppError>;
}

pub(crate) fn rule() -> String {
    "*".repeat(RULE_WIDTH)
}

pub(crate) fn write_failed(e: io::Error) -> AppError {
    AppError::io("Failed to write report", e)
}
