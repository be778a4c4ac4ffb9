//! # Word Frequency
//!
//! Counts the distinct words of a text and reports them grouped by
//! descending frequency.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The sorted doubly-linked [`WordRegistry`] and its sorts
//! - **Application Layer** ([`application`]) - Counting driver and report aggregation
//! - **Infrastructure Layer** ([`infrastructure`]) - Tokenizer and report renderers
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- story.txt report.txt
//! cargo run -- story.txt --format json
//! ```
//!
//! ## Library Use
//!
//! ```
//! use word_frequency::prelude::*;
//!
//! let mut service = WordCountService::new();
//! for word in ["the", "fox", "the"] {
//!     service.record(word).unwrap();
//! }
//!
//! let groups = ReportService::default().groups(service.registry());
//! assert_eq!(groups[0].frequency, 2);
//! assert_eq!(groups[0].words, ["the"]);
//! ```
//!
//! ## Configuration
//!
//! Run options are loaded from environment variables via [`config::Config`]
//! and can be overridden on the command line.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod runner;
pub mod telemetry;
pub mod utils;

pub use domain::registry::WordRegistry;
pub use error::{AppError, RegistryError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        FrequencyGroup, FrequencyReport, IngestSummary, ReportService, WordCountService,
    };
    pub use crate::domain::entities::{Entry, WordFrequency};
    pub use crate::domain::registry::{Removal, Upsert, WordRegistry};
    pub use crate::domain::source::WordSource;
    pub use crate::error::{AppError, RegistryError};
}
