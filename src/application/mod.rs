//! Application layer services.
//!
//! Services drive the domain registry: feeding it words and turning its
//! contents into report data.
//!
//! # Available Services
//!
//! - [`services::counting_service::WordCountService`] - Increment-or-insert driver over a word source
//! - [`services::report_service::ReportService`] - Frequency-grouped aggregation

pub mod services;
