//! Business logic services for the application layer.

pub mod counting_service;
pub mod report_service;

pub use counting_service::{IngestSummary, WordCountService};
pub use report_service::{FrequencyGroup, FrequencyReport, ReportService};
