use std::io::Write;

use super::{ReportRenderer, write_failed};
use crate::application::services::ReportService;
use crate::domain::registry::WordRegistry;
use crate::error::AppError;

/// Renders the frequency report as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    report: ReportService,
}

impl JsonRenderer {
    pub fn new(report: ReportService) -> Self {
        Self { report }
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, registry: &WordRegistry, out: &mut dyn Write) -> Result<(), AppError> {
        let report = self.report.build(registry);
        serde_json::to_writer_pretty(&mut *out, &report).map_err(|e| {
            if e.is_io() {
                write_failed(e.into())
            } else {
                AppError::Serialization(e)
            }
        })?;
        writeln!(out).map_err(write_failed)
    }
}
