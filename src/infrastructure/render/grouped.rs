use std::io::Write;

use super::{ReportRenderer, rule, write_failed};
use crate::application::services::ReportService;
use crate::domain::registry::WordRegistry;
use crate::error::AppError;

const WORD_SEPARATOR: &str = "     ";

/// Renders one banner per frequency, highest first, followed by that
/// group's words `words_per_line` to a line.
///
/// ```text
///
/// **********************************************************
///          Frequency of 3
/// **********************************************************
/// the
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GroupedRenderer {
    words_per_line: usize,
    report: ReportService,
}

impl GroupedRenderer {
    pub fn new(words_per_line: usize, report: ReportService) -> Self {
        Self {
            words_per_line: words_per_line.max(1),
            report,
        }
    }
}

impl ReportRenderer for GroupedRenderer {
    fn render(&self, registry: &WordRegistry, out: &mut dyn Write) -> Result<(), AppError> {
        let rule = rule();

        for group in self.report.groups(registry) {
            write!(out, "\n{rule}\n\t\t Frequency of {}\n{rule}\n", group.frequency)
                .map_err(write_failed)?;

            for line in group.words.chunks(self.words_per_line) {
                writeln!(out, "{}", line.join(WORD_SEPARATOR)).map_err(write_failed)?;
            }
        }

        Ok(())
    }
}
