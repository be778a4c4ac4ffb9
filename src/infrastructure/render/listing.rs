use std::io::Write;

use super::{ReportRenderer, rule, write_failed};
use crate::domain::entities::WordFrequency;
use crate::domain::registry::WordRegistry;
use crate::error::AppError;

/// Renders the front and back entries, then every entry in its own block.
///
/// Entries are listed from the head, or from the tail when `from_tail` is
/// set (descending frequency after a frequency sort).
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingRenderer {
    from_tail: bool,
}

impl ListingRenderer {
    pub fn new(from_tail: bool) -> Self {
        Self { from_tail }
    }

    fn write_boundaries(registry: &WordRegistry, out: &mut dyn Write) -> Result<(), AppError> {
        let written = match (registry.front(), registry.back()) {
            (Ok(front), Ok(back)) => {
                write!(
                    out,
                    "Item at the front of the list is: {}\nFrequency Count is: {}\n\
                     Item at the end of the list is: {}\nFrequency Count is: {}\n",
                    front.word, front.frequency_count, back.word, back.frequency_count
                )
            }
            _ => writeln!(out, "List is empty!"),
        };
        written.map_err(write_failed)
    }

    fn write_entry(
        entry: WordFrequency<'_>,
        rule: &str,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        write!(
            out,
            "\n{rule}\n\nFrequency Count: {}\nWord: {}\n{rule}\n",
            entry.frequency_count, entry.word
        )
        .map_err(write_failed)
    }
}

impl ReportRenderer for ListingRenderer {
    fn render(&self, registry: &WordRegistry, out: &mut dyn Write) -> Result<(), AppError> {
        Self::write_boundaries(registry, out)?;

        let rule = rule();
        if self.from_tail {
            for entry in registry.iter().rev() {
                Self::write_entry(entry, &rule, out)?;
            }
        } else {
            for entry in registry.iter() {
                Self::write_entry(entry, &rule, out)?;
            }
        }

        Ok(())
    }
}
