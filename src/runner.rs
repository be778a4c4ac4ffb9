//! End-to-end run: read the input, count its words and write the report.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use crate::application::services::{IngestSummary, ReportService, WordCountService};
use crate::config::{Config, ReportFormat, SortOrder};
use crate::error::AppError;
use crate::infrastructure::render::{
    GroupedRenderer, JsonRenderer, ListingRenderer, ReportRenderer,
};
use crate::infrastructure::tokenizer::TextTokenizer;

use anyhow::Result;
use tracing::{debug, info};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ingest: IngestSummary,
    pub distinct_words: usize,
    pub max_frequency: u64,
}

/// Builds the renderer selected by `config`.
pub fn renderer_for(config: &Config) -> Box<dyn ReportRenderer> {
    let report = ReportService::new(config.min_frequency);

    match config.format {
        ReportFormat::Grouped => Box::new(GroupedRenderer::new(config.words_per_line, report)),
        ReportFormat::Listing => {
            Box::new(ListingRenderer::new(config.order == SortOrder::Frequency))
        }
        ReportFormat::Json => Box::new(JsonRenderer::new(report)),
    }
}

/// Counts the words of `input` and writes the configured report to `output`.
///
/// With [`SortOrder::Frequency`] the chain is resorted by frequency before
/// rendering.
///
/// # Errors
///
/// Returns an [`AppError::Io`] (inside the `anyhow::Error`) if the input
/// cannot be read or the report cannot be written.
pub fn run(config: &Config, input: &Path, output: &mut dyn Write) -> Result<RunSummary> {
    let mut source = TextTokenizer::open(input)?;
    count_and_render(config, &mut source, output)
}

/// Like [`run`], but writes the report to the file at `output`.
///
/// The input is opened before the output is created, so an input that
/// cannot be opened leaves an existing output file untouched.
///
/// # Errors
///
/// Returns an [`AppError::Io`] (inside the `anyhow::Error`) if either file
/// cannot be opened or the report cannot be written.
pub fn run_to_file(config: &Config, input: &Path, output: &Path) -> Result<RunSummary> {
    let mut source = TextTokenizer::open(input)?;

    let file = File::create(output).map_err(|e| {
        AppError::io(
            format!("Failed to open output file {}", output.display()),
            e,
        )
    })?;
    debug!(path = %output.display(), "output opened");

    let mut out = BufWriter::new(file);
    count_and_render(config, &mut source, &mut out)
}

fn count_and_render<R: BufRead>(
    config: &Config,
    source: &mut TextTokenizer<R>,
    output: &mut dyn Write,
) -> Result<RunSummary> {
    let mut service = WordCountService::new();

    let ingest = service.ingest(source)?;
    info!(
        lines = source.lines_read(),
        words = ingest.words_counted,
        distinct = ingest.distinct_added,
        "input counted"
    );

    let registry = service.registry_mut();
    if config.order == SortOrder::Frequency {
        registry.frequency_sort();
    }

    renderer_for(config).render(registry, output)?;
    output
        .flush()
        .map_err(|e| AppError::io("Failed to flush report", e))?;

    let summary = RunSummary {
        ingest,
        distinct_words: registry.size(),
        max_frequency: registry.max_frequency(),
    };
    info!(
        distinct = summary.distinct_words,
        max_frequency = summary.max_frequency,
        "report written"
    );
    Ok(summary)
}
