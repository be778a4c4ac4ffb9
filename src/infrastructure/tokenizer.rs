//! Whitespace tokenizer over any buffered reader.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::source::WordSource;
use crate::error::AppError;
use crate::utils::normalizer::normalize;
use tracing::debug;

/// Reads the input one line at a time and yields its normalized tokens.
///
/// Lines are decoded lossily; bytes that are not valid UTF-8 end up as
/// replacement characters, which [`normalize`] then removes.
pub struct TextTokenizer<R> {
    reader: R,
    buffer: Vec<u8>,
    pending: VecDeque<String>,
    lines_read: usize,
}

impl<R: BufRead> TextTokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            pending: VecDeque::new(),
            lines_read: 0,
        }
    }

    /// Number of input lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl TextTokenizer<BufReader<File>> {
    /// Opens `path` for tokenizing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|e| {
            AppError::io(format!("Failed to open input file {}", path.display()), e)
        })?;
        debug!(path = %path.display(), "input opened");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> WordSource for TextTokenizer<R> {
    fn next_word(&mut self) -> Result<Option<String>, AppError> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(Some(word));
            }

            self.buffer.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.buffer)
                .map_err(|e| AppError::io("Failed to read input", e))?;
            if read == 0 {
                return Ok(None);
            }
            self.lines_read += 1;

            let line = String::from_utf8_lossy(&self.buffer);
            self.pending
                .extend(line.split_ascii_whitespace().map(normalize));
        }
    }
}
