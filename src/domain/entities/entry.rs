//! Entry entity: one distinct word and the number of times it was seen.

use serde::Serialize;

/// A registered word with its occurrence count.
///
/// Entries are created with a count of 1 and only ever grow; the registry
/// never holds an entry with a count of 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub frequency_count: u64,
}

impl Entry {
    /// Creates an entry for a word seen for the first time.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            frequency_count: 1,
        }
    }

    /// Returns a borrowed view of this entry.
    pub fn as_view(&self) -> WordFrequency<'_> {
        WordFrequency {
            word: &self.word,
            frequency_count: self.frequency_count,
        }
    }
}

/// Read-only `(word, frequency_count)` pair handed out by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordFrequency<'a> {
    pub word: &'a str,
    pub frequency_count: u64,
}

impl<'a> WordFrequency<'a> {
    pub fn new(word: &'a str, frequency_count: u64) -> Self {
        Self {
            word,
            frequency_count,
        }
    }
}

impl From<WordFrequency<'_>> for (String, u64) {
    fn from(view: WordFrequency<'_>) -> Self {
        (view.word.to_string(), view.frequency_count)
    }
}
