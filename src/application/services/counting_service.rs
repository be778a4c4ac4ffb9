//! Word counting driver.

use crate::domain::registry::{Upsert, WordRegistry};
use crate::domain::source::WordSource;
use crate::error::{AppError, RegistryError};
use tracing::{debug, warn};

/// Counters collected while consuming a [`WordSource`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    /// Tokens produced by the source, including empty ones.
    pub tokens_read: u64,
    /// Tokens that were registered (new or incremented).
    pub words_counted: u64,
    /// Entries created during this ingest.
    pub distinct_added: u64,
    /// Tokens that normalized to the empty string.
    pub skipped: u64,
    /// Tokens dropped because the registry could not store them.
    pub dropped: u64,
}

/// Feeds words into a [`WordRegistry`].
///
/// Each word is first offered to
/// [`WordRegistry::increment_frequency`]; only when it is absent is it
/// inserted. A word that cannot be inserted is dropped and counted, and
/// processing moves on to the next token.
#[derive(Debug, Default)]
pub struct WordCountService {
    registry: WordRegistry,
}

impl WordCountService {
    /// Creates a service over an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service that keeps counting into an existing registry.
    pub fn with_registry(registry: WordRegistry) -> Self {
        Self { registry }
    }

    /// Registers one occurrence of `word`.
    ///
    /// # Errors
    ///
    /// Propagates [`RegistryError::AllocationFailure`] or
    /// [`RegistryError::InsertionPoint`] from the insert path.
    pub fn record(&mut self, word: &str) -> Result<Upsert, RegistryError> {
        match self.registry.increment_frequency(word) {
            Ok(count) => Ok(Upsert::Incremented(count)),
            Err(RegistryError::NotFound { .. }) => self.registry.insert(word),
            Err(e) => Err(e),
        }
    }

    /// Consumes `source` until it is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the source's error if reading fails. Words already counted
    /// stay in the registry.
    pub fn ingest<S: WordSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<IngestSummary, AppError> {
        let mut summary = IngestSummary::default();

        while let Some(word) = source.next_word()? {
            summary.tokens_read += 1;

            if word.is_empty() {
                summary.skipped += 1;
                continue;
            }

            match self.record(&word) {
                Ok(Upsert::Inserted) => {
                    summary.words_counted += 1;
                    summary.distinct_added += 1;
                }
                Ok(Upsert::Incremented(_)) => summary.words_counted += 1,
                Err(e) => {
                    warn!(word = %word, error = %e, "dropping word");
                    summary.dropped += 1;
                }
            }
        }

        debug!(
            tokens = summary.tokens_read,
            counted = summary.words_counted,
            skipped = summary.skipped,
            dropped = summary.dropped,
            "source exhausted"
        );
        Ok(summary)
    }

    pub fn registry(&self) -> &WordRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WordRegistry {
        &mut self.registry
    }

    pub fn into_registry(self) -> WordRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::source::MockWordSource;
    use std::collections::VecDeque;
    use std::io;

    fn source_of(words: &[&str]) -> MockWordSource {
        let mut queue: VecDeque<String> = words.iter().map(|w| w.to_string()).collect();
        let mut mock = MockWordSource::new();
        mock.expect_next_word()
            .times(words.len() + 1)
            .returning(move || Ok(queue.pop_front()));
        mock
    }

    #[test]
    fn test_record_inserts_then_increments() {
        let mut service = WordCountService::new();

        assert_eq!(service.record("fox").unwrap(), Upsert::Inserted);
        assert_eq!(service.record("fox").unwrap(), Upsert::Incremented(2));
        assert_eq!(service.registry().size(), 1);
    }

    #[test]
    fn test_ingest_counts_words() {
        let mut source = source_of(&["the", "fox", "the", "runs", "fox", "the"]);
        let mut service = WordCountService::new();

        let summary = service.ingest(&mut source).unwrap();

        assert_eq!(summary.tokens_read, 6);
        assert_eq!(summary.words_counted, 6);
        assert_eq!(summary.distinct_added, 3);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.dropped, 0);

        let pairs: Vec<_> = service
            .registry()
            .iter()
            .map(|e| (e.word, e.frequency_count))
            .collect();
        assert_eq!(pairs, [("fox", 2), ("runs", 1), ("the", 3)]);
    }

    #[test]
    fn test_ingest_skips_empty_words() {
        let mut source = source_of(&["wait", "", "what", ""]);
        let mut service = WordCountService::new();

        let summary = service.ingest(&mut source).unwrap();

        assert_eq!(summary.tokens_read, 4);
        assert_eq!(summary.skipped, 2);
        assert!(!service.registry().find(""));
        assert_eq!(service.registry().size(), 2);
    }

    #[test]
    fn test_ingest_propagates_source_errors() {
        let mut mock = MockWordSource::new();
        let mut calls = 0;
        mock.expect_next_word().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(Some("first".to_string()))
            } else {
                Err(AppError::io(
                    "Failed to read input",
                    io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"),
                ))
            }
        });
        let mut service = WordCountService::new();

        let result = service.ingest(&mut mock);

        assert!(matches!(result, Err(AppError::Io { .. })));
        assert!(service.registry().find("first"));
    }

    #[test]
    fn test_ingest_drops_words_that_cannot_be_stored() {
        let mut registry = WordRegistry::new();
        registry.insert("the").unwrap();
        registry.deny_allocations(true);
        let mut service = WordCountService::with_registry(registry);

        let summary = service
            .ingest(&mut source_of(&["the", "fox", "the", "end"]))
            .unwrap();

        assert_eq!(summary.tokens_read, 4);
        assert_eq!(summary.dropped, 2);
        assert_eq!(summary.words_counted, 2);
        assert_eq!(summary.distinct_added, 0);

        let registry = service.registry();
        assert!(!registry.find("fox"));
        assert!(!registry.find("end"));
        assert_eq!(registry.size(), 1);
        assert_eq!(registry.front().unwrap().frequency_count, 3);
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_ingest_resumes_counting_after_a_drop() {
        let mut service = WordCountService::new();
        service.registry_mut().deny_allocations(true);
        assert_eq!(
            service.record("fox"),
            Err(RegistryError::allocation_failure("fox"))
        );

        service.registry_mut().deny_allocations(false);
        let summary = service.ingest(&mut source_of(&["fox", "fox"])).unwrap();

        assert_eq!(summary.dropped, 0);
        assert_eq!(summary.distinct_added, 1);
        assert_eq!(service.registry().front().unwrap().frequency_count, 2);
    }

    #[test]
    fn test_ingest_continues_an_existing_registry() {
        let mut registry = WordRegistry::new();
        registry.insert("the").unwrap();
        let mut service = WordCountService::with_registry(registry);

        let summary = service.ingest(&mut source_of(&["the", "end"])).unwrap();

        assert_eq!(summary.distinct_added, 1);
        let registry = service.into_registry();
        assert_eq!(registry.back().unwrap().word, "the");
        assert_eq!(registry.back().unwrap().frequency_count, 2);
    }
}
