//! Frequency-grouped report aggregation.

use crate::domain::registry::WordRegistry;
use serde::Serialize;

/// All words sharing one frequency, in chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyGroup {
    pub frequency: u64,
    pub words: Vec<String>,
}

/// Aggregated view of a registry, highest frequency first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyReport {
    pub total_words: u64,
    pub distinct_words: usize,
    pub max_frequency: u64,
    pub groups: Vec<FrequencyGroup>,
}

/// Groups registry entries by frequency.
///
/// Thresholds run from [`WordRegistry::max_frequency`] down to
/// `min_frequency`; for each one the whole chain is scanned once and the
/// matching words collected. Thresholds with no words produce no group.
#[derive(Debug, Clone, Copy)]
pub struct ReportService {
    min_frequency: u64,
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ReportService {
    /// Creates a service that omits groups below `min_frequency`.
    pub fn new(min_frequency: u64) -> Self {
        Self {
            min_frequency: min_frequency.max(1),
        }
    }

    pub fn min_frequency(&self) -> u64 {
        self.min_frequency
    }

    /// Collects the frequency groups, highest frequency first.
    pub fn groups(&self, registry: &WordRegistry) -> Vec<FrequencyGroup> {
        let max = registry.max_frequency();

        (self.min_frequency..=max)
            .rev()
            .filter_map(|frequency| {
                let words: Vec<String> = registry
                    .iter()
                    .filter(|entry| entry.frequency_count == frequency)
                    .map(|entry| entry.word.to_string())
                    .collect();
                (!words.is_empty()).then_some(FrequencyGroup { frequency, words })
            })
            .collect()
    }

    /// Builds the full report for `registry`.
    pub fn build(&self, registry: &WordRegistry) -> FrequencyReport {
        FrequencyReport {
            total_words: registry.iter().map(|e| e.frequency_count).sum(),
            distinct_words: registry.size(),
            max_frequency: registry.max_frequency(),
            groups: self.groups(registry),
        }
    }
}
