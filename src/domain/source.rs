//! Trait for the producer of normalized words.

use crate::error::AppError;

/// A lazy, finite, non-restartable sequence of normalized words.
///
/// Words are already case-folded with punctuation stripped (apostrophes
/// kept). A word may still be empty if its token held only punctuation.
///
/// # Implementations
///
/// - [`crate::infrastructure::tokenizer::TextTokenizer`] - Whitespace tokenizer over any `BufRead`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait WordSource {
    /// Returns the next word, or `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the underlying reader fails.
    fn next_word(&mut self) -> Result<Option<String>, AppError>;
}
