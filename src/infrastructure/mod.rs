//! Infrastructure layer: concrete input and output adapters.
//!
//! - [`tokenizer`] - [`tokenizer::TextTokenizer`], the file/stream backed
//!   [`crate::domain::source::WordSource`]
//! - [`render`] - Report renderers writing to any `io::Write`

pub mod render;
pub mod tokenizer;
