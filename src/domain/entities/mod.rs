//! Core domain entities of the word registry.
//!
//! - [`Entry`] - An owned (word, frequency) record held by the registry
//! - [`WordFrequency`] - A borrowed view of an entry returned by traversal

pub mod entry;

pub use entry::{Entry, WordFrequency};
