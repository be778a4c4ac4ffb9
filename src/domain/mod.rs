//! Domain layer: the word registry and the contracts around it.
//!
//! - [`entities`] - Entry data model
//! - [`registry`] - Sorted doubly-linked [`registry::WordRegistry`] with its
//!   frequency quicksort and alphabetical mergesort
//! - [`source`] - [`source::WordSource`] trait for the tokenizer collaborator
//!
//! The domain layer has no dependency on I/O. Readers and renderers live in
//! [`crate::infrastructure`].

pub mod entities;
pub mod registry;
pub mod source;
