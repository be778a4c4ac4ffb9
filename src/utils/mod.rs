//! Utility functions used across the application.
//!
//! - [`normalizer`] - Token case folding and punctuation stripping

pub mod normalizer;
