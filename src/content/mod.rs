//! Word list loading.
//!
//! The word list is a CSV file with `word`, `definition` and optional
//! `example` columns. It is read once at startup and shared read-only by
//! every study session.

pub mod words;

pub use words::{LoadPolicy, WordStore};
