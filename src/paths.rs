//! Project path functions - single source of truth for default file paths.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//!
//! This allows running several word lists side by side:
//! ```bash
//! DATA_DIR=data/gre PORT=3001 cargo run
//! DATA_DIR=data/toefl PORT=3002 cargo run
//! ```

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Directory served under `/static`
pub const STATIC_DIR: &str = "static";

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
  DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// Default word list location when none is configured
pub fn default_words_path() -> PathBuf {
  PathBuf::from(data_dir()).join("wordlist.csv")
}
