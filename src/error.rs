//! Error taxonomy for loading word lists and driving study sessions.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the word list at startup. Fatal: the server must not start.
#[derive(Debug, Error)]
pub enum DataLoadError {
  #[error("word list not found: {}", .0.display())]
  NotFound(PathBuf),

  #[error("failed to read {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed CSV in {source_name}: {source}")]
  Csv {
    source_name: String,
    #[source]
    source: csv::Error,
  },

  #[error("{source_name} is missing required column `{column}`")]
  MissingColumn {
    source_name: String,
    column: &'static str,
  },

  #[error("{0} contains no usable words")]
  Empty(String),
}

impl DataLoadError {
  /// Returns a user-facing error message without exposing filesystem paths.
  pub fn user_message(&self) -> &'static str {
    match self {
      DataLoadError::NotFound(_) => "Word list not found",
      DataLoadError::Io { .. } => "Failed to read word list",
      DataLoadError::Csv { .. } => "Failed to parse word list",
      DataLoadError::MissingColumn { .. } => "Word list is missing a required column",
      DataLoadError::Empty(_) => "Word list is empty",
    }
  }
}

/// A dataset index outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for a word list of {len} entries")]
pub struct IndexError {
  pub index: usize,
  pub len: usize,
}

/// Every word has been seen since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("all words seen; reset to continue")]
pub struct ExhaustedError;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
  /// Log the error at warn level and return the default
  fn log_warn_default(self, context: &str) -> T
  where
    T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for Result<T, E> {
  fn log_warn_default(self, context: &str) -> T
  where
    T: Default,
  {
    match self {
      Ok(v) => v,
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        T::default()
      }
    }
  }
}
