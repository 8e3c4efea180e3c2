//! Immutable word store backed by a CSV word list.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::domain::Entry;
use crate::error::{DataLoadError, IndexError};

const WORD_COLUMN: &str = "word";
const DEFINITION_COLUMN: &str = "definition";
const EXAMPLE_COLUMN: &str = "example";

/// How rows with a missing word or definition are treated at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
  /// Drop rows with a missing word or definition
  #[default]
  Strict,
  /// Keep every row; missing text is rendered empty
  Lenient,
}

impl LoadPolicy {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Strict => "strict",
      Self::Lenient => "lenient",
    }
  }
}

impl FromStr for LoadPolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "strict" => Ok(Self::Strict),
      "lenient" => Ok(Self::Lenient),
      other => Err(format!("unknown load policy `{}`", other)),
    }
  }
}

impl fmt::Display for LoadPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The loaded word list. Never empty; no mutation API.
#[derive(Debug, Clone)]
pub struct WordStore {
  entries: Vec<Entry>,
}

/// Column positions resolved from the header row
struct Columns {
  word: usize,
  definition: usize,
  example: Option<usize>,
}

impl WordStore {
  /// Load the word list from a CSV file.
  pub fn load(path: &Path, policy: LoadPolicy) -> Result<Self, DataLoadError> {
    if !path.exists() {
      return Err(DataLoadError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| DataLoadError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    let store = Self::read_csv(file, &path.display().to_string(), policy)?;
    tracing::info!(
      "Loaded {} words from {} ({} policy)",
      store.size(),
      path.display(),
      policy
    );
    Ok(store)
  }

  /// Load the word list from any CSV reader.
  pub fn from_reader<R: Read>(reader: R, policy: LoadPolicy) -> Result<Self, DataLoadError> {
    Self::read_csv(reader, "<reader>", policy)
  }

  /// Build a store from entries already in memory.
  pub fn from_entries(entries: Vec<Entry>) -> Result<Self, DataLoadError> {
    if entries.is_empty() {
      return Err(DataLoadError::Empty("<entries>".to_string()));
    }
    Ok(Self { entries })
  }

  fn read_csv<R: Read>(
    reader: R,
    source_name: &str,
    policy: LoadPolicy,
  ) -> Result<Self, DataLoadError> {
    let csv_error = |source| DataLoadError::Csv {
      source_name: source_name.to_string(),
      source,
    };

    let mut reader = csv::ReaderBuilder::new()
      .has_headers(true)
      .flexible(true)
      .trim(csv::Trim::All)
      .from_reader(reader);

    let columns = Self::resolve_columns(reader.headers().map_err(csv_error)?, source_name)?;

    let mut entries = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
      let record = result.map_err(csv_error)?;
      let cell = |idx: usize| record.get(idx).filter(|s| !s.is_empty()).map(str::to_string);

      let entry = Entry::new(
        cell(columns.word).unwrap_or_default(),
        cell(columns.definition).unwrap_or_default(),
        columns.example.and_then(cell),
      );

      if policy == LoadPolicy::Strict && !entry.is_complete() {
        dropped += 1;
        continue;
      }
      entries.push(entry);
    }

    if dropped > 0 {
      tracing::info!("Dropped {} incomplete rows from {}", dropped, source_name);
    }

    if entries.is_empty() {
      return Err(DataLoadError::Empty(source_name.to_string()));
    }

    Ok(Self { entries })
  }

  fn resolve_columns(
    headers: &csv::StringRecord,
    source_name: &str,
  ) -> Result<Columns, DataLoadError> {
    let find = |name: &str| {
      headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let missing = |column| DataLoadError::MissingColumn {
      source_name: source_name.to_string(),
      column,
    };

    Ok(Columns {
      word: find(WORD_COLUMN).ok_or_else(|| missing(WORD_COLUMN))?,
      definition: find(DEFINITION_COLUMN).ok_or_else(|| missing(DEFINITION_COLUMN))?,
      example: find(EXAMPLE_COLUMN),
    })
  }

  /// Number of entries
  pub fn size(&self) -> usize {
    self.entries.len()
  }

  /// Entry at `index`, or `IndexError` outside `[0, size)`.
  pub fn get(&self, index: usize) -> Result<&Entry, IndexError> {
    self.entries.get(index).ok_or(IndexError {
      index,
      len: self.entries.len(),
    })
  }

  /// First entry. The store is never empty.
  pub fn first(&self) -> &Entry {
    &self.entries[0]
  }
}
