//! Word selection policies.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::content::WordStore;
use crate::error::ExhaustedError;

use super::state::SessionState;

/// Decides which word becomes current on init, next and reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
  /// Uniform over the whole list, independent of history. May repeat the
  /// current word.
  WithReplacement,
  /// Uniform over words not yet revealed since the last reset.
  #[default]
  WithoutReplacement,
}

impl SelectionPolicy {
  /// Pick the next word index.
  ///
  /// `WithoutReplacement` fails with `ExhaustedError` once every word has
  /// been revealed. `WithReplacement` only fails on an empty list.
  pub fn pick<R: Rng>(
    &self,
    words: &WordStore,
    state: &SessionState,
    rng: &mut R,
  ) -> Result<usize, ExhaustedError> {
    match self {
      Self::WithReplacement => {
        let size = words.size();
        if size == 0 {
          return Err(ExhaustedError);
        }
        Ok(rng.random_range(0..size))
      }
      Self::WithoutReplacement => state.unseen().choose(rng).copied().ok_or(ExhaustedError),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::WithReplacement => "with_replacement",
      Self::WithoutReplacement => "without_replacement",
    }
  }
}

impl FromStr for SelectionPolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
      "with_replacement" | "random" => Ok(Self::WithReplacement),
      "without_replacement" | "unseen" => Ok(Self::WithoutReplacement),
      other => Err(format!("unknown selection policy `{}`", other)),
    }
  }
}

impl fmt::Display for SelectionPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
