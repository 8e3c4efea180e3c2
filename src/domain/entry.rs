use serde::{Deserialize, Serialize};

/// One flashcard: a word with its definition and an optional usage example.
///
/// Entries are identified by their position in the loaded word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
  pub word: String,
  pub definition: String,
  #[serde(default)]
  pub example: Option<String>,
}

impl Entry {
  pub fn new(word: impl Into<String>, definition: impl Into<String>, example: Option<String>) -> Self {
    Self {
      word: word.into(),
      definition: definition.into(),
      example,
    }
  }

  /// True when both required fields carry text
  pub fn is_complete(&self) -> bool {
    !self.word.is_empty() && !self.definition.is_empty()
  }
}
