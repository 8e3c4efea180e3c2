use serde::Serialize;

/// How far through the word list a session has got.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
  pub total_words: usize,
  pub seen_count: usize,
  pub percent: f64,
}

impl Progress {
  pub fn new(total_words: usize, seen_count: usize) -> Self {
    let percent = if total_words == 0 {
      0.0
    } else {
      seen_count as f64 / total_words as f64 * 100.0
    };
    Self {
      total_words,
      seen_count,
      percent,
    }
  }

  /// Percentage with one decimal place, e.g. "25.0"
  pub fn percent_label(&self) -> String {
    format!("{:.1}", self.percent)
  }
}
