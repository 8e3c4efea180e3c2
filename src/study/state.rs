//! Per-session bookkeeping: current word, reveal flag and the seen/unseen
//! partition of word indices.

use std::collections::BTreeSet;

/// Mutable state for one study session.
///
/// `seen` and `unseen` always partition `0..total`. The unseen pool is a
/// plain index array so a random pick is a single slice index, and removal
/// is a swap-remove tracked through `slots`.
#[derive(Debug, Clone)]
pub struct SessionState {
  current: usize,
  revealed: bool,
  seen: BTreeSet<usize>,
  unseen: Vec<usize>,
  /// Position of each word index inside `unseen`, `None` once seen
  slots: Vec<Option<usize>>,
}

impl SessionState {
  /// Fresh state over `total` words: nothing seen, pointing at index 0.
  pub fn new(total: usize) -> Self {
    Self {
      current: 0,
      revealed: false,
      seen: BTreeSet::new(),
      unseen: (0..total).collect(),
      slots: (0..total).map(Some).collect(),
    }
  }

  pub fn current(&self) -> usize {
    self.current
  }

  pub fn is_revealed(&self) -> bool {
    self.revealed
  }

  pub fn total(&self) -> usize {
    self.slots.len()
  }

  pub fn seen(&self) -> &BTreeSet<usize> {
    &self.seen
  }

  /// Indices not yet revealed, in no particular order
  pub fn unseen(&self) -> &[usize] {
    &self.unseen
  }

  pub fn seen_count(&self) -> usize {
    self.seen.len()
  }

  pub fn is_seen(&self, index: usize) -> bool {
    self.seen.contains(&index)
  }

  /// Point at a new word; the new word starts hidden.
  pub fn advance_to(&mut self, index: usize) {
    debug_assert!(index < self.total(), "index {} outside 0..{}", index, self.total());
    self.current = index;
    self.revealed = false;
  }

  /// Show the current word and move it from unseen to seen. Idempotent.
  pub fn mark_revealed(&mut self) {
    self.revealed = true;

    let Some(pos) = self.slots.get_mut(self.current).and_then(Option::take) else {
      return;
    };
    self.unseen.swap_remove(pos);
    if let Some(&moved) = self.unseen.get(pos) {
      self.slots[moved] = Some(pos);
    }
    self.seen.insert(self.current);
  }

  /// Hide the current word. Seen-tracking is append-only and unaffected.
  pub fn clear_revealed(&mut self) {
    self.revealed = false;
  }
}
