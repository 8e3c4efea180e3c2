//! Session controller: the only thing that mutates a `SessionState`.
//!
//! The web layer calls one action per request and then reads a `CardView`
//! snapshot to render. Nothing here returns an error to the caller: running
//! out of words is reported as `NextOutcome::Exhausted` and surfaces as a
//! notice in the view.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::content::WordStore;
use crate::domain::Entry;
use crate::error::ExhaustedError;

use super::progress::Progress;
use super::selection::SelectionPolicy;
use super::state::SessionState;

/// Notice shown once every word has been seen under `WithoutReplacement`
pub const EXHAUSTED_NOTICE: &str = "All words seen. Reset to continue.";

/// Where a session sits in the study cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
  Hidden,
  Revealed,
  Exhausted,
}

/// Result of asking for another word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
  /// Moved to the word at this index
  Advanced(usize),
  /// No unseen words remain; nothing changed
  Exhausted,
}

/// One user action against a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
  Reveal,
  Hide,
  Toggle,
  Next,
  Reset,
}

/// Everything the rendering layer needs to draw one card.
///
/// Definition and example are only filled in while the card is revealed.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
  pub index: usize,
  pub word: String,
  pub definition: Option<String>,
  pub example: Option<String>,
  pub revealed: bool,
  pub phase: Phase,
  pub progress: Progress,
  pub notice: Option<String>,
}

pub struct SessionController {
  words: Arc<WordStore>,
  policy: SelectionPolicy,
  state: SessionState,
  exhausted: bool,
  rng: StdRng,
}

impl SessionController {
  /// Start a session with an OS-seeded random source.
  pub fn new(words: Arc<WordStore>, policy: SelectionPolicy) -> Self {
    Self::with_rng(words, policy, StdRng::from_os_rng())
  }

  /// Start a session with a caller-supplied random source.
  pub fn with_rng(words: Arc<WordStore>, policy: SelectionPolicy, rng: StdRng) -> Self {
    let state = SessionState::new(words.size());
    let mut controller = Self {
      words,
      policy,
      state,
      exhausted: false,
      rng,
    };
    controller.pick_initial();
    controller
  }

  fn pick_initial(&mut self) {
    // A fresh pool over a non-empty list always yields a pick
    let index = self
      .policy
      .pick(&self.words, &self.state, &mut self.rng)
      .unwrap_or(0);
    self.state.advance_to(index);
    tracing::debug!("Session starts at word {} ({})", index, self.policy);
  }

  pub fn state(&self) -> &SessionState {
    &self.state
  }

  /// Current entry and whether it is revealed. No side effects.
  pub fn current(&self) -> (&Entry, bool) {
    let entry = match self.words.get(self.state.current()) {
      Ok(entry) => entry,
      Err(e) => {
        tracing::error!("Session points outside the word list: {}", e);
        self.words.first()
      }
    };
    (entry, self.state.is_revealed())
  }

  /// Show the definition and count the word as seen. Idempotent.
  pub fn reveal(&mut self) {
    if self.state.is_revealed() {
      return;
    }
    self.state.mark_revealed();
    tracing::debug!(
      "Revealed word {} ({} of {} seen)",
      self.state.current(),
      self.state.seen_count(),
      self.words.size()
    );
  }

  /// Hide the definition again. The word stays counted as seen.
  pub fn hide(&mut self) {
    self.state.clear_revealed();
  }

  /// Reveal when hidden, hide when revealed.
  pub fn toggle(&mut self) {
    if self.state.is_revealed() {
      self.hide();
    } else {
      self.reveal();
    }
  }

  /// Move to another word chosen by the selection policy.
  pub fn next(&mut self) -> NextOutcome {
    match self.policy.pick(&self.words, &self.state, &mut self.rng) {
      Ok(index) => {
        self.state.advance_to(index);
        tracing::debug!("Advanced to word {}", index);
        NextOutcome::Advanced(index)
      }
      Err(ExhaustedError) => {
        if !self.exhausted {
          tracing::info!("All {} words seen; waiting for reset", self.words.size());
        }
        self.exhausted = true;
        NextOutcome::Exhausted
      }
    }
  }

  /// Forget all progress and start over on a freshly picked word.
  pub fn reset(&mut self) {
    self.state = SessionState::new(self.words.size());
    self.exhausted = false;
    self.pick_initial();
  }

  pub fn progress(&self) -> Progress {
    Progress::new(self.words.size(), self.state.seen_count())
  }

  pub fn phase(&self) -> Phase {
    if self.exhausted {
      Phase::Exhausted
    } else if self.state.is_revealed() {
      Phase::Revealed
    } else {
      Phase::Hidden
    }
  }

  /// Apply one user action. Returns the outcome for `Action::Next`.
  pub fn apply(&mut self, action: Action) -> Option<NextOutcome> {
    match action {
      Action::Reveal => self.reveal(),
      Action::Hide => self.hide(),
      Action::Toggle => self.toggle(),
      Action::Next => return Some(self.next()),
      Action::Reset => self.reset(),
    }
    None
  }

  /// Snapshot for rendering.
  pub fn view(&self) -> CardView {
    let (entry, revealed) = self.current();
    let phase = self.phase();
    CardView {
      index: self.state.current(),
      word: entry.word.clone(),
      definition: revealed.then(|| entry.definition.clone()),
      example: if revealed { entry.example.clone() } else { None },
      revealed,
      phase,
      progress: self.progress(),
      notice: (phase == Phase::Exhausted).then(|| EXHAUSTED_NOTICE.to_string()),
    }
  }
}
