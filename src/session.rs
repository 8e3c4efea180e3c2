//! In-memory session storage for study sessions.
//!
//! Each browser gets its own `SessionController`, keyed by the session ID in
//! its cookie. Sessions auto-expire after a configurable duration of
//! inactivity. The store is owned by `AppState`; there is no global.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config;
use crate::content::WordStore;
use crate::study::{SelectionPolicy, SessionController};

/// Session entry with last access time for expiration
struct SessionEntry {
  controller: SessionController,
  last_access: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionStore {
  words: Arc<WordStore>,
  policy: SelectionPolicy,
  expiry: Duration,
  sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
}

impl SessionStore {
  /// `expiry_hours` outside `0..=MAX_SESSION_EXPIRY_HOURS` falls back to the default.
  pub fn new(words: Arc<WordStore>, policy: SelectionPolicy, expiry_hours: i64) -> Self {
    let hours = if (0..=config::MAX_SESSION_EXPIRY_HOURS).contains(&expiry_hours) {
      expiry_hours
    } else {
      tracing::warn!("Session expiry of {}h out of range, using default", expiry_hours);
      config::DEFAULT_SESSION_EXPIRY_HOURS
    };
    Self {
      words,
      policy,
      expiry: Duration::hours(hours),
      sessions: Arc::new(Mutex::new(HashMap::new())),
    }
  }

  pub fn expiry_hours(&self) -> i64 {
    self.expiry.num_hours()
  }

  fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
    // A panic mid-action leaves at worst one session half-updated; keep serving
    self.sessions.lock().unwrap_or_else(|poisoned| {
      tracing::warn!("Session store lock poisoned, recovering");
      poisoned.into_inner()
    })
  }

  /// Run `f` against the session for `session_id`, creating it if needed.
  ///
  /// The store stays locked for the duration of `f`, so actions on a session
  /// are applied one at a time.
  pub fn with_session<T>(&self, session_id: &str, f: impl FnOnce(&mut SessionController) -> T) -> T {
    let mut sessions = self.lock();

    // Clean up expired sessions occasionally (~10% chance)
    if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
      self.cleanup_expired(&mut sessions);
    }

    let entry = sessions.entry(session_id.to_string()).or_insert_with(|| {
      tracing::debug!("Starting session {}", session_id);
      SessionEntry {
        controller: SessionController::new(Arc::clone(&self.words), self.policy),
        last_access: Utc::now(),
      }
    });
    entry.last_access = Utc::now();
    f(&mut entry.controller)
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Evict every session idle for longer than the expiry window
  pub fn purge_expired(&self) -> usize {
    let mut sessions = self.lock();
    self.cleanup_expired(&mut sessions)
  }

  fn cleanup_expired(&self, sessions: &mut HashMap<String, SessionEntry>) -> usize {
    let Some(cutoff) = Utc::now().checked_sub_signed(self.expiry) else {
      return 0;
    };
    let before = sessions.len();
    sessions.retain(|_, entry| entry.last_access > cutoff);
    let removed = before - sessions.len();
    if removed > 0 {
      tracing::debug!("Expired {} idle sessions", removed);
    }
    removed
  }
}

/// Generate a new session ID
pub fn generate_session_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..32)
    .map(|_| {
      let idx = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}

/// True if `id` looks like something `generate_session_id` produced
pub fn is_valid_session_id(id: &str) -> bool {
  id.len() == 32 && id.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}
