//! Application state shared by all handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::content::WordStore;
use crate::session::SessionStore;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
  /// Per-browser study sessions
  pub sessions: SessionStore,

  /// Heading rendered above the card
  pub title: Arc<str>,
}

impl AppState {
  pub fn new(words: Arc<WordStore>, config: &Config) -> Self {
    Self {
      sessions: SessionStore::new(words, config.selection, config.session_expiry_hours),
      title: Arc::from(config.title.as_str()),
    }
  }
}
