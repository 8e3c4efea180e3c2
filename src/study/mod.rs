//! Flashcard study sessions: selection policy, per-session state and the
//! controller the web layer drives.

pub mod controller;
pub mod progress;
pub mod selection;
pub mod state;

pub use controller::{Action, CardView, NextOutcome, Phase, SessionController, EXHAUSTED_NOTICE};
pub use progress::Progress;
pub use selection::SelectionPolicy;
pub use state::SessionState;
