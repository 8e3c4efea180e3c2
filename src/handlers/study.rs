//! Study page and the button actions behind it.
//!
//! Every action is one controller call followed by one `CardView` snapshot.
//! Requests carrying `HX-Request` get the re-rendered card fragment; plain
//! form posts are redirected back to the page.

use askama::Template;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::error::LogOnError;
use crate::state::AppState;
use crate::study::{Action, NextOutcome};

use super::templates::{CardTemplate, StudyTemplate};
use super::{is_htmx_request, session_cookie};

/// GET / - study page for the caller's session
pub async fn study_page(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  let (jar, session_id) = session_cookie(jar, &state);
  let view = state.sessions.with_session(&session_id, |c| c.view());

  let template = StudyTemplate {
    title: &state.title,
    view,
  };
  (jar, Html(template.render().log_warn_default("Failed to render study page")))
}

fn perform(state: &AppState, jar: CookieJar, headers: &HeaderMap, action: Action) -> Response {
  let (jar, session_id) = session_cookie(jar, state);

  let view = state.sessions.with_session(&session_id, |c| {
    if let Some(NextOutcome::Exhausted) = c.apply(action) {
      tracing::debug!("Session {} asked for next word after exhaustion", session_id);
    }
    c.view()
  });

  if is_htmx_request(headers) {
    let template = CardTemplate { view };
    (jar, Html(template.render().log_warn_default("Failed to render card"))).into_response()
  } else {
    (jar, Redirect::to("/")).into_response()
  }
}

/// POST /reveal
pub async fn reveal(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
  perform(&state, jar, &headers, Action::Reveal)
}

/// POST /hide
pub async fn hide(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
  perform(&state, jar, &headers, Action::Hide)
}

/// POST /toggle - the "See what this means" button
pub async fn toggle(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
  perform(&state, jar, &headers, Action::Toggle)
}

/// POST /next
pub async fn next(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
  perform(&state, jar, &headers, Action::Next)
}

/// POST /reset
pub async fn reset(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
  perform(&state, jar, &headers, Action::Reset)
}
