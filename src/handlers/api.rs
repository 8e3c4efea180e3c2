//! JSON view of the same session, for scripted clients.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;
use crate::study::Action;

use super::session_cookie;

/// GET /api/card
pub async fn api_card(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  let (jar, session_id) = session_cookie(jar, &state);
  let view = state.sessions.with_session(&session_id, |c| c.view());
  (jar, Json(view))
}

/// POST /api/action/{action}
pub async fn api_action(
  State(state): State<AppState>,
  jar: CookieJar,
  Path(action): Path<Action>,
) -> impl IntoResponse {
  let (jar, session_id) = session_cookie(jar, &state);
  let view = state.sessions.with_session(&session_id, |c| {
    c.apply(action);
    c.view()
  });
  (jar, Json(view))
}
