pub mod api;
pub mod study;
pub mod templates;

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::SESSION_COOKIE_NAME;
use crate::session::{generate_session_id, is_valid_session_id};
use crate::state::AppState;

pub use api::{api_action, api_card};
pub use study::{hide, next, reset, reveal, study_page, toggle};

/// Resolve the caller's session ID, minting one if the cookie is missing or
/// malformed. The returned jar always carries a refreshed session cookie.
pub(crate) fn session_cookie(jar: CookieJar, state: &AppState) -> (CookieJar, String) {
  let session_id = jar
    .get(SESSION_COOKIE_NAME)
    .map(|c| c.value().to_string())
    .filter(|id| is_valid_session_id(id))
    .unwrap_or_else(generate_session_id);

  let cookie = Cookie::build((SESSION_COOKIE_NAME, session_id.clone()))
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .max_age(time::Duration::hours(state.sessions.expiry_hours()))
    .build();

  (jar.add(cookie), session_id)
}

pub(crate) fn is_htmx_request(headers: &HeaderMap) -> bool {
  headers.get("HX-Request").is_some()
}
