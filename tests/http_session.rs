//! HTTP-level tests driving the study page through the real router.

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::Value;

use word_flashcards::config::{Config, SESSION_COOKIE_NAME};
use word_flashcards::content::{LoadPolicy, WordStore};
use word_flashcards::routes::build_router;
use word_flashcards::state::AppState;
use word_flashcards::study::{SelectionPolicy, EXHAUSTED_NOTICE};

const TWO_WORDS: &str = "word,definition,example\nabate,to lessen,The storm abated.\nzenith,peak,\n";

fn app_state(selection: SelectionPolicy) -> AppState {
  let words = WordStore::from_reader(TWO_WORDS.as_bytes(), LoadPolicy::Strict).unwrap();
  let config = Config {
    selection,
    title: "GRE wordlist prep".to_string(),
    ..Config::default()
  };
  AppState::new(Arc::new(words), &config)
}

fn server(state: AppState) -> TestServer {
  TestServer::builder()
    .save_cookies()
    .build(build_router(state))
    .unwrap()
}

fn hx() -> (HeaderName, HeaderValue) {
  (HeaderName::from_static("hx-request"), HeaderValue::from_static("true"))
}

#[tokio::test]
async fn test_study_page_sets_session_cookie() {
  let server = server(app_state(SelectionPolicy::WithoutReplacement));

  let response = server.get("/").await;
  response.assert_status_ok();

  let cookie = response.cookie(SESSION_COOKIE_NAME);
  assert_eq!(cookie.value().len(), 32);

  let body = response.text();
  assert!(body.contains("GRE wordlist prep"));
  assert!(body.contains("See what this means"));
  assert!(body.contains("Seen 0 of 2 words (0.0%)"));
}

#[tokio::test]
async fn test_htmx_reveal_returns_card_fragment() {
  let server = server(app_state(SelectionPolicy::WithoutReplacement));
  server.get("/").await;

  let (name, value) = hx();
  let response = server.post("/reveal").add_header(name, value).await;
  response.assert_status_ok();

  let body = response.text();
  assert!(!body.contains("<html"));
  assert!(body.contains("Hide meaning"));
  assert!(body.contains("Seen 1 of 2 words (50.0%)"));
}

#[tokio::test]
async fn test_plain_post_redirects_to_page() {
  let server = server(app_state(SelectionPolicy::WithoutReplacement));

  let response = server.post("/toggle").await;
  response.assert_status(StatusCode::SEE_OTHER);
  assert_eq!(response.header("location"), "/");

  let card: Value = server.get("/api/card").await.json();
  assert_eq!(card["revealed"], true);
}

#[tokio::test]
async fn test_json_session_runs_to_exhaustion() {
  let server = server(app_state(SelectionPolicy::WithoutReplacement));

  let card: Value = server.get("/api/card").await.json();
  assert_eq!(card["phase"], "hidden");
  assert!(card["definition"].is_null());

  let card: Value = server.post("/api/action/reveal").await.json();
  assert_eq!(card["phase"], "revealed");
  assert_eq!(card["progress"]["seen_count"], 1);

  let card: Value = server.post("/api/action/next").await.json();
  assert_eq!(card["phase"], "hidden");
  let second_index = card["index"].clone();

  server.post("/api/action/reveal").await;
  let card: Value = server.post("/api/action/next").await.json();
  assert_eq!(card["phase"], "exhausted");
  assert_eq!(card["notice"], EXHAUSTED_NOTICE);
  assert_eq!(card["index"], second_index);
  assert_eq!(card["progress"]["percent"], 100.0);

  let card: Value = server.post("/api/action/reset").await.json();
  assert_eq!(card["phase"], "hidden");
  assert_eq!(card["progress"]["seen_count"], 0);
  assert!(card["notice"].is_null());
}

#[tokio::test]
async fn test_hide_keeps_progress() {
  let server = server(app_state(SelectionPolicy::WithReplacement));

  server.post("/api/action/reveal").await;
  let card: Value = server.post("/api/action/hide").await.json();
  assert_eq!(card["revealed"], false);
  assert_eq!(card["progress"]["seen_count"], 1);
}

#[tokio::test]
async fn test_sessions_isolated_by_cookie() {
  let state = app_state(SelectionPolicy::WithoutReplacement);
  let alice = server(state.clone());
  let bob = server(state.clone());

  alice.post("/api/action/reveal").await;
  let bob_card: Value = bob.get("/api/card").await.json();
  let alice_card: Value = alice.get("/api/card").await.json();

  assert_eq!(alice_card["progress"]["seen_count"], 1);
  assert_eq!(bob_card["progress"]["seen_count"], 0);
  assert_eq!(state.sessions.len(), 2);
}

#[tokio::test]
async fn test_unknown_action_rejected() {
  let server = server(app_state(SelectionPolicy::WithoutReplacement));
  let response = server.post("/api/action/score").await;
  response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_card_script_served_locally() {
  let server = server(app_state(SelectionPolicy::WithoutReplacement));

  let page = server.get("/").await.text();
  assert!(page.contains(r#"src="/static/js/card-actions.js""#));
  assert!(!page.contains("unpkg"));
  assert!(!page.contains("https://"));

  let script = server.get("/static/js/card-actions.js").await;
  script.assert_status_ok();
  assert!(script.text().contains("HX-Request"));
}
