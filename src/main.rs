use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_flashcards::config::Config;
use word_flashcards::content::WordStore;
use word_flashcards::routes;
use word_flashcards::state::AppState;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "word_flashcards=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::load();

  // The word list is required; refuse to serve without it
  let words = match WordStore::load(&config.words_path, config.load_policy) {
    Ok(words) => Arc::new(words),
    Err(e) => {
      tracing::error!("{}: {}", e.user_message(), e);
      return ExitCode::FAILURE;
    }
  };

  tracing::info!(
    "Serving {} words, {} selection, sessions expire after {}h",
    words.size(),
    config.selection,
    config.session_expiry_hours
  );

  let state = AppState::new(words, &config);

  // Sweep idle sessions even when no requests arrive to trigger cleanup
  let sessions = state.sessions.clone();
  tokio::spawn(async move {
    let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
    loop {
      interval.tick().await;
      let removed = sessions.purge_expired();
      if removed > 0 {
        tracing::info!("Swept {} idle sessions, {} active", removed, sessions.len());
      }
    }
  });

  let app = routes::build_router(state);

  let bind_addr = config.bind_addr();
  let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
    Ok(listener) => listener,
    Err(e) => {
      tracing::error!("Failed to bind to {}: {}", bind_addr, e);
      return ExitCode::FAILURE;
    }
  };

  tracing::info!("Server running on http://localhost:{}", config.server_port);

  if let Err(e) = axum::serve(listener, app).await {
    tracing::error!("Server error: {}", e);
    return ExitCode::FAILURE;
  }
  ExitCode::SUCCESS
}
