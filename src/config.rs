//! Application configuration.
//!
//! Values come from `config.toml` first, then environment variables (a `.env`
//! file is loaded if present), then built-in defaults. A value that fails to
//! parse is logged and the next source is tried.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::content::LoadPolicy;
use crate::paths;
use crate::study::SelectionPolicy;

// ==================== Defaults ====================

/// Server address to bind to
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Heading shown above the card
pub const DEFAULT_TITLE: &str = "Vocabulary Flashcards";

/// Session expiration time in hours
pub const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 1;

/// Longest accepted session expiry (one year)
pub const MAX_SESSION_EXPIRY_HOURS: i64 = 24 * 365;

/// Probability threshold for session cleanup (0-255, lower = less frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;

/// Name of the cookie carrying the session ID
pub const SESSION_COOKIE_NAME: &str = "wf_session";

/// Env var overriding the config file location
pub const CONFIG_PATH_ENV: &str = "WORDFLASH_CONFIG";

// ==================== File Structure ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
  dataset: Option<DatasetSection>,
  session: Option<SessionSection>,
  server: Option<ServerSection>,
}

#[derive(Debug, Default, Deserialize)]
struct DatasetSection {
  path: Option<String>,
  load_policy: Option<LoadPolicy>,
}

#[derive(Debug, Default, Deserialize)]
struct SessionSection {
  selection: Option<SelectionPolicy>,
  expiry_hours: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerSection {
  addr: Option<String>,
  port: Option<u16>,
  title: Option<String>,
}

// ==================== Resolved Config ====================

#[derive(Debug, Clone)]
pub struct Config {
  pub words_path: PathBuf,
  pub load_policy: LoadPolicy,
  pub selection: SelectionPolicy,
  pub session_expiry_hours: i64,
  pub server_addr: String,
  pub server_port: u16,
  pub title: String,
}

impl Config {
  /// Load configuration with priority: config.toml > env > default
  pub fn load() -> Self {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.toml".to_string());
    let file = read_file_config(Path::new(&path));
    Self::resolve(file, |key| std::env::var(key).ok())
  }

  /// Parse a config.toml body, falling back to defaults for anything absent.
  /// The environment is not consulted.
  pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
    let file = toml::from_str::<FileConfig>(contents)?;
    Ok(Self::resolve(file, |_| None))
  }

  fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
    let dataset = file.dataset.unwrap_or_default();
    let session = file.session.unwrap_or_default();
    let server = file.server.unwrap_or_default();

    let words_path = dataset
      .path
      .or_else(|| env("WORDS_PATH"))
      .map(PathBuf::from)
      .unwrap_or_else(paths::default_words_path);

    Self {
      words_path,
      load_policy: dataset
        .load_policy
        .or_else(|| parse_env(&env, "LOAD_POLICY"))
        .unwrap_or_default(),
      selection: session
        .selection
        .or_else(|| parse_env(&env, "SELECTION_POLICY"))
        .unwrap_or_default(),
      session_expiry_hours: session
        .expiry_hours
        .filter(|h| valid_expiry_hours("session.expiry_hours", *h))
        .or_else(|| {
          parse_env(&env, "SESSION_EXPIRY_HOURS")
            .filter(|h| valid_expiry_hours("SESSION_EXPIRY_HOURS", *h))
        })
        .unwrap_or(DEFAULT_SESSION_EXPIRY_HOURS),
      server_addr: server
        .addr
        .or_else(|| env("SERVER_ADDR"))
        .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
      server_port: server
        .port
        .or_else(|| parse_env(&env, "PORT"))
        .unwrap_or(DEFAULT_SERVER_PORT),
      title: server
        .title
        .or_else(|| env("APP_TITLE"))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
    }
  }

  /// Get the full server bind address
  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.server_addr, self.server_port)
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::resolve(FileConfig::default(), |_| None)
  }
}

fn read_file_config(path: &Path) -> FileConfig {
  let Ok(contents) = std::fs::read_to_string(path) else {
    tracing::debug!("No config file at {}, using environment and defaults", path.display());
    return FileConfig::default();
  };

  match toml::from_str::<FileConfig>(&contents) {
    Ok(config) => {
      tracing::info!("Using config from {}", path.display());
      config
    }
    Err(e) => {
      tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
      FileConfig::default()
    }
  }
}

fn valid_expiry_hours(key: &str, hours: i64) -> bool {
  let valid = (1..=MAX_SESSION_EXPIRY_HOURS).contains(&hours);
  if !valid {
    tracing::warn!(
      "Ignoring {}={}: must be between 1 and {}",
      key,
      hours,
      MAX_SESSION_EXPIRY_HOURS
    );
  }
  valid
}

fn parse_env<T>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  let raw = env(key)?;
  match raw.parse::<T>() {
    Ok(value) => Some(value),
    Err(e) => {
      tracing::warn!("Ignoring {}={:?}: {}", key, raw, e);
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.load_policy, LoadPolicy::Strict);
    assert_eq!(config.selection, SelectionPolicy::WithoutReplacement);
    assert_eq!(config.session_expiry_hours, DEFAULT_SESSION_EXPIRY_HOURS);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    assert!(config.words_path.ends_with("wordlist.csv"));
  }

  #[test]
  fn test_from_toml() {
    let config = Config::from_toml_str(
      r#"
      [dataset]
      path = "words/gre.csv"
      load_policy = "lenient"

      [session]
      selection = "with_replacement"
      expiry_hours = 4

      [server]
      port = 8080
      title = "GRE wordlist prep"
      "#,
    )
    .unwrap();

    assert_eq!(config.words_path, PathBuf::from("words/gre.csv"));
    assert_eq!(config.load_policy, LoadPolicy::Lenient);
    assert_eq!(config.selection, SelectionPolicy::WithReplacement);
    assert_eq!(config.session_expiry_hours, 4);
    assert_eq!(config.server_port, 8080);
    assert_eq!(config.title, "GRE wordlist prep");
  }

  #[test]
  fn test_unknown_policy_rejected_in_toml() {
    assert!(Config::from_toml_str("[session]\nselection = \"spaced\"\n").is_err());
  }

  #[test]
  fn test_file_beats_env() {
    let file = toml::from_str::<FileConfig>("[server]\nport = 4000\n").unwrap();
    let config = Config::resolve(file, env_from(&[("PORT", "5000"), ("SELECTION_POLICY", "with_replacement")]));
    assert_eq!(config.server_port, 4000);
    assert_eq!(config.selection, SelectionPolicy::WithReplacement);
  }

  #[test]
  fn test_bad_env_falls_back_to_default() {
    let config = Config::resolve(
      FileConfig::default(),
      env_from(&[("PORT", "not-a-port"), ("LOAD_POLICY", "loose"), ("SESSION_EXPIRY_HOURS", "0")]),
    );
    assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
    assert_eq!(config.load_policy, LoadPolicy::Strict);
    assert_eq!(config.session_expiry_hours, DEFAULT_SESSION_EXPIRY_HOURS);
  }

  #[test]
  fn test_oversized_expiry_falls_back() {
    let config = Config::from_toml_str("[session]\nexpiry_hours = 9000000000000000\n").unwrap();
    assert_eq!(config.session_expiry_hours, DEFAULT_SESSION_EXPIRY_HOURS);

    let config = Config::resolve(
      FileConfig::default(),
      env_from(&[("SESSION_EXPIRY_HOURS", "100000000000")]),
    );
    assert_eq!(config.session_expiry_hours, DEFAULT_SESSION_EXPIRY_HOURS);
  }

  #[test]
  fn test_oversized_file_expiry_uses_env() {
    let file = toml::from_str::<FileConfig>("[session]\nexpiry_hours = 100000000000\n").unwrap();
    let config = Config::resolve(file, env_from(&[("SESSION_EXPIRY_HOURS", "12")]));
    assert_eq!(config.session_expiry_hours, 12);
  }

  #[test]
  fn test_max_expiry_accepted() {
    let config = Config::from_toml_str(&format!(
      "[session]\nexpiry_hours = {}\n",
      MAX_SESSION_EXPIRY_HOURS
    ))
    .unwrap();
    assert_eq!(config.session_expiry_hours, MAX_SESSION_EXPIRY_HOURS);
  }

  #[test]
  fn test_env_words_path() {
    let config = Config::resolve(FileConfig::default(), env_from(&[("WORDS_PATH", "/srv/words.csv")]));
    assert_eq!(config.words_path, PathBuf::from("/srv/words.csv"));
  }
}
