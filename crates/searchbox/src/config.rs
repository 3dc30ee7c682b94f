//! Client and pipeline configuration
//!
//! Defaults can be overridden through `SEARCHBOX_*` environment variables
//! and then by command-line flags.

use std::time::Duration;

pub const SERVER_URL_VAR: &str = "SEARCHBOX_SERVER_URL";
pub const TIMEOUT_SECS_VAR: &str = "SEARCHBOX_TIMEOUT_SECS";
pub const DEBOUNCE_MS_VAR: &str = "SEARCHBOX_DEBOUNCE_MS";

const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Configuration for the search API HTTP client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
  /// Base URL of the search server (e.g., "http://localhost:5000")
  pub base_url: String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self { base_url: DEFAULT_SERVER_URL.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
  }
}

impl ClientConfig {
  pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { base_url, timeout_secs }
  }
}

/// Tuning for the suggestion pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
  /// Quiet period after the last keystroke before suggestions are fetched
  pub debounce: Duration,
  /// Trimmed queries shorter than this never reach the autocomplete endpoint
  pub min_query_chars: usize,
}

impl Default for PipelineConfig {
  fn default() -> Self {
    Self {
      debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
      min_query_chars: DEFAULT_MIN_QUERY_CHARS,
    }
  }
}

/// Read both configs from the process environment
pub fn from_env() -> (ClientConfig, PipelineConfig) {
  from_lookup(|key| std::env::var(key).ok())
}

/// Read both configs through an arbitrary variable lookup
pub fn from_lookup<F>(lookup: F) -> (ClientConfig, PipelineConfig)
where
  F: Fn(&str) -> Option<String>,
{
  let base_url = lookup(SERVER_URL_VAR).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
  let timeout_secs = parse_or(lookup(TIMEOUT_SECS_VAR), DEFAULT_TIMEOUT_SECS);
  let debounce_ms = parse_or(lookup(DEBOUNCE_MS_VAR), DEFAULT_DEBOUNCE_MS);

  let client = ClientConfig::new(base_url, timeout_secs);
  let pipeline =
    PipelineConfig { debounce: Duration::from_millis(debounce_ms), ..PipelineConfig::default() };

  (client, pipeline)
}

fn parse_or(value: Option<String>, default: u64) -> u64 {
  value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn test_defaults_when_nothing_set() {
    let (client, pipeline) = from_lookup(|_| None);

    assert_eq!(client, ClientConfig::default());
    assert_eq!(pipeline.debounce, Duration::from_millis(300));
    assert_eq!(pipeline.min_query_chars, 2);
  }

  #[test]
  fn test_env_overrides() {
    let (client, pipeline) = from_lookup(lookup_from(&[
      (SERVER_URL_VAR, "https://search.example.com/"),
      (TIMEOUT_SECS_VAR, "5"),
      (DEBOUNCE_MS_VAR, "120"),
    ]));

    assert_eq!(client.base_url, "https://search.example.com");
    assert_eq!(client.timeout_secs, 5);
    assert_eq!(pipeline.debounce, Duration::from_millis(120));
  }

  #[test]
  fn test_unparsable_numbers_fall_back() {
    let (client, pipeline) =
      from_lookup(lookup_from(&[(TIMEOUT_SECS_VAR, "soon"), (DEBOUNCE_MS_VAR, "-1")]));

    assert_eq!(client.timeout_secs, 30);
    assert_eq!(pipeline.debounce, Duration::from_millis(300));
  }
}
