use thiserror::Error;

/// Failures talking to the search API
#[derive(Debug, Error)]
pub enum SearchError {
  #[error("Request failed: {message}")]
  Transport { message: String },

  #[error("Request timed out after {seconds}s")]
  Timeout { seconds: u64 },

  #[error("{endpoint} returned HTTP {status}: {body}")]
  Status { endpoint: String, status: u16, body: String },

  #[error("Failed to parse {endpoint} response: {message}")]
  Decode { endpoint: String, message: String },

  #[error("Invalid server URL '{url}': {message}")]
  InvalidUrl { url: String, message: String },
}

impl SearchError {
  pub fn transport(message: impl Into<String>) -> Self {
    Self::Transport { message: message.into() }
  }

  pub fn timeout(seconds: u64) -> Self {
    Self::Timeout { seconds }
  }

  pub fn status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
    Self::Status { endpoint: endpoint.into(), status, body: body.into() }
  }

  pub fn decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Decode { endpoint: endpoint.into(), message: message.into() }
  }

  pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
    Self::InvalidUrl { url: url.into(), message: message.into() }
  }
}

impl From<reqwest::Error> for SearchError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_decode() {
      let endpoint = err.url().map(|u| u.path().to_string()).unwrap_or_default();
      return Self::decode(endpoint, err.to_string());
    }
    Self::transport(err.to_string())
  }
}
