//! Wire types for the search API

use serde::{Deserialize, Deserializer, Serialize};

/// Response body of `GET /api/search/autocomplete`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteResponse {
  /// Ranked suggestions for the partial query
  #[serde(default)]
  pub suggestions: Vec<String>,

  /// Server-side history row recorded for this query, when the server sends one
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub search_id: Option<i64>,
}

/// Request body of `POST /api/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
  pub query: String,
}

/// One entry of the `POST /api/search` response array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
  #[serde(deserialize_with = "string_or_number")]
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub description: String,
}

/// Request body of `POST /api/search/feedback`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEvent {
  pub result_id: String,
  pub is_positive: bool,
}

impl FeedbackEvent {
  pub fn new(result_id: impl Into<String>, is_positive: bool) -> Self {
    Self { result_id: result_id.into(), is_positive }
  }
}

/// Response body of `GET /api/search/popular`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopularResponse {
  #[serde(default)]
  pub popular_searches: Vec<PopularSearch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularSearch {
  pub query: String,
  pub count: u64,
}

// Result ids come back as strings from some backends and integers from others
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Id {
    Text(String),
    Int(i64),
    Float(f64),
  }

  Ok(match Id::deserialize(deserializer)? {
    Id::Text(s) => s,
    Id::Int(n) => n.to_string(),
    Id::Float(f) => f.to_string(),
  })
}
