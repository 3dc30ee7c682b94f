//! HTTP client for the search API
//!
//! [`SearchApi`] is the seam the widget talks through; [`SearchClient`] is
//! the reqwest implementation used outside of tests.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::types::{
  AutocompleteResponse, FeedbackEvent, PopularResponse, PopularSearch, SearchRequest, SearchResult,
};

const AUTOCOMPLETE_PATH: &str = "/api/search/autocomplete";
const SEARCH_PATH: &str = "/api/search";
const FEEDBACK_PATH: &str = "/api/search/feedback";
const POPULAR_PATH: &str = "/api/search/popular";

/// Operations the search widget needs from the remote service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchApi: Send + Sync {
  /// Suggestions for a partial query
  async fn autocomplete(&self, query: &str) -> Result<AutocompleteResponse, SearchError>;

  /// Full search for a submitted query
  async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;

  /// Record a relevance signal for one result
  async fn feedback(&self, event: &FeedbackEvent) -> Result<(), SearchError>;

  /// Most frequent past queries
  async fn popular(&self, limit: usize) -> Result<Vec<PopularSearch>, SearchError>;
}

/// reqwest-backed [`SearchApi`]
#[derive(Debug, Clone)]
pub struct SearchClient {
  client: Client,
  config: ClientConfig,
}

impl SearchClient {
  /// Create a client with custom configuration
  pub fn with_config(config: ClientConfig) -> Result<Self, SearchError> {
    Url::parse(&config.base_url)
      .map_err(|e| SearchError::invalid_url(&config.base_url, e.to_string()))?;

    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .map_err(|e| SearchError::transport(e.to_string()))?;

    Ok(Self { client, config: ClientConfig::new(config.base_url, config.timeout_secs) })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url, path)
  }

  async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Response, SearchError> {
    let seconds = self.config.timeout_secs;
    let response = timeout(Duration::from_secs(seconds), request.send())
      .await
      .map_err(|_| SearchError::timeout(seconds))??;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(SearchError::status(endpoint, status.as_u16(), body));
    }

    Ok(response)
  }

  async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T, SearchError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| SearchError::decode(endpoint, e.to_string()))
  }
}

#[async_trait]
impl SearchApi for SearchClient {
  async fn autocomplete(&self, query: &str) -> Result<AutocompleteResponse, SearchError> {
    let request = self.client.get(self.url(AUTOCOMPLETE_PATH)).query(&[("q", query)]);
    let response = self.send(AUTOCOMPLETE_PATH, request).await?;
    Self::decode(AUTOCOMPLETE_PATH, response).await
  }

  async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
    let body = SearchRequest { query: query.to_string() };
    let request = self.client.post(self.url(SEARCH_PATH)).json(&body);
    let response = self.send(SEARCH_PATH, request).await?;
    Self::decode(SEARCH_PATH, response).await
  }

  async fn feedback(&self, event: &FeedbackEvent) -> Result<(), SearchError> {
    let request = self.client.post(self.url(FEEDBACK_PATH)).json(event);
    // Body is not part of the contract
    self.send(FEEDBACK_PATH, request).await?;
    Ok(())
  }

  async fn popular(&self, limit: usize) -> Result<Vec<PopularSearch>, SearchError> {
    let request = self.client.get(self.url(POPULAR_PATH)).query(&[("limit", limit)]);
    let response = self.send(POPULAR_PATH, request).await?;
    let body: PopularResponse = Self::decode(POPULAR_PATH, response).await?;
    Ok(body.popular_searches)
  }
}
