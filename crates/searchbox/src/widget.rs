//! The suggestion pipeline
//!
//! [`SearchBox`] reacts to input, key and pointer events. Input changes go
//! through the debouncer before reaching the autocomplete endpoint; Enter
//! and suggestion selection submit a full search directly. Every API
//! failure ends in one diagnostic log line and a safe default.
//!
//! In-flight fetches are never cancelled, only pending timers. A slow
//! autocomplete response that arrives after further typing still renders.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, warn};

use crate::client::SearchApi;
use crate::config::PipelineConfig;
use crate::debounce::Debouncer;
use crate::types::FeedbackEvent;
use crate::view::{Key, PointerTarget, ResultCard, SearchView, SuggestionEntry};

/// State shared with debounced fetches
struct Shared<A, V> {
  api: A,
  view: Mutex<V>,
}

impl<A, V> Shared<A, V>
where
  A: SearchApi,
  V: SearchView,
{
  fn view(&self) -> MutexGuard<'_, V> {
    self.view.lock().unwrap_or_else(PoisonError::into_inner)
  }

  async fn fetch_suggestions(&self, query: &str) -> Vec<String> {
    match self.api.autocomplete(query).await {
      Ok(response) => {
        debug!(query, count = response.suggestions.len(), search_id = ?response.search_id, "suggestions received");
        response.suggestions
      }
      Err(e) => {
        warn!(query, error = %e, "error fetching suggestions");
        Vec::new()
      }
    }
  }

  fn render_suggestions(&self, suggestions: Vec<String>) {
    let mut view = self.view();
    if suggestions.is_empty() {
      view.hide_suggestions();
      return;
    }
    view.show_suggestions(suggestions.into_iter().map(SuggestionEntry::new).collect());
  }

  async fn submit_search(&self, query: &str) {
    match self.api.search(query).await {
      Ok(results) => {
        debug!(query, count = results.len(), "search results received");
        let cards = results.into_iter().map(ResultCard::new).collect();
        self.view().render_results(cards);
      }
      Err(e) => error!(query, error = %e, "search request failed"),
    }
  }

  async fn submit_feedback(&self, event: FeedbackEvent) {
    if let Err(e) = self.api.feedback(&event).await {
      error!(result_id = %event.result_id, is_positive = event.is_positive, error = %e, "error submitting feedback");
    }
  }
}

/// A search input with debounced autocomplete
///
/// Input changes spawn timer tasks; drive the widget from a Tokio runtime.
pub struct SearchBox<A, V> {
  shared: Arc<Shared<A, V>>,
  config: PipelineConfig,
  debouncer: Debouncer,
}

impl<A, V> SearchBox<A, V>
where
  A: SearchApi + 'static,
  V: SearchView + 'static,
{
  pub fn new(api: A, view: V, config: PipelineConfig) -> Self {
    let debouncer = Debouncer::new(config.debounce);
    Self { shared: Arc::new(Shared { api, view: Mutex::new(view) }), config, debouncer }
  }

  /// Run `f` against the view
  pub fn with_view<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
    f(&mut self.shared.view())
  }

  /// Whether a suggestion fetch is waiting out the quiet period
  pub fn has_pending_fetch(&self) -> bool {
    self.debouncer.is_armed()
  }

  /// Wait until a pending suggestion fetch has fired and rendered
  pub async fn wait_for_suggestions(&mut self) {
    self.debouncer.wait().await;
  }

  /// The input field's text changed
  ///
  /// Arms the debounce timer with `tokio::spawn`, so this must be called
  /// from within a Tokio runtime.
  pub fn on_input_change(&mut self, text: &str) {
    self.shared.view().set_input_value(text);

    let query = text.trim().to_string();
    if query.chars().count() < self.config.min_query_chars {
      self.debouncer.cancel();
      self.shared.view().hide_suggestions();
      return;
    }

    let shared = Arc::clone(&self.shared);
    self.debouncer.schedule(async move {
      let suggestions = shared.fetch_suggestions(&query).await;
      shared.render_suggestions(suggestions);
    });
  }

  /// Show `suggestions` in the panel, or hide it when there are none
  pub fn render_suggestions(&self, suggestions: Vec<String>) {
    self.shared.render_suggestions(suggestions);
  }

  /// Fill the input with the suggestion, close the panel and search for it
  pub async fn select_suggestion(&self, entry: &SuggestionEntry) {
    {
      let mut view = self.shared.view();
      view.set_input_value(&entry.text);
      view.hide_suggestions();
    }
    self.shared.submit_search(&entry.text).await;
  }

  /// Post a full search and render whatever comes back
  pub async fn submit_search(&self, query: &str) {
    self.shared.submit_search(query).await;
  }

  /// Send a relevance signal; failures are only logged
  pub async fn submit_feedback(&self, result_id: &str, is_positive: bool) {
    self.shared.submit_feedback(FeedbackEvent::new(result_id, is_positive)).await;
  }

  /// A key was pressed while the input had focus
  pub async fn on_key(&self, key: Key) {
    if key != Key::Enter {
      return;
    }

    let query = {
      let mut view = self.shared.view();
      view.hide_suggestions();
      view.input_value().trim().to_string()
    };
    self.shared.submit_search(&query).await;
  }

  /// A pointer activation landed on `target`
  pub async fn on_pointer(&self, target: PointerTarget) {
    if !target.keeps_panel_open() {
      self.shared.view().hide_suggestions();
    }

    match target {
      PointerTarget::Suggestion(entry) => self.select_suggestion(&entry).await,
      PointerTarget::Feedback(button) => self.shared.submit_feedback(button.event()).await,
      PointerTarget::Input | PointerTarget::SuggestionsPanel | PointerTarget::Elsewhere => {}
    }
  }

  /// List the most frequent past queries in the suggestions panel
  pub async fn show_popular(&self, limit: usize) {
    match self.shared.api.popular(limit).await {
      Ok(popular) => {
        let queries = popular.into_iter().map(|p| p.query).collect();
        self.shared.render_suggestions(queries);
      }
      Err(e) => {
        warn!(limit, error = %e, "error fetching popular searches");
        self.shared.view().hide_suggestions();
      }
    }
  }
}
