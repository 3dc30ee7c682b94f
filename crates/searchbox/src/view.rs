//! Rendering surface of the search widget
//!
//! A [`SearchView`] owns the three visible parts of the widget: the input
//! field, the suggestions panel and the results container. Entries and
//! feedback buttons are created by the widget at render time and carry
//! everything needed to act on them when activated.

use crate::types::{FeedbackEvent, SearchResult};

/// One clickable row of the suggestions panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEntry {
  pub text: String,
}

impl SuggestionEntry {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }
}

/// Thumbs-up or thumbs-down button bound to a single result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackButton {
  pub result_id: String,
  pub is_positive: bool,
}

impl FeedbackButton {
  pub fn label(&self) -> &'static str {
    if self.is_positive {
      "👍"
    } else {
      "👎"
    }
  }

  pub fn event(&self) -> FeedbackEvent {
    FeedbackEvent::new(self.result_id.clone(), self.is_positive)
  }
}

/// A rendered search result with its feedback buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
  pub result: SearchResult,
  pub thumbs_up: FeedbackButton,
  pub thumbs_down: FeedbackButton,
}

impl ResultCard {
  pub fn new(result: SearchResult) -> Self {
    let thumbs_up = FeedbackButton { result_id: result.id.clone(), is_positive: true };
    let thumbs_down = FeedbackButton { result_id: result.id.clone(), is_positive: false };
    Self { result, thumbs_up, thumbs_down }
  }
}

/// Where a pointer activation (click, tap) landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
  /// The search input field
  Input,
  /// A suggestion row inside the panel
  Suggestion(SuggestionEntry),
  /// The panel itself, outside any row
  SuggestionsPanel,
  /// A feedback button on a rendered result
  Feedback(FeedbackButton),
  /// Anything else on the page
  Elsewhere,
}

impl PointerTarget {
  /// Whether the activation counts as inside the panel or on the input
  pub fn keeps_panel_open(&self) -> bool {
    matches!(self, Self::Input | Self::Suggestion(_) | Self::SuggestionsPanel)
  }
}

/// Key pressed while the input field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
  Enter,
  Other(char),
}

/// Page elements consumed by the widget
pub trait SearchView: Send {
  /// Current raw contents of the input field
  fn input_value(&self) -> String;

  fn set_input_value(&mut self, value: &str);

  /// Replace the panel contents with `entries` and make it visible
  fn show_suggestions(&mut self, entries: Vec<SuggestionEntry>);

  /// Clear and hide the panel
  fn hide_suggestions(&mut self);

  fn suggestions_visible(&self) -> bool;

  /// Replace the results container contents
  fn render_results(&mut self, cards: Vec<ResultCard>);
}
