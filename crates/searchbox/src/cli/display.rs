//! Terminal rendering of the search widget

use colored::*;

use crate::view::{ResultCard, SearchView, SuggestionEntry};

const WRAP_WIDTH: usize = 80;

/// [`SearchView`] that prints to stdout and remembers what it showed
#[derive(Debug, Default)]
pub struct TerminalView {
  input: String,
  suggestions: Option<Vec<SuggestionEntry>>,
  results: Vec<ResultCard>,
}

impl TerminalView {
  pub fn new() -> Self {
    Self::default()
  }

  /// Suggestion at 1-based `position` in the open panel
  pub fn suggestion(&self, position: usize) -> Option<SuggestionEntry> {
    let entries = self.suggestions.as_ref()?;
    position.checked_sub(1).and_then(|i| entries.get(i)).cloned()
  }

  /// Result at 1-based `position` in the last rendered list
  pub fn result(&self, position: usize) -> Option<&ResultCard> {
    position.checked_sub(1).and_then(|i| self.results.get(i))
  }
}

impl SearchView for TerminalView {
  fn input_value(&self) -> String {
    self.input.clone()
  }

  fn set_input_value(&mut self, value: &str) {
    self.input = value.to_string();
  }

  fn show_suggestions(&mut self, entries: Vec<SuggestionEntry>) {
    for line in format_suggestions(&entries) {
      println!("{line}");
    }
    self.suggestions = Some(entries);
  }

  fn hide_suggestions(&mut self) {
    self.suggestions = None;
  }

  fn suggestions_visible(&self) -> bool {
    self.suggestions.is_some()
  }

  fn render_results(&mut self, cards: Vec<ResultCard>) {
    if cards.is_empty() {
      println!("{}", "No results found".dimmed());
    }

    let terms: Vec<String> = self.input.split_whitespace().map(str::to_string).collect();
    for (i, card) in cards.iter().enumerate() {
      for line in format_result(i + 1, card, &terms) {
        println!("{line}");
      }
    }
    self.results = cards;
  }
}

/// Numbered panel rows, one per suggestion
pub fn format_suggestions(entries: &[SuggestionEntry]) -> Vec<String> {
  entries
    .iter()
    .enumerate()
    .map(|(i, entry)| format!("  {} {}", format!("{}>", i + 1).cyan(), entry.text))
    .collect()
}

/// A result card: header, wrapped description and feedback hints
pub fn format_result(position: usize, card: &ResultCard, terms: &[String]) -> Vec<String> {
  let title = highlight_keywords(&card.result.title, terms);
  let mut lines = vec![format!("=== {} {} ===", format!("[{position}]").blue().bold(), title)];

  // Wrap first so escape codes never count towards the width
  let description = wrap_text(&card.result.description, WRAP_WIDTH);
  lines.extend(description.iter().map(|line| highlight_keywords(line, terms)));

  lines.push(format!(
    "{} +{position}   {} -{position}",
    card.thumbs_up.label(),
    card.thumbs_down.label()
  ));
  lines.push(String::new());
  lines
}

/// Highlight search terms in text
///
/// Matches are found against the plain text for every term before any
/// colour is applied, so escape codes are never searched.
pub fn highlight_keywords(text: &str, terms: &[String]) -> String {
  let lower = text.to_ascii_lowercase();
  let mut ranges: Vec<(usize, usize)> = Vec::new();

  for term in terms.iter().filter(|t| !t.is_empty()) {
    let term_lower = term.to_ascii_lowercase();
    let mut start = 0;

    while let Some(pos) = lower[start..].find(&term_lower) {
      let abs_pos = start + pos;
      ranges.push((abs_pos, abs_pos + term_lower.len()));
      start = abs_pos + term_lower.len();
    }
  }

  ranges.sort_unstable();
  let mut merged: Vec<(usize, usize)> = Vec::new();
  for (start, end) in ranges {
    match merged.last_mut() {
      Some(last) if start <= last.1 => last.1 = last.1.max(end),
      _ => merged.push((start, end)),
    }
  }

  let mut highlighted = String::with_capacity(text.len());
  let mut end = 0;
  for (start, stop) in merged {
    highlighted.push_str(&text[end..start]);
    highlighted.push_str(&text[start..stop].yellow().bold().to_string());
    end = stop;
  }
  highlighted.push_str(&text[end..]);

  highlighted
}

/// Wrap text to fit within a specified width
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.split('\n') {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let mut current_line = String::new();

    for word in paragraph.split_whitespace() {
      if current_line.is_empty() {
        current_line = word.to_string();
      } else if current_line.len() + 1 + word.len() <= width {
        current_line.push(' ');
        current_line.push_str(word);
      } else {
        lines.push(current_line);
        current_line = word.to_string();
      }
    }

    if !current_line.is_empty() {
      lines.push(current_line);
    }
  }

  lines
}
