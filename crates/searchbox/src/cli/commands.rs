//! One-shot commands behind the `searchbox` binary

use anyhow::{Context, Result};
use colored::*;
use tokio::io::BufReader;

use crate::cli::display::TerminalView;
use crate::cli::interactive;
use crate::client::SearchClient;
use crate::config::{ClientConfig, PipelineConfig};
use crate::view::SearchView;
use crate::widget::SearchBox;

pub type TerminalSearchBox = SearchBox<SearchClient, TerminalView>;

/// Build a widget talking to the configured server
pub fn build(client: ClientConfig, pipeline: PipelineConfig) -> Result<TerminalSearchBox> {
  let base_url = client.base_url.clone();
  let client = SearchClient::with_config(client)
    .with_context(|| format!("Failed to create client for {base_url}"))?;
  Ok(SearchBox::new(client, TerminalView::new(), pipeline))
}

/// Type `text` into the box and print whatever suggestions come back
pub async fn suggest(widget: &mut TerminalSearchBox, text: &str) -> Result<()> {
  widget.on_input_change(text);
  widget.wait_for_suggestions().await;

  if !widget.with_view(|v| v.suggestions_visible()) {
    println!("{}", "No suggestions".dimmed());
  }
  Ok(())
}

pub async fn search(widget: &mut TerminalSearchBox, query: &str) -> Result<()> {
  widget.with_view(|v| v.set_input_value(query));
  widget.submit_search(query.trim()).await;
  Ok(())
}

pub async fn feedback(widget: &mut TerminalSearchBox, result_id: &str, is_positive: bool) -> Result<()> {
  widget.submit_feedback(result_id, is_positive).await;
  Ok(())
}

pub async fn popular(widget: &mut TerminalSearchBox, limit: usize) -> Result<()> {
  widget.show_popular(limit).await;

  if !widget.with_view(|v| v.suggestions_visible()) {
    println!("{}", "No popular searches".dimmed());
  }
  Ok(())
}

#[cfg(not(tarpaulin_include))] // Skip coverage - reads the real stdin
pub async fn interactive(widget: &mut TerminalSearchBox, popular_limit: usize) -> Result<()> {
  println!(
    "{}",
    "Type to search. Empty line = Enter, >N pick suggestion, +N/-N rate result, . dismiss, :popular, :quit"
      .dimmed()
  );
  let stdin = BufReader::new(tokio::io::stdin());
  interactive::run(widget, stdin, popular_limit).await
}
