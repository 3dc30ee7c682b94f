//! Line protocol for driving the widget from a terminal
//!
//! Each line read from stdin is one event:
//!
//! - plain text: the input field now holds this text
//! - empty line: Enter
//! - `>N`: click suggestion N
//! - `+N` / `-N`: thumbs up / down on result N
//! - `.`: click somewhere else on the page
//! - `:popular`: show popular searches
//! - `:quit`: leave

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::client::SearchApi;
use crate::cli::display::TerminalView;
use crate::view::{Key, PointerTarget};
use crate::widget::SearchBox;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
  Type(String),
  Enter,
  Select(usize),
  Feedback { position: usize, is_positive: bool },
  Dismiss,
  Popular,
  Quit,
}

pub fn parse_line(line: &str) -> Event {
  let line = line.trim_end_matches(['\r', '\n']);

  match line {
    "" => return Event::Enter,
    "." => return Event::Dismiss,
    ":popular" => return Event::Popular,
    ":quit" | ":q" => return Event::Quit,
    _ => {}
  }

  let position = |rest: &str| rest.parse::<usize>().ok().filter(|n| *n > 0);

  if let Some(n) = line.strip_prefix('>').and_then(position) {
    return Event::Select(n);
  }
  if let Some(n) = line.strip_prefix('+').and_then(position) {
    return Event::Feedback { position: n, is_positive: true };
  }
  if let Some(n) = line.strip_prefix('-').and_then(position) {
    return Event::Feedback { position: n, is_positive: false };
  }

  Event::Type(line.to_string())
}

/// Feed events from `input` into `widget` until `:quit` or end of input
pub async fn run<A, R>(
  widget: &mut SearchBox<A, TerminalView>,
  input: R,
  popular_limit: usize,
) -> Result<()>
where
  A: SearchApi + 'static,
  R: AsyncBufRead + Unpin,
{
  let mut lines = input.lines();

  while let Some(line) = lines.next_line().await? {
    let event = parse_line(&line);
    debug!(?event, "interactive event");

    match event {
      Event::Type(text) => widget.on_input_change(&text),
      Event::Enter => widget.on_key(Key::Enter).await,
      Event::Select(position) => match widget.with_view(|v| v.suggestion(position)) {
        Some(entry) => widget.on_pointer(PointerTarget::Suggestion(entry)).await,
        None => eprintln!("No suggestion #{position}"),
      },
      Event::Feedback { position, is_positive } => {
        let button = widget.with_view(|v| {
          v.result(position)
            .map(|card| if is_positive { card.thumbs_up.clone() } else { card.thumbs_down.clone() })
        });
        match button {
          Some(button) => widget.on_pointer(PointerTarget::Feedback(button)).await,
          None => eprintln!("No result #{position}"),
        }
      }
      Event::Dismiss => widget.on_pointer(PointerTarget::Elsewhere).await,
      Event::Popular => widget.show_popular(popular_limit).await,
      Event::Quit => break,
    }
  }

  widget.wait_for_suggestions().await;
  Ok(())
}
