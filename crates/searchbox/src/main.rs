use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use searchbox::cli::commands;
use searchbox::config;

#[derive(Parser)]
#[command(name = "searchbox")]
#[command(about = "Searchbox - debounced autocomplete and search against a remote search API")]
#[command(version)]
struct Cli {
  /// Base URL of the search server [env: SEARCHBOX_SERVER_URL]
  #[arg(long, global = true)]
  server: Option<String>,

  /// Request timeout in seconds [env: SEARCHBOX_TIMEOUT_SECS]
  #[arg(long, global = true)]
  timeout: Option<u64>,

  /// Quiet period before suggestions are fetched [env: SEARCHBOX_DEBOUNCE_MS]
  #[arg(long, global = true)]
  debounce_ms: Option<u64>,

  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Fetch autocomplete suggestions for partial text
  Suggest {
    /// Text as typed into the search box
    text: String,
  },
  /// Submit a full search and print the results
  Search {
    /// Search terms (space-separated)
    #[arg(required = true)]
    terms: Vec<String>,
  },
  /// Rate a search result
  #[command(group(ArgGroup::new("rating").required(true).args(["up", "down"])))]
  Feedback {
    /// Id of the result being rated
    result_id: String,
    /// Mark the result as relevant
    #[arg(long)]
    up: bool,
    /// Mark the result as not relevant
    #[arg(long)]
    down: bool,
  },
  /// Show the most frequent searches
  Popular {
    /// Maximum number of queries to show
    #[arg(short, long, default_value = "10")]
    limit: usize,
  },
  /// Drive the search box line by line from stdin
  Interactive {
    /// Maximum number of queries shown by :popular
    #[arg(long, default_value = "10")]
    popular_limit: usize,
  },
}

fn init_logging(verbose: bool) {
  let default = if verbose { "searchbox=debug,info" } else { "searchbox=info,warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .init();
}

async fn handle(cli: Cli) -> Result<()> {
  let (mut client, mut pipeline) = config::from_env();
  if let Some(server) = cli.server {
    client = config::ClientConfig::new(server, client.timeout_secs);
  }
  if let Some(timeout) = cli.timeout {
    client.timeout_secs = timeout;
  }
  if let Some(ms) = cli.debounce_ms {
    pipeline.debounce = Duration::from_millis(ms);
  }

  tracing::debug!(server = %client.base_url, timeout = client.timeout_secs, "configured");
  let mut widget = commands::build(client, pipeline)?;

  match cli.command {
    Command::Suggest { text } => commands::suggest(&mut widget, &text).await,
    Command::Search { terms } => commands::search(&mut widget, &terms.join(" ")).await,
    Command::Feedback { result_id, up, .. } => commands::feedback(&mut widget, &result_id, up).await,
    Command::Popular { limit } => commands::popular(&mut widget, limit).await,
    Command::Interactive { popular_limit } => commands::interactive(&mut widget, popular_limit).await,
  }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  handle(cli).await
}
