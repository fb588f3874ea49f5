//! WikiFlicks - CLI
//!
//! Terminal movie trivia: a random top-chart title, a truncated Wikipedia
//! plot as the clue, fuzzy-matched guesses.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wikiflicks::{console::Terminal, game::GameSession, provider::HttpContentProvider};

#[derive(Parser)]
#[command(
    name = "wikiflicks",
    about = "Guess the movie from a single Wikipedia plot clue",
    version,
    author
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let provider = HttpContentProvider::new()?;
    let mut session = GameSession::new(provider, Terminal::new());
    session.run()?;

    Ok(())
}
