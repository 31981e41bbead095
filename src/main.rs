//! Terminal blackjack.

use std::io;
use std::process::ExitCode;

use bjterm::{Console, TableRules};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Play blackjack against the house with a shoe shuffled from your own phrase.
#[derive(Debug, Parser)]
#[command(name = "bjterm", version, about)]
struct Cli {
    /// Player name (skips the name prompt).
    #[arg(long)]
    name: Option<String>,

    /// Seed phrase for the shoe (skips the seed prompt).
    #[arg(long)]
    seed: Option<String>,

    /// Diagnostic log filter written to stderr, e.g. `debug` or `bjterm=trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match console.run(
        TableRules::default(),
        cli.name.as_deref(),
        cli.seed.as_deref(),
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "terminal session failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
