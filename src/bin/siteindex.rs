//! siteindex CLI - build a static search index for a website
//!
//! Run before publishing a site to refresh `search_index.json`.
//!
//! # Examples
//!
//! ```bash
//! # Index the current directory
//! siteindex
//!
//! # Index a site root, skipping a drafts directory
//! siteindex public --exclude assets --exclude drafts
//!
//! # Machine-readable summary
//! siteindex public --format json
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use siteindex::cli::{output, run, Cli};

fn main() {
    // Logs go to stderr; stdout carries only the run summary
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "siteindex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
