//! CLI adapter for siteindex
//!
//! The tool is a single command with no required arguments:
//! running it bare indexes the current directory with the
//! default exclusion set and writes `search_index.json` at the
//! root. Every knob is an optional flag.

pub mod output;

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::core::config::IndexConfig;
use crate::core::indexer::IndexingPipeline;
use crate::core::writer::IndexWriter;
use output::{colors, format_duration};

/// siteindex - Static site search index generator
///
/// Walks a site tree, extracts a title and the visible text from
/// every HTML document, and writes a single JSON artifact for a
/// client-side search feature.
#[derive(Parser, Debug)]
#[command(name = "siteindex")]
#[command(version)]
#[command(about = "Static site search index generator", long_about = None)]
pub struct Cli {
    /// Root directory of the site to index
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Artifact location [default: <ROOT>/search_index.json]
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory names to skip at any depth (can be specified
    /// multiple times) [default: assets, .git]
    #[arg(long, short = 'e', value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Output format for the run summary
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Run summary
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub pages_indexed: usize,
    pub output_path: String,
    pub duration_secs: f64,
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Validate root
    let root = cli.root.canonicalize().map_err(|e| {
        format!(
            "Invalid path '{}': {}. Make sure the path exists and is accessible.",
            cli.root.display(),
            e
        )
    })?;

    if !root.is_dir() {
        return Err(format!(
            "Path '{}' is not a directory. siteindex scans a site root, not individual files.",
            root.display()
        )
        .into());
    }

    // Build configuration from flags
    let mut config = IndexConfig::for_root(&root);
    if let Some(output_path) = cli.output {
        config.output_path = output_path;
    }
    if !cli.exclude.is_empty() {
        config.exclude_dirs = cli.exclude;
    }

    if !cli.quiet && cli.format == OutputFormat::Human {
        eprintln!(
            "Indexing {}...",
            colors::file_path(&root.display().to_string())
        );
    }

    // Walk, extract, then write the artifact in one pass
    let pipeline = IndexingPipeline::new(config.clone());
    let (records, stats) = pipeline.index_site()?;

    let writer = IndexWriter::new(&config.output_path);
    let pages_indexed = writer.write(&records)?;

    let response = IndexResponse {
        pages_indexed,
        output_path: config.output_path.display().to_string(),
        duration_secs: stats.duration_ms as f64 / 1000.0,
    };

    match cli.format {
        OutputFormat::Human => {
            println!(
                "{} {} pages to {} in {}",
                colors::success("Indexed"),
                colors::number(&response.pages_indexed.to_string()),
                colors::file_path(&response.output_path),
                colors::number(&format_duration(response.duration_secs))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
