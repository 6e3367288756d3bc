//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end indexing workflow:
//! 1. Walk the site tree
//! 2. Read each document
//! 3. Extract title and plain text
//! 4. Build page records with root-relative paths
//!
//! Data flows strictly forward; the only state is the
//! accumulating record list. Every per-file failure is fatal;
//! the run never produces a partial index.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::config::IndexConfig;
use crate::core::error::{IndexError, Result};
use crate::core::indexer::{extract, SiteWalker};
use crate::core::types::{IndexStats, PageRecord};

/// Orchestrates the indexing pipeline
pub struct IndexingPipeline {
    config: IndexConfig,
    walker: SiteWalker,
}

impl IndexingPipeline {
    /// Create a new indexing pipeline for a configuration
    pub fn new(config: IndexConfig) -> Self {
        let walker = SiteWalker::new(
            &config.exclude_dirs,
            &config.extension,
            &config.output_path,
        );

        Self { config, walker }
    }

    /// Index the site and return records + stats.
    ///
    /// Walks the tree, reads and extracts every document, and
    /// returns the record sequence in traversal order. Each file
    /// is fully read and released before the next one is opened.
    pub fn index_site(&self) -> Result<(Vec<PageRecord>, IndexStats)> {
        let start = Instant::now();

        tracing::info!("Scanning {:?} for documents", self.config.root);
        let files = self.walker.collect_files(&self.config.root)?;
        tracing::info!("Found {} documents to index", files.len());

        let mut records = Vec::with_capacity(files.len());

        for file_path in &files {
            let record = self.process_file(file_path)?;
            tracing::debug!("Indexed {}", record.path);
            records.push(record);
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Indexing complete: {} pages in {}ms",
            records.len(),
            duration_ms
        );

        let stats = IndexStats {
            pages_indexed: records.len(),
            duration_ms,
        };

        Ok((records, stats))
    }

    /// Process a single document: read, extract, relativize
    fn process_file(&self, path: &Path) -> Result<PageRecord> {
        let html = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                IndexError::InvalidEncoding(format!("{} is not valid UTF-8", path.display()))
            } else {
                IndexError::IndexingFailed(format!("Failed to read {}: {e}", path.display()))
            }
        })?;

        Ok(PageRecord {
            path: self.relative_url_path(path)?,
            title: extract::extract_title(&html),
            text: extract::extract_text(&html),
        })
    }

    /// Build the root-relative, forward-slash path used as the
    /// record identifier.
    fn relative_url_path(&self, path: &Path) -> Result<String> {
        let relative = path.strip_prefix(&self.config.root).map_err(|_| {
            IndexError::InvalidPath(format!(
                "{} is outside the site root {}",
                path.display(),
                self.config.root.display()
            ))
        })?;

        let mut segments = Vec::new();
        for component in relative.components() {
            let segment = component.as_os_str().to_str().ok_or_else(|| {
                IndexError::InvalidPath(format!("{} is not valid UTF-8", path.display()))
            })?;
            segments.push(segment);
        }

        Ok(segments.join("/"))
    }
}
