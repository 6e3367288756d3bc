//! Index artifact serialization.
//!
//! Writes the record sequence as pretty-printed JSON so the
//! artifact stays reviewable in version control. Non-ASCII text
//! is preserved literally, not numerically escaped. Any prior
//! artifact is overwritten unconditionally.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{IndexError, Result};
use crate::core::types::PageRecord;

/// Writes the index artifact to its output location
pub struct IndexWriter {
    output_path: PathBuf,
}

impl IndexWriter {
    /// Create a writer for an output location
    pub fn new(output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
        }
    }

    /// Serialize all records to the artifact, replacing any
    /// previous one. Returns the number of records written.
    ///
    /// The records are serialized in memory first, so a failed
    /// write never leaves a truncated artifact behind.
    pub fn write(&self, records: &[PageRecord]) -> Result<usize> {
        let json = serde_json::to_string_pretty(records)?;

        fs::write(&self.output_path, json).map_err(|e| {
            IndexError::WriteFailed(format!(
                "Failed to write {}: {e}",
                self.output_path.display()
            ))
        })?;

        tracing::info!(
            "Wrote {} records to {}",
            records.len(),
            self.output_path.display()
        );

        Ok(records.len())
    }

    /// The artifact location this writer targets
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_records() -> Vec<PageRecord> {
        vec![
            PageRecord {
                path: "index.html".to_string(),
                title: "Home".to_string(),
                text: "Hello & welcome".to_string(),
            },
            PageRecord {
                path: "docs/caf\u{e9}.html".to_string(),
                title: "Caf\u{e9}".to_string(),
                text: "\u{4e2d}\u{6587} text".to_string(),
            },
        ]
    }

    #[test]
    fn test_write_reports_count() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("search_index.json");

        let count = IndexWriter::new(&output).write(&sample_records()).unwrap();

        assert_eq!(count, 2);
        assert!(output.exists());
    }

    #[test]
    fn test_artifact_is_pretty_printed_array() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("search_index.json");

        IndexWriter::new(&output).write(&sample_records()).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.starts_with("[\n"));
        assert!(contents.contains("  {\n"));
        assert!(contents.contains("\"path\": \"index.html\""));
        assert!(contents.contains("\"title\": \"Home\""));
        assert!(contents.contains("\"text\": \"Hello & welcome\""));
    }

    #[test]
    fn test_non_ascii_preserved_literally() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("search_index.json");

        IndexWriter::new(&output).write(&sample_records()).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.contains("caf\u{e9}"));
        assert!(contents.contains("\u{4e2d}\u{6587}"));
        assert!(!contents.contains("\\u"));
    }

    #[test]
    fn test_round_trips_through_serde() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("search_index.json");

        let records = sample_records();
        IndexWriter::new(&output).write(&records).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        let parsed: Vec<PageRecord> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_overwrites_previous_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("search_index.json");
        let writer = IndexWriter::new(&output);

        writer.write(&sample_records()).unwrap();
        writer.write(&[]).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents, "[]");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("no-such-dir/search_index.json");

        let result = IndexWriter::new(&output).write(&sample_records());

        assert!(matches!(result, Err(IndexError::WriteFailed(_))));
    }
}
