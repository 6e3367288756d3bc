//! Configuration for the siteindex tool.
//!
//! There is no configuration file and no environment lookup: the
//! tool is driven entirely by CLI arguments with defaults defined
//! here. Components receive an [`IndexConfig`] explicitly instead
//! of reading module-scope globals.

use std::path::{Path, PathBuf};

/// File name of the generated index artifact
pub const OUTPUT_FILE_NAME: &str = "search_index.json";

/// Directory segment names never traversed into
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["assets", ".git"];

/// Extension of indexable documents (matched case-insensitively)
pub const DOCUMENT_EXTENSION: &str = "html";

/// Settings for one indexing run
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Root directory of the site to index
    pub root: PathBuf,

    /// Location of the generated artifact. May live inside the
    /// scanned tree; the walker never indexes it.
    pub output_path: PathBuf,

    /// Directory segment names to skip, applied at every depth
    pub exclude_dirs: Vec<String>,

    /// Document extension, without the leading dot
    pub extension: String,
}

impl IndexConfig {
    /// Build the default configuration for a site root: artifact
    /// directly under the root, standard exclusion set, `.html`
    /// documents.
    pub fn for_root(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            output_path: root.join(OUTPUT_FILE_NAME),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extension: DOCUMENT_EXTENSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_root() {
        let config = IndexConfig::for_root(Path::new("/srv/site"));

        assert_eq!(config.root, Path::new("/srv/site"));
        assert_eq!(config.output_path, Path::new("/srv/site/search_index.json"));
        assert_eq!(config.exclude_dirs, vec!["assets", ".git"]);
        assert_eq!(config.extension, "html");
    }
}
