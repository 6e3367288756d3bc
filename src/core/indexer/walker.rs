//! File system walker for document discovery.
//!
//! Traverses the site tree, prunes excluded directories by exact
//! segment name at every depth, and selects document files by
//! extension. The generated artifact itself is never selected,
//! even when it carries the document extension.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::core::error::Result;

/// File system walker for site documents
pub struct SiteWalker {
    /// Directory segment names to prune (e.g. "assets", ".git")
    exclude_dirs: HashSet<String>,

    /// Lowercased file suffix to select (e.g. ".html")
    extension_suffix: String,

    /// Output artifact location, skipped if found inside the tree
    output_path: PathBuf,
}

impl SiteWalker {
    /// Create a new walker.
    ///
    /// # Arguments
    ///
    /// * `exclude_dirs` - Directory names never traversed into
    /// * `extension` - Document extension without the leading dot
    /// * `output_path` - Artifact location to exclude from results
    pub fn new(exclude_dirs: &[String], extension: &str, output_path: &Path) -> Self {
        Self {
            exclude_dirs: exclude_dirs.iter().cloned().collect(),
            extension_suffix: format!(".{}", extension.to_lowercase()),
            output_path: output_path.to_path_buf(),
        }
    }

    /// Collect all candidate document files under a root.
    ///
    /// Traversal is sorted by file name so the resulting order
    /// (and therefore the artifact) is identical across runs.
    /// Traversal errors are fatal.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        // The artifact usually does not exist yet on first run;
        // comparison only matters once it does.
        let output_canonical = fs::canonicalize(&self.output_path).ok();

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_descend(e, root))
        {
            let entry = entry?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if !self.has_document_extension(path) {
                continue;
            }

            if self.is_output_artifact(path, output_canonical.as_deref()) {
                tracing::debug!("Skipping generated artifact: {:?}", path);
                continue;
            }

            files.push(path.to_path_buf());
        }

        Ok(files)
    }

    /// Determine whether to descend into a directory entry.
    ///
    /// Prunes directories whose name is in the exclusion set.
    /// Never filters the root directory itself.
    fn should_descend(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if entry.file_type().is_dir() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if self.exclude_dirs.contains(name) {
                    tracing::debug!("Skipping excluded directory: {:?}", path);
                    return false;
                }
            }
        }

        true
    }

    /// Check the file name against the document extension,
    /// case-insensitively.
    fn has_document_extension(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_lowercase().ends_with(&self.extension_suffix))
            .unwrap_or(false)
    }

    /// Compare a candidate against the output artifact by
    /// canonicalized absolute path.
    fn is_output_artifact(&self, path: &Path, output_canonical: Option<&Path>) -> bool {
        let Some(output) = output_canonical else {
            return false;
        };

        fs::canonicalize(path)
            .map(|candidate| candidate == output)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_files(files: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for file in files {
            let path = temp_dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, "<title>t</title>").unwrap();
        }
        temp_dir
    }

    fn walker_for(temp_dir: &TempDir) -> SiteWalker {
        SiteWalker::new(
            &["assets".to_string(), ".git".to_string()],
            "html",
            &temp_dir.path().join("search_index.json"),
        )
    }

    #[test]
    fn test_walker_selects_documents() {
        let temp_dir = create_test_files(&["index.html", "about.html", "notes.txt"]);

        let walker = walker_for(&temp_dir);
        let files = walker.collect_files(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_walker_extension_case_insensitive() {
        let temp_dir = create_test_files(&["a.html", "b.HTML", "c.HtMl"]);

        let walker = walker_for(&temp_dir);
        let files = walker.collect_files(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_walker_recurses_into_subdirectories() {
        let temp_dir = create_test_files(&["index.html", "docs/guide.html", "docs/api/ref.html"]);

        let walker = walker_for(&temp_dir);
        let files = walker.collect_files(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_walker_excludes_directories_at_any_depth() {
        let temp_dir = create_test_files(&[
            "page.html",
            "assets/ignored.html",
            "docs/assets/also_ignored.html",
            "docs/.git/objects/stray.html",
        ]);

        let walker = walker_for(&temp_dir);
        let files = walker.collect_files(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("page.html"));
    }

    #[test]
    fn test_walker_excluded_name_as_file_is_still_indexed() {
        // Exclusion is by directory segment, not file name
        let temp_dir = create_test_files(&["assets.html"]);

        let walker = walker_for(&temp_dir);
        let files = walker.collect_files(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_walker_skips_output_artifact() {
        let temp_dir = create_test_files(&["page.html", "search.html"]);

        let walker = SiteWalker::new(
            &["assets".to_string()],
            "html",
            &temp_dir.path().join("search.html"),
        );
        let files = walker.collect_files(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("page.html"));
    }

    #[test]
    fn test_walker_output_artifact_only_yields_nothing() {
        let temp_dir = create_test_files(&["search.html"]);

        let walker = SiteWalker::new(&[], "html", &temp_dir.path().join("search.html"));
        let files = walker.collect_files(temp_dir.path()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_walker_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let walker = walker_for(&temp_dir);
        let files = walker.collect_files(temp_dir.path()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_walker_deterministic_order() {
        let temp_dir = create_test_files(&["b.html", "a.html", "docs/c.html"]);

        let walker = walker_for(&temp_dir);
        let first = walker.collect_files(temp_dir.path()).unwrap();
        let second = walker.collect_files(temp_dir.path()).unwrap();

        assert_eq!(first, second);
        assert!(first[0].ends_with("a.html"));
        assert!(first[1].ends_with("b.html"));
    }

    #[test]
    fn test_walker_missing_root_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-dir");

        let walker = SiteWalker::new(&[], "html", &temp_dir.path().join("out.json"));

        assert!(walker.collect_files(&missing).is_err());
    }
}
