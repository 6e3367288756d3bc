//! Core data types for the siteindex tool.
//!
//! This module defines the data structures shared between the
//! indexing pipeline, the artifact writer, and the CLI adapter.

use serde::{Deserialize, Serialize};

/// A single indexed page.
///
/// Field order matters: it is the serialization order of the
/// artifact, which the client-side search code consumes as a flat
/// array of `{path, title, text}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Root-relative source location, forward-slash separated on
    /// every platform. Stable identifier for search consumers.
    pub path: String,

    /// Trimmed content of the document's first `<title>` element,
    /// empty if the document has none
    pub title: String,

    /// Whitespace-normalized plain text with markup, script and
    /// style content removed and entities decoded
    pub text: String,
}

/// Statistics from an indexing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of pages indexed
    pub pages_indexed: usize,

    /// Indexing duration in milliseconds
    pub duration_ms: u64,
}
