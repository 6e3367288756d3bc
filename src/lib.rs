//! siteindex - Static Site Search Index Generator
//!
//! A one-shot batch tool that walks a website's directory tree,
//! extracts each HTML document's title and visible text, and
//! writes a single `search_index.json` artifact consumed by a
//! client-side search feature.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: domain logic (interface-agnostic)
//!   - config, error, types
//!   - indexer (file walking, extraction, pipeline)
//!   - writer (artifact serialization)
//!
//! - **cli**: clap adapter (depends on core)
//!   - argument parsing, output formatting
//!
//! # Key properties
//!
//! - Deterministic: sorted traversal, byte-identical re-runs
//! - Self-skipping: the generated artifact is never re-indexed
//! - Fail-fast: filesystem and encoding errors abort the run
//!   rather than truncate the index
//! - Permissive extraction: malformed markup degrades gracefully,
//!   never fatally

// Core domain logic (interface-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::IndexConfig;
pub use crate::core::error::{IndexError, Result};
pub use crate::core::indexer::IndexingPipeline;
pub use crate::core::types::{IndexStats, PageRecord};
pub use crate::core::writer::IndexWriter;
