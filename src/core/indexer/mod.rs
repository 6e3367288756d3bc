//! Document indexing module.
//!
//! Handles document discovery and content extraction for
//! building the search index:
//!
//! - File system walking with directory exclusions
//! - Pattern-based title and text extraction
//! - Indexing pipeline orchestration
//!
//! Extraction is deliberately pattern-based rather than a
//! structural HTML parse; the trade-off is documented in
//! [`extract`].

pub mod extract;
pub mod pipeline;
pub mod walker;

pub use pipeline::IndexingPipeline;
pub use walker::SiteWalker;
