//! Per-chunk content analysis
//!
//! The analysis layer runs a set of registered analyzers over each chunk
//! of a document and merges their outputs into the chunk's stored fields.
//!
//! # Architecture
//!
//! - **ChunkAnalyzer trait**: interface for passes that inspect chunk text
//! - **AnalyzerRegistry**: holds the passes a pipeline runs, in priority order
//! - **OutcomeMerger**: folds analyzer outcomes into chunk fields, applying
//!   conservative defaults when a pass fails
//!
//! # Built-in Analyzers
//!
//! - **SensitivityAnalyzer**: lexicon-driven sensitivity tier and elder-review flag
//! - **LexicalAnalyzer**: frequency-ranked keywords and Flesch readability
//!
//! Every built-in analyzer is deterministic, so re-running a document
//! produces identical chunk fields.

pub mod analyzers;
mod merger;
mod traits;
mod types;

pub use analyzers::{LexicalAnalyzer, SensitivityAnalyzer};
pub use merger::OutcomeMerger;
pub use traits::{AnalyzerRegistry, ChunkAnalyzer};
pub use types::{AnalysisError, AnalyzerOutcome, Classification};

/// Registry preloaded with the built-in analyzers
pub fn default_registry(keyword_count: usize) -> AnalyzerRegistry {
    let mut registry = AnalyzerRegistry::new();
    registry.register(SensitivityAnalyzer::new());
    registry.register(LexicalAnalyzer::new(keyword_count));
    registry
}
