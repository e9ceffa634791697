//! Tessera: Culturally-Aware Document Chunking and Classification
//!
//! Splits community archive documents into overlapping, position-tracked
//! chunks, classifies each chunk against a cultural sensitivity lexicon, and
//! derives keyword and entity relationships between chunk pairs.
//!
//! # Core Concepts
//!
//! - **Chunks**: Overlapping windows of whole segments, with exact byte offsets
//! - **Sensitivity tiers**: `public < community < restricted < sacred`, highest wins
//! - **Relationships**: Keyword co-occurrence and shared-entity links between chunks
//!
//! # Example
//!
//! ```
//! use tessera::TesseraEngine;
//!
//! let engine = TesseraEngine::new();
//! // Engine is ready to store processed records
//! ```

pub mod analysis;
mod config;
mod document;
pub mod entities;
mod pipeline;
mod relations;
mod text;

pub use analysis::{
    AnalysisError, AnalyzerOutcome, AnalyzerRegistry, ChunkAnalyzer, Classification,
};
pub use config::{ConfigError, PipelineConfig};
pub use document::{
    Chunk, ChunkId, DocumentId, DocumentRecord, RecordMetadata, Relationship, RelationshipId,
    RelationshipType, SensitivityLevel, TesseraEngine, TesseraError, TesseraResult,
};
pub use entities::{EntityKind, EntityProvider, EntitySpan, PrecomputedEntities};
pub use pipeline::{Pipeline, PipelineError, ValidationError};
pub use relations::RelationshipBuilder;
pub use text::{ChunkBuilder, ChunkSeed, Segment, Segmenter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
