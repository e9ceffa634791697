//! Core document data structures

mod chunk;
mod engine;
mod record;
mod relationship;


pub use chunk::{Chunk, ChunkId, SensitivityLevel};
pub use engine::{TesseraEngine, TesseraError, TesseraResult};
pub use record::{DocumentId, DocumentRecord, RecordMetadata};
pub use relationship::{Relationship, RelationshipId, RelationshipType};
