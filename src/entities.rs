//! Entity provider — integration with an upstream entity extractor
//!
//! Defines the provider trait and span types for pulling named entities
//! (people, places, cultural terms) detected by an external extractor.
//! Entities drive `shared_entity` relationships; a pipeline without a
//! provider simply skips those.

use crate::document::DocumentId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category assigned to an entity by the upstream extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Place,
    CulturalTerm,
    Other,
}

/// One entity occurrence inside a document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Canonical entity name as reported by the extractor
    pub name: String,
    pub kind: EntityKind,
    /// Byte offset of the first character of the occurrence
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl EntitySpan {
    pub fn new(name: impl Into<String>, kind: EntityKind, start: usize, end: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            start,
            end,
        }
    }
}

/// Errors from entity provider operations.
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    #[error("entity lookup failed: {0}")]
    Lookup(String),
}

/// Provider trait for fetching the entities of a document.
///
/// Abstracts over where the extraction ran (batch job, remote service,
/// test fixture) so the pipeline does not depend on how entities were
/// produced.
#[async_trait]
pub trait EntityProvider: Send + Sync {
    /// All entity occurrences for a document, with byte offsets into the
    /// same text the pipeline was given.
    async fn entities(&self, document_id: &DocumentId) -> Result<Vec<EntitySpan>, EntityError>;
}

/// Provider serving precomputed spans from memory.
#[derive(Debug, Default)]
pub struct PrecomputedEntities {
    spans: HashMap<DocumentId, Vec<EntitySpan>>,
}

impl PrecomputedEntities {
    pub fn new() -> Self {
        Self {
            spans: HashMap::new(),
        }
    }

    /// Register the spans for one document, replacing any previous set
    pub fn insert(&mut self, document_id: DocumentId, spans: Vec<EntitySpan>) {
        self.spans.insert(document_id, spans);
    }
}

#[async_trait]
impl EntityProvider for PrecomputedEntities {
    async fn entities(&self, document_id: &DocumentId) -> Result<Vec<EntitySpan>, EntityError> {
        Ok(self.spans.get(document_id).cloned().unwrap_or_default())
    }
}

/// Attach entity names to every chunk whose window overlaps the span.
///
/// Overlap is judged on byte offsets, so a span falling inside a chunk
/// overlap region lands on both chunks that share it.
pub fn attach(chunks: &mut [crate::document::Chunk], spans: &[EntitySpan]) {
    for span in spans {
        for chunk in chunks.iter_mut() {
            if span.start < chunk.end_offset && span.end > chunk.start_offset {
                chunk.entities.insert(span.name.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Chunk;

    fn chunk_at(index: usize, start: usize, end: usize, text: &str) -> Chunk {
        Chunk::new(DocumentId::from_string("doc-1"), index, start, end, text)
    }

    #[tokio::test]
    async fn test_precomputed_lookup() {
        let mut provider = PrecomputedEntities::new();
        provider.insert(
            DocumentId::from_string("doc-1"),
            vec![EntitySpan::new("Katherine River", EntityKind::Place, 10, 25)],
        );

        let spans = provider
            .entities(&DocumentId::from_string("doc-1"))
            .await
            .unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, "Katherine River");

        let missing = provider
            .entities(&DocumentId::from_string("doc-2"))
            .await
            .unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_attach_by_offset_overlap() {
        let mut chunks = vec![
            chunk_at(0, 0, 40, "The river flows past the old town site."),
            chunk_at(1, 30, 70, "town site. Rangers watch the waterhole."),
        ];
        let spans = vec![
            EntitySpan::new("Old Town", EntityKind::Place, 25, 33),
            EntitySpan::new("Rangers", EntityKind::Other, 41, 48),
        ];

        attach(&mut chunks, &spans);

        // Span crossing the chunk boundary lands on both sides
        assert!(chunks[0].entities.contains("Old Town"));
        assert!(chunks[1].entities.contains("Old Town"));
        assert!(!chunks[0].entities.contains("Rangers"));
        assert!(chunks[1].entities.contains("Rangers"));
    }

    #[test]
    fn test_attach_outside_any_chunk() {
        let mut chunks = vec![chunk_at(0, 0, 10, "Short text")];
        let spans = vec![EntitySpan::new("Elsewhere", EntityKind::Place, 50, 60)];

        attach(&mut chunks, &spans);

        assert!(chunks[0].entities.is_empty());
    }

    #[test]
    fn test_span_serialization_shape() {
        let span = EntitySpan::new("Mary Smith", EntityKind::Person, 0, 10);
        let json = serde_json::to_value(&span).unwrap();

        assert_eq!(json["kind"], "person");
        assert_eq!(json["name"], "Mary Smith");
    }
}
