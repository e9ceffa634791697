//! Document record: the result bundle for one processed document

use super::chunk::{Chunk, ChunkId, SensitivityLevel};
use super::relationship::Relationship;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a document
///
/// Serializes as a plain string (UUID or semantic ID like "doc:collection/7")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a new random DocumentId (UUID-based)
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create a DocumentId from a string (semantic ID)
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Metadata about a document record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// When the record was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated
    pub updated_at: Option<DateTime<Utc>>,
    /// Where the document text came from (file path, archive reference, etc.)
    pub source: Option<String>,
}

/// Everything the pipeline derived from one document
///
/// Records are derived artifacts: reprocessing a document replaces its record
/// wholesale, and chunks and relationships are never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Document this record was derived from
    pub document_id: DocumentId,
    /// Chunks in index order
    pub chunks: Vec<Chunk>,
    /// Relationships between chunk pairs
    pub relationships: Vec<Relationship>,
    /// Record metadata
    pub metadata: RecordMetadata,
    /// Document-level warnings (per-chunk warnings live on the chunks)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl DocumentRecord {
    /// Create an empty record for the given document
    pub fn new(document_id: DocumentId) -> Self {
        Self {
            document_id,
            chunks: Vec::new(),
            relationships: Vec::new(),
            metadata: RecordMetadata {
                created_at: Some(Utc::now()),
                ..Default::default()
            },
            warnings: Vec::new(),
        }
    }

    /// Set the source reference
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.metadata.source = Some(source.into());
        self
    }

    /// Append a chunk
    ///
    /// Chunks are expected in index order; the pipeline always produces them
    /// that way.
    pub fn add_chunk(&mut self, chunk: Chunk) -> ChunkId {
        let id = chunk.id;
        self.chunks.push(chunk);
        self.touch();
        id
    }

    /// Add a relationship, deduplicating per unordered pair and kind
    ///
    /// A duplicate keeps the higher strength and the union of the evidence,
    /// so repeated derivation passes converge instead of accumulating.
    pub fn add_relationship(&mut self, relationship: Relationship) {
        let existing = self
            .relationships
            .iter_mut()
            .find(|r| r.kind == relationship.kind && r.pair() == relationship.pair());

        if let Some(existing) = existing {
            existing.strength = existing.strength.max(relationship.strength);
            for item in relationship.evidence {
                if !existing.evidence.contains(&item) {
                    existing.evidence.push(item);
                }
            }
            existing.evidence.sort();
        } else {
            self.relationships.push(relationship);
        }
        self.touch();
    }

    /// Record a document-level warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
        self.touch();
    }

    /// Get a chunk by ID
    pub fn get_chunk(&self, id: &ChunkId) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.id == *id)
    }

    /// Get all chunks in index order
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter()
    }

    /// Get all relationships
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter()
    }

    /// Get the relationships touching the given chunk
    pub fn relationships_for(&self, id: ChunkId) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter().filter(move |r| r.involves(id))
    }

    /// Get the number of chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Get the number of relationships
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Highest sensitivity tier across all chunks
    pub fn max_sensitivity(&self) -> SensitivityLevel {
        self.chunks
            .iter()
            .map(|c| c.sensitivity)
            .max()
            .unwrap_or_default()
    }

    /// True when any chunk is flagged for elder review
    pub fn requires_elder_review(&self) -> bool {
        self.chunks.iter().any(|c| c.requires_elder_review)
    }

    /// Update the last modified timestamp
    fn touch(&mut self) {
        self.metadata.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(record: &DocumentRecord, index: usize, text: &str) -> Chunk {
        let start = index * 100;
        Chunk::new(
            record.document_id.clone(),
            index,
            start,
            start + text.len(),
            text,
        )
    }

    #[test]
    fn test_add_relationship_duplicate_pair_keeps_stronger() {
        let mut record = DocumentRecord::new(DocumentId::from_string("doc:test"));
        let a = record.add_chunk(chunk(&record, 0, "first"));
        let b = record.add_chunk(chunk(&record, 1, "second"));

        record.add_relationship(Relationship::co_occurrence(
            a,
            b,
            0.3,
            vec!["water".to_string()],
        ));
        // Same unordered pair, reversed endpoints, higher strength
        record.add_relationship(Relationship::co_occurrence(
            b,
            a,
            0.6,
            vec!["river".to_string()],
        ));

        assert_eq!(record.relationship_count(), 1);
        let rel = &record.relationships[0];
        assert_eq!(rel.strength, 0.6);
        assert_eq!(rel.evidence, vec!["river", "water"]);
    }

    #[test]
    fn test_add_relationship_different_kinds_coexist() {
        let mut record = DocumentRecord::new(DocumentId::from_string("doc:test"));
        let a = record.add_chunk(chunk(&record, 0, "first"));
        let b = record.add_chunk(chunk(&record, 1, "second"));

        record.add_relationship(Relationship::co_occurrence(a, b, 0.4, vec![]));
        record.add_relationship(Relationship::shared_entity(a, b, 0.5, vec![]));

        assert_eq!(record.relationship_count(), 2);
    }

    #[test]
    fn test_sensitivity_rollup_takes_highest_tier() {
        let mut record = DocumentRecord::new(DocumentId::from_string("doc:test"));
        let mut first = chunk(&record, 0, "open knowledge");
        first.sensitivity = SensitivityLevel::Community;
        let mut second = chunk(&record, 1, "initiated only");
        second.sensitivity = SensitivityLevel::Restricted;
        second.requires_elder_review = true;
        record.add_chunk(first);
        record.add_chunk(second);

        assert_eq!(record.max_sensitivity(), SensitivityLevel::Restricted);
        assert!(record.requires_elder_review());
    }

    #[test]
    fn test_empty_record_rolls_up_to_public() {
        let record = DocumentRecord::new(DocumentId::from_string("doc:test"));
        assert_eq!(record.max_sensitivity(), SensitivityLevel::Public);
        assert!(!record.requires_elder_review());
    }

    #[test]
    fn test_relationships_for_filters_by_endpoint() {
        let mut record = DocumentRecord::new(DocumentId::from_string("doc:test"));
        let a = record.add_chunk(chunk(&record, 0, "first"));
        let b = record.add_chunk(chunk(&record, 1, "second"));
        let c = record.add_chunk(chunk(&record, 2, "third"));

        record.add_relationship(Relationship::co_occurrence(a, b, 0.4, vec![]));
        record.add_relationship(Relationship::co_occurrence(b, c, 0.4, vec![]));

        assert_eq!(record.relationships_for(a).count(), 1);
        assert_eq!(record.relationships_for(b).count(), 2);
    }
}
