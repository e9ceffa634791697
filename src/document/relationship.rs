//! Relationship representation: derived links between chunk pairs

use super::chunk::ChunkId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipId(Uuid);

impl RelationshipId {
    /// Create a new random RelationshipId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RelationshipId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kinds of relationship between chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// Chunks share enough ranked keywords to suggest a common topic
    CoOccurrence,
    /// Similarity score attached by an external embedding service
    SemanticSimilarity,
    /// Chunks mention at least one of the same entities
    SharedEntity,
}

impl RelationshipType {
    /// Stable snake_case name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::CoOccurrence => "co_occurrence",
            RelationshipType::SemanticSimilarity => "semantic_similarity",
            RelationshipType::SharedEntity => "shared_entity",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An undirected relationship between two chunks
///
/// Pairs are unordered: constructors store the endpoints in canonical
/// (sorted) order, so `(a, b)` and `(b, a)` produce the same relationship
/// and deduplicate against each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier
    pub id: RelationshipId,
    /// First endpoint (canonical lower chunk id)
    pub source: ChunkId,
    /// Second endpoint (canonical higher chunk id)
    pub target: ChunkId,
    /// Kind of relationship
    pub kind: RelationshipType,
    /// Relationship strength (0.0 - 1.0)
    pub strength: f32,
    /// Shared terms or entity names supporting the relationship, sorted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
}

impl Relationship {
    fn build(
        source: ChunkId,
        target: ChunkId,
        kind: RelationshipType,
        strength: f32,
        mut evidence: Vec<String>,
    ) -> Self {
        let (source, target) = if source <= target {
            (source, target)
        } else {
            (target, source)
        };
        evidence.sort();
        evidence.dedup();
        Self {
            id: RelationshipId::new(),
            source,
            target,
            kind,
            strength: strength.clamp(0.0, 1.0),
            evidence,
        }
    }

    /// Create a keyword co-occurrence relationship
    pub fn co_occurrence(
        source: ChunkId,
        target: ChunkId,
        strength: f32,
        shared_keywords: Vec<String>,
    ) -> Self {
        Self::build(
            source,
            target,
            RelationshipType::CoOccurrence,
            strength,
            shared_keywords,
        )
    }

    /// Create a shared-entity relationship
    pub fn shared_entity(
        source: ChunkId,
        target: ChunkId,
        strength: f32,
        shared_entities: Vec<String>,
    ) -> Self {
        Self::build(
            source,
            target,
            RelationshipType::SharedEntity,
            strength,
            shared_entities,
        )
    }

    /// Create a semantic-similarity relationship from an externally computed
    /// score
    ///
    /// The pipeline never computes these itself; callers with an embedding
    /// service can attach them to a record alongside the built-in kinds.
    pub fn semantic_similarity(source: ChunkId, target: ChunkId, score: f32) -> Self {
        Self::build(
            source,
            target,
            RelationshipType::SemanticSimilarity,
            score,
            Vec::new(),
        )
    }

    /// The unordered endpoint pair in canonical order
    pub fn pair(&self) -> (ChunkId, ChunkId) {
        (self.source, self.target)
    }

    /// True when the given chunk is one of the endpoints
    pub fn involves(&self, id: ChunkId) -> bool {
        self.source == id || self.target == id
    }
}
