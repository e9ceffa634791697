//! Chunk representation: a position-tracked window of document text

use super::record::DocumentId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Unique identifier for a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkId(Uuid);

impl ChunkId {
    /// Create a new random ChunkId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derive the ChunkId for a given document and chunk index
    ///
    /// Deterministic (UUID v5), so reprocessing a document yields the same
    /// ids and callers can upsert by id.
    pub fn from_document_index(document_id: &DocumentId, index: usize) -> Self {
        let name = format!("{}#{}", document_id.as_str(), index);
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()))
    }

    /// Create a ChunkId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cultural sensitivity tier assigned to a chunk
///
/// Tiers are ordered: `Public < Community < Restricted < Sacred`. A chunk's
/// tier is the highest tier among its matched indicators, never an average,
/// so adding indicators can only hold or raise the tier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityLevel {
    /// No cultural constraints detected
    #[default]
    Public,
    /// General community knowledge
    Community,
    /// Restricted knowledge (kinship, gendered, or initiated-only material)
    Restricted,
    /// Sacred or ceremonial material
    Sacred,
}

impl SensitivityLevel {
    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            SensitivityLevel::Public => "public",
            SensitivityLevel::Community => "community",
            SensitivityLevel::Restricted => "restricted",
            SensitivityLevel::Sacred => "sacred",
        }
    }
}

impl std::fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified chunk of document text
///
/// Offsets are byte positions into the original document text, so
/// `original[start_offset..end_offset] == text` always holds. Neighboring
/// chunks overlap by design; the overlap region belongs to both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Unique identifier, derived from document id + index
    pub id: ChunkId,
    /// Document this chunk was cut from
    pub document_id: DocumentId,
    /// Position in the chunk sequence, contiguous from 0
    pub index: usize,
    /// Byte offset of the first character in the original text
    pub start_offset: usize,
    /// Byte offset one past the last character in the original text
    pub end_offset: usize,
    /// The chunk text, an exact slice of the original
    pub text: String,
    /// Number of whitespace-separated words
    pub word_count: usize,
    /// Cultural sensitivity tier
    pub sensitivity: SensitivityLevel,
    /// Whether the chunk must be routed to elder review before publication
    pub requires_elder_review: bool,
    /// Lexicon terms that triggered the classification
    pub indicators: BTreeSet<String>,
    /// Top keywords in rank order
    pub keywords: Vec<String>,
    /// Flesch reading-ease score, clamped to [0, 100]
    pub readability: f32,
    /// Names of entities whose spans intersect this chunk
    pub entities: BTreeSet<String>,
    /// Non-fatal problems encountered while analyzing this chunk
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Chunk {
    /// Create an unclassified chunk for the given window of document text
    pub fn new(
        document_id: DocumentId,
        index: usize,
        start_offset: usize,
        end_offset: usize,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let word_count = text.split_whitespace().count();
        Self {
            id: ChunkId::from_document_index(&document_id, index),
            document_id,
            index,
            start_offset,
            end_offset,
            text,
            word_count,
            sensitivity: SensitivityLevel::default(),
            requires_elder_review: false,
            indicators: BTreeSet::new(),
            keywords: Vec::new(),
            readability: 0.0,
            entities: BTreeSet::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a non-fatal problem against this chunk
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Byte length of the chunk window
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// True when the window is empty (never the case for built chunks)
    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }
}
