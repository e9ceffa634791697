//! Relationship builder — derives typed links between chunk pairs
//!
//! Scans every unordered pair of chunks within one document and emits
//! `co_occurrence` edges from keyword overlap and `shared_entity` edges
//! from entity-set overlap. Pairs below the strength threshold are
//! omitted entirely rather than stored at zero strength.
//!
//! Pairwise scanning is O(n²) in chunk count, which stays cheap because
//! a single document chunks into the low hundreds at most.

use crate::config::DEFAULT_RELATIONSHIP_THRESHOLD;
use crate::document::{Chunk, Relationship};
use std::collections::HashSet;

/// Shared keywords required before a pair counts as co-occurring
const MIN_KEYWORD_OVERLAP: usize = 2;

/// Builds relationships from a document's complete chunk set
pub struct RelationshipBuilder {
    threshold: f32,
}

impl Default for RelationshipBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RelationshipBuilder {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_RELATIONSHIP_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Derive all relationships between the given chunks
    ///
    /// Each unordered pair is examined once; a pair can yield at most one
    /// relationship of each type. Evidence lists come out sorted, so the
    /// result is deterministic for a given chunk set.
    pub fn build(&self, chunks: &[Chunk]) -> Vec<Relationship> {
        let mut relationships = Vec::new();

        for i in 0..chunks.len() {
            for j in (i + 1)..chunks.len() {
                let a = &chunks[i];
                let b = &chunks[j];

                if let Some(rel) = self.co_occurrence(a, b) {
                    relationships.push(rel);
                }
                if let Some(rel) = self.shared_entity(a, b) {
                    relationships.push(rel);
                }
            }
        }

        relationships
    }

    /// Keyword co-occurrence: at least two shared keywords, strength
    /// normalized by the smaller keyword set
    fn co_occurrence(&self, a: &Chunk, b: &Chunk) -> Option<Relationship> {
        if a.keywords.is_empty() || b.keywords.is_empty() {
            return None;
        }

        let set_a: HashSet<&str> = a.keywords.iter().map(|s| s.as_str()).collect();
        let set_b: HashSet<&str> = b.keywords.iter().map(|s| s.as_str()).collect();
        let shared: Vec<String> = set_a
            .intersection(&set_b)
            .map(|s| s.to_string())
            .collect();

        if shared.len() < MIN_KEYWORD_OVERLAP {
            return None;
        }

        let strength = shared.len() as f32 / set_a.len().min(set_b.len()) as f32;
        if strength < self.threshold {
            return None;
        }

        Some(Relationship::co_occurrence(a.id, b.id, strength, shared))
    }

    /// Shared entities: Jaccard similarity of the two entity sets
    fn shared_entity(&self, a: &Chunk, b: &Chunk) -> Option<Relationship> {
        if a.entities.is_empty() || b.entities.is_empty() {
            return None;
        }

        let shared: Vec<String> = a.entities.intersection(&b.entities).cloned().collect();
        if shared.is_empty() {
            return None;
        }

        let union = a.entities.union(&b.entities).count();
        let strength = shared.len() as f32 / union as f32;
        if strength < self.threshold {
            return None;
        }

        Some(Relationship::shared_entity(a.id, b.id, strength, shared))
    }
}
