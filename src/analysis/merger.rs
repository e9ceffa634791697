//! Outcome merger for combining analyzer outputs into chunk fields
//!
//! Handles priority ordering, classification merging, and conservative
//! defaults when an analyzer fails.

use super::types::{AnalysisError, AnalyzerOutcome, Classification};
use crate::document::{Chunk, SensitivityLevel};
use std::collections::BTreeSet;

/// Merges per-analyzer outcomes into a chunk
///
/// Outcomes are applied in analyzer priority order. Classifications merge
/// by keeping the highest tier, or-ing the review flags, and taking the
/// union of indicators; for keywords and readability the first analyzer
/// to report a value wins.
///
/// A failing analyzer is isolated to the fields it would have produced:
/// the chunk keeps every field a successful analyzer reported, gains a
/// warning naming the failed analyzer, and falls back to the community
/// tier when no classification was produced at all. A chunk whose whole
/// analysis failed is therefore still emitted, carrying the community
/// tier, no keywords, and the warning marker.
pub struct OutcomeMerger;

impl Default for OutcomeMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeMerger {
    pub fn new() -> Self {
        Self
    }

    /// Apply analyzer outcomes to a chunk
    ///
    /// `outcomes` pairs each analyzer id with its result, in priority order.
    pub fn apply(
        &self,
        chunk: &mut Chunk,
        outcomes: Vec<(String, Result<AnalyzerOutcome, AnalysisError>)>,
    ) {
        let mut merged: Option<Classification> = None;
        let mut keywords: Option<Vec<String>> = None;
        let mut readability: Option<f32> = None;
        let mut failed = false;

        for (analyzer_id, outcome) in outcomes {
            match outcome {
                Ok(result) => {
                    if let Some(classification) = result.classification {
                        merged = Some(match merged.take() {
                            Some(current) => combine(current, classification),
                            None => classification,
                        });
                    }
                    if keywords.is_none() {
                        keywords = result.keywords;
                    }
                    if readability.is_none() {
                        readability = result.readability;
                    }
                    for warning in result.warnings {
                        chunk.add_warning(warning);
                    }
                }
                Err(error) => {
                    failed = true;
                    chunk.add_warning(format!("analyzer '{}' failed: {}", analyzer_id, error));
                }
            }
        }

        let classification = merged.unwrap_or_else(|| {
            if failed {
                // Unclassified after a failure: conservative floor, flagged
                // for a human via the warning rather than the review bit
                Classification {
                    level: SensitivityLevel::Community,
                    requires_elder_review: false,
                    indicators: BTreeSet::new(),
                }
            } else {
                Classification::public()
            }
        });

        chunk.sensitivity = classification.level;
        chunk.requires_elder_review = classification.requires_elder_review;
        chunk.indicators = classification.indicators;
        chunk.keywords = keywords.unwrap_or_default();
        chunk.readability = readability.unwrap_or(0.0);
    }
}

/// Combine two classifications, never lowering the tier
fn combine(a: Classification, b: Classification) -> Classification {
    Classification {
        level: a.level.max(b.level),
        requires_elder_review: a.requires_elder_review || b.requires_elder_review,
        indicators: a.indicators.into_iter().chain(b.indicators).collect(),
    }
}
