//! Core types for per-chunk analysis

use crate::document::SensitivityLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sensitivity classification for one chunk of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Highest tier among the matched indicators, never an average
    pub level: SensitivityLevel,
    /// Whether the material must be routed to elder review
    pub requires_elder_review: bool,
    /// The distinct lexicon terms that matched, lowercased
    pub indicators: BTreeSet<String>,
}

impl Classification {
    /// A public classification with no indicators
    pub fn public() -> Self {
        Self {
            level: SensitivityLevel::Public,
            requires_elder_review: false,
            indicators: BTreeSet::new(),
        }
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::public()
    }
}

/// What one analyzer contributed for one chunk
///
/// Analyzers fill only the fields they own; the merger folds the outcomes of
/// every registered analyzer into the chunk.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerOutcome {
    /// Sensitivity classification, when the analyzer produces one
    pub classification: Option<Classification>,
    /// Ranked keywords, when the analyzer produces them
    pub keywords: Option<Vec<String>>,
    /// Readability score, when the analyzer produces one
    pub readability: Option<f32>,
    /// Non-fatal problems encountered while analyzing
    pub warnings: Vec<String>,
}

impl AnalyzerOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a sensitivity classification
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    /// Attach ranked keywords
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Attach a readability score
    pub fn with_readability(mut self, readability: f32) -> Self {
        self.readability = Some(readability);
        self
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Check if the outcome carries nothing
    pub fn is_empty(&self) -> bool {
        self.classification.is_none()
            && self.keywords.is_none()
            && self.readability.is_none()
            && self.warnings.is_empty()
    }
}

/// Error type for per-chunk analysis
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis failed: {0}")]
    Failed(String),
}
