//! Sensitivity analyzer
//!
//! Scans chunk text for traditional-knowledge indicator terms and assigns
//! a sensitivity tier plus an elder-review flag.

use super::lexicon;
use crate::analysis::{AnalysisError, AnalyzerOutcome, ChunkAnalyzer, Classification};
use crate::document::SensitivityLevel;
use std::collections::BTreeSet;

/// Analyzer that classifies text against the traditional-knowledge lexicon
///
/// The tier is the highest tier among all matched terms: a single sacred
/// term outweighs any number of community terms. Elder review is required
/// for sacred content, and for restricted content carrying two or more
/// distinct indicator terms. Compounding indicators escalate review but
/// never the stored tier itself.
pub struct SensitivityAnalyzer {
    priority: u32,
}

impl Default for SensitivityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SensitivityAnalyzer {
    pub fn new() -> Self {
        Self { priority: 10 } // Classification runs before lexical statistics
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Classify a piece of text against the lexicon
    pub fn classify(&self, text: &str) -> Classification {
        let mut level = SensitivityLevel::Public;
        let mut indicators = BTreeSet::new();

        for found in lexicon::pattern().find_iter(text) {
            let term = found.as_str().to_lowercase();
            if let Some(tier) = lexicon::tier_of(&term) {
                level = level.max(tier);
                indicators.insert(term);
            }
        }

        let requires_elder_review = level == SensitivityLevel::Sacred
            || (level == SensitivityLevel::Restricted && indicators.len() >= 2);

        Classification {
            level,
            requires_elder_review,
            indicators,
        }
    }
}

impl ChunkAnalyzer for SensitivityAnalyzer {
    fn id(&self) -> &str {
        "sensitivity"
    }

    fn name(&self) -> &str {
        "Sensitivity Analyzer"
    }

    fn priority(&self) -> u32 {
        self.priority
    }

    fn analyze(&self, text: &str) -> Result<AnalyzerOutcome, AnalysisError> {
        Ok(AnalyzerOutcome::new().with_classification(self.classify(text)))
    }
}
