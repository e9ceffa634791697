//! Analyzer trait and registry for per-chunk analysis passes

use super::types::{AnalysisError, AnalyzerOutcome};
use std::sync::Arc;

/// Trait for chunk analyzers
///
/// Analyzers inspect one chunk of text and contribute a partial outcome:
/// a sensitivity classification, keywords, a readability score, or any
/// combination. Implementations must be deterministic so that repeated
/// runs over the same document produce identical results.
///
/// # Example
///
/// ```ignore
/// struct UppercaseAnalyzer;
///
/// impl ChunkAnalyzer for UppercaseAnalyzer {
///     fn id(&self) -> &str { "uppercase-ratio" }
///     fn name(&self) -> &str { "Uppercase Ratio Analyzer" }
///
///     fn analyze(&self, text: &str) -> Result<AnalyzerOutcome, AnalysisError> {
///         // Inspect text and build an outcome
///         Ok(AnalyzerOutcome::new())
///     }
/// }
/// ```
pub trait ChunkAnalyzer: Send + Sync {
    /// Unique identifier for this analyzer
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Priority for merge order (lower = earlier)
    ///
    /// Default is 100. Use lower values for analyzers whose output should
    /// win when two analyzers report the same field.
    fn priority(&self) -> u32 {
        100
    }

    /// Analyze one chunk of text
    ///
    /// Returns the fields this analyzer contributes to the chunk.
    fn analyze(&self, text: &str) -> Result<AnalyzerOutcome, AnalysisError>;
}

/// Registry of available analyzers
///
/// Analyzers are held behind `Arc` so the pipeline can hand cheap clones
/// to the tasks fanning out over a document's chunks.
pub struct AnalyzerRegistry {
    analyzers: Vec<Arc<dyn ChunkAnalyzer>>,
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            analyzers: Vec::new(),
        }
    }

    /// Register an analyzer
    pub fn register<A: ChunkAnalyzer + 'static>(&mut self, analyzer: A) {
        self.analyzers.push(Arc::new(analyzer));
    }

    /// Get all analyzers sorted by priority
    pub fn analyzers(&self) -> Vec<Arc<dyn ChunkAnalyzer>> {
        let mut analyzers = self.analyzers.clone();
        analyzers.sort_by_key(|a| a.priority());
        analyzers
    }

    /// Number of registered analyzers
    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test analyzer implementation
    struct TestAnalyzer {
        id: &'static str,
        priority: u32,
    }

    impl ChunkAnalyzer for TestAnalyzer {
        fn id(&self) -> &str {
            self.id
        }
        fn name(&self) -> &str {
            "Test Analyzer"
        }
        fn priority(&self) -> u32 {
            self.priority
        }
        fn analyze(&self, _text: &str) -> Result<AnalyzerOutcome, AnalysisError> {
            Ok(AnalyzerOutcome::new())
        }
    }

    #[test]
    fn test_registry_ordering() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(TestAnalyzer {
            id: "high",
            priority: 200,
        });
        registry.register(TestAnalyzer {
            id: "low",
            priority: 50,
        });
        registry.register(TestAnalyzer {
            id: "medium",
            priority: 100,
        });

        let analyzers = registry.analyzers();
        assert_eq!(analyzers[0].id(), "low");
        assert_eq!(analyzers[1].id(), "medium");
        assert_eq!(analyzers[2].id(), "high");
    }

    #[test]
    fn test_empty_registry() {
        let registry = AnalyzerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
