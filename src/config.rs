//! Pipeline configuration and validation

use thiserror::Error;

/// Default word budget per chunk
pub const DEFAULT_TARGET_CHUNK_WORDS: usize = 500;
/// Default word overlap between neighboring chunks (about 30% of the budget)
pub const DEFAULT_OVERLAP_WORDS: usize = 150;
/// Default minimum segment length in characters
pub const DEFAULT_MIN_SEGMENT_CHARS: usize = 20;
/// Default minimum document length in characters
pub const DEFAULT_MIN_DOCUMENT_CHARS: usize = 50;
/// Default number of keywords kept per chunk
pub const DEFAULT_KEYWORD_COUNT: usize = 5;
/// Default minimum strength for an emitted relationship
pub const DEFAULT_RELATIONSHIP_THRESHOLD: f32 = 0.15;

/// Configuration errors surfaced before any document is processed
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("target_chunk_words must be at least 1")]
    ZeroChunkTarget,

    #[error("overlap_words ({overlap}) must be smaller than target_chunk_words ({target})")]
    OverlapTooLarge { overlap: usize, target: usize },

    #[error("keyword_count must be at least 1")]
    ZeroKeywordCount,

    #[error("relationship_threshold ({0}) must be within 0.0..=1.0")]
    ThresholdOutOfRange(f32),

    #[error("max_concurrency must be at least 1")]
    ZeroConcurrency,
}

/// Configuration for the processing pipeline
///
/// All fields have working defaults; `validate` is checked once at pipeline
/// construction so invalid combinations never reach a document.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Word budget per chunk
    pub target_chunk_words: usize,
    /// Words shared between neighboring chunks
    pub overlap_words: usize,
    /// Segments shorter than this many characters merge into a neighbor
    pub min_segment_chars: usize,
    /// Documents shorter than this many characters are rejected
    pub min_document_chars: usize,
    /// Keywords kept per chunk
    pub keyword_count: usize,
    /// Minimum strength for an emitted relationship
    pub relationship_threshold: f32,
    /// Upper bound on concurrently analyzed chunks
    pub max_concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineConfig {
    /// Create a config with the default budgets
    pub fn new() -> Self {
        Self {
            target_chunk_words: DEFAULT_TARGET_CHUNK_WORDS,
            overlap_words: DEFAULT_OVERLAP_WORDS,
            min_segment_chars: DEFAULT_MIN_SEGMENT_CHARS,
            min_document_chars: DEFAULT_MIN_DOCUMENT_CHARS,
            keyword_count: DEFAULT_KEYWORD_COUNT,
            relationship_threshold: DEFAULT_RELATIONSHIP_THRESHOLD,
            max_concurrency: default_concurrency(),
        }
    }

    /// Set the chunk word budget and overlap
    pub fn with_chunking(mut self, target_chunk_words: usize, overlap_words: usize) -> Self {
        self.target_chunk_words = target_chunk_words;
        self.overlap_words = overlap_words;
        self
    }

    /// Set the number of keywords kept per chunk
    pub fn with_keyword_count(mut self, keyword_count: usize) -> Self {
        self.keyword_count = keyword_count;
        self
    }

    /// Set the minimum strength for an emitted relationship
    pub fn with_relationship_threshold(mut self, threshold: f32) -> Self {
        self.relationship_threshold = threshold;
        self
    }

    /// Set the upper bound on concurrently analyzed chunks
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Set the minimum document length in characters
    pub fn with_min_document_chars(mut self, min_document_chars: usize) -> Self {
        self.min_document_chars = min_document_chars;
        self
    }

    /// Check the field ranges and cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_chunk_words == 0 {
            return Err(ConfigError::ZeroChunkTarget);
        }
        if self.overlap_words >= self.target_chunk_words {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.overlap_words,
                target: self.target_chunk_words,
            });
        }
        if self.keyword_count == 0 {
            return Err(ConfigError::ZeroKeywordCount);
        }
        if !(0.0..=1.0).contains(&self.relationship_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.relationship_threshold));
        }
        if self.max_concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }
}

fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = PipelineConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_chunk_words, 500);
        assert_eq!(config.overlap_words, 150);
        assert_eq!(config.keyword_count, 5);
        assert!(config.max_concurrency >= 1);
    }

    #[test]
    fn test_overlap_must_stay_below_target() {
        let config = PipelineConfig::new().with_chunking(100, 100);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OverlapTooLarge {
                overlap: 100,
                target: 100
            })
        ));

        let config = PipelineConfig::new().with_chunking(100, 99);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_threshold_range_is_checked() {
        let config = PipelineConfig::new().with_relationship_threshold(1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOutOfRange(_))
        ));

        let config = PipelineConfig::new().with_relationship_threshold(-0.1);
        assert!(config.validate().is_err());

        let config = PipelineConfig::new().with_relationship_threshold(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_counts_are_rejected() {
        assert!(matches!(
            PipelineConfig::new().with_keyword_count(0).validate(),
            Err(ConfigError::ZeroKeywordCount)
        ));
        assert!(matches!(
            PipelineConfig::new().with_max_concurrency(0).validate(),
            Err(ConfigError::ZeroConcurrency)
        ));
        assert!(matches!(
            PipelineConfig::new().with_chunking(0, 0).validate(),
            Err(ConfigError::ZeroChunkTarget)
        ));
    }
}
