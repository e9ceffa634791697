//! Document processing pipeline
//!
//! Wires the stages together: validate, segment, build chunk windows,
//! fan per-chunk analysis out across worker tasks, attach entities, then
//! derive relationships over the complete chunk set.
//!
//! Each `process` call is self-contained. The pipeline holds no mutable
//! state between calls, so callers can process many documents in
//! parallel from the same instance.

use crate::analysis::{
    default_registry, AnalysisError, AnalyzerOutcome, AnalyzerRegistry, ChunkAnalyzer,
    OutcomeMerger,
};
use crate::config::{ConfigError, PipelineConfig};
use crate::document::{Chunk, DocumentId, DocumentRecord};
use crate::entities::{self, EntityProvider};
use crate::relations::RelationshipBuilder;
use crate::text::{ChunkBuilder, Segmenter};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Input rejected before any processing started
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("document text is empty")]
    Empty,
    #[error("document text too short: {chars} characters, minimum {min}")]
    TooShort { chars: usize, min: usize },
}

/// Errors surfaced by [`Pipeline::process`]
///
/// Validation and configuration problems are raised before any partial
/// output exists; a process call never returns a half-built record.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    #[error("pipeline task failed: {0}")]
    Internal(String),
}

/// Orchestrates document processing from raw text to a [`DocumentRecord`]
pub struct Pipeline {
    config: PipelineConfig,
    registry: AnalyzerRegistry,
    merger: OutcomeMerger,
    entity_provider: Option<Arc<dyn EntityProvider>>,
    semaphore: Arc<Semaphore>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Create a pipeline with default configuration and the built-in
    /// analyzers
    pub fn new() -> Self {
        Self::assemble(PipelineConfig::new())
    }

    /// Create a pipeline with a custom configuration
    ///
    /// Fails when the configuration is invalid, for example when the
    /// overlap is not smaller than the chunk target.
    pub fn with_config(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self::assemble(config))
    }

    fn assemble(config: PipelineConfig) -> Self {
        let registry = default_registry(config.keyword_count);
        let semaphore = Arc::new(Semaphore::new(config.max_concurrency));
        Self {
            config,
            registry,
            merger: OutcomeMerger::new(),
            entity_provider: None,
            semaphore,
        }
    }

    /// Attach an upstream entity provider
    ///
    /// Without one, `shared_entity` relationships are skipped.
    pub fn with_entity_provider(mut self, provider: Arc<dyn EntityProvider>) -> Self {
        self.entity_provider = Some(provider);
        self
    }

    /// Register an additional analyzer alongside the built-in ones
    pub fn with_analyzer<A: ChunkAnalyzer + 'static>(mut self, analyzer: A) -> Self {
        self.registry.register(analyzer);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process one document into chunks and relationships
    ///
    /// Re-running with the same text and config produces an identical
    /// chunk and relationship set; chunk ids are derived from the
    /// document id and index, so they repeat too.
    pub async fn process(
        &self,
        document_id: DocumentId,
        text: &str,
    ) -> Result<DocumentRecord, PipelineError> {
        self.validate(text)?;

        let segmenter = Segmenter::new(
            self.config.min_segment_chars,
            self.config.target_chunk_words,
        );
        let segments = segmenter.segment(text);
        debug!("segmented {} into {} segments", document_id, segments.len());

        let chunker = ChunkBuilder::new(self.config.target_chunk_words, self.config.overlap_words)?;
        let seeds = chunker.build(text, &segments);
        debug!("cut {} into {} chunk windows", document_id, seeds.len());

        let mut chunks = self.analyze_chunks(&document_id, seeds).await?;

        let mut record = DocumentRecord::new(document_id);

        if let Some(provider) = &self.entity_provider {
            match provider.entities(&record.document_id).await {
                Ok(spans) => entities::attach(&mut chunks, &spans),
                Err(e) => {
                    warn!("entity lookup for {} failed: {}", record.document_id, e);
                    record.add_warning(format!("entity lookup failed: {}", e));
                }
            }
        }

        let relationships = RelationshipBuilder::new()
            .with_threshold(self.config.relationship_threshold)
            .build(&chunks);

        for chunk in chunks {
            record.add_chunk(chunk);
        }
        for relationship in relationships {
            record.add_relationship(relationship);
        }

        info!(
            "processed {}: {} chunks, {} relationships",
            record.document_id,
            record.chunk_count(),
            record.relationship_count()
        );
        Ok(record)
    }

    /// Reject input the pipeline cannot produce meaningful chunks for
    fn validate(&self, text: &str) -> Result<(), ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        let chars = trimmed.chars().count();
        if chars < self.config.min_document_chars {
            return Err(ValidationError::TooShort {
                chars,
                min: self.config.min_document_chars,
            });
        }
        Ok(())
    }

    /// Run every registered analyzer over every chunk window.
    ///
    /// Windows fan out across worker tasks bounded by the concurrency
    /// limit; results are reassembled in index order before relationship
    /// building, so chunk output never depends on completion order.
    async fn analyze_chunks(
        &self,
        document_id: &DocumentId,
        seeds: Vec<crate::text::ChunkSeed>,
    ) -> Result<Vec<Chunk>, PipelineError> {
        let analyzers = self.registry.analyzers();
        let mut join_set = JoinSet::new();

        for seed in seeds {
            let semaphore = Arc::clone(&self.semaphore);
            let analyzers = analyzers.clone();
            join_set.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| format!("semaphore closed: {}", e))?;
                let outcomes: Vec<(String, Result<AnalyzerOutcome, AnalysisError>)> = analyzers
                    .iter()
                    .map(|analyzer| (analyzer.id().to_string(), analyzer.analyze(&seed.text)))
                    .collect();
                Ok((seed, outcomes))
            });
        }

        let mut chunks = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            let task = joined
                .map_err(|e| PipelineError::Internal(format!("analysis task failed: {}", e)))?;
            let (seed, outcomes) = task.map_err(PipelineError::Internal)?;

            let mut chunk = Chunk::new(
                document_id.clone(),
                seed.index,
                seed.start_offset,
                seed.end_offset,
                seed.text,
            );
            self.merger.apply(&mut chunk, outcomes);
            if !chunk.warnings.is_empty() {
                warn!(
                    "chunk {} of {} carries {} warning(s)",
                    chunk.index,
                    document_id,
                    chunk.warnings.len()
                );
            }
            chunks.push(chunk);
        }

        chunks.sort_by_key(|c| c.index);
        Ok(chunks)
    }
}
