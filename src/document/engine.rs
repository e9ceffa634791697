//! TesseraEngine: in-memory registry of processed document records

use super::record::{DocumentId, DocumentRecord};
use dashmap::DashMap;
use thiserror::Error;

/// Errors that can occur in engine operations
#[derive(Debug, Error)]
pub enum TesseraError {
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type TesseraResult<T> = Result<T, TesseraError>;

/// In-memory registry of document records
///
/// Records are derived artifacts, so the engine only ever replaces them
/// wholesale: reprocessing a document swaps in the new record, and removal
/// drops chunks and relationships together.
#[derive(Debug, Default)]
pub struct TesseraEngine {
    /// All records managed by this engine
    records: DashMap<DocumentId, DocumentRecord>,
}

impl TesseraEngine {
    /// Create a new TesseraEngine
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Store or replace the record for a document
    ///
    /// If a record for the same document already exists, it is replaced.
    /// Returns the document ID.
    pub fn upsert_document(&self, record: DocumentRecord) -> DocumentId {
        let id = record.document_id.clone();
        self.records.insert(id.clone(), record);
        id
    }

    /// Get a document record by ID
    pub fn get_document(&self, id: &DocumentId) -> Option<DocumentRecord> {
        self.records.get(id).map(|r| r.clone())
    }

    /// Remove a document record
    pub fn remove_document(&self, id: &DocumentId) -> Option<DocumentRecord> {
        self.records.remove(id).map(|(_, record)| record)
    }

    /// List all document IDs
    pub fn list_documents(&self) -> Vec<DocumentId> {
        self.records.iter().map(|r| r.key().clone()).collect()
    }

    /// Get the number of stored records
    pub fn document_count(&self) -> usize {
        self.records.len()
    }

    /// Check if a record exists for a document
    pub fn has_document(&self, id: &DocumentId) -> bool {
        self.records.contains_key(id)
    }

    /// Serialize a record to JSON for the caller to persist
    pub fn export_document(&self, id: &DocumentId) -> TesseraResult<String> {
        let record = self
            .get_document(id)
            .ok_or_else(|| TesseraError::DocumentNotFound(id.clone()))?;
        Ok(serde_json::to_string_pretty(&record)?)
    }

    /// Load a previously exported record back into the engine
    pub fn import_document(&self, json: &str) -> TesseraResult<DocumentId> {
        let record: DocumentRecord = serde_json::from_str(json)?;
        Ok(self.upsert_document(record))
    }
}
