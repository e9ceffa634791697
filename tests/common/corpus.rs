//! Fixture loading utilities for integration tests
//!
//! Loads the plain-text documents under tests/fixtures and pairs each one
//! with a stable document id derived from its file stem.

use std::path::{Path, PathBuf};
use tessera::DocumentId;
use thiserror::Error;
use walkdir::WalkDir;

/// A document loaded from the fixture corpus
#[derive(Debug, Clone)]
pub struct FixtureDocument {
    /// Document id derived from the file stem (e.g. "doc:ranger_survey")
    pub id: DocumentId,
    /// File stem (e.g. "ranger_survey")
    pub name: String,
    /// Full document text
    pub text: String,
}

/// The loaded fixture corpus
#[derive(Debug)]
pub struct TestCorpus {
    /// All fixture documents, in file-name order
    pub documents: Vec<FixtureDocument>,
}

impl TestCorpus {
    /// Load every .txt fixture under tests/fixtures
    pub fn load() -> Result<Self, CorpusError> {
        let root = fixture_root();
        if !root.exists() {
            return Err(CorpusError::NotFound(root));
        }
        let documents = load_text_files(&root)?;
        Ok(Self { documents })
    }

    /// Get a fixture document by file stem
    pub fn get(&self, name: &str) -> Option<&FixtureDocument> {
        self.documents.iter().find(|d| d.name == name)
    }

    /// Number of loaded documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when no fixtures were found
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// The fixture corpus root directory
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_text_files(root: &Path) -> Result<Vec<FixtureDocument>, CorpusError> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "txt")
                .unwrap_or(false)
        })
    {
        let path = entry.path();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CorpusError::ReadError(path.to_path_buf(), e))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        documents.push(FixtureDocument {
            id: DocumentId::from_string(format!("doc:{}", name)),
            name,
            text,
        });
    }

    Ok(documents)
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("fixture directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {}", .0.display(), .1)]
    ReadError(PathBuf, std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_root_exists() {
        assert!(fixture_root().exists(), "tests/fixtures missing");
    }

    #[test]
    fn test_corpus_loads_all_fixtures() {
        let corpus = TestCorpus::load().unwrap();
        assert!(!corpus.is_empty());
        assert!(corpus.len() >= 4, "expected the four fixture documents");
        assert!(corpus.get("ranger_survey").is_some());
    }
}
