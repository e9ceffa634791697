//! Built-in chunk analyzers
//!
//! Programmatic analyzers for sensitivity classification and lexical
//! statistics. All run deterministically with no external services.

mod lexical;
mod lexicon;
mod sensitivity;

pub use lexical::LexicalAnalyzer;
pub use sensitivity::SensitivityAnalyzer;
