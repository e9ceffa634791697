//! Lexical analyzer
//!
//! Extracts frequency-ranked keywords and computes a Flesch reading-ease
//! score for chunk text. Both outputs are pure functions of the input
//! text, so repeated runs always agree.

use crate::analysis::{AnalysisError, AnalyzerOutcome, ChunkAnalyzer};
use crate::config::DEFAULT_KEYWORD_COUNT;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence end pattern is valid"));

/// Common English words excluded from keyword ranking
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "been", "being", "but",
        "by", "can", "could", "did", "do", "does", "for", "from", "had",
        "has", "have", "he", "her", "here", "his", "how", "i", "if", "in",
        "into", "is", "it", "its", "just", "may", "me", "more", "most",
        "must", "my", "no", "none", "nor", "not", "of", "on", "once", "only",
        "or", "our", "out", "over", "she", "should", "so", "some", "such",
        "than", "that", "the", "their", "them", "then", "there", "these",
        "they", "this", "those", "through", "to", "too", "under", "until",
        "up", "very", "was", "we", "were", "what", "when", "where", "which",
        "while", "who", "why", "will", "with", "would", "you", "your",
    ]
    .iter()
    .copied()
    .collect()
});

/// Analyzer producing keywords and a readability score
///
/// Keywords are lowercased tokens ranked by frequency, ties broken by
/// first occurrence, with stopwords removed. Readability follows the
/// Flesch reading-ease formula clamped to [0, 100]; higher means easier.
pub struct LexicalAnalyzer {
    keyword_count: usize,
    priority: u32,
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORD_COUNT)
    }
}

impl LexicalAnalyzer {
    pub fn new(keyword_count: usize) -> Self {
        Self {
            keyword_count,
            priority: 20, // Runs after sensitivity classification
        }
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Top keywords by frequency, ties broken by first occurrence
    pub fn keywords(&self, text: &str) -> Vec<String> {
        let mut stats: HashMap<String, (usize, usize)> = HashMap::new();
        let mut position = 0usize;

        for raw in text.split_whitespace() {
            let token = raw
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if token.len() < 2 || STOPWORDS.contains(token.as_str()) {
                continue;
            }
            let entry = stats.entry(token).or_insert((0, position));
            entry.0 += 1;
            position += 1;
        }

        let mut ranked: Vec<(String, usize, usize)> = stats
            .into_iter()
            .map(|(term, (count, first))| (term, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        ranked
            .into_iter()
            .take(self.keyword_count)
            .map(|(term, _, _)| term)
            .collect()
    }

    /// Flesch reading-ease score clamped to [0, 100]
    pub fn readability(&self, text: &str) -> f32 {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }

        let sentence_count = SENTENCE_END.find_iter(text).count().max(1);
        let syllable_count: usize = words.iter().map(|w| syllables(w)).sum();

        let words_per_sentence = words.len() as f32 / sentence_count as f32;
        let syllables_per_word = syllable_count as f32 / words.len() as f32;

        let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
        score.clamp(0.0, 100.0)
    }
}

/// Count syllables with a vowel-group heuristic.
///
/// Consecutive vowels count as one group; a trailing silent `e` is
/// dropped when another group precedes it. Every word counts at least
/// one syllable.
fn syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut count = 0;
    let mut previous_was_vowel = false;

    for c in lower.chars().filter(|c| c.is_alphabetic()) {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if lower.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

impl ChunkAnalyzer for LexicalAnalyzer {
    fn id(&self) -> &str {
        "lexical"
    }

    fn name(&self) -> &str {
        "Lexical Analyzer"
    }

    fn priority(&self) -> u32 {
        self.priority
    }

    fn analyze(&self, text: &str) -> Result<AnalyzerOutcome, AnalysisError> {
        Ok(AnalyzerOutcome::new()
            .with_keywords(self.keywords(text))
            .with_readability(self.readability(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_rank_by_frequency() {
        let analyzer = LexicalAnalyzer::default();
        let keywords =
            analyzer.keywords("clinic opens Monday. The clinic serves 200 patients weekly.");

        assert_eq!(keywords, vec!["clinic", "opens", "monday", "serves", "200"]);
    }

    #[test]
    fn test_keywords_filter_stopwords() {
        let analyzer = LexicalAnalyzer::default();
        let keywords = analyzer.keywords("the and of with from a an it");

        assert!(keywords.is_empty());
    }

    #[test]
    fn test_keywords_tiebreak_by_first_occurrence() {
        let analyzer = LexicalAnalyzer::default();
        let keywords = analyzer.keywords("river mountain river mountain desert");

        assert_eq!(keywords, vec!["river", "mountain", "desert"]);
    }

    #[test]
    fn test_keyword_limit_applies() {
        let analyzer = LexicalAnalyzer::new(2);
        let keywords = analyzer.keywords("river mountain desert valley plain coast");

        assert_eq!(keywords, vec!["river", "mountain"]);
    }

    #[test]
    fn test_keywords_strip_punctuation() {
        let analyzer = LexicalAnalyzer::default();
        let keywords = analyzer.keywords("\"Harvest!\" (season) ends...");

        assert_eq!(keywords, vec!["harvest", "season", "ends"]);
    }

    #[test]
    fn test_readability_simple_text_scores_high() {
        let analyzer = LexicalAnalyzer::default();
        let score = analyzer.readability("The cat sat. The dog ran.");

        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_readability_dense_text_clamps_to_zero() {
        let analyzer = LexicalAnalyzer::default();
        let score =
            analyzer.readability("Extraordinary incomprehensibility characterizes bureaucracies");

        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_readability_mid_range() {
        let analyzer = LexicalAnalyzer::default();
        let score = analyzer.readability("We met the elders at the river camp today.");

        assert!(score > 0.0 && score < 100.0);
    }

    #[test]
    fn test_readability_is_reproducible() {
        let analyzer = LexicalAnalyzer::default();
        let text = "Seasonal monitoring continues along the northern floodplain each year.";

        assert_eq!(analyzer.readability(text), analyzer.readability(text));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let analyzer = LexicalAnalyzer::default();

        assert!(analyzer.keywords("").is_empty());
        assert_eq!(analyzer.readability(""), 0.0);
    }

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(syllables("cat"), 1);
        assert_eq!(syllables("river"), 2);
        assert_eq!(syllables("ceremony"), 4);
        assert_eq!(syllables("time"), 1);
        assert_eq!(syllables("200"), 1);
    }

    #[test]
    fn test_analyze_fills_lexical_fields_only() {
        let analyzer = LexicalAnalyzer::default();
        let outcome = analyzer.analyze("Rangers patrol the coast each week.").unwrap();

        assert!(outcome.classification.is_none());
        assert!(outcome.keywords.is_some());
        assert!(outcome.readability.is_some());
    }
}
