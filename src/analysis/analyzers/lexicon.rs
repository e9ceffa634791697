//! Fixed lexicon of traditional-knowledge indicator terms
//!
//! Maps cultural and ceremonial terms to the sensitivity tier their
//! presence implies. The tables are pure reference data: they are built
//! once on first use and never mutated afterwards.

use crate::document::SensitivityLevel;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Terms describing ceremony, ritual, and sacred places
const SACRED_TERMS: &[&str] = &[
    "sacred",
    "sacred site",
    "sacred sites",
    "ceremony",
    "ceremonies",
    "ceremonial",
    "ritual",
    "rituals",
    "initiation",
    "songline",
    "songlines",
    "dreaming story",
    "dreaming stories",
    "sorry business",
    "men's business",
    "women's business",
    "burial ground",
    "burial grounds",
];

/// Kinship and protocol terms whose detail is held by specific custodians
const RESTRICTED_TERMS: &[&str] = &[
    "restricted",
    "kinship",
    "skin name",
    "skin names",
    "moiety",
    "moieties",
    "totem",
    "totems",
    "clan",
    "custodian",
    "custodians",
    "initiated",
    "elders only",
    "secret",
];

/// General cultural-heritage terms appropriate for community circulation
const COMMUNITY_TERMS: &[&str] = &[
    "traditional knowledge",
    "cultural heritage",
    "cultural protocol",
    "cultural protocols",
    "bush medicine",
    "bush tucker",
    "elder",
    "elders",
    "traditional owner",
    "traditional owners",
    "language group",
    "language groups",
    "native title",
];

/// Term to tier lookup, built once at first use
static LEXICON: Lazy<HashMap<&'static str, SensitivityLevel>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for term in SACRED_TERMS {
        map.insert(*term, SensitivityLevel::Sacred);
    }
    for term in RESTRICTED_TERMS {
        map.insert(*term, SensitivityLevel::Restricted);
    }
    for term in COMMUNITY_TERMS {
        map.insert(*term, SensitivityLevel::Community);
    }
    map
});

/// Single case-insensitive pattern matching any lexicon term on word
/// boundaries. Alternatives are ordered longest-first so multi-word
/// phrases win over their single-word prefixes.
static TERM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let mut terms: Vec<&str> = LEXICON.keys().copied().collect();
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("lexicon pattern is valid")
});

/// Look up the tier a lexicon term belongs to.
///
/// The term must be lowercase; returns `None` for words outside the lexicon.
pub(crate) fn tier_of(term: &str) -> Option<SensitivityLevel> {
    LEXICON.get(term).copied()
}

/// Matcher over every lexicon term
pub(crate) fn pattern() -> &'static Regex {
    &TERM_PATTERN
}
