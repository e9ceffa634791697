//! Paragraph and sentence segmentation with exact source offsets

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the run of blank lines separating two paragraphs
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph break pattern is valid"));

/// Matches a sentence boundary: terminal punctuation, whitespace, then the
/// uppercase letter opening the next sentence. The letter is captured
/// because regex has no lookahead; the split point is the capture start.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+\s+(\p{Lu})").expect("sentence boundary pattern is valid"));

/// A paragraph or sentence with its position in the original text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The segment text, an exact slice of the original
    pub text: String,
    /// Byte offset of the first character in the original text
    pub start_offset: usize,
    /// Byte offset one past the last character in the original text
    pub end_offset: usize,
}

impl Segment {
    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits raw text into paragraph and sentence segments
///
/// Paragraphs (blank-line separated) are the primary unit. A paragraph
/// longer than `max_segment_words` is split again at sentence boundaries so
/// the chunk builder gets pieces it can pack. Segments shorter than
/// `min_segment_chars` are merged into a neighbor.
///
/// Offsets are never invented: `segment.text` is always the exact slice
/// `original[start_offset..end_offset]`, and trimming moves offsets inward
/// instead of rewriting text. Requiring an uppercase letter after the
/// punctuation keeps decimals and most mid-sentence abbreviations intact;
/// "Dr. Smith" still over-splits, which is acceptable for windowing.
#[derive(Debug, Clone)]
pub struct Segmenter {
    min_segment_chars: usize,
    max_segment_words: usize,
}

impl Segmenter {
    /// Create a segmenter with the given minimum segment length (chars) and
    /// the paragraph word count above which sentences are split out
    pub fn new(min_segment_chars: usize, max_segment_words: usize) -> Self {
        Self {
            min_segment_chars,
            max_segment_words,
        }
    }

    /// Split text into ordered, position-tracked segments
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for brk in PARAGRAPH_BREAK.find_iter(text) {
            self.push_paragraph(text, last_end, brk.start(), &mut segments);
            last_end = brk.end();
        }
        self.push_paragraph(text, last_end, text.len(), &mut segments);

        self.merge_short(segments, text)
    }

    /// Append one paragraph, sentence-splitting it when it is too long
    fn push_paragraph(&self, text: &str, start: usize, end: usize, out: &mut Vec<Segment>) {
        let Some(paragraph) = trimmed(text, start, end) else {
            return;
        };

        if paragraph.word_count() <= self.max_segment_words {
            out.push(paragraph);
            return;
        }

        let mut last = paragraph.start_offset;
        for caps in
            SENTENCE_BOUNDARY.captures_iter(&text[paragraph.start_offset..paragraph.end_offset])
        {
            if let Some(next_sentence) = caps.get(1) {
                let split = paragraph.start_offset + next_sentence.start();
                if let Some(sentence) = trimmed(text, last, split) {
                    out.push(sentence);
                }
                last = split;
            }
        }
        if let Some(sentence) = trimmed(text, last, paragraph.end_offset) {
            out.push(sentence);
        }
    }

    /// Fold segments below the minimum length into a neighbor
    ///
    /// Short segments join the previous segment; a short first segment joins
    /// the one after it. The joined segment stays a contiguous slice, so the
    /// separating whitespace comes along.
    fn merge_short(&self, segments: Vec<Segment>, text: &str) -> Vec<Segment> {
        let mut merged: Vec<Segment> = Vec::new();

        for segment in segments {
            if segment.char_count() < self.min_segment_chars {
                if let Some(prev) = merged.last_mut() {
                    prev.end_offset = segment.end_offset;
                    prev.text = text[prev.start_offset..prev.end_offset].to_string();
                    continue;
                }
            }
            merged.push(segment);
        }

        if merged.len() >= 2 && merged[0].char_count() < self.min_segment_chars {
            let first = merged.remove(0);
            merged[0].start_offset = first.start_offset;
            merged[0].text = text[merged[0].start_offset..merged[0].end_offset].to_string();
        }

        merged
    }
}

/// Build a segment for `[start, end)` with surrounding whitespace trimmed by
/// moving the offsets inward; `None` when nothing remains
fn trimmed(text: &str, start: usize, end: usize) -> Option<Segment> {
    let piece = &text[start..end];
    let start = start + (piece.len() - piece.trim_start().len());
    let end = end - (piece.len() - piece.trim_end().len());
    if start >= end {
        return None;
    }
    Some(Segment {
        text: text[start..end].to_string(),
        start_offset: start,
        end_offset: end,
    })
}
