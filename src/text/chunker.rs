//! Chunk building: packing segments into overlapping word-budget windows

use super::segmenter::Segment;
use crate::config::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches one whitespace-separated word
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("word pattern is valid"));

/// A chunk window before classification
///
/// Seeds carry the same positional guarantees as segments: `text` is the
/// exact slice `original[start_offset..end_offset]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSeed {
    /// Position in the chunk sequence, contiguous from 0
    pub index: usize,
    /// Byte offset of the first character in the original text
    pub start_offset: usize,
    /// Byte offset one past the last character in the original text
    pub end_offset: usize,
    /// The window text
    pub text: String,
    /// Number of words in the window
    pub word_count: usize,
}

/// Packs segments into fixed-budget chunks with a sliding word overlap
///
/// Segments are appended whole while the chunk stays within `target_words`;
/// the segment that would overflow starts the next chunk instead. Each new
/// chunk re-includes the trailing `overlap_words` words of the previous one,
/// so context at the cut survives into both windows. A lone segment larger
/// than the budget still becomes a single chunk.
#[derive(Debug, Clone)]
pub struct ChunkBuilder {
    target_words: usize,
    overlap_words: usize,
}

impl ChunkBuilder {
    /// Create a builder, rejecting budgets where the overlap could not
    /// advance the window
    pub fn new(target_words: usize, overlap_words: usize) -> Result<Self, ConfigError> {
        if target_words == 0 {
            return Err(ConfigError::ZeroChunkTarget);
        }
        if overlap_words >= target_words {
            return Err(ConfigError::OverlapTooLarge {
                overlap: overlap_words,
                target: target_words,
            });
        }
        Ok(Self {
            target_words,
            overlap_words,
        })
    }

    /// The word budget per chunk
    pub fn target_words(&self) -> usize {
        self.target_words
    }

    /// The number of words shared between neighboring chunks
    pub fn overlap_words(&self) -> usize {
        self.overlap_words
    }

    /// Build chunk windows over the given segments
    ///
    /// `text` must be the document the segments were cut from. Returns an
    /// empty vector only when the segments hold no words; otherwise at least
    /// one chunk covers them end to end.
    pub fn build(&self, text: &str, segments: &[Segment]) -> Vec<ChunkSeed> {
        // Word spans in document order, plus each segment's end index into
        // them. Segment boundaries always fall between words.
        let mut words: Vec<(usize, usize)> = Vec::new();
        let mut segment_end_word = Vec::with_capacity(segments.len());
        for segment in segments {
            for m in WORD.find_iter(&segment.text) {
                words.push((
                    segment.start_offset + m.start(),
                    segment.start_offset + m.end(),
                ));
            }
            segment_end_word.push(words.len());
        }
        if words.is_empty() {
            return Vec::new();
        }

        let mut chunks: Vec<ChunkSeed> = Vec::new();
        let mut chunk_start_word = 0;

        for j in 0..segments.len() {
            let before = if j == 0 { 0 } else { segment_end_word[j - 1] };
            let with_segment = segment_end_word[j].saturating_sub(chunk_start_word);

            if before > chunk_start_word && with_segment > self.target_words {
                // This segment would overflow the budget: close the chunk at
                // the previous segment and slide the window back by the
                // overlap for the next one.
                chunks.push(self.seed(
                    text,
                    &words,
                    chunk_start_word,
                    before,
                    segments[j - 1].end_offset,
                    chunks.len(),
                ));
                chunk_start_word = before
                    .saturating_sub(self.overlap_words)
                    .max(chunk_start_word + 1);
            }
        }

        // The final chunk always reaches the last segment
        if let Some(last) = segments.last() {
            chunks.push(self.seed(
                text,
                &words,
                chunk_start_word,
                words.len(),
                last.end_offset,
                chunks.len(),
            ));
        }

        chunks
    }

    fn seed(
        &self,
        text: &str,
        words: &[(usize, usize)],
        start_word: usize,
        end_word: usize,
        end_offset: usize,
        index: usize,
    ) -> ChunkSeed {
        let start_offset = words[start_word].0;
        ChunkSeed {
            index,
            start_offset,
            end_offset,
            text: text[start_offset..end_offset].to_string(),
            word_count: end_word - start_word,
        }
    }
}
