//! Text segmentation and chunk building

mod chunker;
mod segmenter;

pub use chunker::{ChunkBuilder, ChunkSeed};
pub use segmenter::{Segment, Segmenter};
