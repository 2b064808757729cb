use super::chunk::Chunk;
use super::options::GarbageOptions;
use crate::types::Glyph;
use log::debug;

/// Drops short lines made only of glyphs that template matching tends to
/// hallucinate in background art (dashes, commas, ticks, a few letters).
#[derive(Clone, Debug, Default)]
pub struct GarbageFilter {
    options: GarbageOptions,
}

impl GarbageFilter {
    pub fn new(options: GarbageOptions) -> Self {
        Self { options }
    }

    pub fn is_garbage(&self, chunk: &Chunk, glyphs: &[Glyph]) -> bool {
        chunk.len() <= self.options.max_suspicious_len
            && chunk
                .chars(glyphs)
                .all(|c| self.options.suspicious_chars.contains(c))
    }

    /// Split `lines` into (kept, dropped), preserving order in both.
    pub fn filter(&self, lines: Vec<Chunk>, glyphs: &[Glyph]) -> (Vec<Chunk>, Vec<Chunk>) {
        let (dropped, kept): (Vec<Chunk>, Vec<Chunk>) =
            lines.into_iter().partition(|c| self.is_garbage(c, glyphs));
        if !dropped.is_empty() {
            debug!("garbage filter dropped {} line(s)", dropped.len());
        }
        (kept, dropped)
    }
}
