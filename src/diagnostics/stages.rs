use crate::chunks::{Chunk, MergeArrow};
use crate::types::{Glyph, GlyphId, Rect};
use serde::Serialize;

/// Divider offsets found by the panel scan.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelStage {
    pub elapsed_ms: f64,
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub panel_count: usize,
}

/// Glyph matching plus conflict resolution.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphStage {
    pub elapsed_ms: f64,
    pub templates: usize,
    pub candidates: Vec<Glyph>,
    pub discarded: Vec<GlyphId>,
}

/// Snapshot of one chunk: its glyph ids in chain order and its bounds.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkSummary {
    pub glyphs: Vec<GlyphId>,
    pub bounds: Rect,
}

impl ChunkSummary {
    pub fn from_chunk(chunk: &Chunk, glyphs: &[Glyph]) -> Self {
        Self {
            glyphs: chunk.slots().map(|s| glyphs[s].id).collect(),
            bounds: chunk.bounds(),
        }
    }
}

/// Result of one clustering pass (words, lines, or bubbles).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkStage {
    pub elapsed_ms: f64,
    pub chunks: Vec<ChunkSummary>,
    pub merges: Vec<MergeArrow>,
}

impl ChunkStage {
    pub fn capture(
        chunks: &[Chunk],
        glyphs: &[Glyph],
        merges: Vec<MergeArrow>,
        elapsed_ms: f64,
    ) -> Self {
        Self {
            elapsed_ms,
            chunks: chunks
                .iter()
                .map(|c| ChunkSummary::from_chunk(c, glyphs))
                .collect(),
            merges,
        }
    }
}

/// Lines removed as punctuation noise.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GarbageStage {
    pub elapsed_ms: f64,
    pub removed: Vec<ChunkSummary>,
}
