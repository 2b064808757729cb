//! Glyph → word → line → bubble clustering.
//!
//! A [`Chunk`] is an ordered run of glyph-arena slots with a cached bounding
//! box and a per-glyph "space after" flag. Chunks start as one per glyph and
//! are merged pairwise by [`collect`], a greedy engine that restarts the full
//! pair scan after every merge and stops once a complete pass merges
//! nothing. The rule deciding whether two chunks join is a [`JoinRule`]:
//!
//! - words: horizontal adjacency with a tight x gap, no space inserted;
//! - lines: horizontal adjacency with inter-word spacing, space inserted;
//! - bubbles: vertical adjacency with overlapping x extents, space inserted
//!   unless the join looks like one long repeated-letter run wrapped across
//!   lines.
//!
//! Between lines and bubbles, short punctuation-only lines (template hits on
//! background art) are dropped by [`GarbageFilter`].

mod chunk;
mod collectors;
mod garbage;
mod merger;
mod options;
mod text;

pub use chunk::{Chunk, ChunkMember};
pub use collectors::{
    collect_bubbles, collect_lines, collect_words, intervals_overlap, HorizontalJoin,
    VerticalJoin,
};
pub use garbage::GarbageFilter;
pub use merger::{collect, Join, JoinRule, MergeArrow, Order};
pub use options::{ClusterOptions, GarbageOptions, TextOptions};
pub use text::{normalize_dots, render_text};

#[cfg(test)]
mod tests;
