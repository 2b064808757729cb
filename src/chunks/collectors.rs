use super::chunk::Chunk;
use super::merger::{collect, Join, JoinRule, MergeArrow, Order};
use super::options::ClusterOptions;
use crate::types::Glyph;
use std::collections::BTreeSet;

/// Joins chunks side by side: the left chunk's tail glyph must end close to
/// where the right chunk's head glyph starts, at about the same height.
#[derive(Clone, Copy, Debug)]
pub struct HorizontalJoin {
    pub x_spacing: i32,
    pub y_spacing: i32,
    /// Insert a space at the seam (word → line) or not (glyph → word).
    pub boundary: bool,
}

impl HorizontalJoin {
    pub fn words(opts: &ClusterOptions) -> Self {
        Self {
            x_spacing: opts.word_x_spacing,
            y_spacing: opts.y_spacing,
            boundary: false,
        }
    }

    pub fn lines(opts: &ClusterOptions) -> Self {
        Self {
            x_spacing: opts.line_x_spacing,
            y_spacing: opts.y_spacing,
            boundary: true,
        }
    }
}

impl JoinRule for HorizontalJoin {
    fn try_join(&self, glyphs: &[Glyph], a: &Chunk, b: &Chunk) -> Option<Join> {
        let (left, right, order) = if glyphs[a.tail()].bounds.x > glyphs[b.head()].bounds.x {
            (b, a, Order::Swapped)
        } else {
            (a, b, Order::Given)
        };
        let end = glyphs[left.tail()].bounds;
        let start = glyphs[right.head()].bounds;

        // abs: neighbouring glyphs may slightly overlap
        let x_dist = (start.x - end.right()).abs();
        let y_dist = (start.mid_y() - end.mid_y()).abs();
        if x_dist > self.x_spacing || y_dist > self.y_spacing {
            return None;
        }
        Some(Join {
            order,
            boundary: self.boundary,
        })
    }
}

/// Joins lines stacked on top of each other into a bubble.
#[derive(Clone, Copy, Debug)]
pub struct VerticalJoin {
    pub line_spacing: i32,
    pub max_repeat_run: usize,
}

impl VerticalJoin {
    pub fn bubbles(opts: &ClusterOptions) -> Self {
        Self {
            line_spacing: opts.line_spacing,
            max_repeat_run: opts.max_repeat_run,
        }
    }

    /// A long shout like "AAAAARGH" wraps mid-word; when the upper line ends
    /// and the lower line starts with the same small letter set, no space is
    /// rendered at the seam.
    fn continues_run(&self, glyphs: &[Glyph], upper: &Chunk, lower: &Chunk) -> bool {
        let tail: BTreeSet<char> = upper.trailing_word(glyphs).collect();
        let head: BTreeSet<char> = lower.leading_word(glyphs).collect();
        tail.len() <= self.max_repeat_run && tail == head
    }
}

impl JoinRule for VerticalJoin {
    fn try_join(&self, glyphs: &[Glyph], a: &Chunk, b: &Chunk) -> Option<Join> {
        let (upper, lower, order) = if a.bounds().y > b.bounds().y {
            (b, a, Order::Swapped)
        } else {
            (a, b, Order::Given)
        };
        let ub = upper.bounds();
        let lb = lower.bounds();

        let y_dist = (ub.bottom() - lb.y).abs();
        if y_dist > self.line_spacing || !intervals_overlap(ub.x, ub.right(), lb.x, lb.right()) {
            return None;
        }
        Some(Join {
            order,
            boundary: !self.continues_run(glyphs, upper, lower),
        })
    }
}

/// Open-interval overlap of `[a0, a1)` and `[b0, b1)`.
pub fn intervals_overlap(a0: i32, a1: i32, b0: i32, b1: i32) -> bool {
    if a0 < b0 {
        b0 < a1
    } else {
        a0 < b1
    }
}

pub fn collect_words(
    chunks: &mut Vec<Chunk>,
    glyphs: &[Glyph],
    opts: &ClusterOptions,
) -> Vec<MergeArrow> {
    collect(chunks, glyphs, &HorizontalJoin::words(opts))
}

pub fn collect_lines(
    chunks: &mut Vec<Chunk>,
    glyphs: &[Glyph],
    opts: &ClusterOptions,
) -> Vec<MergeArrow> {
    collect(chunks, glyphs, &HorizontalJoin::lines(opts))
}

pub fn collect_bubbles(
    chunks: &mut Vec<Chunk>,
    glyphs: &[Glyph],
    opts: &ClusterOptions,
) -> Vec<MergeArrow> {
    collect(chunks, glyphs, &VerticalJoin::bubbles(opts))
}
