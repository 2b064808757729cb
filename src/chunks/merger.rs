use super::chunk::Chunk;
use crate::types::{Glyph, GlyphId};
use serde::Serialize;

/// Which operand of a join ends up on the left (or on top).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// The first chunk passed to the rule comes first.
    Given,
    /// The second chunk passed to the rule comes first.
    Swapped,
}

/// Outcome of a successful adjacency test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Join {
    pub order: Order,
    /// Render a space at the seam.
    pub boundary: bool,
}

/// Decides whether two chunks are adjacent.
pub trait JoinRule {
    fn try_join(&self, glyphs: &[Glyph], a: &Chunk, b: &Chunk) -> Option<Join>;
}

impl<F> JoinRule for F
where
    F: Fn(&[Glyph], &Chunk, &Chunk) -> Option<Join>,
{
    fn try_join(&self, glyphs: &[Glyph], a: &Chunk, b: &Chunk) -> Option<Join> {
        self(glyphs, a, b)
    }
}

/// A performed merge, from the left chunk's tail glyph to the right chunk's
/// head glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MergeArrow {
    pub from: GlyphId,
    pub to: GlyphId,
}

/// Greedy pairwise clustering to a fixed point.
///
/// Every ordered pair `(i, j)`, `i != j`, is offered to `rule`. On the first
/// join the right/lower chunk is absorbed into the other, removed from the
/// list, and the scan starts over from the first pair. A merge can make a
/// pair adjacent that was not before, so a single pass is not enough.
/// Relative order of the surviving chunks is preserved.
pub fn collect<R>(chunks: &mut Vec<Chunk>, glyphs: &[Glyph], rule: &R) -> Vec<MergeArrow>
where
    R: JoinRule + ?Sized,
{
    let mut arrows = Vec::new();
    'restart: loop {
        for i in 0..chunks.len() {
            for j in 0..chunks.len() {
                if i == j {
                    continue;
                }
                let Some(join) = rule.try_join(glyphs, &chunks[i], &chunks[j]) else {
                    continue;
                };
                let (left, right) = match join.order {
                    Order::Given => (i, j),
                    Order::Swapped => (j, i),
                };
                arrows.push(MergeArrow {
                    from: glyphs[chunks[left].tail()].id,
                    to: glyphs[chunks[right].head()].id,
                });
                let absorbed = chunks.remove(right);
                let left = if right < left { left - 1 } else { left };
                chunks[left].append(absorbed, join.boundary);
                continue 'restart;
            }
        }
        return arrows;
    }
}
