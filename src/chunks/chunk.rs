use crate::types::{Glyph, Rect};

/// One glyph of a chunk, by arena slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkMember {
    /// Index into the page's glyph arena.
    pub slot: usize,
    /// A space is rendered after this glyph. Always false on the last member.
    pub space_after: bool,
}

/// Non-empty ordered run of glyphs with its cached bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    members: Vec<ChunkMember>,
    bounds: Rect,
}

impl Chunk {
    pub fn from_glyph(slot: usize, glyph: &Glyph) -> Self {
        Self {
            members: vec![ChunkMember {
                slot,
                space_after: false,
            }],
            bounds: glyph.bounds,
        }
    }

    /// One chunk per arena glyph, in arena order.
    pub fn seed(glyphs: &[Glyph]) -> Vec<Chunk> {
        glyphs
            .iter()
            .enumerate()
            .map(|(slot, g)| Chunk::from_glyph(slot, g))
            .collect()
    }

    #[inline]
    pub fn head(&self) -> usize {
        self.members[0].slot
    }

    #[inline]
    pub fn tail(&self) -> usize {
        self.members[self.members.len() - 1].slot
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[ChunkMember] {
        &self.members
    }

    pub fn slots(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.members.iter().map(|m| m.slot)
    }

    pub fn chars<'a>(&'a self, glyphs: &'a [Glyph]) -> impl Iterator<Item = char> + 'a {
        self.slots().map(move |s| glyphs[s].ch)
    }

    /// Append `other` after this chunk's tail, optionally marking a word
    /// boundary at the seam, and grow the bounds to cover both.
    pub fn append(&mut self, other: Chunk, boundary: bool) {
        let tail = self.members.len() - 1;
        debug_assert!(!self.members[tail].space_after);
        self.members[tail].space_after = boundary;
        self.members.extend(other.members);
        self.bounds = self.bounds.union(&other.bounds);
    }

    /// Glyphs before the first member with a space after it (the whole
    /// chunk when there is none). The boundary glyph itself is excluded.
    pub fn leading_word<'a>(&'a self, glyphs: &'a [Glyph]) -> impl Iterator<Item = char> + 'a {
        let end = self
            .members
            .iter()
            .position(|m| m.space_after)
            .unwrap_or(self.members.len());
        self.members[..end].iter().map(move |m| glyphs[m.slot].ch)
    }

    /// Glyphs of the last word (after the last member with a space after it).
    pub fn trailing_word<'a>(&'a self, glyphs: &'a [Glyph]) -> impl Iterator<Item = char> + 'a {
        let start = self
            .members
            .iter()
            .rposition(|m| m.space_after)
            .map_or(0, |p| p + 1);
        self.members[start..].iter().map(move |m| glyphs[m.slot].ch)
    }

    /// Structural invariants: non-empty, every slot in range and used once,
    /// no trailing space, bounds equal to the union of member boxes.
    pub fn is_consistent(&self, glyphs: &[Glyph]) -> bool {
        let Some(last) = self.members.last() else {
            return false;
        };
        if last.space_after {
            return false;
        }
        let mut seen = vec![false; glyphs.len()];
        let mut union: Option<Rect> = None;
        for m in &self.members {
            if m.slot >= glyphs.len() || seen[m.slot] {
                return false;
            }
            seen[m.slot] = true;
            let b = glyphs[m.slot].bounds;
            union = Some(union.map_or(b, |u| u.union(&b)));
        }
        union == Some(self.bounds)
    }
}
