use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle, `x`/`y` inclusive, `w`/`h` in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn mid_y(&self) -> i32 {
        self.y + self.h / 2
    }

    #[inline]
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.w as i64 * self.h as i64
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Smallest rectangle containing both operands.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Overlapping region, or an empty rectangle when the operands are disjoint.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            Rect::default()
        } else {
            Rect::new(x0, y0, x1 - x0, y1 - y0)
        }
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Index of a glyph in the page's glyph arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlyphId(pub u32);

/// One recognised character occurrence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Glyph {
    pub id: GlyphId,
    pub ch: char,
    pub bounds: Rect,
    /// Template match score; lower is better, `0.0` is a perfect match.
    pub score: f32,
}

/// A fully clustered speech bubble.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bubble {
    pub text: String,
    pub bounds: Rect,
    /// Speaker label; `None` until attribution has run.
    pub speaker: Option<String>,
}

impl Bubble {
    pub fn new(text: impl Into<String>, bounds: Rect) -> Self {
        Self {
            text: text.into(),
            bounds,
            speaker: None,
        }
    }
}

/// One cell of the detected panel grid with its dialogue in reading order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Panel {
    pub bounds: Rect,
    pub bubbles: Vec<Bubble>,
}

impl Panel {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            bubbles: Vec::new(),
        }
    }

    /// `(speaker, text)` pairs in reading order.
    pub fn dialogue(&self) -> impl Iterator<Item = (Option<&str>, &str)> + '_ {
        self.bubbles
            .iter()
            .map(|b| (b.speaker.as_deref(), b.text.as_str()))
    }
}

/// Final per-page output: panels in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PageDialogue {
    pub width: usize,
    pub height: usize,
    pub panels: Vec<Panel>,
}

impl PageDialogue {
    pub fn bubble_count(&self) -> usize {
        self.panels.iter().map(|p| p.bubbles.len()).sum()
    }
}
