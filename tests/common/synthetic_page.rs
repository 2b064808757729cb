use comic_dialogue::glyphs::{Template, TemplateSet};
use comic_dialogue::image::io::GrayImageU8;
use comic_dialogue::image::ImageU8;

pub const INK: u8 = 0;
pub const PAPER: u8 = 255;

/// 5x7 bitmaps, distinct enough that no shifted window of one glyph (or of
/// a panel frame) comes within one pixel of another.
pub const FONT: &[(char, [&str; 7])] = &[
    (
        'H',
        ["X...X", "X...X", "X...X", "XXXXX", "X...X", "X...X", "X...X"],
    ),
    (
        'I',
        ["XXXXX", "..X..", "..X..", "..X..", "..X..", "..X..", "XXXXX"],
    ),
    (
        'O',
        [".XXX.", "X...X", "X...X", "X...X", "X...X", "X...X", ".XXX."],
    ),
];

pub const GLYPH_W: usize = 5;
pub const GLYPH_H: usize = 7;
/// Horizontal advance between glyphs of one word (2px gap).
pub const ADVANCE: usize = 7;
/// Extra advance for a space (10px gap between words).
pub const SPACE: usize = 10;

fn bitmap(ch: char) -> &'static [&'static str; 7] {
    &FONT
        .iter()
        .find(|(c, _)| *c == ch)
        .unwrap_or_else(|| panic!("no bitmap for {ch:?}"))
        .1
}

/// Owned white page that tests draw on.
pub struct Canvas {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![PAPER; w * h],
        }
    }

    pub fn view(&self) -> ImageU8<'_> {
        ImageU8::new(self.w, self.h, &self.data)
    }

    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.w + x] = v;
    }

    /// One-pixel panel border with corners at (x0, y0) and (x1 - 1, y1 - 1).
    pub fn frame(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        for x in x0..x1 {
            self.set(x, y0, INK);
            self.set(x, y1 - 1, INK);
        }
        for y in y0..y1 {
            self.set(x0, y, INK);
            self.set(x1 - 1, y, INK);
        }
    }

    pub fn glyph(&mut self, ch: char, x: usize, y: usize) {
        for (dy, row) in bitmap(ch).iter().enumerate() {
            for (dx, px) in row.bytes().enumerate() {
                if px == b'X' {
                    self.set(x + dx, y + dy, INK);
                }
            }
        }
    }

    /// Draw `text` with its first glyph's top-left at (x, y).
    pub fn text(&mut self, text: &str, x: usize, y: usize) {
        let mut cx = x;
        for ch in text.chars() {
            if ch == ' ' {
                cx += SPACE - (ADVANCE - GLYPH_W);
                continue;
            }
            self.glyph(ch, cx, y);
            cx += ADVANCE;
        }
    }

    pub fn to_gray(&self) -> GrayImageU8 {
        GrayImageU8::new(self.w, self.h, self.data.clone())
    }
}

pub fn glyph_template(ch: char) -> GrayImageU8 {
    let mut data = vec![PAPER; GLYPH_W * GLYPH_H];
    for (dy, row) in bitmap(ch).iter().enumerate() {
        for (dx, px) in row.bytes().enumerate() {
            if px == b'X' {
                data[dy * GLYPH_W + dx] = INK;
            }
        }
    }
    GrayImageU8::new(GLYPH_W, GLYPH_H, data)
}

pub fn font_templates() -> TemplateSet {
    TemplateSet::new(
        FONT.iter()
            .map(|(ch, _)| Template::new(ch.to_string(), glyph_template(*ch)))
            .collect(),
    )
}

/// Two framed panels side by side, 400x300, with dialogue in both.
///
/// Left panel: "HI IH" over "OH" (one bubble). Right panel: "OHIO".
pub fn two_panel_page() -> Canvas {
    let mut canvas = Canvas::new(400, 300);
    canvas.frame(10, 10, 190, 290);
    canvas.frame(210, 10, 390, 290);
    canvas.text("HI IH", 40, 40);
    canvas.text("OH", 40, 50);
    canvas.text("OHIO", 250, 100);
    canvas
}
