//! Debug rendering of a [`PageTrace`] over the page it was recorded on.
use super::{ChunkStage, PageTrace};
use crate::image::ImageU8;
use crate::types::{GlyphId, Rect};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};

const DIVIDER: Rgb<u8> = Rgb([255, 0, 0]);
const GLYPH: Rgb<u8> = Rgb([0, 0, 0]);
const DISCARDED: Rgb<u8> = Rgb([160, 160, 160]);
const WORD_ARROW: Rgb<u8> = Rgb([127, 127, 255]);
const LINE_ARROW: Rgb<u8> = Rgb([127, 255, 127]);
const BUBBLE_ARROW: Rgb<u8> = Rgb([255, 200, 0]);
const LINE_BOX: Rgb<u8> = Rgb([255, 127, 255]);
const GARBAGE: Rgb<u8> = Rgb([255, 0, 0]);
const BUBBLE_BOX: Rgb<u8> = Rgb([255, 255, 127]);

/// Draw dividers, glyph boxes, merge arrows and chunk boxes over `page`.
pub fn render_trace(page: ImageU8<'_>, trace: &PageTrace) -> RgbImage {
    let mut canvas = RgbImage::from_fn(page.w as u32, page.h as u32, |x, y| {
        let v = page.get(x as usize, y as usize);
        Rgb([v, v, v])
    });
    let (w, h) = (page.w as f32, page.h as f32);

    for &y in &trace.panels.rows {
        draw_line_segment_mut(&mut canvas, (0.0, y as f32), (w, y as f32), DIVIDER);
    }
    for &x in &trace.panels.cols {
        draw_line_segment_mut(&mut canvas, (x as f32, 0.0), (x as f32, h), DIVIDER);
    }

    for glyph in &trace.glyphs.candidates {
        let color = if trace.glyphs.discarded.contains(&glyph.id) {
            DISCARDED
        } else {
            GLYPH
        };
        draw_box(&mut canvas, glyph.bounds, color);
    }

    draw_arrows(&mut canvas, trace, &trace.words, WORD_ARROW);
    draw_arrows(&mut canvas, trace, &trace.lines, LINE_ARROW);
    draw_arrows(&mut canvas, trace, &trace.bubbles, BUBBLE_ARROW);

    for chunk in &trace.lines.chunks {
        draw_box(&mut canvas, chunk.bounds, LINE_BOX);
    }
    for chunk in &trace.garbage.removed {
        let b = chunk.bounds;
        let (x0, y0) = (b.x as f32, b.y as f32);
        let (x1, y1) = (b.right() as f32, b.bottom() as f32);
        draw_line_segment_mut(&mut canvas, (x0, y0), (x1, y1), GARBAGE);
        draw_line_segment_mut(&mut canvas, (x0, y1), (x1, y0), GARBAGE);
    }
    for chunk in &trace.bubbles.chunks {
        draw_box(&mut canvas, chunk.bounds, BUBBLE_BOX);
    }
    canvas
}

fn draw_box(canvas: &mut RgbImage, r: Rect, color: Rgb<u8>) {
    if r.is_empty() {
        return;
    }
    let rect = imageproc::rect::Rect::at(r.x, r.y).of_size(r.w as u32, r.h as u32);
    draw_hollow_rect_mut(canvas, rect, color);
}

fn draw_arrows(canvas: &mut RgbImage, trace: &PageTrace, stage: &ChunkStage, color: Rgb<u8>) {
    for arrow in &stage.merges {
        let (Some(a), Some(b)) = (glyph_center(trace, arrow.from), glyph_center(trace, arrow.to))
        else {
            continue;
        };
        draw_line_segment_mut(canvas, a, b, color);
        // arrow head
        draw_line_segment_mut(canvas, b, (b.0 - 3.0, b.1 + 3.0), color);
        draw_line_segment_mut(canvas, b, (b.0 - 3.0, b.1 - 3.0), color);
    }
}

fn glyph_center(trace: &PageTrace, id: GlyphId) -> Option<(f32, f32)> {
    let g = trace.glyphs.candidates.get(id.0 as usize)?;
    debug_assert_eq!(g.id, id);
    let b = g.bounds;
    Some((b.x as f32 + b.w as f32 / 2.0, b.y as f32 + b.h as f32 / 2.0))
}
