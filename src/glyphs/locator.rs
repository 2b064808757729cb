use super::templates::Template;
use crate::image::{ImageF32, ImageU8};
use crate::types::Rect;
use imageproc::template_matching::{match_template, MatchTemplateMethod};

/// One template hit: the matched box in page coordinates and its score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchCandidate {
    pub bounds: Rect,
    /// Lower is better.
    pub score: f32,
}

/// Finds occurrences of a template on a page.
///
/// Implementations report hits in strictly increasing raster offset and
/// never report two overlapping hits for the same template.
pub trait GlyphLocator: Sync {
    fn locate(&self, page: ImageU8<'_>, template: &Template) -> Vec<MatchCandidate>;
}

/// Sum-of-squared-differences template matcher.
///
/// Every offset whose score is below `threshold` is reported; the part of
/// the score surface whose boxes would overlap a hit is then cleared so the
/// same glyph cannot fire twice.
#[derive(Clone, Copy, Debug)]
pub struct SqDiffLocator {
    pub threshold: f32,
}

impl SqDiffLocator {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Raw score surface, one entry per candidate top-left offset.
    pub fn score_surface(&self, page: ImageU8<'_>, template: &Template) -> Option<ImageF32> {
        let tw = template.image.width();
        let th = template.image.height();
        if tw == 0 || th == 0 || tw > page.w || th > page.h {
            return None;
        }
        let page = page.to_gray_image();
        let tmpl = template.image.as_view().to_gray_image();
        let surface = match_template(&page, &tmpl, MatchTemplateMethod::SumOfSquaredErrors);
        Some(ImageF32::from_luma(surface))
    }
}

impl GlyphLocator for SqDiffLocator {
    fn locate(&self, page: ImageU8<'_>, template: &Template) -> Vec<MatchCandidate> {
        let Some(mut surface) = self.score_surface(page, template) else {
            return Vec::new();
        };
        let tw = template.image.width();
        let th = template.image.height();

        let mut hits = Vec::new();
        for idx in 0..surface.data.len() {
            let score = surface.data[idx];
            if score >= self.threshold {
                continue;
            }
            let x = idx % surface.w;
            let y = idx / surface.w;
            hits.push(MatchCandidate {
                bounds: Rect::new(x as i32, y as i32, tw as i32, th as i32),
                score,
            });
            // Any later offset whose box would overlap this one.
            let x0 = x.saturating_sub(tw - 1);
            surface.fill_rect(x0, y, x + tw - x0, th, f32::INFINITY);
        }
        hits
    }
}
