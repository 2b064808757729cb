use super::locator::{GlyphLocator, MatchCandidate};
use super::options::GlyphOptions;
use super::templates::TemplateSet;
use crate::error::{PageError, Result};
use crate::image::ImageU8;
use crate::types::{Glyph, GlyphId};
use log::debug;
use rayon::prelude::*;

/// Cleaned glyph arena plus the ids removed while resolving conflicts.
#[derive(Clone, Debug, Default)]
pub struct GlyphSet {
    pub glyphs: Vec<Glyph>,
    pub discarded: Vec<GlyphId>,
}

pub struct GlyphSetBuilder {
    options: GlyphOptions,
}

impl GlyphSetBuilder {
    pub fn new(options: GlyphOptions) -> Self {
        Self { options }
    }

    /// Run `locator` for every single-character template and number the
    /// candidates in template order.
    pub fn locate(
        &self,
        page: ImageU8<'_>,
        templates: &TemplateSet,
        locator: &dyn GlyphLocator,
    ) -> Result<Vec<Glyph>> {
        let per_template: Vec<(char, Vec<MatchCandidate>)> = templates
            .as_slice()
            .par_iter()
            .filter_map(|t| t.glyph_char().map(|ch| (ch, t)))
            .map(|(ch, t)| (ch, locator.locate(page, t)))
            .collect();

        let total: usize = per_template.iter().map(|(_, hits)| hits.len()).sum();
        if total > self.options.max_glyphs {
            return Err(PageError::TooManyGlyphs {
                limit: self.options.max_glyphs,
            });
        }

        let mut glyphs = Vec::with_capacity(total);
        for (ch, hits) in per_template {
            for hit in hits {
                glyphs.push(Glyph {
                    id: GlyphId(glyphs.len() as u32),
                    ch,
                    bounds: hit.bounds,
                    score: hit.score,
                });
            }
        }
        debug!(
            "located {} glyph candidates over {} templates",
            glyphs.len(),
            templates.len()
        );
        Ok(glyphs)
    }

    /// Drop conflicting candidates until none remain, always keeping the
    /// better-scoring member of a conflicting pair.
    pub fn build(&self, candidates: Vec<Glyph>) -> GlyphSet {
        let mut glyphs = candidates;
        let mut discarded = Vec::new();
        let ratio = self.options.max_overlap_ratio;

        'restart: loop {
            for i in 0..glyphs.len() {
                for j in 0..glyphs.len() {
                    if i == j || !glyphs_conflict(&glyphs[i], &glyphs[j], ratio) {
                        continue;
                    }
                    let kill = if glyphs[i].score < glyphs[j].score { j } else { i };
                    discarded.push(glyphs.remove(kill).id);
                    continue 'restart;
                }
            }
            break;
        }

        debug!(
            "glyph set: kept {} dropped {} conflicting",
            glyphs.len(),
            discarded.len()
        );
        GlyphSet { glyphs, discarded }
    }
}

/// Whether the intersection of the two boxes exceeds `max_ratio` of either
/// box's own area.
pub fn glyphs_conflict(a: &Glyph, b: &Glyph, max_ratio: f32) -> bool {
    let inter = a.bounds.intersection(&b.bounds).area() as f32;
    if inter <= 0.0 {
        return false;
    }
    let a_area = a.bounds.area() as f32;
    let b_area = b.bounds.area() as f32;
    inter / a_area > max_ratio || inter / b_area > max_ratio
}
