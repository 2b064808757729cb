use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct GlyphOptions {
    /// Sum-of-squared-differences score below which a match is credible.
    pub match_threshold: f32,
    /// Upper bound on detections per page; exceeding it aborts the page.
    pub max_glyphs: usize,
    /// Overlap (as a fraction of either box's own area) above which two
    /// candidates are considered the same glyph.
    pub max_overlap_ratio: f32,
}

impl Default for GlyphOptions {
    fn default() -> Self {
        Self {
            match_threshold: 100_000.0,
            max_glyphs: 5000,
            max_overlap_ratio: 0.4,
        }
    }
}
