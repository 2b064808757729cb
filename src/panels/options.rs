use serde::Deserialize;

/// Knobs for the scanline divider search.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    /// Pixels skipped after a divider so one thick gutter registers once.
    /// Pages smaller than twice this on either side are rejected.
    pub skip_distance: usize,
    /// Luminance at or above which a pixel counts as white.
    pub white_threshold: u8,
    /// Row depth after which a column may not contain any non-white pixel.
    pub point_of_no_return: usize,
    /// A column tunnels through runs of up to `tolerance_budget + 1`
    /// consecutive non-white pixels above the point of no return.
    pub tolerance_budget: usize,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            skip_distance: 80,
            white_threshold: 200,
            point_of_no_return: 150,
            tolerance_budget: 7,
        }
    }
}

impl PanelOptions {
    pub fn min_side(&self) -> usize {
        2 * self.skip_distance
    }
}
