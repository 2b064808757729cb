use serde::Deserialize;

/// Adjacency tolerances for the three clustering passes (pixels).
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ClusterOptions {
    /// Max gap between glyphs of one word.
    pub word_x_spacing: i32,
    /// Max gap between words of one line.
    pub line_x_spacing: i32,
    /// Max difference between vertical midpoints of joined glyphs.
    pub y_spacing: i32,
    /// Max gap between the bottom of one line and the top of the next.
    pub line_spacing: i32,
    /// Largest distinct-letter set treated as a wrapped repeated-letter run.
    pub max_repeat_run: usize,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            word_x_spacing: 3,
            line_x_spacing: 14,
            y_spacing: 3,
            line_spacing: 5,
            max_repeat_run: 6,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GarbageOptions {
    /// Lines with at most this many glyphs are candidates for removal.
    pub max_suspicious_len: usize,
    /// Glyphs that template matching tends to find in background art.
    pub suspicious_chars: String,
}

impl Default for GarbageOptions {
    fn default() -> Self {
        Self {
            max_suspicious_len: 3,
            suspicious_chars: "-_.=/\\'\"|:;,LPT!*".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Rewrite `,.` and `.,` to `..` (commas and periods are easily confused).
    pub normalize_dots: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            normalize_dots: true,
        }
    }
}
