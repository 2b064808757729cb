//! Error kinds surfaced by page processing and the I/O helpers.
//!
//! Only the conditions that abort a page are errors. Conflicting glyph
//! candidates, punctuation-only garbage lines and unattributed bubbles are
//! resolved inside the stage that meets them and never reach the caller.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("image {width}x{height} is too small for panel detection (need at least {min}px per side)")]
    ImageTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("panel grid is degenerate: {rows} horizontal and {cols} vertical dividers")]
    PanelGridDegenerate { rows: usize, cols: usize },

    #[error("glyph matching produced more than {limit} detections")]
    TooManyGlyphs { limit: usize },

    #[error("template {path}: {reason}")]
    Template { path: PathBuf, reason: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode or encode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to (de)serialize JSON for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PageError {
    /// True for the conditions that are a property of the page itself rather
    /// than of the environment (missing files, bad templates).
    pub fn is_page_fatal(&self) -> bool {
        matches!(
            self,
            PageError::ImageTooSmall { .. }
                | PageError::PanelGridDegenerate { .. }
                | PageError::TooManyGlyphs { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
