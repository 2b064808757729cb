#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod actors;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod placement;
pub mod types;

// Stage modules: public so tools can run or inspect a single stage.
pub mod chunks;
pub mod glyphs;
pub mod panels;

// --- High-level re-exports -------------------------------------------------

// Main entry points: reader + results.
pub use crate::error::{PageError, Result};
pub use crate::pipeline::{PageParams, PageReader};
pub use crate::types::{Bubble, Glyph, GlyphId, PageDialogue, Panel, Rect};

// Collaborators passed to the reader.
pub use crate::actors::{ActorIdentifier, TemplateActors, UnknownActor};
pub use crate::glyphs::{GlyphLocator, SqDiffLocator, TemplateSet};

// Diagnostics returned by the reader.
pub use crate::diagnostics::{PageReport, PageTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use comic_dialogue::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<(), PageError> {
/// let gray = vec![255u8; 640 * 480];
/// let img = ImageU8::new(640, 480, &gray);
/// let templates = TemplateSet::load_glyphs(Path::new("templates/glyphs"))?;
///
/// let reader = PageReader::new(PageParams::default());
/// let report = reader.process(img, &templates, &UnknownActor)?;
/// println!("bubbles={} total_ms={:.3}", report.page.bubble_count(), report.trace.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{
        PageError, PageParams, PageReader, PageReport, TemplateSet, UnknownActor,
    };
}
