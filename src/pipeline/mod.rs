//! Page reader orchestrating panel detection, glyph matching, clustering
//! and placement.
//!
//! Stages
//! - Panels: scan for white gutters and build the panel grid.
//! - Glyphs: run the locator for every glyph template, then resolve
//!   overlapping candidates.
//! - Words, lines: horizontal clustering with tight then wide gaps.
//! - Garbage: drop short punctuation-only lines.
//! - Bubbles: vertical clustering of the surviving lines.
//! - Placement: assign bubbles to panels, order them, ask for speakers.
//!
//! Typical usage:
//! ```no_run
//! use comic_dialogue::prelude::*;
//! use std::path::Path;
//!
//! # fn example(page: ImageU8) -> Result<(), PageError> {
//! let templates = TemplateSet::load_glyphs(Path::new("templates/glyphs"))?;
//! let reader = PageReader::new(PageParams::default());
//! let report = reader.process(page, &templates, &UnknownActor)?;
//! for panel in &report.page.panels {
//!     for (speaker, text) in panel.dialogue() {
//!         println!("{}: {text}", speaker.unwrap_or("unknown"));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod params;
mod reader;

pub use params::PageParams;
pub use reader::PageReader;
