//! Diagnostics recorded while reading a page.
//!
//! [`PageReport`] is what the reader returns: the per-panel dialogue plus a
//! [`PageTrace`] describing what every stage produced (divider offsets,
//! glyph candidates and the ones dropped as conflicts, chunk snapshots and
//! merge arrows per clustering pass). The trace is a side channel; nothing
//! in it feeds back into the result. [`render`] draws it over the page.

pub mod pipeline;
pub mod render;
pub mod stages;
pub mod timing;

pub use pipeline::{InputDescriptor, PageReport, PageTrace};
pub use stages::{ChunkStage, ChunkSummary, GarbageStage, GlyphStage, PanelStage};
pub use timing::{StageTiming, TimingBreakdown};
