use crate::diagnostics::{ChunkStage, GarbageStage, GlyphStage, PanelStage, TimingBreakdown};
use crate::types::PageDialogue;
use serde::Serialize;

/// Result of [`PageReader::process`](crate::PageReader::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub page: PageDialogue,
    pub trace: PageTrace,
}

/// Stage-by-stage record of one page run, for debugging and rendering.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub panels: PanelStage,
    pub glyphs: GlyphStage,
    pub words: ChunkStage,
    pub lines: ChunkStage,
    pub garbage: GarbageStage,
    pub bubbles: ChunkStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}
