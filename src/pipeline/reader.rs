use super::params::PageParams;
use crate::actors::{attribute, ActorIdentifier};
use crate::chunks::{
    collect_bubbles, collect_lines, collect_words, render_text, Chunk, GarbageFilter,
};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    ChunkStage, ChunkSummary, GarbageStage, GlyphStage, InputDescriptor, PageReport, PageTrace,
    PanelStage, TimingBreakdown,
};
use crate::error::Result;
use crate::glyphs::{GlyphLocator, GlyphOptions, GlyphSetBuilder, SqDiffLocator, TemplateSet};
use crate::image::{ImageU8, ImageView};
use crate::panels::{find_dividers, PanelOptions};
use crate::placement::BubblePlacer;
use crate::types::{Bubble, PageDialogue};
use log::{debug, info};
use std::time::Instant;

/// Reads the dialogue off one page at a time.
///
/// The reader owns its parameters and glyph locator; templates and the
/// speaker identifier are passed per call so one set can serve many pages.
pub struct PageReader {
    params: PageParams,
    locator: Box<dyn GlyphLocator>,
}

impl PageReader {
    /// Create a reader that matches glyphs with [`SqDiffLocator`].
    pub fn new(params: PageParams) -> Self {
        let locator = Box::new(SqDiffLocator::new(params.glyphs.match_threshold));
        Self { params, locator }
    }

    /// Replace the glyph locator.
    pub fn with_locator(mut self, locator: impl GlyphLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    pub fn params(&self) -> &PageParams {
        &self.params
    }

    pub fn set_panel_options(&mut self, options: PanelOptions) {
        self.params.panels = options;
    }

    /// Update glyph options. The locator is rebuilt from the new match
    /// threshold, replacing any set through [`with_locator`](Self::with_locator).
    pub fn set_glyph_options(&mut self, options: GlyphOptions) {
        self.params.glyphs = options;
        self.locator = Box::new(SqDiffLocator::new(options.match_threshold));
    }

    /// Run every stage on `image` and return the dialogue plus its trace.
    pub fn process(
        &self,
        image: ImageU8<'_>,
        templates: &TemplateSet,
        actors: &dyn ActorIdentifier,
    ) -> Result<PageReport> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let params = &self.params;

        let start = Instant::now();
        let dividers = find_dividers(image, &params.panels)?;
        let mut panels = dividers.panels();
        let panel_stage = PanelStage {
            elapsed_ms: elapsed_ms(start),
            rows: dividers.rows,
            cols: dividers.cols,
            panel_count: panels.len(),
        };
        timings.push("panels", panel_stage.elapsed_ms);
        debug!("{} panels", panels.len());

        let start = Instant::now();
        let builder = GlyphSetBuilder::new(params.glyphs);
        let candidates = builder.locate(image, templates, self.locator.as_ref())?;
        let set = builder.build(candidates.clone());
        let glyph_stage = GlyphStage {
            elapsed_ms: elapsed_ms(start),
            templates: templates.len(),
            candidates,
            discarded: set.discarded,
        };
        timings.push("glyphs", glyph_stage.elapsed_ms);
        let glyphs = set.glyphs;

        let start = Instant::now();
        let mut chunks = Chunk::seed(&glyphs);
        let merges = collect_words(&mut chunks, &glyphs, &params.cluster);
        let words = ChunkStage::capture(&chunks, &glyphs, merges, elapsed_ms(start));
        timings.push("words", words.elapsed_ms);
        debug!("{} glyphs -> {} words", glyphs.len(), chunks.len());

        let start = Instant::now();
        let merges = collect_lines(&mut chunks, &glyphs, &params.cluster);
        let lines = ChunkStage::capture(&chunks, &glyphs, merges, elapsed_ms(start));
        timings.push("lines", lines.elapsed_ms);
        debug!("{} lines", chunks.len());

        let start = Instant::now();
        let (mut chunks, dropped) =
            GarbageFilter::new(params.garbage.clone()).filter(chunks, &glyphs);
        let garbage = GarbageStage {
            elapsed_ms: elapsed_ms(start),
            removed: dropped
                .iter()
                .map(|c| ChunkSummary::from_chunk(c, &glyphs))
                .collect(),
        };
        timings.push("garbage", garbage.elapsed_ms);
        if !dropped.is_empty() {
            debug!("dropped {} garbage lines", dropped.len());
        }

        let start = Instant::now();
        let merges = collect_bubbles(&mut chunks, &glyphs, &params.cluster);
        let bubble_stage = ChunkStage::capture(&chunks, &glyphs, merges, elapsed_ms(start));
        timings.push("bubbles", bubble_stage.elapsed_ms);

        let start = Instant::now();
        let bubbles: Vec<Bubble> = chunks
            .iter()
            .map(|c| Bubble::new(render_text(c, &glyphs, &params.text), c.bounds()))
            .collect();
        BubblePlacer::new(params.placement).place(bubbles, &mut panels);
        for panel in panels.iter_mut() {
            let bounds = panel.bounds;
            for bubble in panel.bubbles.iter_mut() {
                bubble.speaker = Some(attribute(image, &bounds, &bubble.bounds, actors));
            }
        }
        timings.push("placement", elapsed_ms(start));

        timings.total_ms = elapsed_ms(total_start);
        let page = PageDialogue {
            width: image.width(),
            height: image.height(),
            panels,
        };
        info!(
            "page {}x{}: {} panels, {} bubbles in {:.1} ms",
            page.width,
            page.height,
            page.panels.len(),
            page.bubble_count(),
            timings.total_ms
        );

        let trace = PageTrace {
            input: InputDescriptor {
                width: page.width,
                height: page.height,
            },
            timings,
            panels: panel_stage,
            glyphs: glyph_stage,
            words,
            lines,
            garbage,
            bubbles: bubble_stage,
        };
        Ok(PageReport { page, trace })
    }
}
