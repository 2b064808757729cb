//! Glyph localisation and the de-duplicated glyph set.
//!
//! Every glyph template is matched against the page independently (in
//! parallel) through a [`GlyphLocator`]. Candidates from all templates are
//! concatenated in template order, numbered, and then cleaned: two
//! candidates whose boxes overlap by more than the configured fraction of
//! either one's area conflict, and the worse-scoring one is dropped until
//! no conflicts remain.

mod builder;
mod locator;
mod options;
mod templates;

pub use builder::{glyphs_conflict, GlyphSet, GlyphSetBuilder};
pub use locator::{GlyphLocator, MatchCandidate, SqDiffLocator};
pub use options::GlyphOptions;
pub use templates::{Template, TemplateSet};
