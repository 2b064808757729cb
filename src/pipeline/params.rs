//! Parameters for every stage of [`PageReader`](super::PageReader).
//!
//! Defaults are tuned for scanned strips at their native resolution with
//! glyph templates cut from the same font. Each group deserializes with
//! missing fields falling back to the defaults, so a config file only needs
//! the values it changes.

use crate::chunks::{ClusterOptions, GarbageOptions, TextOptions};
use crate::glyphs::GlyphOptions;
use crate::panels::PanelOptions;
use crate::placement::PlacementOptions;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageParams {
    pub panels: PanelOptions,
    pub glyphs: GlyphOptions,
    pub cluster: ClusterOptions,
    pub garbage: GarbageOptions,
    pub placement: PlacementOptions,
    pub text: TextOptions,
}
