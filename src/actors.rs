//! Speaker attribution seam.
//!
//! Recognising who speaks a bubble is a separate visual problem; the page
//! reader only hands an identifier the part of the panel below each bubble
//! and records whatever label comes back.

use crate::glyphs::TemplateSet;
use crate::image::ImageU8;
use crate::types::Rect;
use imageproc::template_matching::{find_extremes, match_template, MatchTemplateMethod};
use serde::Deserialize;

/// Label recorded when no speaker could be identified.
pub const UNKNOWN_SPEAKER: &str = "unknown";

pub trait ActorIdentifier: Sync {
    /// Name the character drawn in `region`, if recognisable.
    fn identify(&self, region: ImageU8<'_>) -> Option<String>;
}

/// Identifier that never recognises anyone.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnknownActor;

impl ActorIdentifier for UnknownActor {
    fn identify(&self, _region: ImageU8<'_>) -> Option<String> {
        None
    }
}

/// Area of `panel` directly below `bubble`: the bubble's horizontal extent
/// clipped to the panel, from the bubble's bottom edge to the panel's.
pub fn speaker_region(panel: &Rect, bubble: &Rect) -> Option<Rect> {
    let x0 = bubble.x.max(panel.x);
    let x1 = bubble.right().min(panel.right());
    let y0 = bubble.bottom().max(panel.y);
    let y1 = panel.bottom();
    (x1 > x0 && y1 > y0).then(|| Rect::new(x0, y0, x1 - x0, y1 - y0))
}

/// Ask `actors` about the region below `bubble`, falling back to
/// [`UNKNOWN_SPEAKER`].
pub fn attribute(
    page: ImageU8<'_>,
    panel: &Rect,
    bubble: &Rect,
    actors: &dyn ActorIdentifier,
) -> String {
    speaker_region(panel, bubble)
        .and_then(|r| page.crop(r))
        .and_then(|region| actors.identify(region))
        .unwrap_or_else(|| UNKNOWN_SPEAKER.to_string())
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ActorOptions {
    /// Normalized squared-difference score a template must beat to name
    /// the speaker. Lower is stricter.
    pub max_score: f32,
}

impl Default for ActorOptions {
    fn default() -> Self {
        Self { max_score: 0.1 }
    }
}

/// Identifier backed by one reference picture per character.
///
/// Every template that fits inside the region is slid over it; the label
/// of the best normalized match wins if it beats `max_score`.
pub struct TemplateActors {
    templates: TemplateSet,
    options: ActorOptions,
}

impl TemplateActors {
    pub fn new(templates: TemplateSet, options: ActorOptions) -> Self {
        Self { templates, options }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl ActorIdentifier for TemplateActors {
    fn identify(&self, region: ImageU8<'_>) -> Option<String> {
        let haystack = region.to_gray_image();
        let mut best: Option<(&str, f32)> = None;
        for t in self.templates.iter() {
            if t.image.width() > region.w || t.image.height() > region.h {
                continue;
            }
            let needle = t.image.as_view().to_gray_image();
            let surface = match_template(
                &haystack,
                &needle,
                MatchTemplateMethod::SumOfSquaredErrorsNormalized,
            );
            let score = find_extremes(&surface).min_value;
            if score <= self.options.max_score && best.map_or(true, |(_, b)| score < b) {
                best = Some((t.label.as_str(), score));
            }
        }
        best.map(|(label, _)| label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::Template;
    use crate::image::io::GrayImageU8;
    use crate::image::ImageView;

    struct Darkest;

    impl ActorIdentifier for Darkest {
        fn identify(&self, region: ImageU8<'_>) -> Option<String> {
            let dark = region.rows().flatten().filter(|&&p| p < 128).count();
            (dark > 0).then(|| format!("dark:{dark}"))
        }
    }

    #[test]
    fn region_below_bubble_is_clipped_to_panel() {
        let panel = Rect::new(0, 0, 100, 100);
        assert_eq!(
            speaker_region(&panel, &Rect::new(80, 10, 40, 20)),
            Some(Rect::new(80, 30, 20, 70))
        );
        assert_eq!(speaker_region(&panel, &Rect::new(10, 90, 10, 10)), None);
    }

    #[test]
    fn attribution_falls_back_to_unknown() {
        let data = vec![255u8; 50 * 50];
        let page = ImageU8::new(50, 50, &data);
        let panel = Rect::new(0, 0, 50, 50);
        let bubble = Rect::new(10, 5, 20, 10);
        assert_eq!(attribute(page, &panel, &bubble, &UnknownActor), "unknown");
        assert_eq!(attribute(page, &panel, &bubble, &Darkest), "unknown");
    }

    #[test]
    fn identifier_sees_only_the_region_below() {
        let mut data = vec![255u8; 50 * 50];
        // Ink above the bubble must not be seen; ink below must.
        data[2 * 50 + 15] = 0;
        data[40 * 50 + 15] = 0;
        data[40 * 50 + 16] = 0;
        let page = ImageU8::new(50, 50, &data);
        let panel = Rect::new(0, 0, 50, 50);
        let bubble = Rect::new(10, 5, 20, 10);
        assert_eq!(attribute(page, &panel, &bubble, &Darkest), "dark:2");
    }

    fn face(eye: bool) -> GrayImageU8 {
        let mut data = vec![255u8; 6 * 6];
        for y in 1..5 {
            for x in 1..5 {
                data[y * 6 + x] = 0;
            }
        }
        if eye {
            data[2 * 6 + 2] = 255;
        }
        GrayImageU8::new(6, 6, data)
    }

    #[test]
    fn template_actors_pick_the_matching_face() {
        let actors = TemplateActors::new(
            TemplateSet::new(vec![
                Template::new("alice", face(true)),
                Template::new("bob", face(false)),
            ]),
            ActorOptions::default(),
        );
        let mut data = vec![255u8; 30 * 30];
        let stamp = face(true);
        let view = stamp.as_view();
        for y in 0..6 {
            for x in 0..6 {
                data[(12 + y) * 30 + 10 + x] = view.get(x, y);
            }
        }
        let page = ImageU8::new(30, 30, &data);
        assert_eq!(actors.identify(page).as_deref(), Some("alice"));
    }

    #[test]
    fn template_actors_skip_oversized_templates() {
        let actors = TemplateActors::new(
            TemplateSet::new(vec![Template::new("giant", face(true))]),
            ActorOptions::default(),
        );
        let data = vec![255u8; 4 * 4];
        assert_eq!(actors.identify(ImageU8::new(4, 4, &data)), None);
    }
}
