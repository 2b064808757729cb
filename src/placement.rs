//! Bubble → panel assignment and per-panel reading order.
//!
//! A bubble belongs to the panel that leaves the least of its area
//! uncovered; the first such panel wins ties. Within a panel bubbles read
//! top to bottom, except that bubbles whose tops are within a small
//! tolerance of each other form a row read left to right.

use crate::types::{Bubble, Panel, Rect};
use log::warn;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PlacementOptions {
    /// Bubbles whose tops differ by at most this many pixels share a row.
    pub same_row_tolerance: i32,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            same_row_tolerance: 5,
        }
    }
}

/// Bubble area left outside `panel`.
pub fn uncovered_area(panel: &Rect, bubble: &Rect) -> i64 {
    bubble.area() - panel.intersection(bubble).area()
}

/// Index of the panel covering most of `bubble`.
pub fn best_panel(panels: &[Panel], bubble: &Rect) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, panel) in panels.iter().enumerate() {
        let uncovered = uncovered_area(&panel.bounds, bubble);
        if best.map_or(true, |(_, b)| uncovered < b) {
            best = Some((i, uncovered));
        }
    }
    best.map(|(i, _)| i)
}

/// Assigns bubbles to panels and orders them for reading.
#[derive(Clone, Debug, Default)]
pub struct BubblePlacer {
    options: PlacementOptions,
}

impl BubblePlacer {
    pub fn new(options: PlacementOptions) -> Self {
        Self { options }
    }

    pub fn place(&self, bubbles: Vec<Bubble>, panels: &mut [Panel]) {
        for bubble in bubbles {
            match best_panel(panels, &bubble.bounds) {
                Some(i) => panels[i].bubbles.push(bubble),
                None => warn!("no panel to hold bubble {:?}", bubble.text),
            }
        }
        for panel in panels.iter_mut() {
            self.sort_reading_order(&mut panel.bubbles);
        }
    }

    /// Sort by top edge, then sweep into rows anchored at each row's first
    /// bubble and order every row left to right.
    pub fn sort_reading_order(&self, bubbles: &mut [Bubble]) {
        bubbles.sort_by_key(|b| (b.bounds.y, b.bounds.x));
        let tol = self.options.same_row_tolerance;
        let mut start = 0;
        while start < bubbles.len() {
            let anchor = bubbles[start].bounds.y;
            let mut end = start + 1;
            while end < bubbles.len() && bubbles[end].bounds.y - anchor <= tol {
                end += 1;
            }
            bubbles[start..end].sort_by_key(|b| b.bounds.x);
            start = end;
        }
    }
}
