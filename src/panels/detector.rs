use super::options::PanelOptions;
use crate::error::{PageError, Result};
use crate::image::{ImageU8, ImageView};
use crate::types::{Panel, Rect};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

/// Divider offsets found on each axis, sorted ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DividerScan {
    /// Horizontal dividers (y offsets).
    pub rows: Vec<usize>,
    /// Vertical dividers (x offsets).
    pub cols: Vec<usize>,
}

impl DividerScan {
    /// Panel cells spanned by adjacent divider pairs, row-major.
    pub fn panels(&self) -> Vec<Panel> {
        let mut panels = Vec::with_capacity(
            self.rows.len().saturating_sub(1) * self.cols.len().saturating_sub(1),
        );
        for ys in self.rows.windows(2) {
            for xs in self.cols.windows(2) {
                let (x0, x1) = (xs[0] as i32, xs[1] as i32);
                let (y0, y1) = (ys[0] as i32, ys[1] as i32);
                debug_assert!(x0 < x1 && y0 < y1);
                panels.push(Panel::new(Rect::new(x0, y0, x1 - x0, y1 - y0)));
            }
        }
        panels
    }
}

/// Splits a page into its panel grid.
#[derive(Clone, Debug, Default)]
pub struct PanelDetector {
    options: PanelOptions,
}

impl PanelDetector {
    pub fn new(options: PanelOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub fn detect(&self, image: ImageU8<'_>) -> Result<Vec<Panel>> {
        Ok(find_dividers(image, &self.options)?.panels())
    }
}

/// Convenience wrapper over [`PanelDetector::detect`].
pub fn detect_panels(image: ImageU8<'_>, options: &PanelOptions) -> Result<Vec<Panel>> {
    PanelDetector::new(*options).detect(image)
}

/// Scan rows and columns for white gutters and close the grid at the edges.
pub fn find_dividers(image: ImageU8<'_>, options: &PanelOptions) -> Result<DividerScan> {
    let (w, h) = (image.width(), image.height());
    let min = options.min_side();
    if w < min || h < min {
        return Err(PageError::ImageTooSmall {
            width: w,
            height: h,
            min,
        });
    }

    // Each scanline is independent; only the skip walk below is sequential.
    let row_flags: Vec<bool> = (0..h)
        .into_par_iter()
        .map(|y| is_horizontal_divider(&image, y, options))
        .collect();
    let col_flags: Vec<bool> = (0..w)
        .into_par_iter()
        .map(|x| is_vertical_divider(&image, x, options))
        .collect();

    let scan = DividerScan {
        rows: walk_dividers(&row_flags, options.skip_distance),
        cols: walk_dividers(&col_flags, options.skip_distance),
    };
    debug!(
        "panel dividers: rows={:?} cols={:?} ({}x{})",
        scan.rows, scan.cols, w, h
    );

    if scan.rows.len() < 2 || scan.cols.len() < 2 {
        return Err(PageError::PanelGridDegenerate {
            rows: scan.rows.len(),
            cols: scan.cols.len(),
        });
    }
    Ok(scan)
}

fn is_horizontal_divider(image: &ImageU8<'_>, y: usize, options: &PanelOptions) -> bool {
    image.row(y).iter().all(|&px| px >= options.white_threshold)
}

fn is_vertical_divider(image: &ImageU8<'_>, x: usize, options: &PanelOptions) -> bool {
    let mut run = 0usize;
    for y in 0..image.height() {
        if image.get(x, y) >= options.white_threshold {
            run = 0;
            continue;
        }
        if y > options.point_of_no_return {
            return false;
        }
        if run > options.tolerance_budget {
            return false;
        }
        run += 1;
    }
    true
}

/// Turn per-scanline divider flags into divider offsets.
///
/// A leading divider at 0 is synthesised once the scan passes `skip` without
/// having found one; a closing divider at `len - 1` is appended when the last
/// one found is more than `skip` away from the far edge.
pub(super) fn walk_dividers(flags: &[bool], skip: usize) -> Vec<usize> {
    let len = flags.len();
    let mut out = Vec::new();
    let mut i = 0;
    while i < len {
        if out.is_empty() && i > skip {
            out.push(0);
        }
        if flags[i] {
            out.push(i);
            i += skip;
        }
        i += 1;
    }
    match out.last() {
        Some(&last) if last + skip >= len => {}
        _ if len > 0 => out.push(len - 1),
        _ => {}
    }
    out
}

