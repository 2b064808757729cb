//! Panel grid detection by scanline divider search.
//!
//! Panels on these pages are separated by solid white gutters. A row whose
//! pixels are all at or above the whiteness threshold is a horizontal
//! divider; columns are scanned the same way with two relaxations so that
//! title lettering overflowing the first panel row does not hide a gutter:
//!
//! - a short run of non-white pixels (the tolerance budget) is tunnelled
//!   through;
//! - below the point of no return any non-white pixel disqualifies the
//!   column.
//!
//! After a divider is found the scan jumps ahead by the skip distance so a
//! thick gutter registers once. Missing outer dividers are synthesised at
//! the image edges. Adjacent divider pairs on both axes span the panel
//! cells, emitted in row-major order.

mod detector;
mod options;

pub use detector::{detect_panels, find_dividers, DividerScan, PanelDetector};
pub use options::PanelOptions;
