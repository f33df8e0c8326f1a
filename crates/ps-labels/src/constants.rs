//! Shared constants for label layout
//!
//! This module centralizes magic numbers and constants used throughout
//! layout and emission.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f64 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Sheet Defaults
// =============================================================================

/// Label number printing starts at when none is given
pub const DEFAULT_FIRST_LABEL: i64 = 1;

/// Fallback font
pub const DEFAULT_FONT_NAME: &str = "Times-Roman";

/// Fallback font size (points)
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Output file used when no outfile is given
pub const DEFAULT_OUTFILE: &str = "labels.ps";

// =============================================================================
// Label Geometry
// =============================================================================

/// Gap between the label rectangle and its clip path (points)
pub const INNER_MARGIN: f64 = 1.0;

/// Extra left inset for text inside the clip path (points)
pub const TEXT_INSET: f64 = 2.0;

// =============================================================================
// Text Scaling
// =============================================================================

/// Line count at which the configured font size is used unscaled
pub const UNSCALED_LINE_COUNT: f64 = 4.0;

/// Each this-many extra lines shrink the font by one more base size
pub const FONT_SCALE_DIVISOR: f64 = 10.0;

/// Lines-per-label budget across a whole column. A label with at least
/// `OVERLONG_LINE_BUDGET / vert_num_labels` lines probably lost its delimiter.
pub const OVERLONG_LINE_BUDGET: f64 = 160.0;
