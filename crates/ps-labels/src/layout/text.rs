//! Text placement inside a label
//!
//! Lines are spread evenly over the label height and the font is scaled by
//! line count alone; no glyph metrics are involved.

use crate::constants::{FONT_SCALE_DIVISOR, INNER_MARGIN, TEXT_INSET, UNSCALED_LINE_COUNT};
use crate::sheet::Sheet;

/// One line of text at its start point, in label coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Font size and line positions for one text label
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub font_size: f64,
    pub lines: Vec<PlacedLine>,
}

impl TextLayout {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Font size for a label of `line_count` lines.
///
/// Four lines use `font_size` as is; each ten lines beyond that divide it
/// by one more, and fewer lines scale it up.
pub fn scaled_font_size(font_size: f64, line_count: usize) -> f64 {
    let n = line_count as f64;
    font_size / (1.0 + ((n - UNSCALED_LINE_COUNT) / FONT_SCALE_DIVISOR))
}

/// Baseline of line `index` (0 = top) in a label of `line_count` lines
pub fn line_baseline(label_height: f64, line_count: usize, index: usize) -> f64 {
    let n = line_count as f64;
    let upmost_line_start = label_height / (n + 1.0) * n;
    let distance_down = label_height / (n + 2.0);
    upmost_line_start - (index as f64 * distance_down)
}

/// Left edge of every text line
pub fn text_margin() -> f64 {
    INNER_MARGIN + TEXT_INSET
}

/// Lay out `lines`, padded with blank lines up to `min_label_lines`.
///
/// `lines` are already indented; the blank padding lines get the same
/// `leading_spaces` indent.
pub fn layout_text(
    lines: &[String],
    sheet: &Sheet,
    min_label_lines: usize,
    leading_spaces: usize,
) -> TextLayout {
    let line_count = lines.len().max(min_label_lines);
    let padding = std::iter::repeat_n(" ".repeat(leading_spaces), line_count - lines.len());

    let placed = lines
        .iter()
        .cloned()
        .chain(padding)
        .enumerate()
        .map(|(index, text)| PlacedLine {
            x: text_margin(),
            y: line_baseline(sheet.label_height, line_count, index),
            text,
        })
        .collect();

    TextLayout {
        font_size: scaled_font_size(sheet.font_size, line_count),
        lines: placed,
    }
}
