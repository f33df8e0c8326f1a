//! Page and label block emission

use super::label::RenderedLabel;
use super::prologue::{CLIP_PROCEDURE, prologue};
use crate::encoding::encode_latin1;
use crate::layout::{Crossing, GridPosition, GridWalker};
use crate::sheet::Sheet;
use crate::types::Result;
use std::io::Write;

/// Writes the PostScript document piece by piece
pub struct DocumentEmitter<'a, W: Write> {
    out: W,
    sheet: &'a Sheet,
    pages: u32,
    labels: usize,
}

impl<'a, W: Write> DocumentEmitter<'a, W> {
    pub fn new(out: W, sheet: &'a Sheet) -> Self {
        Self {
            out,
            sheet,
            pages: 0,
            labels: 0,
        }
    }

    /// Pages started so far
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Label blocks written so far
    pub fn labels(&self) -> usize {
        self.labels
    }

    pub fn write_prologue(&mut self, show_bounding_box: bool) -> Result<()> {
        self.write(&prologue(self.sheet, show_bounding_box))
    }

    /// Page header, moving the origin to the sheet margins
    pub fn begin_page(&mut self, page: u32) -> Result<()> {
        self.pages += 1;
        self.write(&format!(
            "%%Page: labels {}\n\n%%BeginPageSetup\n{:.6} {:.6} translate\n%%EndPageSetup\n\n",
            page, self.sheet.left_margin, self.sheet.bottom_margin
        ))
    }

    /// One label, translated to its slot and clipped to its rectangle
    pub fn write_label(&mut self, position: GridPosition, label: &RenderedLabel) -> Result<()> {
        // Offsets are whole points
        let x_step = (f64::from(position.x) * self.sheet.column_pitch()).trunc() as i64;
        let y_step = (f64::from(position.y) * self.sheet.row_pitch()).trunc() as i64;

        self.labels += 1;
        self.write(&format!(
            "gsave\n{} {}\ntranslate\n{}\n{}grestore\n\n",
            x_step,
            y_step,
            CLIP_PROCEDURE,
            label.to_postscript()
        ))
    }

    /// Terminator for a completely filled page
    pub fn end_page(&mut self) -> Result<()> {
        self.write("showpage\n")
    }

    /// Terminator for a page left partially filled at the end of the run
    pub fn close_partial_page(&mut self) -> Result<()> {
        self.write("\nshowpage\n")
    }

    /// Put `label` in the walker's next slot, starting and ending pages as
    /// the walk requires.
    pub fn place(&mut self, walker: &mut GridWalker, label: &RenderedLabel) -> Result<Crossing> {
        let placement = walker.place();
        if placement.starts_page {
            self.begin_page(placement.position.page)?;
        }
        self.write_label(placement.position, label)?;

        let crossing = walker.advance();
        if crossing == Crossing::Page {
            self.end_page()?;
        }
        Ok(crossing)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(&encode_latin1(text))?;
        Ok(())
    }
}
