//! Grid traversal
//!
//! Slots are filled column by column: up each column from the bottom, then
//! on to the next column to the right, then on to the next page.

use super::{Crossing, GridPosition, Placement, WalkPhase};
use crate::sheet::Sheet;

/// Hands out label slots in sheet order
#[derive(Debug, Clone)]
pub struct GridWalker {
    cols: u32,
    rows: u32,
    position: GridPosition,
    start_new_page: bool,
    page_open: bool,
    phase: WalkPhase,
}

impl GridWalker {
    pub fn new(sheet: &Sheet) -> Self {
        Self::with_grid(sheet.horiz_num_labels, sheet.vert_num_labels, sheet.first_label)
    }

    /// Walker for a `cols` x `rows` grid starting at 1-based slot `first_label`.
    ///
    /// `cols` and `rows` must be non-zero and `first_label` within the grid;
    /// [`crate::SheetSpec::resolve`] guarantees both.
    pub fn with_grid(cols: u32, rows: u32, first_label: u32) -> Self {
        let index = first_label.saturating_sub(1);
        Self {
            cols,
            rows,
            position: GridPosition::new(index / rows, index % rows, 1),
            start_new_page: true,
            page_open: false,
            phase: WalkPhase::Normal,
        }
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn phase(&self) -> WalkPhase {
        self.phase
    }

    /// Whether a page has been started and not yet terminated
    pub fn page_open(&self) -> bool {
        self.page_open
    }

    /// Claim the current slot.
    pub fn place(&mut self) -> Placement {
        let starts_page = self.start_new_page;
        self.start_new_page = false;
        self.page_open = true;
        Placement {
            position: self.position,
            starts_page,
        }
    }

    /// Move past the slot just placed.
    pub fn advance(&mut self) -> Crossing {
        self.position.y += 1;
        if self.position.y < self.rows {
            return Crossing::None;
        }

        self.position.y = 0;
        self.position.x += 1;
        if self.position.x < self.cols {
            return Crossing::Column;
        }

        self.position.x = 0;
        self.position.page += 1;
        self.start_new_page = true;
        self.page_open = false;
        if self.phase == WalkPhase::Replicating {
            self.phase = WalkPhase::Done;
        }
        Crossing::Page
    }

    /// Tile the next label over the remainder of the current page
    pub fn start_replicating(&mut self) {
        if self.phase == WalkPhase::Normal {
            self.phase = WalkPhase::Replicating;
        }
    }

    /// Stop walking. Returns true if the last page still needs its terminator.
    pub fn finish(&mut self) -> bool {
        self.phase = WalkPhase::Done;
        self.page_open && !self.position.is_origin()
    }
}
