//! Layout types shared by the walker and the emitter

/// Address of a label slot: 0-based column and row, 1-based page.
///
/// Row 0 is at the bottom of the sheet and rows count upwards, so
/// `y` maps directly onto PostScript's upward y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: u32,
    pub y: u32,
    pub page: u32,
}

impl GridPosition {
    pub fn new(x: u32, y: u32, page: u32) -> Self {
        Self { x, y, page }
    }

    /// True at the bottom-left slot, where every fresh page begins
    pub fn is_origin(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// A slot handed out by the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: GridPosition,
    /// The page header must be written before this label
    pub starts_page: bool,
}

/// Boundary crossed by moving to the next slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Next row in the same column
    None,
    /// Top of a column reached, moved to the next column
    Column,
    /// Last slot of the page used; the page must be terminated
    Page,
}

/// Walker state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkPhase {
    /// One slot per label, as many pages as the input needs
    Normal,
    /// One label tiled over the rest of the current page
    Replicating,
    /// No more slots will be handed out
    Done,
}
