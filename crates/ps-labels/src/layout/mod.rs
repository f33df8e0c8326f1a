//! Layout calculation modules for label sheets
//!
//! This module handles the geometric side of label placement:
//! - Grid traversal (which slot, column and page each label lands in)
//! - Text placement (font scaling and baselines inside a label)

mod text;
mod types;
mod walker;

pub use text::*;
pub use types::*;
pub use walker::*;
