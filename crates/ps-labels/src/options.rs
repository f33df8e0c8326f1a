use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the input is read and shaped into labels
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelJob {
    pub mode: InputMode,

    // Label separation (line and code input)
    pub delimiter: Option<String>,

    // Text shaping (line and CSV input)
    pub leading_spaces: usize,
    pub min_label_lines: usize,

    // Diagnostics
    pub show_bounding_box: bool,
}

impl LabelJob {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Validate the job
    pub fn validate(&self) -> Result<()> {
        match self.mode {
            InputMode::Code if self.leading_spaces > 0 => Err(LabelError::Config(
                "Cannot use leading spaces with code input".to_string(),
            )),
            InputMode::Csv if self.delimiter.is_some() => Err(LabelError::Config(
                "Cannot use a delimiter with CSV input; each row is one label".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
