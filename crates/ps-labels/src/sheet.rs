//! Sheet geometry and typography
//!
//! A [`SheetSpec`] is built up in layers: explicit overrides first, then a
//! parameter file, then a built-in label type, each layer only filling what
//! the previous ones left unset. [`SheetSpec::resolve`] checks the result and
//! produces the read-only [`Sheet`] used for the run.

use crate::constants::{DEFAULT_FIRST_LABEL, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
use crate::params::ParameterKey;
use crate::types::{LabelError, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Partially specified sheet; every field is unset until some layer sets it
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetSpec {
    /// First label from the left starts here (points)
    pub left_margin: Option<f64>,
    /// First label from the bottom starts here (points)
    pub bottom_margin: Option<f64>,
    /// Not including unused inter-label space (points)
    pub label_width: Option<f64>,
    /// Not including unused inter-label space (points)
    pub label_height: Option<f64>,
    /// Unused inter-label horizontal space (points)
    pub horiz_space: Option<f64>,
    /// Unused inter-label vertical space (points)
    pub vert_space: Option<f64>,
    /// Labels across
    pub horiz_num_labels: Option<u32>,
    /// Labels up and down
    pub vert_num_labels: Option<u32>,
    /// 1-based slot to start printing at
    pub first_label: Option<i64>,
    pub font_name: Option<String>,
    pub font_size: Option<f64>,
}

impl SheetSpec {
    /// Take `other`'s value for every field this spec has not set.
    pub fn absorb(&mut self, other: &SheetSpec) {
        self.left_margin = self.left_margin.or(other.left_margin);
        self.bottom_margin = self.bottom_margin.or(other.bottom_margin);
        self.label_width = self.label_width.or(other.label_width);
        self.label_height = self.label_height.or(other.label_height);
        self.horiz_space = self.horiz_space.or(other.horiz_space);
        self.vert_space = self.vert_space.or(other.vert_space);
        self.horiz_num_labels = self.horiz_num_labels.or(other.horiz_num_labels);
        self.vert_num_labels = self.vert_num_labels.or(other.vert_num_labels);
        self.first_label = self.first_label.or(other.first_label);
        if self.font_name.is_none() {
            self.font_name = other.font_name.clone();
        }
        self.font_size = self.font_size.or(other.font_size);
    }

    /// Check that every geometry field is present and consistent, applying
    /// the library defaults for first label and font.
    pub fn resolve(&self) -> Result<Sheet> {
        let mut missing = Vec::new();
        let mut require = |value: Option<f64>, name: &'static str| {
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };
        let left_margin = require(self.left_margin, "left-margin");
        let bottom_margin = require(self.bottom_margin, "bottom-margin");
        let label_width = require(self.label_width, "label-width");
        let label_height = require(self.label_height, "label-height");
        let horiz_space = require(self.horiz_space, "horiz-space");
        let vert_space = require(self.vert_space, "vert-space");
        if self.horiz_num_labels.is_none() {
            missing.push("horiz-num-labels");
        }
        if self.vert_num_labels.is_none() {
            missing.push("vert-num-labels");
        }
        if !missing.is_empty() {
            return Err(LabelError::MissingParameters(missing));
        }

        let horiz_num_labels = self.horiz_num_labels.unwrap_or_default();
        let vert_num_labels = self.vert_num_labels.unwrap_or_default();
        if horiz_num_labels == 0 || vert_num_labels == 0 {
            return Err(LabelError::Config(format!(
                "Label grid must have at least one row and column, got {} * {}",
                horiz_num_labels, vert_num_labels
            )));
        }

        let capacity = horiz_num_labels
            .checked_mul(vert_num_labels)
            .ok_or_else(|| {
                LabelError::Config(format!(
                    "Label grid {} * {} is too large",
                    horiz_num_labels, vert_num_labels
                ))
            })?;
        let first_label = self.first_label.unwrap_or(DEFAULT_FIRST_LABEL);
        if first_label < 1 {
            return Err(LabelError::Config(format!(
                "First label {} too low; must be at least 1",
                first_label
            )));
        }
        let first_label = u32::try_from(first_label)
            .ok()
            .filter(|n| *n <= capacity)
            .ok_or_else(|| {
                LabelError::Config(format!(
                    "First label {} is too high; there are only {} * {} == {} labels available",
                    first_label, horiz_num_labels, vert_num_labels, capacity
                ))
            })?;

        Ok(Sheet {
            left_margin,
            bottom_margin,
            label_width,
            label_height,
            horiz_space,
            vert_space,
            horiz_num_labels,
            vert_num_labels,
            first_label,
            font_name: self
                .font_name
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_NAME.to_string()),
            font_size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
        })
    }
}

/// Fully resolved sheet, read-only for the run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    pub left_margin: f64,
    pub bottom_margin: f64,
    pub label_width: f64,
    pub label_height: f64,
    pub horiz_space: f64,
    pub vert_space: f64,
    pub horiz_num_labels: u32,
    pub vert_num_labels: u32,
    pub first_label: u32,
    pub font_name: String,
    pub font_size: f64,
}

impl Sheet {
    pub fn labels_per_page(&self) -> u32 {
        self.horiz_num_labels * self.vert_num_labels
    }

    /// Horizontal distance between the origins of neighbouring columns
    pub fn column_pitch(&self) -> f64 {
        self.label_width + self.horiz_space
    }

    /// Vertical distance between the origins of neighbouring rows
    pub fn row_pitch(&self) -> f64 {
        self.label_height + self.vert_space
    }

    /// Render the sheet as pretty JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LabelError::Config(format!("Failed to serialize sheet: {}", e)))
    }

    fn parameter_value(&self, key: ParameterKey) -> String {
        match key {
            ParameterKey::LeftMargin => self.left_margin.to_string(),
            ParameterKey::BottomMargin => self.bottom_margin.to_string(),
            ParameterKey::LabelWidth => self.label_width.to_string(),
            ParameterKey::LabelHeight => self.label_height.to_string(),
            ParameterKey::HorizSpace => self.horiz_space.to_string(),
            ParameterKey::VertSpace => self.vert_space.to_string(),
            ParameterKey::HorizNumLabels => self.horiz_num_labels.to_string(),
            ParameterKey::VertNumLabels => self.vert_num_labels.to_string(),
            ParameterKey::FirstLabel => self.first_label.to_string(),
            ParameterKey::FontName => self.font_name.clone(),
            ParameterKey::FontSize => self.font_size.to_string(),
        }
    }
}

/// The parameter dump: one `Key:  value` line per field, readable by
/// [`crate::parse_parameters`].
impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in ParameterKey::ALL {
            let label = format!("{}:", key.display_name());
            writeln!(f, "{:<17}{}", label, self.parameter_value(key))?;
        }
        Ok(())
    }
}
