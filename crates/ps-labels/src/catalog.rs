//! Built-in label sheet types
//!
//! Geometry for common Avery and Maco products. Names are matched after
//! [`normalize_name`], so `Avery-5160`, `avery5160` and `AVERY_5160` are
//! the same type.

use crate::constants::mm_to_pt;
use crate::params::normalize_name;
use crate::sheet::SheetSpec;
use crate::types::{LabelError, Result};

/// Units a catalog entry's lengths are written in
#[derive(Debug, Clone, Copy, PartialEq)]
enum Unit {
    Points,
    Millimeters,
}

/// One product family sharing a single geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetType {
    /// Normalised product names
    pub names: &'static [&'static str],
    pub description: &'static str,
    unit: Unit,
    left_margin: f64,
    bottom_margin: f64,
    label_width: f64,
    label_height: f64,
    horiz_space: f64,
    vert_space: f64,
    horiz_num_labels: u32,
    vert_num_labels: u32,
    font_name: &'static str,
    font_size: f64,
}

impl SheetType {
    pub fn labels_per_page(&self) -> u32 {
        self.horiz_num_labels * self.vert_num_labels
    }

    /// The type's geometry as a spec for [`SheetSpec::absorb`]
    pub fn spec(&self) -> SheetSpec {
        let length = |v: f64| match self.unit {
            Unit::Points => v,
            Unit::Millimeters => mm_to_pt(v),
        };
        SheetSpec {
            left_margin: Some(length(self.left_margin)),
            bottom_margin: Some(length(self.bottom_margin)),
            label_width: Some(length(self.label_width)),
            label_height: Some(length(self.label_height)),
            horiz_space: Some(length(self.horiz_space)),
            vert_space: Some(length(self.vert_space)),
            horiz_num_labels: Some(self.horiz_num_labels),
            vert_num_labels: Some(self.vert_num_labels),
            first_label: None,
            font_name: Some(self.font_name.to_string()),
            font_size: Some(self.font_size),
        }
    }
}

const fn points(
    names: &'static [&'static str],
    description: &'static str,
    geometry: [f64; 6],
    grid: (u32, u32),
    font: (&'static str, f64),
) -> SheetType {
    SheetType {
        names,
        description,
        unit: Unit::Points,
        left_margin: geometry[0],
        bottom_margin: geometry[1],
        label_width: geometry[2],
        label_height: geometry[3],
        horiz_space: geometry[4],
        vert_space: geometry[5],
        horiz_num_labels: grid.0,
        vert_num_labels: grid.1,
        font_name: font.0,
        font_size: font.1,
    }
}

const fn millimeters(
    names: &'static [&'static str],
    description: &'static str,
    geometry: [f64; 6],
    grid: (u32, u32),
    font: (&'static str, f64),
) -> SheetType {
    let mut sheet = points(names, description, geometry, grid, font);
    sheet.unit = Unit::Millimeters;
    sheet
}

/// Geometry order: left margin, bottom margin, label width, label height,
/// horizontal space, vertical space.
pub const SHEET_TYPES: &[SheetType] = &[
    points(
        &["avery5161", "avery5261", "avery5661", "avery5961"],
        "Large and wide address labels",
        [11.25, 16.0, 270.0, 72.0, 20.0, 0.0],
        (2, 10),
        ("Times-Roman", 12.0),
    ),
    points(
        &[
            "avery5162", "avery5262", "avery5662", "avery5962", "avery15162", "avery8162",
            "avery8252", "avery8462", "avery18162", "avery18662",
        ],
        "Address labels",
        [11.52, 62.0, 300.0, 96.0, 0.0, 0.0],
        (2, 7),
        ("Times-Roman", 12.0),
    ),
    points(
        &["avery5168"],
        "Big shipping labels",
        [31.0, 33.0, 254.0, 363.0, 37.0, 0.0],
        (2, 2),
        ("Arial", 33.0),
    ),
    points(
        &["avery5444"],
        "Really big shipping labels",
        [164.25, 408.0, 290.0, 145.0, 0.0, 54.0],
        (1, 2),
        ("Arial", 18.0),
    ),
    points(
        &["avery5264"],
        "Moderately big shipping labels",
        [20.0, 25.0, 270.0, 245.0, 37.0, 0.0],
        (2, 3),
        ("Arial", 24.0),
    ),
    points(
        &[
            "avery5160", "avery5260", "avery5560", "avery5660", "avery5960", "avery5970",
            "avery5971", "avery5972", "avery5979", "avery5980", "avery6241", "avery6460",
            "avery8660", "avery6245", "macoll5805",
        ],
        "Large address labels",
        [11.25, 16.0, 180.0, 72.0, 20.0, 0.0],
        (3, 10),
        ("Times-Roman", 12.0),
    ),
    points(
        &["avery7162"],
        "Large and wide address labels",
        [18.0, 28.0, 281.0, 96.0, 20.0, 0.0],
        (2, 8),
        ("Times-Roman", 12.0),
    ),
    points(
        &["avery7163"],
        "Large and wide address labels",
        [14.2, 42.5, 280.6, 107.7, 8.5, 0.0],
        (2, 7),
        ("Arial", 11.0),
    ),
    millimeters(
        &["avery7160"],
        "Large address labels, A4",
        [10.25, 19.0, 56.0, 33.5, 10.75, 4.5],
        (3, 7),
        ("Times-Roman", 11.0),
    ),
    points(
        &["avery6571"],
        "Small labels",
        [60.0, 38.0, 216.0, 45.0, 58.0, 0.0],
        (2, 16),
        ("Times-Roman", 7.0),
    ),
    points(
        &[
            "avery5167", "avery5267", "avery5667", "avery6467", "avery8167", "macoll8100",
        ],
        "Small address labels",
        [14.0, 17.0, 126.0, 36.0, 22.5, 0.0],
        (4, 20),
        ("Times-Roman", 7.0),
    ),
    points(
        &["avery5371", "macoll8550"],
        "Business cards",
        [48.0, 16.0, 253.5, 145.3, 0.0, 0.0],
        (2, 5),
        ("Times-Roman", 0.0),
    ),
    points(
        &["avery5263", "avery5663", "avery5963", "avery8163"],
        "Big mailing labels",
        [48.0, 31.0, 253.5, 145.3, 0.0, 0.0],
        (2, 5),
        ("Times-Roman", 20.0),
    ),
    millimeters(
        &["avery7159"],
        "Large address labels, A4",
        [0.0, 0.0, 57.25, 32.5, 11.75, 4.5],
        (3, 8),
        ("Times-Roman", 10.0),
    ),
];

/// Find the built-in type matching `name`
pub fn find_sheet_type(name: &str) -> Option<&'static SheetType> {
    let normalized = normalize_name(name);
    SHEET_TYPES
        .iter()
        .find(|sheet| sheet.names.contains(&normalized.as_str()))
}

/// The spec for built-in type `name`
pub fn sheet_spec_for_type(name: &str) -> Result<SheetSpec> {
    find_sheet_type(name)
        .map(SheetType::spec)
        .ok_or_else(|| LabelError::UnknownType(name.to_string()))
}

/// Human-readable listing of all built-in types
pub fn describe_sheet_types() -> String {
    let mut out = String::from("Predefined label types:\n\n");
    for sheet in SHEET_TYPES {
        out.push_str(&format!(
            "  {:>3} per page  {:<31} {}\n",
            sheet.labels_per_page(),
            sheet.description,
            sheet.names.join(", ")
        ));
    }
    out.push_str("\nType names ignore case, hyphens, underscores and dots.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_spelling() {
        let a = sheet_spec_for_type("Avery-5160").unwrap();
        let b = sheet_spec_for_type("avery5160").unwrap();
        let c = sheet_spec_for_type("MACO_LL5805").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.horiz_num_labels, Some(3));
        assert_eq!(a.vert_num_labels, Some(10));
    }

    #[test]
    fn test_unknown_type() {
        match sheet_spec_for_type("5160") {
            Err(LabelError::UnknownType(name)) => assert_eq!(name, "5160"),
            other => panic!("Expected UnknownType, got {:?}", other),
        }
    }

    #[test]
    fn test_metric_types_convert_to_points() {
        let spec = sheet_spec_for_type("avery7160").unwrap();
        let width = spec.label_width.unwrap();
        assert!((width - 56.0 * 72.0 / 25.4).abs() < 1e-9);
        assert_eq!(spec.font_size, Some(11.0));
    }

    #[test]
    fn test_names_are_unique_and_normalized() {
        let mut seen = std::collections::HashSet::new();
        for sheet in SHEET_TYPES {
            for name in sheet.names {
                assert_eq!(normalize_name(name), *name);
                assert!(seen.insert(*name), "duplicate type {}", name);
            }
            assert!(sheet.spec().resolve().is_ok());
        }
    }

    #[test]
    fn test_listing_mentions_every_type() {
        let listing = describe_sheet_types();
        assert!(listing.contains("avery5167"));
        assert!(listing.contains("macoll8550"));
        assert!(listing.contains(" 80 per page"));
    }
}
