//! Parameter files
//!
//! One `KEY VALUE` pair per line. Blank lines and `#` comments are skipped,
//! a trailing colon on the key is dropped, and keys are compared after
//! normalisation, so the `--show-parameters` dump reads back unchanged.

use crate::encoding::decode_bytes;
use crate::sheet::SheetSpec;
use crate::types::{LabelError, Result};
use std::path::Path;

/// A recognised parameter-file key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKey {
    LeftMargin,
    BottomMargin,
    LabelWidth,
    LabelHeight,
    HorizSpace,
    VertSpace,
    HorizNumLabels,
    VertNumLabels,
    FirstLabel,
    FontName,
    FontSize,
}

impl ParameterKey {
    /// Every key, in dump order
    pub const ALL: [ParameterKey; 11] = [
        ParameterKey::LeftMargin,
        ParameterKey::BottomMargin,
        ParameterKey::LabelWidth,
        ParameterKey::LabelHeight,
        ParameterKey::HorizSpace,
        ParameterKey::VertSpace,
        ParameterKey::HorizNumLabels,
        ParameterKey::VertNumLabels,
        ParameterKey::FirstLabel,
        ParameterKey::FontName,
        ParameterKey::FontSize,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ParameterKey::LeftMargin => "LeftMargin",
            ParameterKey::BottomMargin => "BottomMargin",
            ParameterKey::LabelWidth => "LabelWidth",
            ParameterKey::LabelHeight => "LabelHeight",
            ParameterKey::HorizSpace => "HorizSpace",
            ParameterKey::VertSpace => "VertSpace",
            ParameterKey::HorizNumLabels => "HorizNumLabels",
            ParameterKey::VertNumLabels => "VertNumLabels",
            ParameterKey::FirstLabel => "FirstLabel",
            ParameterKey::FontName => "FontName",
            ParameterKey::FontSize => "FontSize",
        }
    }

    /// Look up a key by any spelling that normalises to its name
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_name(raw);
        Self::ALL
            .into_iter()
            .find(|key| key.display_name().to_ascii_lowercase() == normalized)
    }
}

/// A line the loader could not use
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub reason: String,
}

/// Outcome of reading a parameter file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedParameters {
    pub spec: SheetSpec,
    pub skipped: Vec<SkippedLine>,
}

/// Strip quoting and whitespace characters.
pub fn dedelimit(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '\n' | '"' | '\'' | '\t' | ' '))
        .collect()
}

/// Dedelimit, case-fold, and drop `-`, `_` and `.`. Used for parameter
/// keys and label type names alike.
pub fn normalize_name(s: &str) -> String {
    dedelimit(s)
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | '.'))
        .collect()
}

/// Parse parameter-file text.
///
/// Unknown keys and lines without a value are skipped and reported in
/// [`ParsedParameters::skipped`]. A known key with an unparseable value is
/// an error.
pub fn parse_parameters(text: &str) -> Result<ParsedParameters> {
    let mut parsed = ParsedParameters::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let raw_key = tokens.next().unwrap_or_default();
        let value = dedelimit(&tokens.collect::<String>());
        let key_text = raw_key.strip_suffix(':').unwrap_or(raw_key);

        let Some(key) = ParameterKey::parse(key_text) else {
            skip(&mut parsed, line_no, raw_line, "unknown parameter");
            continue;
        };
        if value.is_empty() {
            skip(&mut parsed, line_no, raw_line, "missing value");
            continue;
        }

        let spec = &mut parsed.spec;
        match key {
            ParameterKey::LeftMargin => spec.left_margin = Some(number(&value, line_no)?),
            ParameterKey::BottomMargin => spec.bottom_margin = Some(number(&value, line_no)?),
            ParameterKey::LabelWidth => spec.label_width = Some(number(&value, line_no)?),
            ParameterKey::LabelHeight => spec.label_height = Some(number(&value, line_no)?),
            ParameterKey::HorizSpace => spec.horiz_space = Some(number(&value, line_no)?),
            ParameterKey::VertSpace => spec.vert_space = Some(number(&value, line_no)?),
            ParameterKey::HorizNumLabels => {
                spec.horiz_num_labels = Some(count(&value, line_no)?);
            }
            ParameterKey::VertNumLabels => spec.vert_num_labels = Some(count(&value, line_no)?),
            ParameterKey::FirstLabel => spec.first_label = Some(integer(&value, line_no)?),
            ParameterKey::FontName => spec.font_name = Some(value),
            ParameterKey::FontSize => spec.font_size = Some(number(&value, line_no)?),
        }
    }

    Ok(parsed)
}

/// Read and parse a parameter file
pub async fn load_parameter_file(path: impl AsRef<Path>) -> Result<ParsedParameters> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    parse_parameters(&decode_bytes(&bytes))
}

fn skip(parsed: &mut ParsedParameters, line: usize, text: &str, reason: &str) {
    log::warn!("Skipping parameter line {}: {} ('{}')", line, reason, text);
    parsed.skipped.push(SkippedLine {
        line,
        text: text.to_string(),
        reason: reason.to_string(),
    });
}

fn number(value: &str, line: usize) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| LabelError::ParameterFile {
            line,
            message: format!("'{}' is not a number", value),
        })
}

fn integer(value: &str, line: usize) -> Result<i64> {
    let n = number(value, line)?;
    if n.fract() != 0.0 {
        return Err(LabelError::ParameterFile {
            line,
            message: format!("'{}' is not an integer", value),
        });
    }
    Ok(n as i64)
}

fn count(value: &str, line: usize) -> Result<u32> {
    let n = integer(value, line)?;
    u32::try_from(n).map_err(|_| LabelError::ParameterFile {
        line,
        message: format!("'{}' is not a valid label count", value),
    })
}
