//! Label sources
//!
//! A source turns the raw input stream into a lazy sequence of [`Label`]
//! records. Line and code input share the delimiter-splitting reader in
//! [`lines`]; CSV input produces one label per row.

mod csv;
mod lines;

pub use self::csv::CsvSource;
pub use self::lines::LineSource;

use crate::options::LabelJob;
use crate::types::{InputMode, Label, Result};
use std::io::BufRead;

/// A finite, non-restartable stream of labels
pub trait LabelSource: Iterator<Item = Result<Label>> {
    /// True when the input has no label separators, so a lone label is
    /// meant to be tiled across a page.
    fn replicates_single_label(&self) -> bool;
}

/// Open the source matching `job.mode` over `reader`
pub fn open_source<'a, R: BufRead + 'a>(job: &LabelJob, reader: R) -> Box<dyn LabelSource + 'a> {
    match job.mode {
        InputMode::Line => Box::new(LineSource::text(
            reader,
            job.delimiter.clone(),
            job.leading_spaces,
        )),
        InputMode::Code => Box::new(LineSource::code(reader, job.delimiter.clone())),
        InputMode::Csv => Box::new(CsvSource::new(reader, job.leading_spaces)),
    }
}

/// Escape a text line and left-pad it by `leading_spaces`
pub(crate) fn shape_line(line: &str, leading_spaces: usize) -> String {
    let escaped = crate::encoding::escape_ps_string(line);
    let mut shaped = String::with_capacity(leading_spaces + escaped.len());
    shaped.extend(std::iter::repeat_n(' ', leading_spaces));
    shaped.push_str(&escaped);
    shaped
}
