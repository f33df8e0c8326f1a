use super::{LabelSource, shape_line};
use crate::encoding::decode_bytes;
use crate::types::{Label, LabelError, Result};
use std::io::BufRead;

/// One label per CSV row, one text line per field.
///
/// Rows are split off the stream before parsing, so an empty line still
/// takes a slot as an empty label. A row runs on over line breaks while a
/// quoted field is open.
pub struct CsvSource<R> {
    reader: R,
    leading_spaces: usize,
    row: usize,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> CsvSource<R> {
    pub fn new(reader: R, leading_spaces: usize) -> Self {
        Self {
            reader,
            leading_spaces,
            row: 0,
            buf: Vec::new(),
            finished: false,
        }
    }

    /// Collect the next row's raw bytes into `buf`; false at end of input
    fn read_row(&mut self) -> std::io::Result<bool> {
        self.buf.clear();
        loop {
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(!self.buf.is_empty());
            }
            if !quote_open(&self.buf) {
                return Ok(true);
            }
        }
    }

    fn parse_row(&self) -> Result<Label> {
        let line = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            return Ok(Label::Lines(Vec::new()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(line);
        let mut record = csv::ByteRecord::new();
        reader
            .read_byte_record(&mut record)
            .map_err(|source| LabelError::Csv {
                row: self.row,
                source,
            })?;

        Ok(Label::Lines(
            record
                .iter()
                .map(|field| shape_line(&decode_bytes(field), self.leading_spaces))
                .collect(),
        ))
    }
}

/// Whether `bytes` end inside a quoted field
fn quote_open(bytes: &[u8]) -> bool {
    let mut in_quotes = false;
    let mut field_start = true;
    let mut just_closed = false;
    for &byte in bytes {
        // `""` inside quotes is an escaped quote, not the end of the field
        let reopens = just_closed && byte == b'"';
        just_closed = false;
        match byte {
            b'"' if in_quotes => {
                in_quotes = false;
                just_closed = true;
            }
            b'"' if field_start || reopens => in_quotes = true,
            b',' | b'\r' | b'\n' if !in_quotes => {
                field_start = true;
                continue;
            }
            _ => {}
        }
        field_start = false;
    }
    in_quotes
}

impl<R: BufRead> Iterator for CsvSource<R> {
    type Item = Result<Label>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.row += 1;
        match self.read_row() {
            Ok(true) => {}
            Ok(false) => {
                self.finished = true;
                return None;
            }
            Err(e) => {
                self.finished = true;
                return Some(Err(LabelError::Csv {
                    row: self.row,
                    source: e.into(),
                }));
            }
        }

        let label = self.parse_row();
        if label.is_err() {
            self.finished = true;
        }
        Some(label)
    }
}

impl<R: BufRead> LabelSource for CsvSource<R> {
    fn replicates_single_label(&self) -> bool {
        false
    }
}
