use super::{LabelSource, shape_line};
use crate::encoding::decode_bytes;
use crate::types::{Label, Result};
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq)]
enum LineKind {
    Text { leading_spaces: usize },
    Code,
}

/// Reads line or code input, splitting labels at delimiter lines
pub struct LineSource<R> {
    reader: R,
    delimiter: Option<String>,
    kind: LineKind,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Text lines, escaped and padded by `leading_spaces`
    pub fn text(reader: R, delimiter: Option<String>, leading_spaces: usize) -> Self {
        Self::new(reader, delimiter, LineKind::Text { leading_spaces })
    }

    /// Drawing code, passed through untouched
    pub fn code(reader: R, delimiter: Option<String>) -> Self {
        Self::new(reader, delimiter, LineKind::Code)
    }

    fn new(reader: R, delimiter: Option<String>, kind: LineKind) -> Self {
        Self {
            reader,
            delimiter,
            kind,
            buf: Vec::new(),
            finished: false,
        }
    }

    /// Next line with trailing whitespace removed, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(decode_bytes(&self.buf).trim_end().to_string()))
    }

    fn finish_label(&self, lines: Vec<String>) -> Label {
        match self.kind {
            LineKind::Text { .. } => Label::Lines(lines),
            LineKind::Code => {
                let mut code = String::new();
                for line in lines {
                    code.push_str(&line);
                    code.push('\n');
                }
                Label::Code(code)
            }
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<Label>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut lines = Vec::new();
        loop {
            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.finished = true;
                    // Trailing content after the last delimiter still counts
                    return (!lines.is_empty()).then(|| Ok(self.finish_label(lines)));
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };

            if self.delimiter.as_deref() == Some(line.as_str()) {
                return Some(Ok(self.finish_label(lines)));
            }

            lines.push(match self.kind {
                LineKind::Text { leading_spaces } => shape_line(&line, leading_spaces),
                LineKind::Code => line,
            });
        }
    }
}

impl<R: BufRead> LabelSource for LineSource<R> {
    fn replicates_single_label(&self) -> bool {
        self.delimiter.is_none()
    }
}
