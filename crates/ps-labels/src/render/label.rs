//! Per-label drawing instructions

use crate::layout::layout_text;
use crate::sheet::Sheet;
use crate::types::Label;

/// One drawing instruction inside a label's clipped coordinate space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    NewPath,
    /// Select the reencoded font at `size` points
    SetFont { name: String, size: f64 },
    MoveTo { x: f64, y: f64 },
    /// Show an already escaped string
    Show(String),
    Stroke,
    /// Raw code, written verbatim
    Code(String),
}

impl DrawOp {
    pub fn to_postscript(&self) -> String {
        match self {
            DrawOp::NewPath => "newpath\n".to_string(),
            DrawOp::SetFont { name, size } => set_font(name, *size),
            DrawOp::MoveTo { x, y } => format!("{:.6} {:.6} moveto\n", x, y),
            DrawOp::Show(text) => format!("({}) show\n", text),
            DrawOp::Stroke => "stroke\n".to_string(),
            DrawOp::Code(code) => code.clone(),
        }
    }
}

/// `scalefont` takes whole points; fractional sizes are truncated
pub(crate) fn set_font(name: &str, size: f64) -> String {
    format!("ISO{} {} scalefont setfont\n", name, size.trunc() as i64)
}

/// Instructions for one label
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLabel {
    pub ops: Vec<DrawOp>,
    /// Text lines after padding; 0 for code labels
    pub line_count: usize,
}

impl RenderedLabel {
    pub fn to_postscript(&self) -> String {
        self.ops.iter().map(DrawOp::to_postscript).collect()
    }
}

/// Turns labels into drawing instructions for one sheet
#[derive(Debug, Clone)]
pub struct LabelRenderer<'a> {
    sheet: &'a Sheet,
    min_label_lines: usize,
    leading_spaces: usize,
}

impl<'a> LabelRenderer<'a> {
    pub fn new(sheet: &'a Sheet, min_label_lines: usize, leading_spaces: usize) -> Self {
        Self {
            sheet,
            min_label_lines,
            leading_spaces,
        }
    }

    pub fn render(&self, label: &Label) -> RenderedLabel {
        match label {
            Label::Code(code) => RenderedLabel {
                ops: vec![DrawOp::Code(code.clone())],
                line_count: 0,
            },
            Label::Lines(lines) => {
                let layout = layout_text(
                    lines,
                    self.sheet,
                    self.min_label_lines,
                    self.leading_spaces,
                );
                let mut ops = Vec::with_capacity(layout.line_count() * 2 + 3);
                ops.push(DrawOp::NewPath);
                ops.push(DrawOp::SetFont {
                    name: self.sheet.font_name.clone(),
                    size: layout.font_size,
                });
                for line in &layout.lines {
                    ops.push(DrawOp::MoveTo {
                        x: line.x,
                        y: line.y,
                    });
                    ops.push(DrawOp::Show(line.text.clone()));
                }
                ops.push(DrawOp::Stroke);
                RenderedLabel {
                    ops,
                    line_count: layout.line_count(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Sheet {
        crate::sheet_spec_for_type("avery5160")
            .unwrap()
            .resolve()
            .unwrap()
    }

    #[test]
    fn test_text_label_instructions() {
        let sheet = sheet();
        let renderer = LabelRenderer::new(&sheet, 0, 0);
        let rendered = renderer.render(&Label::Lines(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
        ]));

        assert_eq!(rendered.line_count, 3);
        assert_eq!(
            rendered.to_postscript(),
            concat!(
                "newpath\n",
                "ISOTimes-Roman 13 scalefont setfont\n",
                "3.000000 54.000000 moveto\n",
                "(a) show\n",
                "3.000000 39.600000 moveto\n",
                "(b) show\n",
                "3.000000 25.200000 moveto\n",
                "(c) show\n",
                "stroke\n",
            )
        );
    }

    #[test]
    fn test_code_label_is_verbatim() {
        let sheet = sheet();
        let renderer = LabelRenderer::new(&sheet, 4, 0);
        let rendered = renderer.render(&Label::Code("0 0 moveto 10 10 lineto stroke\n".to_string()));

        assert_eq!(rendered.line_count, 0);
        assert_eq!(rendered.to_postscript(), "0 0 moveto 10 10 lineto stroke\n");
    }

    #[test]
    fn test_font_size_is_truncated() {
        assert_eq!(set_font("Arial", 10.909), "ISOArial 10 scalefont setfont\n");
        assert_eq!(set_font("Arial", 6.0), "ISOArial 6 scalefont setfont\n");
    }
}
