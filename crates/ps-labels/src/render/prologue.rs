//! Document prologue: header, font reencoding and the label clip procedure

use super::label::set_font;
use crate::constants::INNER_MARGIN;
use crate::sheet::Sheet;

/// Definitions that reencode a font to ISO-8859-1
pub const ISO_8859_1_REENCODING: &str = include_str!("../../assets/iso8859-1.ps");

/// Name of the clip procedure every label block calls
pub const CLIP_PROCEDURE: &str = "labelclip";

/// Body of the clip procedure: a path inset by `inner_margin` from the
/// label's edges, optionally stroked so the label outline is visible.
pub fn clip_path(
    label_width: f64,
    label_height: f64,
    inner_margin: f64,
    show_bounding_box: bool,
) -> String {
    let upper_bound = label_height - inner_margin;
    let right_bound = label_width - inner_margin;

    let mut clipper = String::new();
    clipper.push_str("\tnewpath\n");
    clipper.push_str(&format!("\t{:.6} {:.6} moveto\n", inner_margin, inner_margin));
    clipper.push_str(&format!("\t{:.6} {:.6} lineto\n", right_bound, inner_margin));
    clipper.push_str(&format!("\t{:.6} {:.6} lineto\n", right_bound, upper_bound));
    clipper.push_str(&format!("\t{:.6} {:.6} lineto\n", inner_margin, upper_bound));
    clipper.push_str("\tclosepath\n");
    clipper.push_str("\tclip\n");
    if show_bounding_box {
        clipper.push_str("\tstroke\n");
    }
    clipper
}

/// Everything that precedes the first page
pub fn prologue(sheet: &Sheet, show_bounding_box: bool) -> String {
    let font = &sheet.font_name;
    let clipper = clip_path(
        sheet.label_width,
        sheet.label_height,
        INNER_MARGIN,
        show_bounding_box,
    );

    let mut out = String::new();
    out.push_str("%!PS-Adobe-3.0\n\n");
    out.push_str(ISO_8859_1_REENCODING);
    out.push_str(&format!("/ISO{} ISO-8859-1Encoding /{} reencode_font\n", font, font));
    out.push_str(&format!("/{} {{\n{}\n}} def\n\n", CLIP_PROCEDURE, clipper));
    out.push_str("% end prologue\n\n");
    out.push_str("% set font type and size\n");
    out.push_str(&set_font(font, sheet.font_size));
    out
}
