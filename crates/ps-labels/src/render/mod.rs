//! PostScript generation
//!
//! [`make_labels`] is the whole pipeline: it pulls labels from a source,
//! walks the grid, renders each label and writes the document.

mod label;
mod page;
mod prologue;

pub use label::{DrawOp, LabelRenderer, RenderedLabel};
pub use page::DocumentEmitter;
pub use prologue::{CLIP_PROCEDURE, ISO_8859_1_REENCODING, clip_path, prologue};

use crate::constants::OVERLONG_LINE_BUDGET;
use crate::layout::{GridWalker, WalkPhase};
use crate::options::LabelJob;
use crate::sheet::Sheet;
use crate::source::open_source;
use crate::types::{EmitSummary, Result};
use std::io::{BufRead, Write};

/// Read labels from `input` and write the PostScript document to `output`.
///
/// The job is validated before anything is written. Errors from reading or
/// writing abort the run and may leave `output` truncated.
pub fn make_labels<R: BufRead, W: Write>(
    job: &LabelJob,
    sheet: &Sheet,
    input: R,
    output: W,
) -> Result<EmitSummary> {
    job.validate()?;

    let source = open_source(job, input);
    let replicates = source.replicates_single_label();
    let mut labels = source.peekable();

    let renderer = LabelRenderer::new(sheet, job.min_label_lines, job.leading_spaces);
    let mut walker = GridWalker::new(sheet);
    let mut emitter = DocumentEmitter::new(output, sheet);
    let mut overlong = OverlongCheck::new(sheet);

    emitter.write_prologue(job.show_bounding_box)?;

    while let Some(label) = labels.next().transpose()? {
        let rendered = renderer.render(&label);
        overlong.check(&rendered);

        let lone_label = emitter.labels() == 0 && labels.peek().is_none();
        if replicates && lone_label {
            walker.start_replicating();
            while walker.phase() == WalkPhase::Replicating {
                emitter.place(&mut walker, &rendered)?;
            }
            break;
        }

        emitter.place(&mut walker, &rendered)?;
    }

    if walker.finish() {
        emitter.close_partial_page()?;
    }
    emitter.flush()?;

    let summary = EmitSummary {
        labels_placed: emitter.labels(),
        pages: emitter.pages(),
        overlong_warning: overlong.warned,
    };
    log::debug!(
        "Placed {} labels on {} pages from {} input",
        summary.labels_placed,
        summary.pages,
        job.mode.name()
    );
    Ok(summary)
}

/// Warns once per run about labels long enough to suggest a missing
/// delimiter. Never changes the output.
struct OverlongCheck {
    threshold: f64,
    warned: bool,
}

impl OverlongCheck {
    fn new(sheet: &Sheet) -> Self {
        Self {
            threshold: OVERLONG_LINE_BUDGET / f64::from(sheet.vert_num_labels),
            warned: false,
        }
    }

    fn check(&mut self, label: &RenderedLabel) {
        if self.warned || label.line_count == 0 {
            return;
        }
        if label.line_count as f64 >= self.threshold {
            log::warn!("This label is unusually long; it might even cause a PostScript error.");
            log::warn!("Did you perhaps forget to pass the --delimiter option?");
            self.warned = true;
        }
    }
}
