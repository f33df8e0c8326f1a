//! File-backed label generation

use crate::options::LabelJob;
use crate::render::make_labels;
use crate::sheet::Sheet;
use crate::types::*;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};

/// Generate labels from `input` into `output`.
///
/// The job is validated and the input opened before the output is created,
/// so configuration mistakes and unreadable input leave no output file.
pub async fn generate_labels(
    job: &LabelJob,
    sheet: &Sheet,
    input: IoTarget,
    output: IoTarget,
) -> Result<EmitSummary> {
    job.validate()?;
    let job = job.clone();
    let sheet = sheet.clone();

    tokio::task::spawn_blocking(move || run_blocking(&job, &sheet, &input, &output)).await?
}

fn run_blocking(
    job: &LabelJob,
    sheet: &Sheet,
    input: &IoTarget,
    output: &IoTarget,
) -> Result<EmitSummary> {
    match input {
        IoTarget::Stdio => write_to(job, sheet, io::stdin().lock(), output),
        IoTarget::Path(path) => write_to(job, sheet, BufReader::new(File::open(path)?), output),
    }
}

fn write_to<R: io::BufRead>(
    job: &LabelJob,
    sheet: &Sheet,
    reader: R,
    output: &IoTarget,
) -> Result<EmitSummary> {
    match output {
        IoTarget::Stdio => make_labels(job, sheet, reader, BufWriter::new(io::stdout().lock())),
        IoTarget::Path(path) => make_labels(job, sheet, reader, BufWriter::new(File::create(path)?)),
    }
}
