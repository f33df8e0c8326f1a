mod logger;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use ps_labels::constants::DEFAULT_OUTFILE;
use ps_labels::{InputMode, IoTarget, LabelJob, SheetSpec};
use std::path::PathBuf;

/// Long-form guide shown by `--help`
const GUIDE: &str = "\
HOW IT WORKS:
    You give pslabels the content of each label and the kind of label
    sheet to print on. It writes a PostScript file ready to send to a
    PostScript printer or to view with a previewer such as Ghostview.

ONE LABEL, A WHOLE SHEET:
    pslabels -t avery5167 -l -i myaddress.txt -o myaddress.ps

    Every line of myaddress.txt is printed on the label, indentation and
    blank lines included. Without a delimiter the whole input is a single
    label, repeated over every slot of one page. Long labels get a smaller
    font automatically.

MANY DIFFERENT LABELS:
    Separate labels with a delimiter line in line or code input:

        pslabels -d XXXXX -t avery5167 -l -i addrs.txt -o addrs.ps

    or use CSV input, one row per label and one field per line:

        pslabels --csv --leading-spaces 3 -t avery5167 -i addrs.csv

    Labels are printed once each, filling as many sheets as needed.
    --leading-spaces indents every line to centre the text better.

LABEL TYPES:
    --list-types shows the built-in sheets. Type names ignore case,
    hyphens, underscores and dots, so Avery-5160 and avery5160 match.

ADJUSTING FOR YOUR PRINTER:
    If the text sits slightly off the labels, override the margins in
    points (1/72 inch). The values replace the built-in ones:

        pslabels -t avery5167 --bottom-margin 20 --left-margin 12 ...

    -t avery5167 --show-parameters prints the current values.

CUSTOM SHEETS:
    -p FILE reads the sheet geometry from a parameter file with one
    `KEY VALUE` pair per line, `#` starting a comment. The
    --show-parameters output is a valid parameter file to start from.
    Parameter files describe the sheet, not the label content.

POSTSCRIPT LABELS:
    With -c each label is PostScript code, run with 0,0 at the bottom
    left corner of the label and clipped to its edges. Delimiters work
    as with text.

PARTLY USED SHEETS:
    --first-label N starts at slot N. Slots are numbered from 1 at the
    bottom left, going up each column and then on to the next column.
";

#[derive(Parser)]
#[command(
    name = "pslabels",
    about = "Print labels, business cards or any regular grid of rectangles as PostScript",
    after_long_help = GUIDE,
    version
)]
struct Cli {
    /// Generate labels of built-in type TYPE (see --list-types)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    sheet_type: Option<String>,

    /// Read label parameters from FILE
    #[arg(short = 'p', long, value_name = "FILE")]
    parameter_file: Option<PathBuf>,

    /// Take input from FILE ("-" means stdin)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    infile: PathBuf,

    /// Output to FILE ("-" means stdout)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTFILE)]
    outfile: PathBuf,

    /// Input contains label text lines
    #[arg(short = 'l', long)]
    line_input: bool,

    /// Input contains PostScript code
    #[arg(short = 'c', long)]
    code_input: bool,

    /// Input is comma-separated values, one label per row
    #[arg(long, visible_alias = "csv")]
    csv_input: bool,

    /// Left-pad label text by N spaces (CSV and line input only)
    #[arg(long, value_name = "N", default_value = "0")]
    leading_spaces: usize,

    /// Labels are separated by DELIM lines (line and code input only)
    #[arg(short, long, value_name = "DELIM")]
    delimiter: Option<String>,

    /// Pad each label to N lines using blanks if needed
    #[arg(long, value_name = "N", default_value = "0")]
    min_label_lines: usize,

    /// Print a rectangle around each label (for testing)
    #[arg(long)]
    show_bounding_box: bool,

    /// Start printing at label number N (bottom left is 1, counting up
    /// each column in turn)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    first_label: Option<i64>,

    /// Use PostScript font NAME
    #[arg(long, value_name = "NAME")]
    font_name: Option<String>,

    /// Scale font to SIZE points
    #[arg(long, value_name = "SIZE")]
    font_size: Option<f64>,

    /// Distance from the left page edge to the first column, in points
    #[arg(long, value_name = "PT", allow_negative_numbers = true)]
    left_margin: Option<f64>,

    /// Distance from the bottom page edge to the first row, in points
    #[arg(long, value_name = "PT", allow_negative_numbers = true)]
    bottom_margin: Option<f64>,

    /// Print the resolved label parameters and exit
    #[arg(long)]
    show_parameters: bool,

    /// Print parameters as JSON
    #[arg(long, requires = "show_parameters")]
    json: bool,

    /// Show all predefined label types and exit
    #[arg(long)]
    list_types: bool,

    /// More log output (repeat for debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Overrides given on the command line; they beat every other layer
    fn overrides(&self) -> SheetSpec {
        SheetSpec {
            left_margin: self.left_margin,
            bottom_margin: self.bottom_margin,
            first_label: self.first_label,
            font_name: self.font_name.clone(),
            font_size: self.font_size,
            ..Default::default()
        }
    }

    fn job(&self, mode: InputMode) -> LabelJob {
        LabelJob {
            mode,
            delimiter: self.delimiter.clone(),
            leading_spaces: self.leading_spaces,
            min_label_lines: self.min_label_lines,
            show_bounding_box: self.show_bounding_box,
        }
    }
}

/// Pick the input mode. `None` is only allowed when dumping parameters.
fn select_mode(cli: &Cli) -> Result<Option<InputMode>> {
    let selected: Vec<(&str, InputMode)> = [
        (cli.line_input, "--line-input", InputMode::Line),
        (cli.code_input, "--code-input", InputMode::Code),
        (cli.csv_input, "--csv-input", InputMode::Csv),
    ]
    .into_iter()
    .filter(|(on, _, _)| *on)
    .map(|(_, flag, mode)| (flag, mode))
    .collect();

    match selected.as_slice() {
        [] if cli.show_parameters => Ok(None),
        [] => bail!("Must use one of --line-input, --code-input or --csv-input"),
        [(_, mode)] => Ok(Some(*mode)),
        [(first, _), (second, _), ..] => bail!("Cannot use both {} and {}", first, second),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose).init()?;

    if cli.list_types {
        print!("{}", ps_labels::describe_sheet_types());
        return Ok(());
    }

    let mode = select_mode(&cli)?;
    if let Some(mode) = mode {
        cli.job(mode).validate()?;
    }

    // Explicit parameters first, so they dominate built-in sheet values
    let mut spec = cli.overrides();
    if let Some(path) = &cli.parameter_file {
        let parsed = ps_labels::load_parameter_file(path)
            .await
            .with_context(|| format!("Failed to read parameter file {}", path.display()))?;
        spec.absorb(&parsed.spec);
    }
    if let Some(name) = &cli.sheet_type {
        spec.absorb(&ps_labels::sheet_spec_for_type(name)?);
    }
    let sheet = spec.resolve()?;

    if cli.show_parameters {
        if cli.json {
            println!("{}", sheet.to_json()?);
        } else {
            print!("{}", sheet);
        }
        return Ok(());
    }

    let Some(mode) = mode else {
        bail!("Must use one of --line-input, --code-input or --csv-input");
    };
    let output = IoTarget::from_arg(&cli.outfile);
    let summary = ps_labels::generate_labels(
        &cli.job(mode),
        &sheet,
        IoTarget::from_arg(&cli.infile),
        output.clone(),
    )
    .await?;

    log::info!(
        "Placed {} labels on {} pages → {}",
        summary.labels_placed,
        summary.pages,
        output
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pslabels").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_long_help_has_guide() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("MANY DIFFERENT LABELS:"));
        assert!(help.contains("--first-label N starts at slot N"));
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(select_mode(&parse(&["-l"])).unwrap(), Some(InputMode::Line));
        assert_eq!(select_mode(&parse(&["-c"])).unwrap(), Some(InputMode::Code));
        assert_eq!(select_mode(&parse(&["--csv"])).unwrap(), Some(InputMode::Csv));
        assert_eq!(select_mode(&parse(&["--show-parameters"])).unwrap(), None);
    }

    #[test]
    fn test_mode_errors() {
        assert!(select_mode(&parse(&[])).is_err());
        let err = select_mode(&parse(&["-l", "--csv-input"])).unwrap_err();
        assert_eq!(err.to_string(), "Cannot use both --line-input and --csv-input");
    }

    #[test]
    fn test_overrides_only_set_given_fields() {
        let cli = parse(&["-l", "--left-margin", "-3", "--first-label", "5"]);
        let spec = cli.overrides();
        assert_eq!(spec.left_margin, Some(-3.0));
        assert_eq!(spec.first_label, Some(5));
        assert_eq!(spec.bottom_margin, None);
        assert_eq!(spec.font_size, None);
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["-l"]);
        assert_eq!(IoTarget::from_arg(&cli.infile), IoTarget::Stdio);
        assert_eq!(
            IoTarget::from_arg(&cli.outfile),
            IoTarget::Path(PathBuf::from("labels.ps"))
        );
        assert_eq!(cli.job(InputMode::Line).leading_spaces, 0);
    }
}
