use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error in row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unknown label type '{0}'")]
    UnknownType(String),
    #[error("Missing required parameter(s): {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),
    #[error("Parameter file line {line}: {message}")]
    ParameterFile { line: usize, message: String },
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LabelError>;

/// How the input stream is grouped into labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputMode {
    /// Plain text lines, optionally separated by a delimiter line
    #[default]
    Line,
    /// PostScript code run inside each label's coordinate space
    Code,
    /// One CSV row per label, one field per line
    Csv,
}

impl InputMode {
    pub fn name(self) -> &'static str {
        match self {
            InputMode::Line => "line",
            InputMode::Code => "code",
            InputMode::Csv => "csv",
        }
    }
}

/// One unit of content destined for exactly one label rectangle
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    /// Escaped, left-padded text lines
    Lines(Vec<String>),
    /// Raw drawing code, emitted verbatim
    Code(String),
}

/// Where input comes from or output goes to
#[derive(Debug, Clone, PartialEq)]
pub enum IoTarget {
    Stdio,
    Path(std::path::PathBuf),
}

impl IoTarget {
    /// `-` selects stdin/stdout, anything else is a file path
    pub fn from_arg(arg: impl AsRef<std::path::Path>) -> Self {
        let path = arg.as_ref();
        if path.as_os_str() == "-" {
            IoTarget::Stdio
        } else {
            IoTarget::Path(path.to_path_buf())
        }
    }
}

impl std::fmt::Display for IoTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoTarget::Stdio => f.write_str("-"),
            IoTarget::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Result of a labels run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitSummary {
    /// Number of label blocks written (replicated placements included)
    pub labels_placed: usize,
    /// Number of pages started
    pub pages: u32,
    /// Whether the overlong-label warning was issued
    pub overlong_warning: bool,
}
