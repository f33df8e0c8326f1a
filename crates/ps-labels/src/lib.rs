pub mod catalog;
pub mod constants;
mod encoding;
mod io;
pub mod layout;
mod options;
mod params;
pub mod render;
mod sheet;
pub mod source;
mod types;

pub use catalog::{SHEET_TYPES, SheetType, describe_sheet_types, find_sheet_type, sheet_spec_for_type};
pub use encoding::{decode_bytes, encode_latin1, escape_ps_string};
pub use io::generate_labels;
pub use options::*;
pub use params::{
    ParameterKey, ParsedParameters, SkippedLine, load_parameter_file, normalize_name,
    parse_parameters,
};
pub use render::make_labels;
pub use sheet::{Sheet, SheetSpec};
pub use types::*;
