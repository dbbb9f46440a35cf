//! Coordinate types for the RTK receiver configuration page:
//! - detection of the notation a latitude or longitude was typed in;
//! - conversion into decimal degrees and back into any notation;
//! - validation of the configuration form before it is saved.
//!
//! ```
//! use rtk_config_types::{convert_input, identify_input_type, CoordinateFormat};
//!
//! let parsed = identify_input_type("-105 11 5.162900");
//! assert_eq!(parsed.format, CoordinateFormat::DdMmSs);
//! assert_eq!(parsed.format.to_string(), "DD MM SS.ssssss");
//!
//! let text = convert_input(parsed.value, CoordinateFormat::DdMmSsDash);
//! assert_eq!(text, "-105-11-5.162900");
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(rustdoc::invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use base::{BaseConfig, EcefPosition, FixedBase, GeodeticPosition, SurveyIn, DEFAULT_ECEF_Z};
pub use errors::{
    Axis, FieldError, FormatError, PairError, ParseCoordinateError, UnknownFormatId,
    ValidationErrors,
};
pub use format::{printable_input_type, CoordinateFormat, Precision};
pub use pair::GeodeticPair;
pub use parse::{identify_input_type, try_identify_input_type, ParsedCoordinate};
pub use render::{convert_input, try_convert_input};
pub use settings::{
    ConfigForm, Constellations, GnssConfig, LoggingConfig, MessageRate, NtripServer, MESSAGE_IDS,
};
pub use validate::Validate;

mod base;
mod consts;
mod errors;
mod format;
mod pair;
mod parse;
mod render;
mod settings;
mod utils;
mod validate;
