use std::{error::Error, fmt, num::ParseFloatError};

use crate::{enum_trivial_from_impl, format::CoordinateFormat};

/// The reasons a free-form text is not recognized as a coordinate
#[derive(Debug, Clone, PartialEq)]
pub enum ParseCoordinateError {
    /// Nothing to parse (a bare sign included)
    EmptyString,
    /// Only digits, the decimal point, spaces and dashes are allowed
    IllegalCharacter(char),
    /// More than one decimal point
    TooManyDecimalPoints(usize),
    /// More than two separating spaces
    TooManySpaces(usize),
    /// More than three separating dashes
    TooManyDashes(usize),
    /// More than seven digits before the first non-digit
    LeadingNumberTooLong(usize),
    /// The combination of separators does not correspond to any format
    UnrecognizedShape,
    /// Some part of the text is not a number
    Number(ParseFloatError),
}

enum_trivial_from_impl!(ParseFloatError => ParseCoordinateError:Number);

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse coordinate: ")?;
        match self {
            Self::EmptyString => write!(f, "empty string provided"),
            Self::IllegalCharacter(ch) => write!(f, "illegal character {ch:?}"),
            Self::TooManyDecimalPoints(n) => write!(f, "{n} decimal points (max is 1)"),
            Self::TooManySpaces(n) => write!(f, "{n} spaces (max is 2)"),
            Self::TooManyDashes(n) => write!(f, "{n} dashes (max is 3)"),
            Self::LeadingNumberTooLong(n) => {
                write!(f, "{n} digits in the leading number (max is 7)")
            }
            Self::UnrecognizedShape => write!(f, "unrecognized combination of separators"),
            Self::Number(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ParseCoordinateError {}

/// The value cannot be rendered in the requested format
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Rendering into the `InvalidUnknown` sentinel is undefined
    InvalidFormat,
    /// Infinity or NaN provided
    NotFinite,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidFormat => "Cannot render a coordinate in the unknown format",
            Self::NotFinite => "Cannot render a non-finite coordinate",
        };

        write!(f, "{msg}")
    }
}

impl Error for FormatError {}

/// The numeric identifier does not designate any coordinate format
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UnknownFormatId(pub u8);

impl fmt::Display for UnknownFormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown coordinate format identifier: {}", self.0)
    }
}

impl Error for UnknownFormatId {}

/// The coordinate of a geodetic pair
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    /// North-south coordinate
    Latitude,
    /// East-west coordinate
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => write!(f, "latitude"),
            Self::Longitude => write!(f, "longitude"),
        }
    }
}

/// The latitude and longitude texts do not form a valid pair
#[derive(Debug, Clone, PartialEq)]
pub enum PairError {
    /// One of the texts is not a coordinate
    Parse(Axis, ParseCoordinateError),
    /// Both coordinates should be typed in the same format
    FormatMismatch {
        /// The format detected for the latitude
        latitude: CoordinateFormat,
        /// The format detected for the longitude
        longitude: CoordinateFormat,
    },
    /// The converted value is out of `[-180..180]`
    OutOfRange(Axis, f64),
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(axis, inner) => write!(f, "Invalid {axis}: {inner}"),
            Self::FormatMismatch {
                latitude,
                longitude,
            } => write!(
                f,
                "Coordinate formats do not match: latitude is {latitude}, longitude is {longitude}"
            ),
            Self::OutOfRange(axis, value) => {
                write!(f, "The {axis} {value} is out of range [-180..180]")
            }
        }
    }
}

impl Error for PairError {}

/// A single form field which did not pass the validation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The identifier of the field
    pub field: &'static str,
    /// Human-readable requirement for the field
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Error: {}", self.field, self.message)
    }
}

impl Error for FieldError {}

/// All the fields which did not pass the validation, in the order of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// The failed fields
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.len();
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "Please clear {count} error{plural}")
    }
}

impl Error for ValidationErrors {}
