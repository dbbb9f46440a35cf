//! Detection of the notation a coordinate was typed in.
//!
//! The text is classified by its *shape*: the number of separating spaces
//! and dashes and the length of the digit run it starts with.
//! The rules are tried in the fixed order, the first matching one wins:
//!
//! | spaces | dashes | leading digits | format                 |
//! |--------|--------|----------------|------------------------|
//! | 0      | 0      | 6 or 7         | `DDMMSS[.ssssss]`      |
//! | 0      | 0      | 4 or 5         | `DDMM.mmmmmmm`         |
//! | any    | 1      | any            | `DD-MM.mmmmmmm`        |
//! | any    | 2      | any            | `DD-MM-SS[.ssssss]`    |
//! | 0      | 0      | any other      | `DD.ddddddddd`         |
//! | 1      | 0      | any            | `DD MM.mmmmmmm`        |
//! | 2      | 0      | any            | `DD MM SS[.ssssss]`    |
//!
//! The seconds-based formats are then refined into their no-decimal variants
//! when the text has no decimal point at all.

use std::{convert::TryFrom, str::FromStr};

use lazy_static::lazy_static;
use log::debug;
use num_traits::ToPrimitive;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        DASH, DECIMAL_POINT, MAX_DASHES, MAX_DECIMAL_POINTS, MAX_LEADING_DIGITS, MAX_SPACES,
        MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SIGN, SPACE,
    },
    errors::ParseCoordinateError,
    format::CoordinateFormat,
    utils::{count_char, div_mod},
};

lazy_static! {
    static ref RE_ALLOWED: Regex = Regex::new(r"^[0-9. \-]*$").expect("Allowed chars regex is valid");
    static ref RE_LEADING_DIGITS: Regex =
        Regex::new(r"^(?P<lead>[0-9]*)").expect("Leading digits regex is valid");
}

/// The result of the coordinate detection: the notation and the value in decimal degrees.
///
/// The `value` is NaN when the `format` is `InvalidUnknown`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedCoordinate {
    /// The detected notation
    pub format: CoordinateFormat,
    /// Signed decimal degrees
    pub value: f64,
}

impl ParsedCoordinate {
    /// The sentinel for a text which is not a coordinate
    pub fn invalid() -> Self {
        Self {
            format: CoordinateFormat::InvalidUnknown,
            value: f64::NAN,
        }
    }

    /// Was the coordinate recognized
    pub fn is_valid(&self) -> bool {
        self.format.is_valid()
    }

    /// The decimal degrees of a recognized coordinate
    pub fn degrees(&self) -> Option<f64> {
        self.is_valid().then_some(self.value)
    }
}

/// The separators and digits counted in the text (without the leading sign)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Shape {
    decimal_points: usize,
    spaces: usize,
    dashes: usize,
    leading_digits: usize,
}

impl Shape {
    fn of(body: &str) -> Result<Self, ParseCoordinateError> {
        if !RE_ALLOWED.is_match(body) {
            let illegal = body
                .chars()
                .find(|ch| !(ch.is_ascii_digit() || [DECIMAL_POINT, SPACE, DASH].contains(ch)))
                .unwrap_or(DASH);
            return Err(ParseCoordinateError::IllegalCharacter(illegal));
        }

        let leading_digits = RE_LEADING_DIGITS
            .captures(body)
            .and_then(|capture| capture.name("lead"))
            .map_or(0, |lead| lead.as_str().len());

        let shape = Self {
            decimal_points: count_char(body, DECIMAL_POINT),
            spaces: count_char(body, SPACE),
            dashes: count_char(body, DASH),
            leading_digits,
        };

        if shape.decimal_points > MAX_DECIMAL_POINTS {
            return Err(ParseCoordinateError::TooManyDecimalPoints(
                shape.decimal_points,
            ));
        }

        if shape.spaces > MAX_SPACES {
            return Err(ParseCoordinateError::TooManySpaces(shape.spaces));
        }

        if shape.dashes > MAX_DASHES {
            return Err(ParseCoordinateError::TooManyDashes(shape.dashes));
        }

        if shape.leading_digits > MAX_LEADING_DIGITS {
            return Err(ParseCoordinateError::LeadingNumberTooLong(
                shape.leading_digits,
            ));
        }

        Ok(shape)
    }

    fn format(self) -> Option<CoordinateFormat> {
        use CoordinateFormat::{Dd, DdMm, DdMmDash, DdMmSs, DdMmSsDash, Ddmm, Ddmmss};

        let format = match (self.spaces, self.dashes, self.leading_digits) {
            (0, 0, 6 | 7) => Ddmmss,
            (0, 0, 4 | 5) => Ddmm,
            (_, 1, _) => DdMmDash,
            (_, 2, _) => DdMmSsDash,
            // dashes are excluded on purpose: three dashes and no spaces
            // would be read as a plain number and yield NaN, so reject them instead
            (0, 0, _) => Dd,
            (1, 0, _) => DdMm,
            (2, 0, _) => DdMmSs,
            _ => return None,
        };

        if self.decimal_points == 0 {
            Some(format.without_decimal())
        } else {
            Some(format)
        }
    }
}

fn parse_number(s: &str) -> Result<f64, ParseCoordinateError> {
    Ok(s.parse::<f64>()?)
}

/// Split the text into exactly `N` numbers
fn parse_parts<const N: usize>(s: &str, separator: char) -> Result<[f64; N], ParseCoordinateError> {
    let parts = s
        .split(separator)
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;
    <[f64; N]>::try_from(parts).map_err(|_| ParseCoordinateError::UnrecognizedShape)
}

fn from_minutes(degrees: f64, minutes: f64) -> f64 {
    degrees + (minutes / MINUTES_IN_DEGREE)
}

fn from_seconds(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + (minutes / MINUTES_IN_DEGREE) + (seconds / SECONDS_IN_DEGREE)
}

/// `DDDMMSS.ssssss` with the degrees and minutes packed into a single number
fn packed_seconds(body: &str) -> Result<f64, ParseCoordinateError> {
    let number = parse_number(body)?;
    let whole = number
        .trunc()
        .to_u32()
        .ok_or(ParseCoordinateError::UnrecognizedShape)?;

    let (degrees, rest) = div_mod(whole, 10_000);
    let (minutes, _) = div_mod(rest, 100);
    let degrees = f64::from(degrees);
    let minutes = f64::from(minutes);

    let seconds = number - (degrees * 10_000.0) - (minutes * 100.0);
    Ok(from_seconds(degrees, minutes, seconds))
}

/// `DDDMM.mmmmmmm` with the degrees and minutes packed into a single number
fn packed_minutes(body: &str) -> Result<f64, ParseCoordinateError> {
    let number = parse_number(body)?;
    let whole = number
        .trunc()
        .to_u32()
        .ok_or(ParseCoordinateError::UnrecognizedShape)?;

    let (degrees, _) = div_mod(whole, 100);
    let degrees = f64::from(degrees);

    let minutes = number - (degrees * 100.0);
    Ok(from_minutes(degrees, minutes))
}

fn absolute_value(body: &str, format: CoordinateFormat) -> Result<f64, ParseCoordinateError> {
    use CoordinateFormat::*;

    match format {
        Dd => parse_number(body),
        Ddmm => packed_minutes(body),
        Ddmmss | DdmmssNoDecimal => packed_seconds(body),
        DdMmDash => {
            let [deg, min] = parse_parts(body, DASH)?;
            Ok(from_minutes(deg, min))
        }
        DdMm => {
            let [deg, min] = parse_parts(body, SPACE)?;
            Ok(from_minutes(deg, min))
        }
        DdMmSsDash | DdMmSsDashNoDecimal => {
            let [deg, min, sec] = parse_parts(body, DASH)?;
            Ok(from_seconds(deg, min, sec))
        }
        DdMmSs | DdMmSsNoDecimal => {
            let [deg, min, sec] = parse_parts(body, SPACE)?;
            Ok(from_seconds(deg, min, sec))
        }
        DdMmSymbol | DdMmSsSymbol | InvalidUnknown => Err(ParseCoordinateError::UnrecognizedShape),
    }
}

impl FromStr for ParsedCoordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (body, negative) = match s.strip_prefix(SIGN) {
            Some(unsigned) => (unsigned, true),
            None => (s, false),
        };

        if body.is_empty() {
            return Err(ParseCoordinateError::EmptyString);
        }

        let shape = Shape::of(body)?;
        let format = shape
            .format()
            .ok_or(ParseCoordinateError::UnrecognizedShape)?;
        let value = absolute_value(body, format)?;

        Ok(Self {
            format,
            value: if negative { -value } else { value },
        })
    }
}

/// Detect the notation of the coordinate and convert it into decimal degrees.
///
/// # Errors
/// The reason why the text cannot be recognized as a coordinate.
pub fn try_identify_input_type(s: &str) -> Result<ParsedCoordinate, ParseCoordinateError> {
    s.parse()
}

/// Detect the notation of the coordinate and convert it into decimal degrees.
///
/// Never fails: an unrecognized text produces the `InvalidUnknown` format.
///
/// ```
/// use rtk_config_types::{identify_input_type, CoordinateFormat};
///
/// let parsed = identify_input_type("40-05-25.2049");
/// assert_eq!(parsed.format, CoordinateFormat::DdMmSsDash);
/// assert!((parsed.value - 40.090_334_69).abs() < 1e-8);
///
/// assert!(!identify_input_type("abc123").is_valid());
/// ```
pub fn identify_input_type(s: &str) -> ParsedCoordinate {
    try_identify_input_type(s).unwrap_or_else(|err| {
        debug!("{:?} is not a coordinate: {}", s, err);
        ParsedCoordinate::invalid()
    })
}
