//! Rendering decimal degrees in the user's preferred notation.

use std::fmt::Write as _;

use crate::{
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DASH, DEGREE_SIGN, MINUTES_IN_DEGREE, MINUTE_DECIMALS,
        SECONDS_IN_MINUTE, SIGN, SPACE,
    },
    errors::FormatError,
    format::{CoordinateFormat, Glue, Precision},
    utils::round_to,
};

/// Degrees and (possibly fractional) minutes of an unsigned angle
#[derive(Debug, Copy, Clone, PartialEq)]
struct DegMin {
    deg: f64,
    min: f64,
}

/// Degrees, whole minutes and (possibly fractional) seconds of an unsigned angle
#[derive(Debug, Copy, Clone, PartialEq)]
struct DegMinSec {
    deg: f64,
    min: f64,
    sec: f64,
}

impl DegMin {
    fn split(abs_value: f64) -> Self {
        let deg = abs_value.trunc();
        let min = round_to((abs_value - deg) * MINUTES_IN_DEGREE, MINUTE_DECIMALS);

        // rounding can produce the whole minute
        if min >= MINUTES_IN_DEGREE {
            Self {
                deg: deg + 1.0,
                min: min - MINUTES_IN_DEGREE,
            }
        } else {
            Self { deg, min }
        }
    }
}

impl DegMinSec {
    fn split(abs_value: f64, decimals: usize) -> Self {
        let mut deg = abs_value.trunc();
        let minutes = (abs_value - deg) * MINUTES_IN_DEGREE;
        let mut min = minutes.trunc();
        let mut sec = round_to((minutes - min) * SECONDS_IN_MINUTE, decimals);

        if sec >= SECONDS_IN_MINUTE {
            sec -= SECONDS_IN_MINUTE;
            min += 1.0;
        }

        if min >= MINUTES_IN_DEGREE {
            min -= MINUTES_IN_DEGREE;
            deg += 1.0;
        }

        Self { deg, min, sec }
    }
}

fn render_minutes(out: &mut String, abs_value: f64, glue: Glue) -> std::fmt::Result {
    let DegMin { deg, min } = DegMin::split(abs_value);
    let p = MINUTE_DECIMALS;

    match glue {
        // the fixed width of each part keeps the packed number recognizable
        Glue::None => write!(out, "{deg:02.0}{min:0w$.p$}", w = p + 3),
        Glue::Space => write!(out, "{deg:.0}{SPACE}{min:.p$}"),
        Glue::Dash => write!(out, "{deg:.0}{DASH}{min:.p$}"),
        Glue::Symbol => write!(out, "{deg:.0}{DEGREE_SIGN}{min:.p$}{ARC_MINUTE_SIGN}"),
    }
}

fn render_seconds(
    out: &mut String,
    abs_value: f64,
    glue: Glue,
    decimals: usize,
) -> std::fmt::Result {
    let DegMinSec { deg, min, sec } = DegMinSec::split(abs_value, decimals);
    let p = decimals;

    match glue {
        Glue::None => {
            let width = if p == 0 { 2 } else { p + 3 };
            write!(out, "{deg:02.0}{min:02.0}{sec:0width$.p$}")
        }
        Glue::Space => write!(out, "{deg:.0}{SPACE}{min:.0}{SPACE}{sec:.p$}"),
        Glue::Dash => write!(out, "{deg:.0}{DASH}{min:.0}{DASH}{sec:.p$}"),
        Glue::Symbol => write!(
            out,
            "{deg:.0}{DEGREE_SIGN}{min:.0}{ARC_MINUTE_SIGN}{sec:.p$}{ARC_SECOND_SIGN}"
        ),
    }
}

/// Render the decimal degrees in the given notation.
///
/// # Errors
/// - the format is `InvalidUnknown`;
/// - the value is not finite.
pub fn try_convert_input(value: f64, format: CoordinateFormat) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NotFinite);
    }

    let precision = format.precision().ok_or(FormatError::InvalidFormat)?;
    let p = precision.decimals();
    let Some(glue) = format.glue() else {
        return Ok(format!("{value:.p$}"));
    };

    let mut out = String::new();
    // negative zero has no sign
    if value < 0.0 {
        out.push(SIGN);
    }

    let abs_value = value.abs();
    let written = if precision == Precision::Minutes {
        render_minutes(&mut out, abs_value, glue)
    } else {
        render_seconds(&mut out, abs_value, glue, p)
    };
    written.map_err(|_| FormatError::InvalidFormat)?;

    Ok(out)
}

/// Render the decimal degrees in the given notation.
///
/// The result is empty for the `InvalidUnknown` format or a non-finite value.
///
/// ```
/// use rtk_config_types::{convert_input, CoordinateFormat};
///
/// assert_eq!(convert_input(40.1505, CoordinateFormat::DdMmSs), "40 9 1.800000");
/// assert_eq!(convert_input(-105.5, CoordinateFormat::Ddmm), "-10530.0000000");
/// ```
pub fn convert_input(value: f64, format: CoordinateFormat) -> String {
    try_convert_input(value, format).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parse::identify_input_type;

    use CoordinateFormat::*;

    #[test]
    fn decimal_degrees() {
        assert_eq!(convert_input(105.123_456_789, Dd), "105.123456789");
        assert_eq!(convert_input(-40.5, Dd), "-40.500000000");
    }

    #[test]
    fn space_separated_seconds() {
        assert_eq!(convert_input(40.150_500_000, DdMmSs), "40 9 1.800000");
        assert_eq!(convert_input(40.150_500_000, DdMmSsNoDecimal), "40 9 2");
    }

    #[test]
    fn dash_separated() {
        assert_eq!(convert_input(40.1505, DdMmDash), "40-9.0300000");
        assert_eq!(convert_input(-40.1505, DdMmSsDash), "-40-9-1.800000");
        assert_eq!(convert_input(-40.1505, DdMmSsDashNoDecimal), "-40-9-2");
    }

    #[test]
    fn symbols() {
        assert_eq!(convert_input(40.1505, DdMmSymbol), "40°9.0300000'");
        assert_eq!(convert_input(40.1505, DdMmSsSymbol), "40°9'1.800000\"");
    }

    #[test]
    fn packed_parts_are_padded() {
        assert_eq!(convert_input(5.5, Ddmm), "0530.0000000");
        assert_eq!(convert_input(40.1505, Ddmm), "4009.0300000");
        assert_eq!(convert_input(40.1505, Ddmmss), "400901.800000");
        assert_eq!(convert_input(40.1505, DdmmssNoDecimal), "400902");
        assert_eq!(convert_input(-105.184_774_72, Ddmmss), "-1051105.188992");
        assert_eq!(convert_input(0.001, DdmmssNoDecimal), "000004");
    }

    #[test]
    fn minutes_are_never_negative() {
        assert_eq!(convert_input(-105.25, DdMm), "-105 15.0000000");
        assert_eq!(convert_input(-0.25, DdMm), "-0 15.0000000");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(convert_input(-0.0, DdMmSs), "0 0 0.000000");
    }

    #[test]
    fn rounding_carries_to_minutes() {
        // 59.9999999 seconds
        let value = 10.0 + 59.999_999_9 / 3600.0;
        assert_eq!(convert_input(value, DdMmSs), "10 1 0.000000");
        assert_eq!(convert_input(value, DdMmSsNoDecimal), "10 1 0");
    }

    #[test]
    fn rounding_carries_to_degrees() {
        let value = 10.999_999_999_9;
        assert_eq!(convert_input(value, DdMm), "11 0.0000000");
        assert_eq!(convert_input(value, DdMmSsDash), "11-0-0.000000");
        assert_eq!(convert_input(value, Ddmmss), "110000.000000");
    }

    #[test]
    fn invalid_format_is_empty() {
        assert_eq!(convert_input(40.0, InvalidUnknown), "");
        assert_eq!(
            try_convert_input(40.0, InvalidUnknown),
            Err(FormatError::InvalidFormat)
        );
    }

    #[test]
    fn not_finite() {
        assert_eq!(
            try_convert_input(f64::NAN, Dd),
            Err(FormatError::NotFinite)
        );
        assert_eq!(convert_input(f64::INFINITY, DdMmSs), "");
    }

    fn values() -> Vec<f64> {
        let mut values = vec![
            0.0,
            0.000_1,
            -0.5,
            1.0,
            5.5,
            40.150_5,
            40.090_334_69,
            -105.184_767_47,
            -105.184_774_72,
            89.999_999_999,
            -179.999_999,
            180.0,
            -180.0,
        ];
        // an irregular grid over the whole range
        let mut v = -180.0;
        while v <= 180.0 {
            values.push(v);
            v += 7.123_456_789_1;
        }
        values
    }

    #[test]
    fn round_trip() {
        for format in CoordinateFormat::ALL_VALID {
            if !format.is_parseable() {
                continue;
            }
            let tolerance = format.precision().unwrap().tolerance();

            for value in values() {
                let text = convert_input(value, format);
                let parsed = identify_input_type(&text);
                assert_eq!(parsed.format, format, "{value} rendered as {text:?}");
                assert!(
                    (parsed.value - value).abs() <= tolerance,
                    "{value} rendered as {text:?} was parsed as {}",
                    parsed.value
                );
            }
        }
    }

    #[test]
    fn symbol_formats_round_trip_through_spaces() {
        for (symbol, plain) in [(DdMmSymbol, DdMm), (DdMmSsSymbol, DdMmSs)] {
            for value in values() {
                let text = convert_input(value, symbol)
                    .replace([DEGREE_SIGN, ARC_MINUTE_SIGN], " ")
                    .replace(ARC_SECOND_SIGN, "");
                let text = text.trim_end();
                let parsed = identify_input_type(text);
                assert_eq!(parsed.format, plain, "{text:?}");
                assert!((parsed.value - value).abs() <= plain.precision().unwrap().tolerance());
            }
        }
    }
}
