//! The notations a coordinate can be typed in or displayed with.
//!
//! Every format belongs to one of the precision classes:
//! - decimal degrees with 9 decimal digits;
//! - degrees and decimal minutes with 7 decimal digits;
//! - degrees, minutes and decimal seconds with 6 decimal digits;
//! - degrees, minutes and whole seconds.

use std::{convert::TryFrom, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        DEGREE_DECIMALS, MINUTE_DECIMALS, MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECOND_DECIMALS,
    },
    errors::UnknownFormatId,
    utils::pow_10,
};

/// Coordinate notation.
///
/// The order of the variants matches the identifiers the receiver
/// stores the preferred input format with (see `TryFrom<u8>`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateFormat {
    /// `DD.ddddddddd`
    Dd,
    /// `DDMM.mmmmmmm`
    Ddmm,
    /// `DD MM.mmmmmmm`
    DdMm,
    /// `DD-MM.mmmmmmm`
    DdMmDash,
    /// `DD°MM.mmmmmmm'`
    DdMmSymbol,
    /// `DDMMSS.ssssss`
    Ddmmss,
    /// `DD MM SS.ssssss`
    DdMmSs,
    /// `DD-MM-SS.ssssss`
    DdMmSsDash,
    /// `DD°MM'SS.ssssss"`
    DdMmSsSymbol,
    /// `DDMMSS`
    DdmmssNoDecimal,
    /// `DD MM SS`
    DdMmSsNoDecimal,
    /// `DD-MM-SS`
    DdMmSsDashNoDecimal,
    /// The text is not a coordinate
    InvalidUnknown,
}

/// The smallest unit a format distinguishes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Precision {
    /// 10^-9 degree
    Degrees,
    /// 10^-7 arc minute
    Minutes,
    /// 10^-6 arc second
    Seconds,
    /// 1 arc second
    WholeSeconds,
}

impl Precision {
    /// The number of decimal digits of the last component
    pub const fn decimals(self) -> usize {
        match self {
            Self::Degrees => DEGREE_DECIMALS,
            Self::Minutes => MINUTE_DECIMALS,
            Self::Seconds => SECOND_DECIMALS,
            Self::WholeSeconds => 0,
        }
    }

    /// The value of one unit of the last decimal digit, in degrees
    pub fn tolerance(self) -> f64 {
        let last_digit = 1.0 / f64::from(pow_10(self.decimals()));
        match self {
            Self::Degrees => last_digit,
            Self::Minutes => last_digit / MINUTES_IN_DEGREE,
            Self::Seconds | Self::WholeSeconds => last_digit / SECONDS_IN_DEGREE,
        }
    }
}

/// The characters placed between the components of a coordinate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Glue {
    None,
    Space,
    Dash,
    Symbol,
}

impl CoordinateFormat {
    /// Every format a user can choose for the input
    pub const ALL_VALID: [Self; 12] = [
        Self::Dd,
        Self::Ddmm,
        Self::DdMm,
        Self::DdMmDash,
        Self::DdMmSymbol,
        Self::Ddmmss,
        Self::DdMmSs,
        Self::DdMmSsDash,
        Self::DdMmSsSymbol,
        Self::DdmmssNoDecimal,
        Self::DdMmSsNoDecimal,
        Self::DdMmSsDashNoDecimal,
    ];

    /// Is it a real format and not the `InvalidUnknown` sentinel
    pub fn is_valid(self) -> bool {
        self != Self::InvalidUnknown
    }

    /// The template of the format to show to a user
    pub const fn printable(self) -> &'static str {
        match self {
            Self::Dd => "DD.ddddddddd",
            Self::Ddmm => "DDMM.mmmmmmm",
            Self::DdMm => "DD MM.mmmmmmm",
            Self::DdMmDash => "DD-MM.mmmmmmm",
            Self::DdMmSymbol => "DD°MM.mmmmmmm'",
            Self::Ddmmss => "DDMMSS.ssssss",
            Self::DdMmSs => "DD MM SS.ssssss",
            Self::DdMmSsDash => "DD-MM-SS.ssssss",
            Self::DdMmSsSymbol => "DD°MM'SS.ssssss\"",
            Self::DdmmssNoDecimal => "DDMMSS",
            Self::DdMmSsNoDecimal => "DD MM SS",
            Self::DdMmSsDashNoDecimal => "DD-MM-SS",
            Self::InvalidUnknown => "Unknown",
        }
    }

    /// How precise the rendered coordinate is.
    /// `None` for the `InvalidUnknown`.
    pub fn precision(self) -> Option<Precision> {
        match self {
            Self::Dd => Some(Precision::Degrees),
            Self::Ddmm | Self::DdMm | Self::DdMmDash | Self::DdMmSymbol => {
                Some(Precision::Minutes)
            }
            Self::Ddmmss | Self::DdMmSs | Self::DdMmSsDash | Self::DdMmSsSymbol => {
                Some(Precision::Seconds)
            }
            Self::DdmmssNoDecimal | Self::DdMmSsNoDecimal | Self::DdMmSsDashNoDecimal => {
                Some(Precision::WholeSeconds)
            }
            Self::InvalidUnknown => None,
        }
    }

    /// Can the text rendered in this format be parsed back.
    ///
    /// The symbol formats are for display only.
    pub fn is_parseable(self) -> bool {
        self.is_valid() && self.glue() != Some(Glue::Symbol)
    }

    pub(crate) fn glue(self) -> Option<Glue> {
        match self {
            Self::Dd | Self::InvalidUnknown => None,
            Self::Ddmm | Self::Ddmmss | Self::DdmmssNoDecimal => Some(Glue::None),
            Self::DdMm | Self::DdMmSs | Self::DdMmSsNoDecimal => Some(Glue::Space),
            Self::DdMmDash | Self::DdMmSsDash | Self::DdMmSsDashNoDecimal => Some(Glue::Dash),
            Self::DdMmSymbol | Self::DdMmSsSymbol => Some(Glue::Symbol),
        }
    }

    /// The variant of the seconds-based format without the fraction of a second
    pub(crate) fn without_decimal(self) -> Self {
        match self {
            Self::Ddmmss => Self::DdmmssNoDecimal,
            Self::DdMmSs => Self::DdMmSsNoDecimal,
            Self::DdMmSsDash => Self::DdMmSsDashNoDecimal,
            other => other,
        }
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.printable())
    }
}

impl From<CoordinateFormat> for u8 {
    fn from(format: CoordinateFormat) -> Self {
        format as Self
    }
}

impl TryFrom<u8> for CoordinateFormat {
    type Error = UnknownFormatId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if id == Self::InvalidUnknown as u8 {
            return Ok(Self::InvalidUnknown);
        }

        Self::ALL_VALID
            .get(usize::from(id))
            .copied()
            .ok_or(UnknownFormatId(id))
    }
}

/// The human-readable template of the format, `"Unknown"` for the invalid one
pub fn printable_input_type(format: CoordinateFormat) -> &'static str {
    format.printable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_dash_seconds() {
        assert_eq!(
            printable_input_type(CoordinateFormat::DdMmSsDash),
            "DD-MM-SS.ssssss"
        );
    }

    #[test]
    fn printable_unknown() {
        assert_eq!(
            printable_input_type(CoordinateFormat::InvalidUnknown),
            "Unknown"
        );
    }

    #[test]
    fn display_is_printable() {
        assert_eq!(CoordinateFormat::DdMmSymbol.to_string(), "DD°MM.mmmmmmm'");
        assert_eq!(
            format!("{}", CoordinateFormat::DdMmSsSymbol),
            "DD°MM'SS.ssssss\""
        );
        assert_eq!(CoordinateFormat::DdMmSsNoDecimal.to_string(), "DD MM SS");
    }

    #[test]
    fn printable_names_are_unique() {
        let mut names: Vec<_> = CoordinateFormat::ALL_VALID
            .iter()
            .map(|f| f.printable())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CoordinateFormat::ALL_VALID.len());
        assert!(!names.contains(&"Unknown"));
    }

    #[test]
    fn ids_follow_the_order() {
        for (id, format) in CoordinateFormat::ALL_VALID.iter().enumerate() {
            assert_eq!(usize::from(u8::from(*format)), id);
            assert_eq!(CoordinateFormat::try_from(id as u8).unwrap(), *format);
        }
        assert_eq!(u8::from(CoordinateFormat::InvalidUnknown), 12);
        assert_eq!(
            CoordinateFormat::try_from(12).unwrap(),
            CoordinateFormat::InvalidUnknown
        );
    }

    #[test]
    #[should_panic(expected = "UnknownFormatId(13)")]
    fn id_out_of_range() {
        let _f = CoordinateFormat::try_from(13).unwrap();
    }

    #[test]
    fn precision_classes() {
        assert_eq!(CoordinateFormat::Dd.precision(), Some(Precision::Degrees));
        assert_eq!(
            CoordinateFormat::DdMmDash.precision(),
            Some(Precision::Minutes)
        );
        assert_eq!(
            CoordinateFormat::DdMmSsSymbol.precision(),
            Some(Precision::Seconds)
        );
        assert_eq!(
            CoordinateFormat::DdmmssNoDecimal.precision(),
            Some(Precision::WholeSeconds)
        );
        assert_eq!(CoordinateFormat::InvalidUnknown.precision(), None);
    }

    #[test]
    fn tolerances() {
        assert!((Precision::Degrees.tolerance() - 1e-9).abs() < 1e-18);
        assert!((Precision::Seconds.tolerance() - 1e-6 / 3600.0).abs() < 1e-18);
        assert!((Precision::WholeSeconds.tolerance() - 1.0 / 3600.0).abs() < 1e-15);
        assert_eq!(Precision::WholeSeconds.decimals(), 0);
    }

    #[test]
    fn symbol_formats_are_display_only() {
        assert!(!CoordinateFormat::DdMmSymbol.is_parseable());
        assert!(!CoordinateFormat::DdMmSsSymbol.is_parseable());
        assert!(!CoordinateFormat::InvalidUnknown.is_parseable());
        assert!(CoordinateFormat::DdMmSsDashNoDecimal.is_parseable());
    }

    #[test]
    fn no_decimal_variants() {
        assert_eq!(
            CoordinateFormat::DdMmSs.without_decimal(),
            CoordinateFormat::DdMmSsNoDecimal
        );
        assert_eq!(
            CoordinateFormat::DdMm.without_decimal(),
            CoordinateFormat::DdMm
        );
    }
}
