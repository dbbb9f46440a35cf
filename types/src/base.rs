//! Validation of the base station settings before they are sent to the receiver.
//!
//! A base either surveys its own position in for some time
//! or is fixed at the position given in ECEF or geodetic coordinates.
//! Every field is checked against its range and all the failures are reported at once.

use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::{FieldError, PairError},
    pair::GeodeticPair,
    validate::{check_range, Validate},
};

/// The ECEF Z used when the field was left empty (zero)
pub const DEFAULT_ECEF_Z: f64 = 4_084_500.0;

const OBSERVATION_SECONDS: RangeInclusive<u16> = 60..=600;
const OBSERVATION_ACCURACY: RangeInclusive<f64> = 1.0..=5.1;
const ECEF_XY: RangeInclusive<f64> = -5_000_000.0..=5_000_000.0;
const ECEF_Z: RangeInclusive<f64> = 3_300_000.0..=5_000_000.0;
const FIXED_DEGREES: RangeInclusive<f64> = -180.0..=180.0;
const ALTITUDE: RangeInclusive<f64> = -11_034.0..=8_849.0;

/// Determine the base position by averaging the fixes
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurveyIn {
    /// Minimal duration of the survey
    pub observation_seconds: u16,
    /// Required 3D accuracy of the position, meters
    pub position_accuracy: f64,
}

impl Validate for SurveyIn {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_range(
            &mut errors,
            "observationSeconds",
            self.observation_seconds,
            &OBSERVATION_SECONDS,
            "Must be between 60 to 600",
        );
        check_range(
            &mut errors,
            "observationPositionAccuracy",
            self.position_accuracy,
            &OBSERVATION_ACCURACY,
            "Must be between 1.0 to 5.0",
        );
        errors
    }
}

/// Earth-centered, Earth-fixed cartesian position, meters
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EcefPosition {
    /// X axis
    pub x: f64,
    /// Y axis
    pub y: f64,
    /// Z axis
    pub z: f64,
}

impl EcefPosition {
    /// The same position with the empty Z replaced by the [default](DEFAULT_ECEF_Z)
    pub fn normalized(self) -> Self {
        if self.z == 0.0 {
            Self {
                z: DEFAULT_ECEF_Z,
                ..self
            }
        } else {
            self
        }
    }
}

impl Validate for EcefPosition {
    fn field_errors(&self) -> Vec<FieldError> {
        let Self { x, y, z } = self.normalized();
        let mut errors = Vec::new();
        check_range(
            &mut errors,
            "fixedEcefX",
            x,
            &ECEF_XY,
            "Must be -5000000 to 5000000",
        );
        check_range(
            &mut errors,
            "fixedEcefY",
            y,
            &ECEF_XY,
            "Must be -5000000 to 5000000",
        );
        check_range(
            &mut errors,
            "fixedEcefZ",
            z,
            &ECEF_Z,
            "Must be 3300000 to 5000000",
        );
        errors
    }
}

/// Latitude and longitude in decimal degrees, altitude in meters
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticPosition {
    /// Decimal degrees
    pub latitude: f64,
    /// Decimal degrees
    pub longitude: f64,
    /// Meters
    pub altitude: f64,
}

impl GeodeticPosition {
    /// Construct the position from the free-form texts typed in the same notation.
    ///
    /// # Errors
    /// The texts do not form a valid [pair](GeodeticPair::parse).
    pub fn from_text(latitude: &str, longitude: &str, altitude: f64) -> Result<Self, PairError> {
        let pair = GeodeticPair::parse(latitude, longitude)?;
        Ok(Self {
            latitude: pair.latitude(),
            longitude: pair.longitude(),
            altitude,
        })
    }
}

impl Validate for GeodeticPosition {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_range(
            &mut errors,
            "fixedLat",
            self.latitude,
            &FIXED_DEGREES,
            "Must be -180 to 180",
        );
        check_range(
            &mut errors,
            "fixedLong",
            self.longitude,
            &FIXED_DEGREES,
            "Must be -180 to 180",
        );
        check_range(
            &mut errors,
            "fixedAltitude",
            self.altitude,
            &ALTITUDE,
            "Must be -11034 to 8849",
        );
        errors
    }
}

/// The known position of a fixed base
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FixedBase {
    /// Cartesian coordinates
    Ecef(EcefPosition),
    /// Geodetic coordinates
    Geodetic(GeodeticPosition),
}

impl Validate for FixedBase {
    fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::Ecef(pos) => pos.field_errors(),
            Self::Geodetic(pos) => pos.field_errors(),
        }
    }
}

/// How the base station gets its position
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BaseConfig {
    /// Self-surveying base
    SurveyIn(SurveyIn),
    /// Base with the known position
    Fixed(FixedBase),
}

impl Validate for BaseConfig {
    fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::SurveyIn(survey) => survey.field_errors(),
            Self::Fixed(fixed) => fixed.field_errors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|err| err.field).collect()
    }

    #[test]
    fn survey_in_valid() {
        let survey = SurveyIn {
            observation_seconds: 60,
            position_accuracy: 5.0,
        };
        assert!(survey.validate().is_ok());
    }

    #[test]
    fn survey_in_both_invalid() {
        let survey = SurveyIn {
            observation_seconds: 601,
            position_accuracy: 0.5,
        };
        let errors = survey.validate().unwrap_err();
        assert_eq!(
            fields(errors.fields()),
            ["observationSeconds", "observationPositionAccuracy"]
        );
        assert_eq!(errors.to_string(), "Please clear 2 errors");
        assert_eq!(
            errors.fields()[0].to_string(),
            "observationSeconds: Error: Must be between 60 to 600"
        );
    }

    #[test]
    fn accuracy_upper_bound_is_lenient() {
        let survey = SurveyIn {
            observation_seconds: 300,
            position_accuracy: 5.1,
        };
        assert!(survey.validate().is_ok());
    }

    #[test]
    fn ecef_valid() {
        let pos = EcefPosition {
            x: -1_280_206.568,
            y: -4_716_804.403,
            z: 4_086_665.484,
        };
        assert!(pos.validate().is_ok());
    }

    #[test]
    fn ecef_empty_z_gets_default() {
        let pos = EcefPosition {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        assert_eq!(pos.normalized().z, DEFAULT_ECEF_Z);
        assert!(pos.validate().is_ok());
    }

    #[test]
    fn ecef_out_of_range() {
        let pos = EcefPosition {
            x: 5_000_001.0,
            y: 0.0,
            z: 1_000_000.0,
        };
        let errors = pos.field_errors();
        assert_eq!(fields(&errors), ["fixedEcefX", "fixedEcefZ"]);
        assert_eq!(errors[1].message, "Must be 3300000 to 5000000");
    }

    #[test]
    fn geodetic_from_text() {
        let pos = GeodeticPosition::from_text("40 5 25.2049", "-105 11 5.1629", 1560.0).unwrap();
        assert!((pos.latitude - 40.090_334_69).abs() < 1e-8);
        assert!(pos.validate().is_ok());
    }

    #[test]
    fn geodetic_from_mismatched_text() {
        let err = GeodeticPosition::from_text("40.5", "-105 11 5.1629", 1560.0).unwrap_err();
        assert!(matches!(err, PairError::FormatMismatch { .. }));
    }

    #[test]
    fn geodetic_altitude_out_of_range() {
        let base = BaseConfig::Fixed(FixedBase::Geodetic(GeodeticPosition {
            latitude: 40.0,
            longitude: -105.0,
            altitude: 9_000.0,
        }));
        let errors = base.validate().unwrap_err();
        assert_eq!(fields(errors.fields()), ["fixedAltitude"]);
        assert_eq!(errors.to_string(), "Please clear 1 error");
    }

    #[test]
    fn nan_is_invalid() {
        let pos = GeodeticPosition {
            latitude: f64::NAN,
            longitude: 0.0,
            altitude: 0.0,
        };
        assert_eq!(fields(&pos.field_errors()), ["fixedLat"]);
    }

    #[test]
    fn base_config_dispatch() {
        let base = BaseConfig::SurveyIn(SurveyIn {
            observation_seconds: 10,
            position_accuracy: 2.0,
        });
        assert_eq!(fields(&base.field_errors()), ["observationSeconds"]);

        let base = BaseConfig::Fixed(FixedBase::Ecef(EcefPosition {
            x: 0.0,
            y: 6_000_000.0,
            z: 4_000_000.0,
        }));
        assert_eq!(fields(&base.field_errors()), ["fixedEcefY"]);
    }
}
