use std::ops::RangeInclusive;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::MAX_FIXED_DEGREES,
    errors::{Axis, FormatError, PairError},
    format::CoordinateFormat,
    parse::try_identify_input_type,
    render::try_convert_input,
};

/// The latitude and longitude typed by a user in the same notation
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticPair {
    latitude: f64,
    longitude: f64,
    format: CoordinateFormat,
}

fn valid_degrees() -> RangeInclusive<f64> {
    -MAX_FIXED_DEGREES..=MAX_FIXED_DEGREES
}

impl GeodeticPair {
    /// Parse both coordinates and make sure they share the notation.
    ///
    /// # Errors
    /// - any of the texts is not a coordinate;
    /// - the coordinates are typed in different notations;
    /// - any of the values is out of the `[-180..180]` range.
    ///
    /// ```
    /// use rtk_config_types::{CoordinateFormat, GeodeticPair};
    ///
    /// let pair = GeodeticPair::parse("40 5 25.2049", "-105 11 5.1629").unwrap();
    /// assert_eq!(pair.format(), CoordinateFormat::DdMmSs);
    ///
    /// assert!(GeodeticPair::parse("40.090334", "-105 11 5.1629").is_err());
    /// ```
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, PairError> {
        let lat = try_identify_input_type(latitude)
            .map_err(|err| PairError::Parse(Axis::Latitude, err))?;
        let lon = try_identify_input_type(longitude)
            .map_err(|err| PairError::Parse(Axis::Longitude, err))?;

        if lat.format != lon.format {
            debug!(
                "Coordinate formats mismatch: {} for {:?} and {} for {:?}",
                lat.format, latitude, lon.format, longitude
            );
            return Err(PairError::FormatMismatch {
                latitude: lat.format,
                longitude: lon.format,
            });
        }

        if !valid_degrees().contains(&lat.value) {
            return Err(PairError::OutOfRange(Axis::Latitude, lat.value));
        }

        if !valid_degrees().contains(&lon.value) {
            return Err(PairError::OutOfRange(Axis::Longitude, lon.value));
        }

        Ok(Self {
            latitude: lat.value,
            longitude: lon.value,
            format: lat.format,
        })
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The notation both coordinates were typed in
    pub fn format(&self) -> CoordinateFormat {
        self.format
    }

    /// Render both coordinates in the given notation.
    ///
    /// # Errors
    /// The `InvalidUnknown` format requested.
    pub fn render(&self, format: CoordinateFormat) -> Result<(String, String), FormatError> {
        let lat = try_convert_input(self.latitude, format)?;
        let lon = try_convert_input(self.longitude, format)?;
        Ok((lat, lon))
    }
}
