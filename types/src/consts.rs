pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

pub(crate) const SIGN: char = '-';
pub(crate) const DECIMAL_POINT: char = '.';
pub(crate) const SPACE: char = ' ';
pub(crate) const DASH: char = '-';

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ARC_SECOND_SIGN: char = '"';

// the limits of a free-form coordinate text (the leading sign excluded)
pub(crate) const MAX_DECIMAL_POINTS: usize = 1;
pub(crate) const MAX_SPACES: usize = 2;
pub(crate) const MAX_DASHES: usize = 3;
pub(crate) const MAX_LEADING_DIGITS: usize = 7;

// the number of decimal digits each class of the formats is rendered with
pub(crate) const DEGREE_DECIMALS: usize = 9;
pub(crate) const MINUTE_DECIMALS: usize = 7;
pub(crate) const SECOND_DECIMALS: usize = 6;

/// Both latitude and longitude of a fixed base are accepted in this range
pub(crate) const MAX_FIXED_DEGREES: f64 = 180.0;
