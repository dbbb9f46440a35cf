use std::ops::RangeInclusive;

use crate::errors::{FieldError, ValidationErrors};

/// Anything which can be checked before saving
pub trait Validate {
    /// Collect all the invalid fields, in the order they appear in the form
    fn field_errors(&self) -> Vec<FieldError>;

    /// Check all the fields
    ///
    /// # Errors
    /// At least one field is invalid.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

pub(crate) fn check_range<T: PartialOrd>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: T,
    range: &RangeInclusive<T>,
    message: &'static str,
) {
    // NaN is never in range
    if !range.contains(&value) {
        errors.push(FieldError { field, message });
    }
}

/// The number of characters (not bytes) should be in the range
pub(crate) fn check_length(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    range: &RangeInclusive<usize>,
    message: &'static str,
) {
    check_range(errors, field, value.chars().count(), range, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        let mut errors = Vec::new();
        check_range(&mut errors, "a", 1, &(1..=3), "bad");
        check_range(&mut errors, "b", 3, &(1..=3), "bad");
        assert!(errors.is_empty());

        check_range(&mut errors, "c", 4, &(1..=3), "bad");
        assert_eq!(errors, [FieldError { field: "c", message: "bad" }]);
    }

    #[test]
    fn nan_is_out_of_range() {
        let mut errors = Vec::new();
        check_range(&mut errors, "x", f64::NAN, &(0.0..=1.0), "bad");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn length_counts_characters() {
        let mut errors = Vec::new();
        check_length(&mut errors, "ssid", "Café", &(1..=4), "too long");
        assert!(errors.is_empty());

        check_length(&mut errors, "ssid", "", &(1..=4), "empty");
        assert_eq!(errors[0].message, "empty");
    }
}
