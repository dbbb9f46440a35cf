//! Utilities functions which do not linked to domain

use std::ops::{Div, Rem};

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

const POW_10: [u32; 10] = [
    1_u32,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// The powers of 10
pub const fn pow_10(pow: usize) -> u32 {
    POW_10[pow]
}

/// Round the number to the given count of decimal digits (up to 9)
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = f64::from(pow_10(decimals));
    (value * scale).round() / scale
}

/// Count the occurrences of the character
pub(crate) fn count_char(s: &str, ch: char) -> usize {
    s.chars().filter(|&c| c == ch).count()
}
