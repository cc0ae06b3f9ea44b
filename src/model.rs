//! Validation shared by the constructors of every color model.

use std::ops::RangeInclusive;

use crate::{Component, Error, Result};

/// The largest hue accepted, in degrees.
pub const MAX_HUE: u16 = 359;

/// The largest value of an 8-bit channel.
pub const MAX_CHANNEL: u8 = u8::MAX;

/// Valid range for fractional components such as saturation.
pub const FRACTION_RANGE: RangeInclusive<Component> = 0.0..=1.0;

fn out_of_range(field: &'static str, value: Component, max: Component) -> Error {
    tracing::debug!(field, value, max, "color component out of range");

    Error::OutOfRange {
        field,
        value,
        min: 0.0,
        max,
    }
}

/// Check that `value` is a valid 8-bit channel.
pub fn check_channel(field: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value)
        .map_err(|_| out_of_range(field, Component::from(value), Component::from(MAX_CHANNEL)))
}

/// Check that `value` is a hue in the range [0, 359].
pub fn check_hue(field: &'static str, value: i32) -> Result<u16> {
    u16::try_from(value)
        .ok()
        .filter(|hue| *hue <= MAX_HUE)
        .ok_or_else(|| out_of_range(field, Component::from(value), Component::from(MAX_HUE)))
}

/// Check that `value` is a fraction in the range [0, 1]. NaN is rejected.
pub fn check_fraction(field: &'static str, value: Component) -> Result<Component> {
    if FRACTION_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(out_of_range(field, value, *FRACTION_RANGE.end()))
    }
}
