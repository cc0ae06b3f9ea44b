//! Math utility functions.

use num_traits::{clamp, ToPrimitive};

use crate::{Component, Components};

/// Fractional components are stored with this many decimal places.
pub const PRECISION: i32 = 5;

/// The largest value of an 8-bit channel as a [`Component`].
const CHANNEL_MAX: Component = 255.0;

/// Round a fractional component to [`PRECISION`] decimal places.
pub fn round_component(value: Component) -> Component {
    let scale = Component::powi(10.0, PRECISION);
    (value * scale).round() / scale
}

/// Map an 8-bit channel into the range [0, 1].
pub fn normalize_channel(channel: u8) -> Component {
    Component::from(channel) / CHANNEL_MAX
}

/// Map a value in the range [0, 1] to the nearest 8-bit channel.
pub fn denormalize_channel(value: Component) -> u8 {
    clamp((value * CHANNEL_MAX).round(), 0.0, CHANNEL_MAX)
        .to_u8()
        .unwrap_or_default()
}

/// Round a hue in degrees to the nearest whole degree and wrap it into
/// [0, 360).
pub fn wrap_hue(degrees: Component) -> u16 {
    degrees
        .round()
        .rem_euclid(360.0)
        .to_u16()
        .unwrap_or_default()
}

/// Select the red, green and blue components (before the lightness offset is
/// added) for the 60 degree sextant the `hue` falls in.
pub fn hue_sextant(hue: u16, chroma: Component) -> Components {
    let h = Component::from(hue) / 60.0;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());

    match hue / 60 {
        0 => Components(chroma, x, 0.0),
        1 => Components(x, chroma, 0.0),
        2 => Components(0.0, chroma, x),
        3 => Components(0.0, x, chroma),
        4 => Components(x, 0.0, chroma),
        _ => Components(chroma, 0.0, x),
    }
}

/// Linearize a gamma encoded channel in the range [0, 1] for the relative
/// luminance calculation.
/// <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
pub fn linearize(value: Component) -> Component {
    if value < 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}
