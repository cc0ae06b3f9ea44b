//! Model a color with red, green and blue channels.

use crate::{
    color::ToRgb,
    math::{self, normalize_channel},
    model::check_channel,
    Component, Components, Hex, Hsl, Hsv, Result,
};

/// A color specified with 8-bit red, green and blue channels. Every other
/// notation converts through this one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Create a new color from red, green and blue channels.
    ///
    /// ```rust
    /// use tincture::Rgb;
    /// let rgb = Rgb::new(42, 68, 93)?;
    /// assert_eq!(rgb.to_hex().as_str(), "2a445d");
    /// assert!(Rgb::new(256, 68, 93).is_err());
    /// # Ok::<(), tincture::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfRange`] naming the first channel that is
    /// outside of the range [0, 255]. Values are never clamped.
    pub fn new(red: i32, green: i32, blue: i32) -> Result<Self> {
        Ok(Self {
            red: check_channel("Red", red)?,
            green: check_channel("Green", green)?,
            blue: check_channel("Blue", blue)?,
        })
    }

    /// Return the red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Return the green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Return the blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Return the channels mapped into the range [0, 1].
    pub fn to_components(&self) -> Components {
        Components(
            normalize_channel(self.red),
            normalize_channel(self.green),
            normalize_channel(self.blue),
        )
    }

    pub(crate) fn from_components(components: Components) -> Self {
        let Components(red, green, blue) = components;
        Self {
            red: math::denormalize_channel(red),
            green: math::denormalize_channel(green),
            blue: math::denormalize_channel(blue),
        }
    }

    /// Convert this color to a hexadecimal string.
    pub fn to_hex(&self) -> Hex {
        Hex::from_normalized(format!(
            "{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue
        ))
    }

    /// Convert this color to the HSL notation.
    /// <https://pastebin.com/3xKsi7SD>
    pub fn to_hsl(&self) -> Hsl {
        let Components(red, green, blue) = self.to_components();

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl::new_unchecked(0, 0.0, lightness);
        }

        let delta = max - min;

        let saturation = if lightness < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let hue = if max == red {
            (green - blue) / delta
        } else if max == green {
            2.0 + (blue - red) / delta
        } else {
            4.0 + (red - green) / delta
        };

        Hsl::new_unchecked(math::wrap_hue(hue * 60.0), saturation, lightness)
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let Components(red, green, blue) = self.to_components();

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            ((green - blue) / delta) % 6.0
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        let mut degrees = hue * 60.0;
        if degrees < 0.0 {
            degrees += 360.0;
        }

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Hsv::new_unchecked(math::wrap_hue(degrees), saturation, max)
    }

    /// Calculate the relative luminance of this color, rounded to 5 decimal
    /// places.
    /// <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
    pub fn luminance(&self) -> Component {
        let Components(red, green, blue) = self.to_components().map(math::linearize);
        math::round_component(red * 0.2126 + green * 0.7152 + blue * 0.0722)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl ToRgb for Rgb {
    fn to_rgb(&self) -> Rgb {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, Error};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn rgb(red: i32, green: i32, blue: i32) -> Rgb {
        Rgb::new(red, green, blue).unwrap()
    }

    #[test]
    fn channels_out_of_range_are_rejected() {
        #[rustfmt::skip]
        const TESTS: &[(i32, i32, i32, &str, i32)] = &[
            (-1, 100, 100, "Red", -1),
            (256, 100, 100, "Red", 256),
            (100, -1, 100, "Green", -1),
            (100, 256, 100, "Green", 256),
            (100, 100, -1, "Blue", -1),
            (100, 100, 256, "Blue", 256),
        ];

        for &(red, green, blue, field, value) in TESTS {
            match Rgb::new(red, green, blue) {
                Err(Error::OutOfRange {
                    field: f, value: v, ..
                }) => {
                    assert_eq!(f, field);
                    assert_eq!(v, Component::from(value));
                }
                other => panic!("expected out of range error, got {:?}", other),
            }
        }
    }

    #[test]
    fn accessors() {
        let c = rgb(42, 68, 93);
        assert_eq!(c.red(), 42);
        assert_eq!(c.green(), 68);
        assert_eq!(c.blue(), 93);
        assert_eq!(Rgb::from([42, 68, 93]), c);
    }

    #[test]
    fn convert_to_hex() {
        #[rustfmt::skip]
        const TESTS: &[(i32, i32, i32, &str)] = &[
            (0, 0, 0, "000000"),
            (255, 255, 255, "ffffff"),
            (136, 0, 0, "#800"),
            (42, 68, 93, "2a445d"),
            (180, 147, 89, "b49359"),
        ];

        for &(red, green, blue, expected) in TESTS {
            assert_eq!(rgb(red, green, blue).to_hex(), Hex::new(expected).unwrap());
        }
    }

    #[test]
    fn convert_to_hsl() {
        #[rustfmt::skip]
        const TESTS: &[(i32, i32, i32, i32, Component, Component)] = &[
            (0, 0, 0, 0, 0.0, 0.0),
            (255, 255, 255, 0, 0.0, 1.0),
            (136, 0, 0, 0, 1.0, 0.26667),
            (42, 68, 93, 209, 0.37778, 0.26471),
            (180, 147, 89, 38, 0.37759, 0.52745),
        ];

        for &(red, green, blue, h, s, l) in TESTS {
            assert_eq!(rgb(red, green, blue).to_hsl(), Hsl::new(h, s, l).unwrap());
        }
    }

    #[test]
    fn convert_to_hsv() {
        #[rustfmt::skip]
        const TESTS: &[(i32, i32, i32, i32, Component, Component)] = &[
            (0, 0, 0, 0, 0.0, 0.0),
            (255, 255, 255, 0, 0.0, 1.0),
            (136, 0, 0, 0, 1.0, 0.53333),
            (42, 68, 93, 209, 0.54839, 0.36471),
            (180, 147, 89, 38, 0.50556, 0.70588),
        ];

        for &(red, green, blue, h, s, v) in TESTS {
            assert_eq!(rgb(red, green, blue).to_hsv(), Hsv::new(h, s, v).unwrap());
        }
    }

    #[test]
    fn hue_with_red_dominant_and_blue_over_green_wraps() {
        // (0 - 0.50196) / 1 * 60 = -30.1 degrees.
        assert_eq!(rgb(255, 0, 128).to_hsl().hue(), 330);
        assert_eq!(rgb(255, 0, 128).to_hsv().hue(), 330);

        // Just short of a full turn rounds up to 360, which wraps to 0.
        assert_eq!(rgb(255, 0, 1).to_hsl().hue(), 0);
        assert_eq!(rgb(255, 0, 1).to_hsv().hue(), 0);
    }

    #[test]
    fn luminance() {
        #[rustfmt::skip]
        const TESTS: &[(i32, i32, i32, Component)] = &[
            (0, 0, 0, 0.0),
            (255, 255, 255, 1.0),
            (136, 0, 0, 0.05234),
            (42, 68, 93, 0.05417),
            (180, 147, 89, 0.31292),
        ];

        for &(red, green, blue, expected) in TESTS {
            assert_component_eq!(rgb(red, green, blue).luminance(), expected);
        }
    }

    #[test]
    fn whole_degree_hue_drifts_channels() {
        // Hue 239.34 is stored as 239, which moves green by one.
        let color = rgb(0, 1, 91);
        assert_eq!(color.to_hsl().hue(), 239);
        assert_eq!(color.to_hsl().to_rgb(), rgb(0, 2, 91));
        assert_eq!(color.to_hsv().to_rgb(), rgb(0, 2, 91));

        // Hue 0.24 is stored as 0, which drops green entirely.
        assert_eq!(rgb(255, 1, 0).to_hsl().to_rgb(), rgb(255, 0, 0));
        assert_eq!(rgb(255, 1, 0).to_hsv().to_rgb(), rgb(255, 0, 0));
    }

    proptest! {
        #[test]
        fn hex_round_trip_is_exact(red in 0..=255i32, green in 0..=255i32, blue in 0..=255i32) {
            let color = rgb(red, green, blue);
            prop_assert_eq!(color.to_hex().to_rgb(), color);
        }

        #[test]
        fn hue_round_trips_stay_close(red in 0..=255i32, green in 0..=255i32, blue in 0..=255i32) {
            let color = rgb(red, green, blue);

            // Hues are stored in whole degrees, so a channel may drift a
            // little on the way back.
            for back in [color.to_hsl().to_rgb(), color.to_hsv().to_rgb()] {
                prop_assert!(back.red().abs_diff(color.red()) <= 2);
                prop_assert!(back.green().abs_diff(color.green()) <= 2);
                prop_assert!(back.blue().abs_diff(color.blue()) <= 2);
            }
        }
    }
}
