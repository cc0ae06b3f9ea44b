//! Model a color with the HSL notation.

use crate::{color::ToRgb, math, Component, Rgb};

tincture_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        hue: u16,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the RGB notation.
    /// <https://www.rapidtables.com/convert/color/hsl-to-rgb.html>
    pub fn to_rgb(&self) -> Rgb {
        let chroma = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let offset = self.lightness - chroma / 2.0;

        Rgb::from_components(math::hue_sextant(self.hue, chroma).map(|v| v + offset))
    }
}

impl ToRgb for Hsl {
    fn to_rgb(&self) -> Rgb {
        Hsl::to_rgb(self)
    }
}
