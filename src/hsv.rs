//! Model a color with the HSV notation.

use crate::{color::ToRgb, math, Component, Rgb};

tincture_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue component of the color, in degrees.
        hue: u16,
        /// The saturation component of the color.
        saturation: Component,
        /// The value (brightness) component of the color.
        value: Component,
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        let chroma = self.value * self.saturation;
        let offset = self.value - chroma;

        Rgb::from_components(math::hue_sextant(self.hue, chroma).map(|v| v + offset))
    }
}

impl ToRgb for Hsv {
    fn to_rgb(&self) -> Rgb {
        Hsv::to_rgb(self)
    }
}
