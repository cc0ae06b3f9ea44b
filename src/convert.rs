//! Each notation is modeled with its own type. Every conversion between two
//! notations goes through [`Rgb`]; there is no direct path between, for
//! example, HSL and HSV.
//!
//! ```rust
//! use tincture::{Hex, Hsl};
//! let hsl: Hsl = Hex::new("2a445d")?  // create a color from a hex string.
//!     .to_rgb()                       // convert to rgb.
//!     .to_hsl();                      // convert to hsl.
//! assert_eq!(hsl, Hsl::new(209, 0.37778, 0.26471)?);
//! # Ok::<(), tincture::Error>(())
//! ```

use crate::{
    color::{Color, Notation, ToRgb},
    Rgb,
};

impl ToRgb for Color {
    fn to_rgb(&self) -> Rgb {
        match self {
            Color::Hex(hex) => hex.to_rgb(),
            Color::Rgb(rgb) => *rgb,
            Color::Hsl(hsl) => hsl.to_rgb(),
            Color::Hsv(hsv) => hsv.to_rgb(),
        }
    }
}

impl Color {
    /// Convert this color from its current notation to the specified
    /// notation.
    pub fn to_notation(&self, notation: Notation) -> Self {
        if self.notation() == notation {
            return self.clone();
        }

        let rgb = self.to_rgb();

        match notation {
            Notation::Hex => rgb.to_hex().into(),
            Notation::Rgb => rgb.into(),
            Notation::Hsl => rgb.to_hsl().into(),
            Notation::Hsv => rgb.to_hsv().into(),
        }
    }
}
