//! A [`Color`] holds a color specified in any of the supported notations.

use std::str::FromStr;

use crate::{Error, Hex, Hsl, Hsv, Result, Rgb};

/// A 64-bit floating point value that all fractional components are stored
/// as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The notations a color can be specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    /// A 6 digit hexadecimal string, e.g. `2a445d`.
    Hex,
    /// Red, green and blue channels in the range [0, 255].
    Rgb,
    /// Hue, saturation and lightness.
    Hsl,
    /// Hue, saturation and value.
    Hsv,
}

/// Capability of every notation: converting to [`Rgb`], the pivot all
/// conversions go through.
pub trait ToRgb {
    /// Convert this color to the RGB notation.
    fn to_rgb(&self) -> Rgb;
}

/// A color in any of the supported notations.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// See [`Hex`].
    Hex(Hex),
    /// See [`Rgb`].
    Rgb(Rgb),
    /// See [`Hsl`].
    Hsl(Hsl),
    /// See [`Hsv`].
    Hsv(Hsv),
}

impl Color {
    /// Return the notation this color is specified in.
    pub fn notation(&self) -> Notation {
        match self {
            Color::Hex(_) => Notation::Hex,
            Color::Rgb(_) => Notation::Rgb,
            Color::Hsl(_) => Notation::Hsl,
            Color::Hsv(_) => Notation::Hsv,
        }
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::Hsl(value)
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        Color::Hsv(value)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Only hexadecimal strings are accepted.
    fn from_str(s: &str) -> Result<Self> {
        Hex::new(s).map(Color::Hex)
    }
}

/// Anything that can be passed where a color is expected: a color in one of
/// the supported notations, or a raw string that still has to be parsed as a
/// hexadecimal color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorInput<'a> {
    /// An already validated color.
    Color(Color),
    /// A string that is parsed with [`Hex::new`] when it is needed.
    Raw(&'a str),
}

impl ColorInput<'_> {
    /// Normalize the input to the RGB notation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] when a raw string is not a valid
    /// hexadecimal color.
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            ColorInput::Color(color) => Ok(color.to_rgb()),
            ColorInput::Raw(raw) => Hex::new(raw).map(|hex| hex.to_rgb()),
        }
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        ColorInput::Raw(value)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(value: &'a String) -> Self {
        ColorInput::Raw(value.as_str())
    }
}

impl From<Color> for ColorInput<'_> {
    fn from(value: Color) -> Self {
        ColorInput::Color(value)
    }
}

impl From<&Color> for ColorInput<'_> {
    fn from(value: &Color) -> Self {
        ColorInput::Color(value.clone())
    }
}

macro_rules! color_input_from {
    ($($model:ident),*) => {
        $(
            impl From<$model> for ColorInput<'_> {
                fn from(value: $model) -> Self {
                    ColorInput::Color(Color::$model(value))
                }
            }

            impl From<&$model> for ColorInput<'_> {
                fn from(value: &$model) -> Self {
                    ColorInput::Color(Color::$model(value.clone()))
                }
            }
        )*
    };
}

color_input_from!(Hex, Rgb, Hsl, Hsv);
