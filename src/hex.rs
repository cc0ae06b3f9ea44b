//! Model a color as a hexadecimal string.

use std::{fmt, str::FromStr};

use crate::{color::ToRgb, Error, Result, Rgb};

/// Characters trimmed from both ends of a hexadecimal color before it is
/// validated.
const TRIMMED: &[char] = &[' ', '#', ';'];

/// Determine if a string is a hexadecimal color: exactly 3 or 6 hexadecimal
/// digits and nothing else.
pub fn is_hex_color(s: &str) -> bool {
    matches!(s.len(), 3 | 6) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Remove spaces, `#` and `;` from both ends of a string and return what is
/// left if it is a hexadecimal color.
///
/// ```rust
/// use tincture::clean_hex_color;
/// assert_eq!(clean_hex_color(" #a1b2c3; "), Some("a1b2c3"));
/// assert_eq!(clean_hex_color("#a1b2"), None);
/// ```
pub fn clean_hex_color(s: &str) -> Option<&str> {
    let trimmed = s.trim_matches(TRIMMED);
    is_hex_color(trimmed).then_some(trimmed)
}

/// A color specified as 6 lowercase hexadecimal digits, without a leading
/// `#`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hex {
    hex_string: String,
}

impl Hex {
    /// Create a new hexadecimal color. The input may use the 3 digit
    /// shorthand, either letter case, and may be surrounded by spaces, `#` or
    /// `;`. The stored form is always the 6 digit lowercase string.
    ///
    /// ```rust
    /// use tincture::Hex;
    /// assert_eq!(Hex::new("#800")?.as_str(), "880000");
    /// assert_eq!(Hex::new("  #2A445D;")?.as_str(), "2a445d");
    /// # Ok::<(), tincture::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] holding the input when it is not a
    /// valid hexadecimal color.
    pub fn new(input: impl AsRef<str>) -> Result<Self> {
        let input = input.as_ref();

        let Some(clean) = clean_hex_color(input) else {
            tracing::debug!(input, "invalid hexadecimal color");
            return Err(Error::InvalidHex(input.to_string()));
        };

        let hex_string = if clean.len() == 3 {
            clean
                .chars()
                .flat_map(|c| [c, c])
                .map(|c| c.to_ascii_lowercase())
                .collect()
        } else {
            clean.to_ascii_lowercase()
        };

        Ok(Self::from_normalized(hex_string))
    }

    /// Wrap a string that is already 6 lowercase hexadecimal digits.
    pub(crate) fn from_normalized(hex_string: String) -> Self {
        debug_assert!(hex_string.len() == 6 && is_hex_color(&hex_string));
        Self { hex_string }
    }

    /// Return the 6 digit lowercase string.
    pub fn as_str(&self) -> &str {
        &self.hex_string
    }

    /// Convert this color to the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        let value = self
            .hex_string
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0_u32, |acc, digit| (acc << 4) | digit);

        let [_, red, green, blue] = value.to_be_bytes();
        Rgb::from([red, green, blue])
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string)
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Hex {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Hex {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

/// Numbers are read as their decimal digits, so `123` is the shorthand for
/// `112233`.
impl TryFrom<u32> for Hex {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value.to_string())
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl ToRgb for Hex {
    fn to_rgb(&self) -> Rgb {
        Hex::to_rgb(self)
    }
}
