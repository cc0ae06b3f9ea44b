//! tincture models colors as hexadecimal strings, RGB, HSL and HSV, converts
//! between them through RGB, and calculates the relative luminance based
//! contrast between two colors.
//!
//! ```rust
//! use tincture::{do_colors_contrast, Hex, Rgb};
//! let navy = Hex::new("#2a445d")?.to_rgb();
//! assert_eq!(navy, Rgb::new(42, 68, 93)?);
//! assert!(do_colors_contrast(navy, "fff")?);
//! # Ok::<(), tincture::Error>(())
//! ```

#![deny(missing_docs)]

mod color;
mod contrast;
mod convert;
mod error;
mod hex;
mod hsl;
mod hsv;
mod math;
mod model;
mod rgb;


pub use color::{Color, ColorInput, Component, Components, Notation, ToRgb};
pub use contrast::{
    calculate_color_contrast, contrast_ratio, do_colors_contrast,
    do_colors_contrast_with_threshold, DEFAULT_CONTRAST_THRESHOLD,
};
pub use error::{Error, Result};
pub use hex::{clean_hex_color, is_hex_color, Hex};
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
