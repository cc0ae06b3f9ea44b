//! Relative luminance based contrast between two colors.
//! <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>

use crate::{color::ToRgb, ColorInput, Component, Result};

/// The contrast ratio two colors must exceed to be considered contrasting
/// when no threshold is given.
pub const DEFAULT_CONTRAST_THRESHOLD: Component = 4.0;

/// Calculate the contrast ratio between two colors: the relative luminance
/// of the lighter color over that of the darker one, each offset by 0.05. The
/// result ranges from 1 (identical luminance) to 21 (black and white).
pub fn contrast_ratio(first: &impl ToRgb, second: &impl ToRgb) -> Component {
    let first = first.to_rgb().luminance();
    let second = second.to_rgb().luminance();

    let bright = first.max(second);
    let dark = first.min(second);

    let ratio = (bright + 0.05) / (dark + 0.05);
    tracing::trace!(first, second, ratio, "calculated contrast ratio");

    ratio
}

/// Calculate the contrast ratio between two colors given in any notation, or
/// as hexadecimal strings.
///
/// ```rust
/// use tincture::{calculate_color_contrast, Rgb};
/// let ratio = calculate_color_contrast(Rgb::new(0, 0, 0)?, "#fff")?;
/// assert!((ratio - 21.0).abs() < 1.0e-9);
/// # Ok::<(), tincture::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::InvalidHex`] when a string is not a valid
/// hexadecimal color.
pub fn calculate_color_contrast<'a, 'b>(
    first: impl Into<ColorInput<'a>>,
    second: impl Into<ColorInput<'b>>,
) -> Result<Component> {
    let first = first.into().to_rgb()?;
    let second = second.into().to_rgb()?;

    Ok(contrast_ratio(&first, &second))
}

/// Determine if two colors contrast each other, i.e. their contrast ratio is
/// greater than [`DEFAULT_CONTRAST_THRESHOLD`].
///
/// # Errors
///
/// See [`calculate_color_contrast`].
pub fn do_colors_contrast<'a, 'b>(
    first: impl Into<ColorInput<'a>>,
    second: impl Into<ColorInput<'b>>,
) -> Result<bool> {
    do_colors_contrast_with_threshold(first, second, DEFAULT_CONTRAST_THRESHOLD)
}

/// Determine if the contrast ratio of two colors is greater than `threshold`.
///
/// # Errors
///
/// See [`calculate_color_contrast`].
pub fn do_colors_contrast_with_threshold<'a, 'b>(
    first: impl Into<ColorInput<'a>>,
    second: impl Into<ColorInput<'b>>,
    threshold: Component,
) -> Result<bool> {
    Ok(calculate_color_contrast(first, second)? > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, Color, Error, Hex, Hsl, Hsv, Rgb};
    use proptest::prelude::*;

    fn gray(level: u8) -> Rgb {
        Rgb::from([level, level, level])
    }

    #[test]
    fn do_colors_contrast_with_default_threshold() {
        let black = gray(0);
        let white = gray(255);

        #[rustfmt::skip]
        let tests = [
            (black, white, true),
            (black, gray(200), true),
            (white, gray(50), true),
            (black, gray(50), false),
            (white, gray(200), false),
            (black, gray(128), true),
            (white, gray(128), false),
        ];

        for (first, second, expected) in tests {
            assert_eq!(do_colors_contrast(first, second), Ok(expected));
        }
    }

    #[test]
    fn threshold_is_configurable() {
        assert_eq!(
            do_colors_contrast_with_threshold(gray(255), gray(128), 3.0),
            Ok(true)
        );
        assert_eq!(
            do_colors_contrast_with_threshold(gray(0), gray(255), 21.0),
            Ok(false)
        );
    }

    #[test]
    fn calculate_contrast() {
        #[rustfmt::skip]
        let tests = [
            (0, 255, 21.0),
            (0, 200, 12.5516),
            (255, 50, 12.820512820512821),
            (0, 50, 1.638),
            (255, 200, 1.6730934701551994),
            (0, 128, 5.3172),
            (255, 128, 3.9494470774091632),
        ];

        for (first, second, expected) in tests {
            let ratio = calculate_color_contrast(gray(first), gray(second)).unwrap();
            assert_component_eq!(ratio, expected);
        }
    }

    #[test]
    fn accepts_every_notation() {
        let black = Rgb::new(0, 0, 0).unwrap();

        let inputs: [ColorInput; 6] = [
            "#fff".into(),
            Hex::new("ffffff").unwrap().into(),
            gray(255).into(),
            Hsl::new(0, 0.0, 1.0).unwrap().into(),
            Hsv::new(0, 0.0, 1.0).unwrap().into(),
            Color::Rgb(gray(255)).into(),
        ];

        for input in inputs {
            assert_component_eq!(calculate_color_contrast(black, input).unwrap(), 21.0);
        }
    }

    #[test]
    fn invalid_strings_are_rejected() {
        assert_eq!(
            calculate_color_contrast("taco24", "#fff"),
            Err(Error::InvalidHex("taco24".to_string()))
        );
        assert_eq!(
            do_colors_contrast("#000", "ffff"),
            Err(Error::InvalidHex("ffff".to_string()))
        );
    }

    proptest! {
        #[test]
        fn contrast_is_symmetric(a in any::<[u8; 3]>(), b in any::<[u8; 3]>()) {
            let (a, b) = (Rgb::from(a), Rgb::from(b));
            prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
        }

        #[test]
        fn contrast_is_within_bounds(a in any::<[u8; 3]>(), b in any::<[u8; 3]>()) {
            let ratio = contrast_ratio(&Rgb::from(a), &Rgb::from(b));
            prop_assert!(ratio >= 1.0);
            prop_assert!(ratio <= 21.0 + 1.0e-9);
        }
    }
}
