//! Errors raised while constructing or parsing colors.

use crate::Component;

/// A convenient alias for results returned by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every error is an invalid argument: the value passed in can never describe
/// a color. Errors are raised before any value is constructed, so a failed
/// constructor never leaves a partial color behind.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric component is outside of its valid range.
    #[error("\"{field}\" value is expected to be between {min} and {max}, \"{value}\" provided")]
    OutOfRange {
        /// The name of the component, e.g. `"Red"` or `"Saturation"`.
        field: &'static str,
        /// The value that was rejected.
        value: Component,
        /// The smallest accepted value.
        min: Component,
        /// The largest accepted value.
        max: Component,
    },

    /// A string (or stringified number) that does not hold 3 or 6
    /// hexadecimal digits.
    #[error("\"{0}\" is not a valid hexadecimal color")]
    InvalidHex(String),
}
