//! Dice and face counts
//!
//! Counts arrive as free text from the front-end. They are normalized rather
//! than rejected: anything that is not a number falls back to a default, and
//! numbers below the minimum are raised to it.

use thiserror::Error;

/// Smallest number of dice a roll may use.
pub const MIN_DICE_COUNT: u32 = 1;
/// Dice count used when the text is not a number.
pub const DEFAULT_DICE_COUNT: u32 = 1;
/// Smallest die the roller offers (a d4).
pub const MIN_FACE_COUNT: u32 = 4;
/// Face count used when the text is not a number.
pub const DEFAULT_FACE_COUNT: u32 = 6;

/// Error when building a roll configuration from explicit values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// Dice count below [`MIN_DICE_COUNT`]
    #[error("Dice count must be at least {min}, got {0}", min = MIN_DICE_COUNT)]
    InvalidDiceCount(u32),
    /// Face count below [`MIN_FACE_COUNT`]
    #[error("Face count must be at least {min}, got {0}", min = MIN_FACE_COUNT)]
    InvalidFaceCount(u32),
    /// Sort mode label not recognised
    #[error("Unknown sort mode: '{0}'")]
    UnknownSortMode(String),
}

/// Parse a count out of untrusted text.
///
/// Returns `max(parsed, minimum)` when `text` is a non-negative integer that
/// fits in an `i32`, and `default` otherwise. Never fails.
///
/// ```
/// use diceroller_domain::parse_count;
///
/// assert_eq!(parse_count("12", 4, 6), 12);
/// assert_eq!(parse_count("0", 1, 1), 1);
/// assert_eq!(parse_count("abc", 4, 6), 6);
/// ```
pub fn parse_count(text: &str, minimum: u32, default: u32) -> u32 {
    match text.parse::<i32>().ok().and_then(|n| u32::try_from(n).ok()) {
        Some(parsed) => parsed.max(minimum),
        None => default,
    }
}
