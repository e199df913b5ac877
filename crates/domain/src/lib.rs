//! Dice Roller domain.
//!
//! Pure value objects for rolling dice: parsing counts out of free text,
//! the sort policy applied to a roll, and the roll itself. Nothing in this
//! crate performs I/O or owns a random number generator; callers inject the
//! draw source.

pub mod value_objects;

pub use value_objects::{
    parse_count, DiceError, RollConfiguration, RollResult, SortMode, DEFAULT_DICE_COUNT,
    DEFAULT_FACE_COUNT, MIN_DICE_COUNT, MIN_FACE_COUNT,
};
