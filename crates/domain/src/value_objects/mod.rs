//! Value objects - Immutable objects defined by their attributes

mod dice;
mod roll;
mod sort_mode;

pub use dice::{
    parse_count, DiceError, DEFAULT_DICE_COUNT, DEFAULT_FACE_COUNT, MIN_DICE_COUNT,
    MIN_FACE_COUNT,
};
pub use roll::{RollConfiguration, RollResult};
pub use sort_mode::SortMode;
