//! Roll configuration and results
//!
//! A [`RollConfiguration`] is derived from whatever the user typed; rolling it
//! with an injected draw source produces a [`RollResult`]. Results are never
//! mutated, the next roll simply replaces them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dice::{
    parse_count, DiceError, DEFAULT_DICE_COUNT, DEFAULT_FACE_COUNT, MIN_DICE_COUNT,
    MIN_FACE_COUNT,
};
use super::SortMode;

/// What to roll: `dice_count` dice with `face_count` faces each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollConfiguration {
    /// Number of dice to roll
    pub dice_count: u32,
    /// Faces on each die; values land in `1..=face_count`
    pub face_count: u32,
    /// Ordering applied after the draw
    pub sort_mode: SortMode,
}

impl RollConfiguration {
    /// Create a configuration, rejecting counts below the minimums
    pub fn new(dice_count: u32, face_count: u32, sort_mode: SortMode) -> Result<Self, DiceError> {
        if dice_count < MIN_DICE_COUNT {
            return Err(DiceError::InvalidDiceCount(dice_count));
        }
        if face_count < MIN_FACE_COUNT {
            return Err(DiceError::InvalidFaceCount(face_count));
        }
        Ok(Self {
            dice_count,
            face_count,
            sort_mode,
        })
    }

    /// Derive a configuration from raw input text.
    ///
    /// Counts are clamped to their minimums; text that is not a number
    /// falls back to the defaults (1 die, 6 faces).
    pub fn from_text(dice_text: &str, faces_text: &str, sort_mode: SortMode) -> Self {
        Self {
            dice_count: parse_count(dice_text, MIN_DICE_COUNT, DEFAULT_DICE_COUNT),
            face_count: parse_count(faces_text, MIN_FACE_COUNT, DEFAULT_FACE_COUNT),
            sort_mode,
        }
    }

    /// Whether the counts satisfy the minimums
    pub fn is_valid(&self) -> bool {
        self.dice_count >= MIN_DICE_COUNT && self.face_count >= MIN_FACE_COUNT
    }

    /// Draw the dice in generation order, without applying the sort mode.
    ///
    /// `draw(min, max)` must return a value in `min..=max`.
    pub fn draw<F>(&self, mut draw: F) -> Vec<u32>
    where
        F: FnMut(u32, u32) -> u32,
    {
        (0..self.dice_count)
            .map(|_| draw(1, self.face_count))
            .collect()
    }

    /// Roll the dice and return the ordered result
    pub fn roll<F>(&self, draw: F) -> RollResult
    where
        F: FnMut(u32, u32) -> u32,
    {
        let mut values = self.draw(draw);
        self.sort_mode.apply(&mut values);
        RollResult::from_values(values)
    }

    /// Format a result of this configuration (e.g., "2d6[3, 5] = 8")
    pub fn breakdown(&self, result: &RollResult) -> String {
        let rolls: Vec<String> = result.values.iter().map(|v| v.to_string()).collect();
        format!("{}[{}] = {}", self, rolls.join(", "), result.sum)
    }
}

impl fmt::Display for RollConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.dice_count, self.face_count)
    }
}

/// The values of one roll and their sum
///
/// Deserializing recomputes the sum from the values; a serialized `sum` is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RollValues")]
pub struct RollResult {
    values: Vec<u32>,
    sum: u64,
}

/// Wire shape accepted when deserializing a [`RollResult`].
#[derive(Deserialize)]
struct RollValues {
    values: Vec<u32>,
}

impl From<RollValues> for RollResult {
    fn from(raw: RollValues) -> Self {
        Self::from_values(raw.values)
    }
}

impl RollResult {
    /// Build a result from already-ordered values
    pub fn from_values(values: Vec<u32>) -> Self {
        let sum = values.iter().copied().map(u64::from).sum();
        Self { values, sum }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn sum(&self) -> u64 {
        self.sum
    }
}
