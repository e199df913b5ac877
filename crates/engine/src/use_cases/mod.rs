//! Use cases - User story orchestration.
//!
//! Use cases orchestrate domain operations over injected ports.

pub mod roll;

pub use roll::{RollDice, RollError};

use std::sync::Arc;

/// Container for all use cases.
pub struct UseCases {
    pub roll: Arc<RollDice>,
}

impl UseCases {
    pub fn new(roll: Arc<RollDice>) -> Self {
        Self { roll }
    }
}
