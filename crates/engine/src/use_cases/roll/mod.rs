//! Roll use case.
//!
//! The flow is:
//! 1. The front-end derives a configuration from its input text
//! 2. Dice are drawn through the injected random port
//! 3. The sort mode is applied and the sum computed
//!
//! Every step is logged at debug so a session can be followed from the logs.

use std::sync::Arc;

use diceroller_domain::{DiceError, RollConfiguration, RollResult};

use crate::infrastructure::ports::RandomPort;

/// Roll dice use case.
pub struct RollDice {
    random: Arc<dyn RandomPort>,
}

impl RollDice {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Execute a roll.
    ///
    /// Configurations built by `RollConfiguration::from_text` or
    /// `RollConfiguration::new` always pass; hand-assembled ones below the
    /// minimums are rejected before any die is drawn.
    pub fn execute(&self, config: &RollConfiguration) -> Result<RollResult, RollError> {
        let config =
            RollConfiguration::new(config.dice_count, config.face_count, config.sort_mode)?;

        tracing::debug!(
            dice_count = config.dice_count,
            face_count = config.face_count,
            sort_mode = %config.sort_mode,
            "Rolling dice"
        );

        let mut values = config.draw(|min, max| self.random.gen_range(min, max));
        tracing::debug!(?values, "Generated (before sort)");

        config.sort_mode.apply(&mut values);
        let result = RollResult::from_values(values);
        tracing::debug!(breakdown = %config.breakdown(&result), "After sort");

        Ok(result)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RollError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] DiceError),
}

#[cfg(test)]
mod tests {
    use diceroller_domain::{RollConfiguration, SortMode};

    use super::*;
    use crate::infrastructure::ports::MockRandomPort;
    use crate::infrastructure::random::ScriptedRandom;
    use crate::test_support::capture_logs;

    fn mock_draws(draws: Vec<u32>, face_count: u32) -> MockRandomPort {
        let times = draws.len();
        let mut draws = draws.into_iter();
        let mut random = MockRandomPort::new();
        random
            .expect_gen_range()
            .withf(move |min, max| *min == 1 && *max == face_count)
            .times(times)
            .returning(move |_, _| draws.next().unwrap());
        random
    }

    #[test]
    fn roll_without_sort_keeps_draw_order() {
        let roll = RollDice::new(Arc::new(mock_draws(vec![3, 5], 6)));
        let config = RollConfiguration::new(2, 6, SortMode::None).unwrap();

        let result = roll.execute(&config).unwrap();

        assert_eq!(result.values(), &[3, 5]);
        assert_eq!(result.sum(), 8);
    }

    #[test]
    fn roll_descending_reorders_same_draws() {
        let roll = RollDice::new(Arc::new(mock_draws(vec![3, 5], 6)));
        let config = RollConfiguration::new(2, 6, SortMode::Descending).unwrap();

        let result = roll.execute(&config).unwrap();

        assert_eq!(result.values(), &[5, 3]);
        assert_eq!(result.sum(), 8);
    }

    #[test]
    fn roll_logs_configuration_draw_and_breakdown() {
        let roll = RollDice::new(Arc::new(ScriptedRandom::new([3, 5])));
        let config = RollConfiguration::new(2, 6, SortMode::Descending).unwrap();

        let (result, logs) = capture_logs(|| roll.execute(&config).unwrap());

        assert_eq!(result.values(), &[5, 3]);
        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 3, "{logs}");
        assert!(lines[0].contains("Rolling dice"));
        assert!(lines[0].contains("sort_mode=descending"));
        assert!(lines[1].contains("Generated (before sort)"));
        assert!(lines[1].contains("[3, 5]"));
        assert!(lines[2].contains("After sort"));
        assert!(lines[2].contains("breakdown=2d6[5, 3] = 8"));
    }

    #[test]
    fn roll_ascending_with_scripted_source() {
        let roll = RollDice::new(Arc::new(ScriptedRandom::new([9, 2, 7, 2])));
        let config = RollConfiguration::new(4, 10, SortMode::Ascending).unwrap();

        let result = roll.execute(&config).unwrap();

        assert_eq!(result.values(), &[2, 2, 7, 9]);
        assert_eq!(result.sum(), 20);
    }

    #[test]
    fn invalid_configuration_draws_nothing() {
        let mut random = MockRandomPort::new();
        random.expect_gen_range().never();
        let roll = RollDice::new(Arc::new(random));

        let config = RollConfiguration {
            dice_count: 0,
            face_count: 6,
            sort_mode: SortMode::None,
        };
        let err = roll.execute(&config).unwrap_err();
        assert!(matches!(
            err,
            RollError::InvalidConfiguration(DiceError::InvalidDiceCount(0))
        ));

        let config = RollConfiguration {
            dice_count: 2,
            face_count: 3,
            sort_mode: SortMode::None,
        };
        assert!(roll.execute(&config).is_err());
    }
}
