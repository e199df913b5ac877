//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    ports::RandomPort,
    random::{SeededRandom, SystemRandom},
    settings::AppSettings,
};
use crate::use_cases::{self, UseCases};

/// Main application state.
///
/// Holds the settings the session started with and all use cases.
/// Handed to the console front-end at startup.
pub struct App {
    pub settings: AppSettings,
    pub use_cases: UseCases,
}

impl App {
    /// Compose the application, picking the random source from settings.
    pub fn new(settings: AppSettings) -> Self {
        let random: Arc<dyn RandomPort> = match settings.seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded random source");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(SystemRandom::new()),
        };
        Self::with_random(settings, random)
    }

    /// Compose the application around an explicit random source.
    pub fn with_random(settings: AppSettings, random: Arc<dyn RandomPort>) -> Self {
        let roll = Arc::new(use_cases::RollDice::new(random));
        Self {
            settings,
            use_cases: UseCases::new(roll),
        }
    }
}
