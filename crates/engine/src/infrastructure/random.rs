//! Random source implementations.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::RandomPort;

/// System random - uses the thread-local generator.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: u32, max: u32) -> u32 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Seeded random - replays the same sequence for the same seed.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomPort for SeededRandom {
    fn gen_range(&self, min: u32, max: u32) -> u32 {
        // A poisoned lock still holds a usable generator.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(min..=max)
    }
}

/// Scripted random for testing - returns queued draws, then `min`.
#[cfg(test)]
pub struct ScriptedRandom(Mutex<std::collections::VecDeque<u32>>);

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self(Mutex::new(draws.into_iter().collect()))
    }
}

#[cfg(test)]
impl RandomPort for ScriptedRandom {
    fn gen_range(&self, min: u32, _max: u32) -> u32 {
        self.0.lock().unwrap().pop_front().unwrap_or(min)
    }
}
