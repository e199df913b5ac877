//! Dice Roller engine library.
//!
//! ## Structure
//!
//! - `infrastructure/` - Random source port and adapters, environment settings
//! - `use_cases/` - Roll orchestration over the injected random source
//! - `presentation/` - Roller state, static mock-up panel, rendering, console
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod presentation;
pub mod use_cases;

/// Shared helpers for unit tests.
#[cfg(test)]
mod test_support;

pub use app::App;
