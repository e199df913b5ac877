//! Infrastructure - External dependency implementations.
//!
//! - `ports` - Testability port for the random source
//! - `random` - Random source adapters
//! - `settings` - Environment-driven application settings

pub mod ports;
pub mod random;
pub mod settings;
