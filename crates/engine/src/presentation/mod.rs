//! Presentation layer - terminal front-end over the roll use case.
//!
//! - `state` - Explicit roller state (input text, sort mode, last result)
//! - `mockup` - Static mock-up panel whose buttons only log
//! - `render` - Text and JSON rendering of panels
//! - `console` - Line-oriented command loop

pub mod console;
pub mod mockup;
pub mod render;
pub mod state;

pub use console::{Command, Console, ConsoleError, Tab};
pub use mockup::{MockupButton, MockupPanel};
pub use state::RollerState;
