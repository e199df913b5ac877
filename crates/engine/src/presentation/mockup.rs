//! Static mock-up panel
//!
//! Shows the roller's controls and a fixed sample result. None of the buttons
//! do anything beyond writing a debug log line.

use std::fmt;
use std::str::FromStr;

use diceroller_domain::SortMode;

/// Dice counts offered as buttons.
pub const DICE_COUNT_BUTTONS: [u32; 6] = [1, 2, 3, 4, 5, 6];
/// Die types offered as buttons.
pub const DIE_TYPE_BUTTONS: [u32; 6] = [4, 6, 8, 10, 12, 20];
/// Values shown in the sample result.
pub const SAMPLE_VALUES: [u32; 3] = [3, 5, 2];

/// A button on the mock-up panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockupButton {
    DiceCount(u32),
    DieType(u32),
    Sort(SortMode),
    Roll,
}

impl MockupButton {
    /// Every button, row by row.
    pub fn all() -> Vec<Self> {
        DICE_COUNT_BUTTONS
            .iter()
            .map(|n| Self::DiceCount(*n))
            .chain(DIE_TYPE_BUTTONS.iter().map(|f| Self::DieType(*f)))
            .chain(SortMode::ALL.iter().map(|m| Self::Sort(*m)))
            .chain(std::iter::once(Self::Roll))
            .collect()
    }

    pub fn label(&self) -> String {
        match self {
            Self::DiceCount(n) => n.to_string(),
            Self::DieType(faces) => format!("d{faces}"),
            Self::Sort(mode) => mode.label().to_string(),
            Self::Roll => "roll".to_string(),
        }
    }
}

impl fmt::Display for MockupButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for MockupButton {
    type Err = ();

    /// Only labels that appear on the panel parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|button| button.label() == s)
            .ok_or(())
    }
}

/// The static mock-up panel
#[derive(Debug, Default, Clone, Copy)]
pub struct MockupPanel;

impl MockupPanel {
    pub fn new() -> Self {
        Self
    }

    /// Press a button. Logs the press and returns the logged line.
    pub fn press(&self, button: MockupButton) -> String {
        let line = match button {
            MockupButton::DiceCount(n) => format!("[mockup] Dice count: {n}"),
            MockupButton::DieType(faces) => format!("[mockup] Die selected: d{faces}"),
            MockupButton::Sort(mode) => format!("[mockup] Sort selected: {mode}"),
            MockupButton::Roll => "[mockup] Roll button pressed".to_string(),
        };
        tracing::debug!("{}", line);
        line
    }
}
