//! Roller state
//!
//! Owns everything the functional roller panel displays. The roll itself is
//! triggered imperatively by the console; nothing here recomputes on its own.

use diceroller_domain::{RollConfiguration, RollResult, SortMode};

use crate::infrastructure::settings::AppSettings;

/// State of the functional roller panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollerState {
    dice_text: String,
    faces_text: String,
    sort_mode: SortMode,
    result: Option<RollResult>,
}

impl RollerState {
    pub fn new(
        dice_text: impl Into<String>,
        faces_text: impl Into<String>,
        sort_mode: SortMode,
    ) -> Self {
        Self {
            dice_text: dice_text.into(),
            faces_text: faces_text.into(),
            sort_mode,
            result: None,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            settings.dice_text.clone(),
            settings.faces_text.clone(),
            settings.sort_mode,
        )
    }

    pub fn dice_text(&self) -> &str {
        &self.dice_text
    }

    pub fn faces_text(&self) -> &str {
        &self.faces_text
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Last roll, if any
    pub fn result(&self) -> Option<&RollResult> {
        self.result.as_ref()
    }

    /// Replace the dice count text. Rejected unless empty or all digits.
    pub fn set_dice_text(&mut self, text: &str) -> bool {
        accept_digits(&mut self.dice_text, text)
    }

    /// Replace the face count text. Rejected unless empty or all digits.
    pub fn set_faces_text(&mut self, text: &str) -> bool {
        accept_digits(&mut self.faces_text, text)
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.sort_mode = sort_mode;
    }

    /// Configuration derived from the current text
    pub fn configuration(&self) -> RollConfiguration {
        RollConfiguration::from_text(&self.dice_text, &self.faces_text, self.sort_mode)
    }

    /// Whether the roll action is enabled
    pub fn can_roll(&self) -> bool {
        self.configuration().is_valid()
    }

    /// Store a new roll, superseding the previous one
    pub fn record(&mut self, result: RollResult) {
        self.result = Some(result);
    }
}

impl Default for RollerState {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}

fn accept_digits(field: &mut String, text: &str) -> bool {
    if text.chars().all(|c| c.is_ascii_digit()) {
        field.clear();
        field.push_str(text);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_two_d6_unsorted() {
        let state = RollerState::default();
        assert_eq!(state.dice_text(), "2");
        assert_eq!(state.faces_text(), "6");
        assert_eq!(state.sort_mode(), SortMode::None);
        assert!(state.result().is_none());

        let config = state.configuration();
        assert_eq!((config.dice_count, config.face_count), (2, 6));
    }

    #[test]
    fn rejects_non_digit_edits() {
        let mut state = RollerState::default();
        assert!(!state.set_dice_text("3a"));
        assert!(!state.set_faces_text("-4"));
        assert!(!state.set_faces_text(" 8"));
        assert_eq!(state.dice_text(), "2");
        assert_eq!(state.faces_text(), "6");
    }

    #[test]
    fn accepts_digits_and_empty() {
        let mut state = RollerState::default();
        assert!(state.set_dice_text("12"));
        assert!(state.set_faces_text(""));
        assert_eq!(state.dice_text(), "12");
        assert_eq!(state.faces_text(), "");

        let config = state.configuration();
        assert_eq!((config.dice_count, config.face_count), (12, 6));
    }

    #[test]
    fn roll_is_enabled_for_any_accepted_text() {
        let mut state = RollerState::default();
        for text in ["", "0", "1", "3", "100"] {
            assert!(state.set_dice_text(text));
            assert!(state.set_faces_text(text));
            assert!(state.can_roll(), "dice={text:?} faces={text:?}");
        }
    }

    #[test]
    fn record_supersedes_previous_result() {
        let mut state = RollerState::default();
        state.record(RollResult::from_values(vec![1, 2]));
        state.record(RollResult::from_values(vec![6, 6]));
        assert_eq!(state.result().map(RollResult::sum), Some(12));
    }
}
