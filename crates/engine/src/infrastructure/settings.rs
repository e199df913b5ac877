//! Application settings
//!
//! Read from the process environment once at startup (after `.env` files have
//! been loaded by `main`). Bad values are logged and replaced by defaults
//! instead of aborting startup.
//!
//! | Variable      | Meaning                          | Default |
//! |---------------|----------------------------------|---------|
//! | `DICE_COUNT`  | Initial dice count text          | `2`     |
//! | `DICE_FACES`  | Initial face count text          | `6`     |
//! | `DICE_SORT`   | Initial sort mode                | `none`  |
//! | `DICE_SEED`   | Seed for a reproducible session  | unset   |
//! | `DICE_OUTPUT` | `text` or `json`                 | `text`  |

use diceroller_domain::SortMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DICE_TEXT: &str = "2";
pub const DEFAULT_FACES_TEXT: &str = "6";

// ============================================================================
// Output Format
// ============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Value cells and a sum line.
    #[default]
    Text,
    /// The serialized roll result.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

// ============================================================================
// App Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Text the dice count field starts with.
    pub dice_text: String,
    /// Text the face count field starts with.
    pub faces_text: String,
    pub sort_mode: SortMode,
    /// When set, rolls come from a seeded generator.
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dice_text: DEFAULT_DICE_TEXT.to_string(),
            faces_text: DEFAULT_FACES_TEXT.to_string(),
            sort_mode: SortMode::None,
            seed: None,
            output: OutputFormat::Text,
        }
    }
}

impl AppSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let dice_text = digits_or(lookup("DICE_COUNT"), "DICE_COUNT", defaults.dice_text);
        let faces_text = digits_or(lookup("DICE_FACES"), "DICE_FACES", defaults.faces_text);

        let sort_mode = match lookup("DICE_SORT") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Invalid DICE_SORT, using {}", defaults.sort_mode);
                defaults.sort_mode
            }),
            None => defaults.sort_mode,
        };

        let seed = lookup("DICE_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "Invalid DICE_SEED, ignoring");
                None
            }
        });

        let output = match lookup("DICE_OUTPUT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid DICE_OUTPUT, using {}", defaults.output);
                defaults.output
            }),
            None => defaults.output,
        };

        Self {
            dice_text,
            faces_text,
            sort_mode,
            seed,
            output,
        }
    }
}

/// The input fields only ever hold digits; anything else keeps the default.
fn digits_or(value: Option<String>, key: &str, default: String) -> String {
    match value {
        Some(raw) if raw.chars().all(|c| c.is_ascii_digit()) => raw,
        Some(raw) => {
            tracing::warn!(value = %raw, "{} must contain digits only, using {}", key, default);
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = AppSettings::from_lookup(|_| None);
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.dice_text, "2");
        assert_eq!(settings.faces_text, "6");
        assert_eq!(settings.output, OutputFormat::Text);
    }

    #[test]
    fn reads_all_variables() {
        let settings = AppSettings::from_lookup(lookup_from(&[
            ("DICE_COUNT", "5"),
            ("DICE_FACES", "20"),
            ("DICE_SORT", "desc"),
            ("DICE_SEED", "42"),
            ("DICE_OUTPUT", "JSON"),
        ]));
        assert_eq!(settings.dice_text, "5");
        assert_eq!(settings.faces_text, "20");
        assert_eq!(settings.sort_mode, SortMode::Descending);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.output, OutputFormat::Json);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let settings = AppSettings::from_lookup(lookup_from(&[
            ("DICE_COUNT", "two"),
            ("DICE_FACES", "-8"),
            ("DICE_SORT", "random"),
            ("DICE_SEED", "not-a-seed"),
            ("DICE_OUTPUT", "xml"),
        ]));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn empty_count_text_is_kept() {
        let settings = AppSettings::from_lookup(lookup_from(&[("DICE_COUNT", "")]));
        assert_eq!(settings.dice_text, "");
    }
}
