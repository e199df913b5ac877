//! Ordering policy applied to a roll before display

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DiceError;

/// How the values of a roll are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Keep generation order
    #[default]
    None,
    /// Non-decreasing
    Ascending,
    /// Non-increasing
    Descending,
}

impl SortMode {
    /// All modes, in the order the front-end lists them.
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::Ascending, SortMode::Descending];

    /// Reorder `values` in place according to this mode.
    pub fn apply(self, values: &mut [u32]) {
        match self {
            SortMode::None => {}
            SortMode::Ascending => values.sort_unstable(),
            SortMode::Descending => values.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Ascending => "ascending",
            SortMode::Descending => "descending",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortMode {
    type Err = DiceError;

    /// Accepts the English labels and their short forms, plus the French
    /// labels the roller was first published with.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" | "aucun" => Ok(SortMode::None),
            "asc" | "ascending" | "croissant" => Ok(SortMode::Ascending),
            "desc" | "descending" | "décroissant" | "decroissant" => Ok(SortMode::Descending),
            _ => Err(DiceError::UnknownSortMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_keeps_order() {
        let mut values = [3, 1, 2];
        SortMode::None.apply(&mut values);
        assert_eq!(values, [3, 1, 2]);
    }

    #[test]
    fn test_ascending() {
        let mut values = [3, 1, 2, 1];
        SortMode::Ascending.apply(&mut values);
        assert_eq!(values, [1, 1, 2, 3]);
    }

    #[test]
    fn test_descending() {
        let mut values = [3, 1, 2, 3];
        SortMode::Descending.apply(&mut values);
        assert_eq!(values, [3, 3, 2, 1]);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("none".parse::<SortMode>().unwrap(), SortMode::None);
        assert_eq!("ASC".parse::<SortMode>().unwrap(), SortMode::Ascending);
        assert_eq!(" descending ".parse::<SortMode>().unwrap(), SortMode::Descending);
        assert_eq!("Aucun".parse::<SortMode>().unwrap(), SortMode::None);
        assert_eq!("Croissant".parse::<SortMode>().unwrap(), SortMode::Ascending);
        assert_eq!("Décroissant".parse::<SortMode>().unwrap(), SortMode::Descending);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "sideways".parse::<SortMode>(),
            Err(DiceError::UnknownSortMode("sideways".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&SortMode::Descending).unwrap();
        assert_eq!(json, "\"descending\"");
    }
}
