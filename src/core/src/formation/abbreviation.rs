use crate::formation::position::{PositionGroup, PositionType, position_group};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionInfo {
    pub abbreviation: String,
    pub group: PositionGroup,
}

/// Abbreviations configured for a game format, keyed by exact position name.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    entries: HashMap<String, PositionInfo>,
}

impl AbbreviationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, position_name: impl Into<String>, info: PositionInfo) {
        self.entries.insert(position_name.into(), info);
    }

    pub fn get(&self, position_name: &str) -> Option<&PositionInfo> {
        self.entries.get(position_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, position_name: &str) -> PositionInfo {
        if let Some(info) = self.entries.get(position_name) {
            return info.clone();
        }

        let abbreviation = match PositionType::from_name(position_name) {
            Some(position) => position.abbreviation().to_string(),
            None => synthesize_abbreviation(position_name),
        };

        PositionInfo {
            abbreviation,
            group: position_group(position_name),
        }
    }
}

impl FromIterator<(String, PositionInfo)> for AbbreviationTable {
    fn from_iter<T: IntoIterator<Item = (String, PositionInfo)>>(iter: T) -> Self {
        AbbreviationTable {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Initials of each word, at most three. A single word gives its first two
/// characters instead.
pub fn synthesize_abbreviation(position_name: &str) -> String {
    let words: Vec<&str> = position_name.split_whitespace().collect();

    let abbreviation: String = match words.as_slice() {
        [] => return "?".to_string(),
        [word] => word.chars().take(2).collect(),
        words => words.iter().filter_map(|w| w.chars().next()).take(3).collect(),
    };

    abbreviation.to_uppercase()
}
