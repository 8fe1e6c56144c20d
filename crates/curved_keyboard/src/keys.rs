use crate::error::{KeyboardError, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Reserved key values (control keys)
pub const SPACE: &str = " ";
pub const BACK: &str = "Back";
pub const ABC: &str = "ABC";
pub const QEH: &str = "123\n?!#";
pub const UP: &str = "UP";
pub const LOW: &str = "low";

// Index-aligned with the flattened row table (10 + 9 + 8 + 3 wide keys)
pub const LOWER_CASE: [&str; 30] = [
    "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", // top row
    "a", "s", "d", "f", "g", "h", "j", "k", "l", // home row
    UP, "z", "x", "c", "v", "b", "n", "m", // bottom letter row
    QEH, SPACE, BACK,
];

pub const UPPER_CASE: [&str; 30] = [
    "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", //
    "A", "S", "D", "F", "G", "H", "J", "K", "L", //
    LOW, "Z", "X", "C", "V", "B", "N", "M", //
    QEH, SPACE, BACK,
];

pub const SPECIALS: [&str; 30] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", //
    "@", "#", "£", "_", "&", "-", "+", "(", ")", //
    "*", "\"", "'", ":", ";", "/", "!", "?", //
    ABC, SPACE, BACK,
];

/// Label table selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum KeySet {
    #[default]
    #[strum(serialize = "lower")]
    LowerCase,
    #[strum(serialize = "upper")]
    UpperCase,
    #[strum(serialize = "special")]
    Special,
}

/// Visual state of a single key
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum KeyState {
    #[default]
    Default,
    Focused,
    Pressed,
    Selected,
}

/// What a tapped key does, decided from its current label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    ToggleMode,
    ToggleCase,
    Space,
    Backspace,
    Text(String),
}

impl KeyAction {
    pub fn from_value(value: &str) -> Self {
        match value {
            QEH | ABC => KeyAction::ToggleMode,
            UP | LOW => KeyAction::ToggleCase,
            SPACE => KeyAction::Space,
            BACK => KeyAction::Backspace,
            other => KeyAction::Text(other.to_string()),
        }
    }

    pub fn is_control(&self) -> bool {
        !matches!(self, KeyAction::Text(_))
    }
}

/// The three label tables, each index-aligned with the key order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelTables {
    pub lower: Vec<String>,
    pub upper: Vec<String>,
    pub special: Vec<String>,
}

impl Default for LabelTables {
    fn default() -> Self {
        let owned = |table: &[&str]| -> Vec<String> {
            table.iter().map(|s| s.to_string()).collect()
        };
        Self {
            lower: owned(&LOWER_CASE),
            upper: owned(&UPPER_CASE),
            special: owned(&SPECIALS),
        }
    }
}

impl LabelTables {
    pub fn table(&self, set: KeySet) -> &[String] {
        match set {
            KeySet::LowerCase => &self.lower,
            KeySet::UpperCase => &self.upper,
            KeySet::Special => &self.special,
        }
    }

    pub fn label(&self, set: KeySet, index: usize) -> Option<&str> {
        self.table(set).get(index).map(String::as_str)
    }

    /// Every table must hold exactly one label per key.
    pub fn validate(&self, key_count: usize) -> Result<()> {
        for (set, table) in [
            (KeySet::LowerCase, &self.lower),
            (KeySet::UpperCase, &self.upper),
            (KeySet::Special, &self.special),
        ] {
            if table.len() != key_count {
                return Err(KeyboardError::LabelTableLength {
                    set,
                    expected: key_count,
                    got: table.len(),
                });
            }
        }
        Ok(())
    }
}
