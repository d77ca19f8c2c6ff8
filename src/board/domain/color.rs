//! Card colour tags.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card background colour in `#RRGGBB` form, upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskColor(String);

impl TaskColor {
    /// Hex value meaning "no colour chosen".
    pub const BLANK: &'static str = "#FFFFFF";

    /// Light tints offered by the colour picker on a card.
    pub const CARD_PALETTE: [&'static str; 8] = [
        "#FFFFFF", "#FFFBCC", "#DFF7E1", "#DFF3FF", "#FFE1E1", "#F1D7FF", "#FDE2FF", "#E6E6E6",
    ];

    /// Saturated colours offered by the task form.
    pub const FORM_PALETTE: [&'static str; 10] = [
        "#2C6B4F", "#A78200", "#B86E00", "#C6452F", "#8A3AB9", "#2E62CE", "#4A7F89", "#708C2E",
        "#B04A78", "#808080",
    ];

    /// Parses a `#RRGGBB` colour.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidColor`] when the value is not a
    /// `#` followed by exactly six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let is_valid = trimmed
            .strip_prefix('#')
            .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()));
        if !is_valid {
            return Err(BoardDomainError::InvalidColor(raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Parses a colour choice where [`Self::BLANK`] clears the colour.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidColor`] for malformed values.
    pub fn choice(value: impl Into<String>) -> Result<Option<Self>, BoardDomainError> {
        let color = Self::new(value)?;
        Ok((!color.is_blank()).then_some(color))
    }

    /// Returns `true` for the "no colour" sentinel.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0 == Self::BLANK
    }

    /// Returns the hex value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskColor {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskColor> for String {
    fn from(value: TaskColor) -> Self {
        value.0
    }
}

impl fmt::Display for TaskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
