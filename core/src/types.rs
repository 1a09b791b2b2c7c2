//! Core item types
//!
//! Items are the rows of both the inventory and the won collection. The same
//! type serves both sides; only the meaning of `quantity` differs (stock vs.
//! times won).

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

/// Application name shown in the page title
pub const APP_NAME: &str = "確率抽選機";

/// Separates title, inventory and won parts of a token
pub const TITLE_SEPARATOR: char = '.';
/// Separates item records within a collection
pub const ITEM_SEPARATOR: char = '!';
/// Separates color, name and quantity within a record
pub const FIELD_SEPARATOR: char = '_';

/// Colors offered for new items
pub const PALETTE: [&str; 19] = [
    "#f44336", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", "#03a9f4", "#00bcd4",
    "#009688", "#4caf50", "#8bc34a", "#cddc39", "#ffeb3b", "#ffc107", "#ff9800", "#ff5722",
    "#795548", "#9e9e9e", "#607d8b",
];

/// An item color, held as hex digits without the leading `#`
///
/// Serializes in CSS form (`#f44336`) and accepts either form on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Wrap a color value as-is, dropping one leading `#` if present.
    ///
    /// No validation happens here; decoded tokens keep whatever color text
    /// they carried.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        match value.strip_prefix('#') {
            Some(hex) => Self(String::from(hex)),
            None => Self(value),
        }
    }

    /// Parse a user supplied color, requiring exactly six hex digits
    pub fn parse(value: &str) -> SessionResult<Self> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(hex.to_ascii_lowercase()))
        } else {
            Err(SessionError::InvalidColor {
                value: String::from(value),
            })
        }
    }

    /// Palette color at `index`, wrapping around
    pub fn from_palette(index: usize) -> Self {
        Self::new(PALETTE[index % PALETTE.len()])
    }

    /// Hex digits without the marker, as carried in tokens
    pub fn hex(&self) -> &str {
        &self.0
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One inventory or won entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub color: Color,
    pub quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, color: Color, quantity: u32) -> Self {
        Self {
            name: name.into(),
            color,
            quantity,
        }
    }

    /// Builder-style quantity override
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Reject text holding any of `reserved`, naming the offending field
pub(crate) fn check_reserved(
    field: &'static str,
    text: &str,
    reserved: &[char],
) -> SessionResult<()> {
    match text.chars().find(|c| reserved.contains(c)) {
        Some(ch) => Err(SessionError::ReservedCharacter { field, ch }),
        None => Ok(()),
    }
}
