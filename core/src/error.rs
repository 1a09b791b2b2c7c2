//! Error types for session operations
//!
//! Each concern gets its own enum so callers can tell a bad token apart from
//! an impossible draw or a rejected edit.

use thiserror::Error;

/// Failure to turn a URL token back into a session state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Token is not valid base64
    #[error("token is not valid base64: {reason}")]
    Base64 { reason: String },
    /// Base64 payload is not ASCII text
    #[error("token payload is not ASCII text")]
    NotAscii,
    /// A `%` is not followed by two hex digits
    #[error("malformed percent escape at offset {offset}")]
    Escape { offset: usize },
    /// Unescaped payload is not UTF-8
    #[error("unescaped payload is not valid UTF-8")]
    Utf8,
    /// Top level did not split into title, inventory and won parts
    #[error("expected 3 top-level fields, found {found}")]
    FieldCount { found: usize },
    /// An item record did not split into color, name and quantity
    #[error("item record {record} has {found} fields, expected 3")]
    ItemFieldCount { record: usize, found: usize },
    /// Quantity is not a non-negative integer
    #[error("invalid quantity {value:?}")]
    Quantity { value: String },
}

/// A draw was requested that cannot select anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No items at all
    #[error("cannot draw from an empty inventory")]
    EmptyInventory,
    /// Items exist but every quantity is zero
    #[error("cannot draw: total quantity is zero")]
    NoStock,
}

/// Session mutations that were refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Item index past the end of the inventory
    #[error("item index {index} out of range (inventory has {len} items)")]
    ItemIndexOutOfRange { index: usize, len: usize },
    /// Text contains a character the token format uses as a separator
    #[error("{field} may not contain {ch:?}")]
    ReservedCharacter { field: &'static str, ch: char },
    /// Color is not six hex digits
    #[error("invalid color {value:?}")]
    InvalidColor { value: String },
    /// The draw itself failed
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Result type alias for token decoding
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type alias for draws
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
