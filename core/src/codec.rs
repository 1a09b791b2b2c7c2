//! URL token codec
//!
//! Token layout, innermost first:
//!
//! ```text
//! record     = color-hex "_" name "_" quantity
//! collection = record *( "!" record )        ; empty collection = ""
//! payload    = title "." inventory "." won
//! token      = base64( percent-escape( payload ) )
//! ```
//!
//! Percent escaping follows URL-component rules and base64 uses the standard
//! padded alphabet, so tokens match what `btoa(encodeURIComponent(..))`
//! yields in a browser and links shared before this crate existed still load.
//!
//! Separators inside names or titles are not escaped. Such text does not
//! survive a round trip; [`crate::session::Session`] refuses it on input.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{DecodeError, DecodeResult};
use crate::state::SessionState;
use crate::types::*;

/// Bytes left unescaped by URL-component encoding
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard alphabet; writes padding, accepts tokens with or without it
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Serialize a session into a URL fragment token
pub fn encode_state(state: &SessionState) -> String {
    let payload = [
        state.title.clone(),
        encode_items(&state.inventory),
        encode_items(&state.won),
    ]
    .join(&TITLE_SEPARATOR.to_string());
    let escaped = utf8_percent_encode(&payload, URI_COMPONENT).to_string();
    TOKEN_ENGINE.encode(escaped)
}

/// Rebuild a session from a URL fragment token
pub fn decode_state(token: &str) -> DecodeResult<SessionState> {
    let raw = TOKEN_ENGINE
        .decode(token.trim())
        .map_err(|e| DecodeError::Base64 {
            reason: e.to_string(),
        })?;
    let escaped = String::from_utf8(raw).map_err(|_| DecodeError::NotAscii)?;
    if !escaped.is_ascii() {
        return Err(DecodeError::NotAscii);
    }
    check_escapes(&escaped)?;
    let payload = percent_decode_str(&escaped)
        .decode_utf8()
        .map_err(|_| DecodeError::Utf8)?;

    let parts: Vec<&str> = payload.split(TITLE_SEPARATOR).collect();
    let &[title, inventory, won] = parts.as_slice() else {
        return Err(DecodeError::FieldCount { found: parts.len() });
    };

    Ok(SessionState {
        title: String::from(title),
        inventory: decode_items(inventory)?,
        won: decode_items(won)?,
    })
}

fn encode_items(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
                item.color.hex(),
                item.name,
                item.quantity
            )
        })
        .collect::<Vec<_>>()
        .join(&ITEM_SEPARATOR.to_string())
}

fn decode_items(data: &str) -> DecodeResult<Vec<Item>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    data.split(ITEM_SEPARATOR)
        .enumerate()
        .map(|(record, text)| decode_item(record, text))
        .collect()
}

fn decode_item(record: usize, text: &str) -> DecodeResult<Item> {
    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    let &[color, name, quantity] = fields.as_slice() else {
        return Err(DecodeError::ItemFieldCount {
            record,
            found: fields.len(),
        });
    };

    let quantity = quantity
        .parse::<u32>()
        .map_err(|_| DecodeError::Quantity {
            value: String::from(quantity),
        })?;
    Ok(Item::new(name, Color::new(color), quantity))
}

/// Every `%` must start a two-hex-digit escape
fn check_escapes(escaped: &str) -> DecodeResult<()> {
    let bytes = escaped.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(DecodeError::Escape { offset: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
