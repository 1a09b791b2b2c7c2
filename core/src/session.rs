//! Session holder
//!
//! Owns the title, inventory and won collection and applies every user
//! action to them. Text that would break the token format is refused here,
//! which keeps every reachable state round-trippable through
//! [`crate::codec`].

use crate::codec::{decode_state, encode_state};
use crate::error::{SessionError, SessionResult};
use crate::log;
use crate::rng::DrawRng;
use crate::selection::{draw_index, total_quantity};
use crate::state::{record_win, restock, take_one, SessionState};
use crate::types::*;

/// Characters a title may not contain
const TITLE_RESERVED: [char; 1] = [TITLE_SEPARATOR];
/// Characters an item name may not contain
const NAME_RESERVED: [char; 3] = [TITLE_SEPARATOR, ITEM_SEPARATOR, FIELD_SEPARATOR];

/// Mutable session around a [`SessionState`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new(state: SessionState) -> Self {
        Self { state }
    }

    /// Load from a URL token, falling back to the initial state.
    ///
    /// A missing or empty token is the normal first visit; a malformed one is
    /// logged and discarded.
    pub fn restore(token: Option<&str>) -> Self {
        let token = token.map(str::trim).unwrap_or_default();
        if token.is_empty() {
            log::debug("restore", "No token, using initial state");
            return Self::default();
        }
        match decode_state(token) {
            Ok(state) => {
                log::info(&format!(
                    "Restored session: {} inventory rows, {} won rows",
                    state.inventory.len(),
                    state.won.len()
                ));
                Self::new(state)
            }
            Err(e) => {
                log::warn(&format!("illegal hash key: {e}"));
                Self::default()
            }
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current URL token
    pub fn token(&self) -> String {
        encode_state(&self.state)
    }

    /// Whether a draw would succeed
    pub fn can_draw(&self) -> bool {
        total_quantity(&self.state.inventory) > 0
    }

    pub fn set_title(&mut self, title: &str) -> SessionResult<()> {
        log::action("set_title", title);
        check_reserved("title", title, &TITLE_RESERVED)?;
        self.state.title = String::from(title);
        Ok(())
    }

    /// Append an unnamed item with one unit and a random palette color.
    ///
    /// Returns the new row's index.
    pub fn add_item<R: DrawRng>(&mut self, rng: &mut R) -> usize {
        let color = Color::from_palette(rng.gen_range(PALETTE.len()));
        log::action("add_item", &format!("color={color}"));
        self.state.inventory.push(Item::new("", color, 1));
        self.state.inventory.len() - 1
    }

    pub fn remove_item(&mut self, index: usize) -> SessionResult<Item> {
        log::action("remove_item", &format!("index={index}"));
        self.check_index(index)?;
        Ok(self.state.inventory.remove(index))
    }

    pub fn rename_item(&mut self, index: usize, name: &str) -> SessionResult<()> {
        log::action("rename_item", &format!("index={index}, name={name}"));
        check_reserved("item name", name, &NAME_RESERVED)?;
        self.item_mut(index)?.name = String::from(name);
        Ok(())
    }

    pub fn recolor_item(&mut self, index: usize, color: &str) -> SessionResult<()> {
        log::action("recolor_item", &format!("index={index}, color={color}"));
        let color = Color::parse(color)?;
        self.item_mut(index)?.color = color;
        Ok(())
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> SessionResult<()> {
        log::action("set_quantity", &format!("index={index}, quantity={quantity}"));
        self.item_mut(index)?.quantity = quantity;
        Ok(())
    }

    pub fn increment_quantity(&mut self, index: usize) -> SessionResult<u32> {
        log::action("increment_quantity", &format!("index={index}"));
        let item = self.item_mut(index)?;
        item.quantity = item.quantity.saturating_add(1);
        Ok(item.quantity)
    }

    /// Remove one unit, stopping at zero
    pub fn decrement_quantity(&mut self, index: usize) -> SessionResult<u32> {
        log::action("decrement_quantity", &format!("index={index}"));
        let item = self.item_mut(index)?;
        item.quantity = item.quantity.saturating_sub(1);
        Ok(item.quantity)
    }

    /// Draw one item and move a unit of it from inventory to won.
    ///
    /// The returned item carries its inventory quantity from before the draw.
    /// On failure nothing changes.
    pub fn draw<R: DrawRng>(&mut self, rng: &mut R) -> SessionResult<Item> {
        let index = match draw_index(&self.state.inventory, rng) {
            Ok(index) => index,
            Err(e) => {
                log::result(false, &format!("draw: {e}"));
                return Err(e.into());
            }
        };
        let item = self.state.inventory[index].clone();

        self.state.inventory = take_one(&self.state.inventory, index);
        self.state.won = record_win(&self.state.won, &item);

        log::result(true, &format!("draw: index={index}, name={}", item.name));
        Ok(item)
    }

    /// Merge every won item back into the inventory and clear the won list
    pub fn return_won_to_inventory(&mut self) {
        log::action(
            "return_won_to_inventory",
            &format!("rows={}", self.state.won.len()),
        );
        self.state.inventory = restock(&self.state.inventory, &self.state.won);
        self.state.won.clear();
    }

    /// Drop every won item
    pub fn discard_won(&mut self) {
        log::action("discard_won", &format!("rows={}", self.state.won.len()));
        self.state.won.clear();
    }

    fn check_index(&self, index: usize) -> SessionResult<()> {
        let len = self.state.inventory.len();
        if index >= len {
            return Err(SessionError::ItemIndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn item_mut(&mut self, index: usize) -> SessionResult<&mut Item> {
        let len = self.state.inventory.len();
        self.state
            .inventory
            .get_mut(index)
            .ok_or(SessionError::ItemIndexOutOfRange { index, len })
    }
}

impl From<SessionState> for Session {
    fn from(state: SessionState) -> Self {
        Self::new(state)
    }
}
