//! Gachapon core: weighted draws and URL-token session state.
//!
//! Everything here is synchronous and free of I/O. The browser bindings live
//! in the client crate.

pub mod codec;
pub mod error;
pub mod log;
pub mod rng;
pub mod selection;
pub mod session;
pub mod state;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use codec::{decode_state, encode_state};
pub use error::*;
pub use rng::{DrawRng, XorShiftRng};
pub use selection::{draw, draw_index, draw_rates};
pub use session::Session;
pub use state::SessionState;
pub use types::*;
pub use view::{ItemView, SessionView};
