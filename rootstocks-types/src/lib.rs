//! Domain types for the rootstocks schema.
//!
//! This crate defines the plain data carried through the schema layer:
//! - [`BarDuration`] and [`NOTE_TAG`], the one-byte tags that partition a
//!   stock's children
//! - [`StockDetails`], the stock profile
//! - [`BarDetails`] and [`PackedBar`], the two generations of price bar
//! - [`NoteDetails`], a timestamped free-text note
//!
//! Nothing here knows how values are laid out in the store; the codecs live
//! in the `rootstocks` crate.

mod bar;
mod duration;
mod note;
mod stock;

pub use bar::{BarDetails, PackedBar};
pub use duration::{BarDuration, NOTE_TAG};
pub use note::NoteDetails;
pub use stock::StockDetails;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown bar duration tag: {0}")]
    UnknownDuration(u8),
}
