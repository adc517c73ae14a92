//! Stocks, price bars and notes on an ordered hierarchical key-value store.
//!
//! # Layout
//!
//! ```text
//! <root item>                       value: label
//! └── <ticker>                      value: stock profile (JSON)
//!     ├── [0][seconds]              day bar
//!     ├── [1][seconds]              minute bar
//!     └── [32][seconds]             note text
//! ```
//!
//! - [`keys`] builds and parses ticker and composite time keys
//! - [`values`] encodes profiles, bars and notes
//! - [`range`] adapts bounded store scans to typed visitors
//! - [`Stock`] reads and writes one stock's profile, bars and notes
//! - [`RootStocks`] creates, reads and enumerates stocks
//!
//! The layer holds no locks and runs no background work; every call goes
//! straight through to the store, which owns all concurrency control.

mod catalog;
mod config;
mod error;
pub mod keys;
pub mod range;
mod stock;
pub mod values;

pub use catalog::RootStocks;
pub use config::{DEFAULT_LABEL, DEFAULT_NAMESPACE, SchemaConfig};
pub use error::{SchemaError, SchemaResult};
pub use stock::Stock;
pub use values::BarValue;
