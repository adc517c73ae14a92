//! Ordered hierarchical key-value store contract.
//!
//! The schema layer never talks to a concrete database. It talks to an
//! [`Item`]: a handle on one stored key/value node that owns an ordered set
//! of children. Children are compared byte-lexicographically, and range
//! scans can be bounded to a fixed key prefix (the "qualifier").
//!
//! [`MemoryRoot`] implements the contract over in-process ordered maps. It
//! is not durable; it backs tests and callers that embed the schema without
//! a persistent store.

mod error;
mod item;
mod memory;

pub use error::{StoreError, StoreResult};
pub use item::{Item, Root, bounded_prefix};
pub use memory::{MemoryItem, MemoryRoot};
