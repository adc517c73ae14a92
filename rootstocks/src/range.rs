//! Range query adapter.
//!
//! Turns a store range scan into a typed one. Scan completion and per-item
//! decode failures come back through different channels: the store reports
//! its own errors from `range_children`, while a decode failure stops the
//! scan from inside the visitor and is returned once the scan call is done.

use crate::{SchemaError, SchemaResult};
use rootstocks_store::{Item, bounded_prefix};
use tracing::{debug, warn};

/// Qualifier that lets a scan cover every child.
pub const UNBOUNDED: usize = 0;

/// Qualifier that bounds a scan to one tag byte.
pub const TAG_QUALIFIER: usize = 1;

/// Scans children, decoding each one before handing it to `visit`.
///
/// Stops at the first decode failure and returns it. `visit` returning
/// `false` stops the scan without error.
pub fn scan_decoded<I, T, D, V>(
    item: &I,
    start_key: &[u8],
    qualifier_len: usize,
    reverse: bool,
    mut decode: D,
    mut visit: V,
) -> SchemaResult<()>
where
    I: Item,
    D: FnMut(&I) -> SchemaResult<T>,
    V: FnMut(T) -> bool,
{
    let mut failure = None;
    item.range_children(start_key, qualifier_len, reverse, |child| {
        match decode(&child) {
            Ok(value) => visit(value),
            Err(err) => {
                warn!("Stopping scan at key {:?}: {}", child.copy_key(), err);
                failure = Some(err);
                false
            }
        }
    })?;
    failure.map_or(Ok(()), Err)
}

/// Deletes every child under the prefix `start_key[..qualifier_len]`, one
/// at a time, returning how many were removed.
///
/// Not atomic: the first failed deletion ends the loop and is reported as
/// [`SchemaError::DeleteAborted`], and items already removed stay removed.
pub fn delete_range<I: Item>(
    item: &I,
    start_key: &[u8],
    qualifier_len: usize,
) -> SchemaResult<usize> {
    let mut deleted = 0;
    let mut failure = None;
    item.range_children(start_key, qualifier_len, false, |child| {
        let key = child.copy_key();
        match child.delete() {
            Ok(()) => {
                deleted += 1;
                true
            }
            Err(source) => {
                failure = Some((key, source));
                false
            }
        }
    })?;

    match failure {
        None => {
            debug!(
                "Deleted {} items under prefix {:?}",
                deleted,
                bounded_prefix(start_key, qualifier_len)
            );
            Ok(deleted)
        }
        Some((key, source)) => {
            warn!(
                "Range delete aborted after {} deletions at key {:?}: {}",
                deleted, key, source
            );
            Err(SchemaError::DeleteAborted {
                deleted,
                key,
                source,
            })
        }
    }
}
