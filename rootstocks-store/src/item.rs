use crate::StoreResult;

/// Entry point of a store: hands out top-level items by namespace.
pub trait Root {
    type Item: Item;

    /// Obtains the top-level item for `namespace`, creating it with `label`
    /// as its value if it does not exist yet.
    fn root_item(&self, namespace: &str, label: &str) -> StoreResult<Self::Item>;
}

/// Handle on one stored node and its ordered children.
///
/// Range scans take a start key and a qualifier length. The first
/// `qualifier_len` bytes of the start key form a prefix the scan never
/// leaves; a qualifier of 0 scans every child. Forward scans visit keys at or
/// after the start key in ascending order, reverse scans visit keys at or
/// before it in descending order. An empty start key in a reverse scan
/// begins at the last key. The visitor returns `false` to stop early, which
/// is not an error.
pub trait Item: Sized {
    /// Returns an owned copy of this item's key.
    fn copy_key(&self) -> Vec<u8>;

    /// Returns this item's payload as of the last read or update.
    fn value(&self) -> &[u8];

    /// Creates a child, failing with `AlreadyExists` if the key is taken.
    fn create_child(&self, key: &[u8], value: &[u8], meta: Option<&[u8]>) -> StoreResult<Self>;

    /// Creates a child without returning a handle to it.
    fn quick_child(&self, key: &[u8], value: &[u8]) -> StoreResult<()>;

    /// Reads a child, failing with `NotFound` if absent.
    fn read_child(&self, key: &[u8]) -> StoreResult<Self>;

    /// Replaces this item's payload.
    fn update_value(&mut self, value: &[u8]) -> StoreResult<()>;

    /// Removes this item. Whether children go with it is up to the store.
    fn delete(self) -> StoreResult<()>;

    /// Visits children in key order starting at `start_key`.
    fn range_children<F>(
        &self,
        start_key: &[u8],
        qualifier_len: usize,
        reverse: bool,
        visitor: F,
    ) -> StoreResult<()>
    where
        F: FnMut(Self) -> bool;

    /// Like [`Item::range_children`] but hands the visitor only keys.
    fn range_child_keys<F>(
        &self,
        start_key: &[u8],
        qualifier_len: usize,
        reverse: bool,
        visitor: F,
    ) -> StoreResult<()>
    where
        F: FnMut(&[u8]) -> bool;
}

/// Returns the prefix a scan starting at `start_key` is bounded to.
#[must_use]
pub fn bounded_prefix(start_key: &[u8], qualifier_len: usize) -> &[u8] {
    &start_key[..qualifier_len.min(start_key.len())]
}
