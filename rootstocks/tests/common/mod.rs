//! Shared test helpers for schema tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use rootstocks::{RootStocks, SchemaConfig};
use rootstocks_store::{Item, MemoryItem, MemoryRoot, Root, StoreError, StoreResult};
use std::cell::Cell;
use std::rc::Rc;

/// Installs a test-writer subscriber; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Whole-second UTC timestamp.
pub fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap()
}

/// Opens a catalog over a fresh in-memory store, returning the store too so
/// tests can reach under the schema.
pub fn memory_catalog<B: rootstocks::BarValue>() -> (MemoryRoot, RootStocks<MemoryItem, B>) {
    init_tracing();
    let root = MemoryRoot::new();
    let catalog = RootStocks::open(&root, &SchemaConfig::default()).unwrap();
    (root, catalog)
}

/// Raw store handle of a stock, bypassing the schema.
pub fn raw_stock_item(root: &MemoryRoot, ticker_key: &[u8]) -> MemoryItem {
    let config = SchemaConfig::default();
    root.root_item(&config.namespace, &config.label)
        .unwrap()
        .read_child(ticker_key)
        .unwrap()
}

/// A store whose deletions start failing once a budget is spent, and whose
/// child reads can be made to miss, as if another writer raced them.
#[derive(Debug, Clone)]
pub struct FaultyRoot {
    inner: MemoryRoot,
    deletes_left: Rc<Cell<usize>>,
    stale_reads: Rc<Cell<bool>>,
}

impl FaultyRoot {
    pub fn new() -> Self {
        Self {
            inner: MemoryRoot::new(),
            deletes_left: Rc::new(Cell::new(usize::MAX)),
            stale_reads: Rc::new(Cell::new(false)),
        }
    }

    /// While set, `read_child` reports `NotFound` for keys that exist.
    pub fn stale_reads(&self, stale: bool) {
        self.stale_reads.set(stale);
    }

    /// Allows `n` more deletions; every later one fails.
    pub fn fail_deletes_after(&self, n: usize) {
        self.deletes_left.set(n);
    }
}

impl Root for FaultyRoot {
    type Item = FaultyItem;

    fn root_item(&self, namespace: &str, label: &str) -> StoreResult<FaultyItem> {
        Ok(FaultyItem {
            inner: self.inner.root_item(namespace, label)?,
            deletes_left: Rc::clone(&self.deletes_left),
            stale_reads: Rc::clone(&self.stale_reads),
        })
    }
}

#[derive(Debug, Clone)]
pub struct FaultyItem {
    inner: MemoryItem,
    deletes_left: Rc<Cell<usize>>,
    stale_reads: Rc<Cell<bool>>,
}

impl FaultyItem {
    fn wrap(&self, inner: MemoryItem) -> Self {
        Self {
            inner,
            deletes_left: Rc::clone(&self.deletes_left),
            stale_reads: Rc::clone(&self.stale_reads),
        }
    }
}

impl Item for FaultyItem {
    fn copy_key(&self) -> Vec<u8> {
        self.inner.copy_key()
    }

    fn value(&self) -> &[u8] {
        self.inner.value()
    }

    fn create_child(&self, key: &[u8], value: &[u8], meta: Option<&[u8]>) -> StoreResult<Self> {
        Ok(self.wrap(self.inner.create_child(key, value, meta)?))
    }

    fn quick_child(&self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        self.inner.quick_child(key, value)
    }

    fn read_child(&self, key: &[u8]) -> StoreResult<Self> {
        if self.stale_reads.get() {
            return Err(StoreError::NotFound);
        }
        Ok(self.wrap(self.inner.read_child(key)?))
    }

    fn update_value(&mut self, value: &[u8]) -> StoreResult<()> {
        self.inner.update_value(value)
    }

    fn delete(self) -> StoreResult<()> {
        let left = self.deletes_left.get();
        if left == 0 {
            return Err(StoreError::Backend("injected delete failure".into()));
        }
        self.deletes_left.set(left - 1);
        self.inner.delete()
    }

    fn range_children<F>(
        &self,
        start_key: &[u8],
        qualifier_len: usize,
        reverse: bool,
        mut visitor: F,
    ) -> StoreResult<()>
    where
        F: FnMut(Self) -> bool,
    {
        self.inner
            .range_children(start_key, qualifier_len, reverse, |child| {
                visitor(self.wrap(child))
            })
    }

    fn range_child_keys<F>(
        &self,
        start_key: &[u8],
        qualifier_len: usize,
        reverse: bool,
        visitor: F,
    ) -> StoreResult<()>
    where
        F: FnMut(&[u8]) -> bool,
    {
        self.inner
            .range_child_keys(start_key, qualifier_len, reverse, visitor)
    }
}
