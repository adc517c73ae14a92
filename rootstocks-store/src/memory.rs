//! In-memory implementation of the store contract.
//!
//! Every level of the hierarchy is a `BTreeMap` keyed by raw bytes, so child
//! iteration order is byte-lexicographic. The whole tree sits behind one
//! `RwLock`; handles address their node by key path and re-resolve it on
//! every call, so a handle whose node was deleted reports `NotFound`.
//!
//! Deleting an item removes its whole subtree.

use crate::{Item, Root, StoreError, StoreResult, bounded_prefix};
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct Node {
    value: Vec<u8>,
    meta: Option<Vec<u8>>,
    children: BTreeMap<Vec<u8>, Node>,
}

impl Node {
    fn new(value: &[u8], meta: Option<&[u8]>) -> Self {
        Self {
            value: value.to_vec(),
            meta: meta.map(<[u8]>::to_vec),
            children: BTreeMap::new(),
        }
    }

    fn descend(&self, path: &[Vec<u8>]) -> StoreResult<&Node> {
        path.iter().try_fold(self, |node, key| {
            node.children.get(key).ok_or(StoreError::NotFound)
        })
    }

    fn descend_mut(&mut self, path: &[Vec<u8>]) -> StoreResult<&mut Node> {
        let mut node = self;
        for key in path {
            node = node.children.get_mut(key).ok_or(StoreError::NotFound)?;
        }
        Ok(node)
    }
}

/// An in-memory store. Clones share the same tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    tree: Arc<RwLock<Node>>,
}

impl MemoryRoot {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Root for MemoryRoot {
    type Item = MemoryItem;

    fn root_item(&self, namespace: &str, label: &str) -> StoreResult<MemoryItem> {
        let mut tree = self.tree.write().map_err(|_| StoreError::Poisoned)?;
        let key = namespace.as_bytes().to_vec();
        let node = tree.children.entry(key.clone()).or_insert_with(|| {
            debug!("Created root item {namespace}");
            Node::new(label.as_bytes(), None)
        });
        Ok(MemoryItem {
            tree: Arc::clone(&self.tree),
            value: node.value.clone(),
            path: vec![key],
        })
    }
}

/// Handle on one node of a [`MemoryRoot`].
#[derive(Debug, Clone)]
pub struct MemoryItem {
    tree: Arc<RwLock<Node>>,
    path: Vec<Vec<u8>>,
    value: Vec<u8>,
}

impl MemoryItem {
    /// Returns the metadata the item was created with.
    pub fn meta(&self) -> StoreResult<Option<Vec<u8>>> {
        let tree = self.read()?;
        Ok(tree.descend(&self.path)?.meta.clone())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Node>> {
        self.tree.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Node>> {
        self.tree.write().map_err(|_| StoreError::Poisoned)
    }

    fn child(&self, key: Vec<u8>, value: Vec<u8>) -> Self {
        let mut path = self.path.clone();
        path.push(key);
        Self {
            tree: Arc::clone(&self.tree),
            path,
            value,
        }
    }

    /// Copies out the children a scan would visit. The lock is released
    /// before the caller runs its visitor.
    fn collect_range<T>(
        &self,
        start_key: &[u8],
        qualifier_len: usize,
        reverse: bool,
        map: impl Fn(&Vec<u8>, &Node) -> T,
    ) -> StoreResult<Vec<T>> {
        let tree = self.read()?;
        let node = tree.descend(&self.path)?;
        let prefix = bounded_prefix(start_key, qualifier_len);

        let entries: Vec<T> = if reverse {
            let upper = if start_key.is_empty() {
                Bound::Unbounded
            } else {
                Bound::Included(start_key)
            };
            node.children
                .range::<[u8], _>((Bound::Unbounded, upper))
                .rev()
                .take_while(|(key, _)| key.starts_with(prefix))
                .map(|(key, child)| map(key, child))
                .collect()
        } else {
            node.children
                .range::<[u8], _>((Bound::Included(start_key), Bound::Unbounded))
                .take_while(|(key, _)| key.starts_with(prefix))
                .map(|(key, child)| map(key, child))
                .collect()
        };
        Ok(entries)
    }
}

impl Item for MemoryItem {
    fn copy_key(&self) -> Vec<u8> {
        self.path.last().cloned().unwrap_or_default()
    }

    fn value(&self) -> &[u8] {
        &self.value
    }

    fn create_child(&self, key: &[u8], value: &[u8], meta: Option<&[u8]>) -> StoreResult<Self> {
        let mut tree = self.write()?;
        let node = tree.descend_mut(&self.path)?;
        if node.children.contains_key(key) {
            return Err(StoreError::AlreadyExists(key.to_vec()));
        }
        node.children.insert(key.to_vec(), Node::new(value, meta));
        Ok(self.child(key.to_vec(), value.to_vec()))
    }

    fn quick_child(&self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        self.create_child(key, value, None).map(|_| ())
    }

    fn read_child(&self, key: &[u8]) -> StoreResult<Self> {
        let tree = self.read()?;
        let child = tree
            .descend(&self.path)?
            .children
            .get(key)
            .ok_or(StoreError::NotFound)?;
        Ok(self.child(key.to_vec(), child.value.clone()))
    }

    fn update_value(&mut self, value: &[u8]) -> StoreResult<()> {
        {
            let mut tree = self.write()?;
            tree.descend_mut(&self.path)?.value = value.to_vec();
        }
        self.value = value.to_vec();
        Ok(())
    }

    fn delete(self) -> StoreResult<()> {
        let Some((key, parent_path)) = self.path.split_last() else {
            return Err(StoreError::NotFound);
        };
        let mut tree = self.write()?;
        let removed = tree.descend_mut(parent_path)?.children.remove(key);
        removed.map(|_| ()).ok_or(StoreError::NotFound)
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
        let entries = self.collect_range(start_key, qualifier_len, reverse, |key, child| {
            (key.clone(), child.value.clone())
        })?;
        for (key, value) in entries {
            if !visitor(self.child(key, value)) {
                break;
            }
        }
        Ok(())
    }

    fn range_child_keys<F>(
        &self,
        start_key: &[u8],
        qualifier_len: usize,
        reverse: bool,
        mut visitor: F,
    ) -> StoreResult<()>
    where
        F: FnMut(&[u8]) -> bool,
    {
        let keys = self.collect_range(start_key, qualifier_len, reverse, |key, _| key.clone())?;
        for key in &keys {
            if !visitor(key) {
                break;
            }
        }
        Ok(())
    }
}
