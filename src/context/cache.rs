//! Identity-preserving wrapper tables.

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Rc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::error::Result;

/// One table per wrapper kind, mapping a host handle to the single shared
/// slot for that handle.
///
/// A slot constructor may create slots in other tables but never asks for
/// its own key, so it cannot observe a half-built entry. The table is not
/// borrowed while a constructor runs, and a failed constructor leaves the
/// key absent.
pub(crate) struct Cache<K, V> {
    name: &'static str,
    map: RefCell<IndexMap<K, Rc<V>, FxBuildHasher>>,
}

impl<K, V> Cache<K, V>
where
    K: Copy + Eq + Hash + std::fmt::Debug,
{
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            map: RefCell::new(IndexMap::default()),
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<Rc<V>> {
        self.map.borrow().get(key).cloned()
    }

    pub(crate) fn get_or_insert_with(&self, key: K, make: impl FnOnce() -> V) -> Rc<V> {
        if let Some(found) = self.get(&key) {
            return found;
        }
        trace!(cache = self.name, ?key, "cache miss");
        let value = Rc::new(make());
        self.map.borrow_mut().entry(key).or_insert(value).clone()
    }

    pub(crate) fn get_or_try_insert_with(
        &self,
        key: K,
        make: impl FnOnce() -> Result<V>,
    ) -> Result<Rc<V>> {
        if let Some(found) = self.get(&key) {
            return Ok(found);
        }
        trace!(cache = self.name, ?key, "cache miss");
        let value = Rc::new(make()?);
        Ok(self.map.borrow_mut().entry(key).or_insert(value).clone())
    }

    /// Snapshot of every slot, in insertion order.
    pub(crate) fn values(&self) -> Vec<Rc<V>> {
        self.map.borrow().values().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.map.borrow().len()
    }
}
