//! Insertion-ordered collections keyed by a value derived from each item.
//!
//! A [`KeyedCollection`] keeps its items in a `Vec` and, once it grows past a
//! configurable threshold, a hash index from key to position. The key is
//! never stored separately; a [`KeyExtractor`] derives it from the item on
//! demand, so an item and its key cannot drift apart.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::error::CollectionError;

/// Item count above which the key index is built. `0` indexes from the first item.
pub const DEFAULT_DICTIONARY_CREATION_THRESHOLD: usize = 0;

/// Derives the key of an item.
pub trait KeyExtractor<T> {
    type Key: Eq + Hash + Clone + fmt::Display;

    fn key_for(item: &T) -> Self::Key;
}

/// Ordered, duplicate-free collection of items addressed by key or position.
pub struct KeyedCollection<T, X: KeyExtractor<T>> {
    items: Vec<T>,
    index: Option<HashMap<X::Key, usize>>,
    threshold: usize,
    _extractor: PhantomData<fn() -> X>,
}

impl<T, X: KeyExtractor<T>> KeyedCollection<T, X> {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_DICTIONARY_CREATION_THRESHOLD)
    }

    /// Delays building the key index until the collection holds more than
    /// `threshold` items. Below that, lookups scan linearly.
    pub fn with_threshold(threshold: usize) -> Self {
        Self {
            items: Vec::new(),
            index: None,
            threshold,
            _extractor: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether the hash index has been built.
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn keys(&self) -> impl Iterator<Item = X::Key> + '_ {
        self.items.iter().map(X::key_for)
    }

    pub fn index_of_key(&self, key: &X::Key) -> Option<usize> {
        match &self.index {
            Some(index) => index.get(key).copied(),
            None => self.items.iter().position(|item| X::key_for(item) == *key),
        }
    }

    pub fn contains_key(&self, key: &X::Key) -> bool {
        self.index_of_key(key).is_some()
    }

    pub fn get(&self, key: &X::Key) -> Option<&T> {
        self.index_of_key(key).map(|i| &self.items[i])
    }

    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable access to the item under `key`.
    ///
    /// It is a logic error to change the item's key through the returned
    /// reference; lookups would then miss or find the wrong item.
    pub fn get_mut(&mut self, key: &X::Key) -> Option<&mut T> {
        let position = self.index_of_key(key)?;
        self.items.get_mut(position)
    }

    /// Mutable access to the item at `index`. The same key rule as
    /// [`KeyedCollection::get_mut`] applies.
    pub fn get_mut_at(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Appends `item`, failing if its key is already present.
    pub fn add(&mut self, item: T) -> Result<(), CollectionError> {
        let key = X::key_for(&item);
        if self.contains_key(&key) {
            return Err(CollectionError::DuplicateKey {
                key: key.to_string(),
            });
        }
        self.push_unchecked(key, item);
        Ok(())
    }

    /// Appends `item` unless its key is already present.
    pub fn try_add(&mut self, item: T) -> bool {
        let key = X::key_for(&item);
        if self.contains_key(&key) {
            return false;
        }
        self.push_unchecked(key, item);
        true
    }

    /// Appends every item whose key is not yet present; returns how many were added.
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        let mut added = 0;
        for item in items {
            let key = X::key_for(&item);
            if self.contains_key(&key) {
                trace!(key = %key, "Skipping duplicate item");
                continue;
            }
            self.push_unchecked(key, item);
            added += 1;
        }
        added
    }

    /// Inserts `item` at `position`, shifting later items.
    pub fn insert(&mut self, position: usize, item: T) -> Result<(), CollectionError> {
        if position > self.items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index: position,
                len: self.items.len(),
            });
        }
        let key = X::key_for(&item);
        if self.contains_key(&key) {
            return Err(CollectionError::DuplicateKey {
                key: key.to_string(),
            });
        }
        self.items.insert(position, item);
        self.rebuild_index();
        Ok(())
    }

    /// Replaces the item at `position`, returning the old one.
    ///
    /// The new key may equal the replaced item's key but no other.
    pub fn replace_at(&mut self, position: usize, item: T) -> Result<T, CollectionError> {
        if position >= self.items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index: position,
                len: self.items.len(),
            });
        }
        let key = X::key_for(&item);
        if let Some(existing) = self.index_of_key(&key) {
            if existing != position {
                return Err(CollectionError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }
        let old = std::mem::replace(&mut self.items[position], item);
        if let Some(index) = self.index.as_mut() {
            index.remove(&X::key_for(&old));
            index.insert(key, position);
        }
        Ok(old)
    }

    pub fn remove(&mut self, key: &X::Key) -> Option<T> {
        let position = self.index_of_key(key)?;
        let item = self.items.remove(position);
        self.rebuild_index();
        Some(item)
    }

    pub fn remove_at(&mut self, position: usize) -> Result<T, CollectionError> {
        if position >= self.items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index: position,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(position);
        self.rebuild_index();
        Ok(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        if let Some(index) = self.index.as_mut() {
            index.clear();
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn push_unchecked(&mut self, key: X::Key, item: T) {
        self.items.push(item);
        let position = self.items.len() - 1;
        match self.index.as_mut() {
            Some(index) => {
                index.insert(key, position);
            }
            None if self.items.len() > self.threshold => self.build_index(),
            None => {}
        }
    }

    fn build_index(&mut self) {
        let index: HashMap<X::Key, usize> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| (X::key_for(item), i))
            .collect();
        debug!(
            items = self.items.len(),
            threshold = self.threshold,
            "Created key index"
        );
        self.index = Some(index);
    }

    fn rebuild_index(&mut self) {
        if self.index.is_some() || self.items.len() > self.threshold {
            self.build_index();
        }
    }
}

impl<T, X: KeyExtractor<T>> Default for KeyedCollection<T, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, X: KeyExtractor<T>> Clone for KeyedCollection<T, X> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            index: self.index.clone(),
            threshold: self.threshold,
            _extractor: PhantomData,
        }
    }
}

impl<T: fmt::Debug, X: KeyExtractor<T>> fmt::Debug for KeyedCollection<T, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T, X: KeyExtractor<T>> FromIterator<T> for KeyedCollection<T, X> {
    /// Collects items, silently skipping duplicate keys.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.add_range(iter);
        collection
    }
}

impl<T, X: KeyExtractor<T>> Extend<T> for KeyedCollection<T, X> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T, X: KeyExtractor<T>> IntoIterator for KeyedCollection<T, X> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, X: KeyExtractor<T>> IntoIterator for &'a KeyedCollection<T, X> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
