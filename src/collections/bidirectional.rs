//! Thread-safe one-to-one map between property names and SQL column names.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::MappingError;
use crate::text::{pascal_case, underscore, WordCase};
use crate::util::CiString;

struct Inner<K, V> {
    forward: HashMap<K, V>,
    reverse: HashMap<V, K>,
}

impl<K, V> Inner<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn insert(&mut self, key: K, value: V) -> Result<(), MappingError> {
        if self.forward.contains_key(&key) || self.reverse.contains_key(&value) {
            return Err(MappingError::Duplicate {
                detail: format!("{:?} <-> {:?}", key, value),
            });
        }
        self.reverse.insert(value.clone(), key.clone());
        self.forward.insert(key, value);
        Ok(())
    }

    fn remove_by_key(&mut self, key: &K) -> bool {
        match self.forward.remove(key) {
            Some(value) => {
                self.reverse.remove(&value);
                true
            }
            None => false,
        }
    }
}

/// A bijection kept consistent under one reader-writer lock.
///
/// Both directions live behind the same lock so a reader never sees a pair
/// present in one direction and missing from the other. A read-only map
/// rejects every mutation with [`MappingError::ReadOnly`].
pub struct BiDirectionalMap<K = String, V = String> {
    inner: RwLock<Inner<K, V>>,
    read_only: bool,
}

impl<K, V> BiDirectionalMap<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new() -> Self {
        Self::with_read_only(false)
    }

    /// An empty map. A read-only empty map never gains entries.
    pub fn with_read_only(read_only: bool) -> Self {
        Self {
            inner: RwLock::new(Inner {
                forward: HashMap::new(),
                reverse: HashMap::new(),
            }),
            read_only,
        }
    }

    /// Builds a map from pairs, failing on any duplicate key or value.
    pub fn from_pairs<I>(pairs: I, read_only: bool) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut inner = Inner {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        };
        for (key, value) in pairs {
            inner.insert(key, value)?;
        }
        Ok(Self {
            inner: RwLock::new(inner),
            read_only,
        })
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    // Writes validate before mutating, so a poisoned lock still holds consistent maps.
    fn read(&self) -> RwLockReadGuard<'_, Inner<K, V>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner<K, V>>, MappingError> {
        if self.read_only {
            return Err(MappingError::ReadOnly);
        }
        Ok(self.inner.write().unwrap_or_else(|e| e.into_inner()))
    }

    pub fn len(&self) -> usize {
        self.read().forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value mapped to `key`.
    pub fn forward(&self, key: &K) -> Result<V, MappingError> {
        self.try_forward(key).ok_or_else(|| MappingError::NotFound {
            key: format!("{:?}", key),
        })
    }

    /// Key mapped to `value`.
    pub fn reverse(&self, value: &V) -> Result<K, MappingError> {
        self.try_reverse(value).ok_or_else(|| MappingError::NotFound {
            key: format!("{:?}", value),
        })
    }

    pub fn try_forward(&self, key: &K) -> Option<V> {
        self.read().forward.get(key).cloned()
    }

    pub fn try_reverse(&self, value: &V) -> Option<K> {
        self.read().reverse.get(value).cloned()
    }

    pub fn contains_forward(&self, key: &K) -> bool {
        self.read().forward.contains_key(key)
    }

    pub fn contains_reverse(&self, value: &V) -> bool {
        self.read().reverse.contains_key(value)
    }

    pub fn add(&self, key: K, value: V) -> Result<(), MappingError> {
        self.write()?.insert(key, value)
    }

    /// Adds every pair under one write lock.
    ///
    /// Pairs are validated against the map and each other first, so on error
    /// nothing is added.
    pub fn add_range<I>(&self, pairs: I) -> Result<(), MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut guard = self.write()?;
        let pairs: Vec<(K, V)> = pairs.into_iter().collect();

        let mut staged = Inner {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        };
        for (key, value) in &pairs {
            if guard.forward.contains_key(key) || guard.reverse.contains_key(value) {
                return Err(MappingError::Duplicate {
                    detail: format!("{:?} <-> {:?}", key, value),
                });
            }
            staged.insert(key.clone(), value.clone())?;
        }
        for (key, value) in pairs {
            guard.insert(key, value)?;
        }
        Ok(())
    }

    pub fn remove_by_key(&self, key: &K) -> Result<bool, MappingError> {
        Ok(self.write()?.remove_by_key(key))
    }

    pub fn remove_by_value(&self, value: &V) -> Result<bool, MappingError> {
        let mut guard = self.write()?;
        match guard.reverse.remove(value) {
            Some(key) => {
                guard.forward.remove(&key);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every listed key under one write lock; returns how many were present.
    pub fn remove_by_keys<'a, I>(&self, keys: I) -> Result<usize, MappingError>
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut guard = self.write()?;
        Ok(keys.into_iter().filter(|key| guard.remove_by_key(key)).count())
    }

    /// Copy of the forward direction.
    pub fn snapshot(&self) -> HashMap<K, V> {
        self.read().forward.clone()
    }
}

impl<K, V> BiDirectionalMap<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Serialize + DeserializeOwned,
    V: Eq + Hash + Clone + fmt::Debug + Serialize + DeserializeOwned,
{
    /// Serializes the forward direction as a JSON object.
    pub fn to_json(&self) -> Result<String, MappingError> {
        let guard = self.read();
        Ok(serde_json::to_string(&guard.forward)?)
    }

    /// Rebuilds a map from [`BiDirectionalMap::to_json`] output.
    pub fn from_json(json: &str, read_only: bool) -> Result<Self, MappingError> {
        let forward: HashMap<K, V> = serde_json::from_str(json)?;
        Self::from_pairs(forward, read_only)
    }
}

impl BiDirectionalMap<CiString, CiString> {
    /// Maps the PascalCase property name derived from each SQL column name to
    /// that column name. Lookups in both directions ignore case.
    pub fn from_column_names<I, S>(column_names: I, read_only: bool) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_pairs(
            column_names.into_iter().map(|column| {
                let column = column.as_ref();
                (CiString::from(pascal_case(column)), CiString::from(column))
            }),
            read_only,
        )
    }

    /// Maps each property name to the upper-case underscored column name
    /// derived from it.
    pub fn from_property_names<I, S>(property_names: I, read_only: bool) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_pairs(
            property_names.into_iter().map(|property| {
                let property = property.as_ref();
                (CiString::from(property), CiString::from(underscore(property, WordCase::Upper)))
            }),
            read_only,
        )
    }
}

impl<K, V> Default for BiDirectionalMap<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for BiDirectionalMap<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiDirectionalMap")
            .field("forward", &self.read().forward)
            .field("read_only", &self.read_only)
            .finish()
    }
}
