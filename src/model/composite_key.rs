//! Multi-part lookup keys

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::NameError;

/// An immutable key made of one or more parts.
///
/// The hash is computed once at construction. Parts compare exactly; use the
/// name types when case-insensitive identity is needed.
#[derive(Debug, Clone)]
pub struct CompositeKey<T = String> {
    parts: Vec<T>,
    cached_hash: u64,
}

impl<T: Hash> CompositeKey<T> {
    pub fn new(parts: impl IntoIterator<Item = T>) -> Result<Self, NameError> {
        let parts: Vec<T> = parts.into_iter().collect();
        if parts.is_empty() {
            return Err(NameError::InvalidIdentifier {
                input: String::new(),
                message: "at least one key part must be provided".to_string(),
            });
        }
        let mut hasher = DefaultHasher::new();
        parts.hash(&mut hasher);
        Ok(Self {
            parts,
            cached_hash: hasher.finish(),
        })
    }
}

impl<T> CompositeKey<T> {
    pub fn parts(&self) -> &[T] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl<T: PartialEq> PartialEq for CompositeKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cached_hash == other.cached_hash && self.parts == other.parts
    }
}

impl<T: Eq> Eq for CompositeKey<T> {}

impl<T> Hash for CompositeKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.cached_hash);
    }
}

impl<T: fmt::Display> fmt::Display for CompositeKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}
