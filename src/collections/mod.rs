//! Keyed collections and the property/column name map
//!
//! Concrete key extractors live next to the entities they key.

mod bidirectional;
mod keyed;

pub use bidirectional::BiDirectionalMap;
pub use keyed::{KeyExtractor, KeyedCollection, DEFAULT_DICTIONARY_CREATION_THRESHOLD};
