//! Many-to-many relationship index for grouping child values under parent
//! keys after materialization.

use std::fmt;

use indexmap::IndexMap;
use uuid::Uuid;

use crate::error::{QueryError, Result};

/// Parent key of a relationship entry: an identifier or an integer.
///
/// One index instance uses one key form throughout; mixing the two within a
/// single instance is a caller error the index does not police.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum M2MKey {
    /// Identifier-keyed parent.
    Identifier(Uuid),
    /// Integer-keyed parent.
    Integer(i64),
}

impl fmt::Display for M2MKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(id) => write!(f, "{id}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<Uuid> for M2MKey {
    fn from(id: Uuid) -> Self {
        Self::Identifier(id)
    }
}

impl From<i64> for M2MKey {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for M2MKey {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

/// Association map from a stringified parent key to its ordered child list.
///
/// Reads of a never-added key are a failure condition; callers are expected
/// to guard indexed access with [`ComplexM2M::contains`].
#[derive(Debug, Clone, Default)]
pub struct ComplexM2M<T> {
    map: IndexMap<String, Vec<T>>,
}

impl<T> ComplexM2M<T> {
    /// New empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Append a child value under a parent key, creating the child list on
    /// first use.
    pub fn add_m2m(&mut self, key: impl Into<M2MKey>, value: T) {
        self.map.entry(key.into().to_string()).or_default().push(value);
    }

    /// True if the parent key has been added; false for a null key.
    #[must_use]
    pub fn contains(&self, key: Option<impl Into<M2MKey>>) -> bool {
        key.is_some_and(|k| self.map.contains_key(&k.into().to_string()))
    }

    /// Children of a parent key, in addition order.
    pub fn get(&self, key: impl Into<M2MKey>) -> Result<&[T]> {
        let key = key.into().to_string();
        self.map
            .get(&key)
            .map(Vec::as_slice)
            .ok_or_else(|| QueryError::relation_not_found(key))
    }

    /// True if at least one relationship has been mapped.
    #[must_use]
    pub fn any(&self) -> bool {
        !self.map.is_empty()
    }

    /// All child values across all keys, concatenated in key-insertion
    /// order; empty when no keys exist.
    #[must_use]
    pub fn flatten(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.map.values().flatten().cloned().collect()
    }
}
