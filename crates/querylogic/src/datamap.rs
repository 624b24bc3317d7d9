//! Multi-result-set collection with a sequential-access cursor.

use crate::error::{QueryError, Result};
use crate::row::Rows;

/// All result sets from one multi-statement execution.
///
/// Result sets are appended in the order the underlying reader produced
/// them and the map is immutable afterwards. A stateful cursor supports
/// bidirectional sequential access: [`DataMap::next`] and
/// [`DataMap::previous`] move it, clamping so repeated calls stick at the
/// last (or first) result set instead of running off either end.
/// [`DataMap::first`] and [`DataMap::last`] are positional reads that do
/// not touch the cursor.
#[derive(Debug, Clone, Default)]
pub struct DataMap {
    sets: Vec<Rows>,
    current: usize,
}

impl DataMap {
    /// New empty map with the cursor at the start.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one result set.
    pub fn push(&mut self, rows: Rows) {
        self.sets.push(rows);
    }

    /// Number of result sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True when no result set was appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The first result set, without moving the cursor.
    pub fn first(&self) -> Result<&Rows> {
        self.sets.first().ok_or_else(QueryError::no_result_sets)
    }

    /// The last result set, without moving the cursor.
    pub fn last(&self) -> Result<&Rows> {
        self.sets.last().ok_or_else(QueryError::no_result_sets)
    }

    /// Advance the cursor and return the result set at the new position,
    /// sticking at the last result set once the end is reached.
    pub fn next(&mut self) -> Result<&Rows> {
        if self.current < self.sets.len() {
            self.current += 1;
        }
        self.read_current()
    }

    /// Retreat the cursor and return the result set at the new position,
    /// sticking at the first result set.
    pub fn previous(&mut self) -> Result<&Rows> {
        if self.current > 0 {
            self.current -= 1;
        }
        self.read_current()
    }

    // The cursor may legally sit one past the last set after repeated
    // next() calls; reads clamp to the last valid index.
    fn read_current(&self) -> Result<&Rows> {
        if self.sets.is_empty() {
            return Err(QueryError::no_result_sets());
        }
        let index = self.current.min(self.sets.len() - 1);
        Ok(&self.sets[index])
    }
}

impl IntoIterator for DataMap {
    type Item = Rows;
    type IntoIter = std::vec::IntoIter<Rows>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_iter()
    }
}
