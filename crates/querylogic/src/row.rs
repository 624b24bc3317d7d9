//! Row and result-set collections.

use indexmap::IndexMap;

use crate::error::{QueryError, Result};
use crate::types::Value;

/// One decoded database record as an ordered name-to-value mapping.
///
/// Keys are case-folded on insert, so lookup is case-insensitive. A second
/// cell whose folded name collides with an existing key is inserted under
/// `<name>_01`; the first writer keeps the plain name. Rows are
/// write-once-per-key, then read-many; there is no deletion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: IndexMap<String, Value>,
}

impl Row {
    /// New empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell under the case-folded column name, applying the
    /// collision-rename rule.
    pub fn add(&mut self, key: &str, value: Value) {
        let folded = key.to_lowercase();
        if self.cells.contains_key(&folded) {
            self.cells.insert(format!("{folded}_01"), value);
        } else {
            self.cells.insert(folded, value);
        }
    }

    /// Number of cells in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the row holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell lookup by column name, case-insensitive.
    ///
    /// A missing key is a hard failure signaling a wrong column name, not a
    /// null cell.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.cells
            .get(&key.to_lowercase())
            .ok_or_else(|| QueryError::column_not_found(key))
    }

    /// True when a cell exists under the case-folded name.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.cells.contains_key(&key.to_lowercase())
    }

    /// The underlying ordered mapping, by reference.
    ///
    /// No defensive copy is made; mutation through [`Row::as_map_mut`] is
    /// visible to every holder of the row.
    #[must_use]
    pub const fn as_map(&self) -> &IndexMap<String, Value> {
        &self.cells
    }

    /// Mutable view of the underlying mapping, for downstream consumers.
    pub fn as_map_mut(&mut self) -> &mut IndexMap<String, Value> {
        &mut self.cells
    }
}

/// All records from one result set, in database return order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rows {
    rows: Vec<Row>,
}

impl Rows {
    /// New empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row; order of appends is preserved.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at a position, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Iterate the rows in return order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl std::ops::Index<usize> for Rows {
    type Output = Row;

    fn index(&self, index: usize) -> &Row {
        &self.rows[index]
    }
}

impl IntoIterator for Rows {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rows {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<Row> for Rows {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
