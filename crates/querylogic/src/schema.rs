//! Column metadata built once per result set.

use crate::client::ColumnDescriptor;
use crate::types::SqlType;

/// One column of a result set: name, resolved logical type and ordinal.
#[derive(Debug, Clone)]
pub struct Column {
    /// Column name as returned by the database.
    pub name: String,
    /// Logical type resolved from the declared type name.
    pub data_type: SqlType,
    /// Zero-based ordinal position.
    pub ordinal: usize,
}

/// Ordered column metadata for one result set.
///
/// Ephemeral: built from the cursor's schema before any row is read and
/// discarded once the result set is consumed.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// Columns in ordinal order.
    pub columns: Vec<Column>,
}

impl Metadata {
    /// Build metadata from a cursor's schema descriptor.
    ///
    /// An absent or empty schema yields empty metadata, meaning "no typed
    /// columns" rather than an error.
    #[must_use]
    pub fn from_schema(schema: &[ColumnDescriptor]) -> Self {
        let columns = schema
            .iter()
            .map(|descriptor| Column {
                name: descriptor.name.clone(),
                data_type: SqlType::from_name(&descriptor.type_name),
                ordinal: descriptor.ordinal,
            })
            .collect();
        Self { columns }
    }

    /// True when the result set declared no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }
}
