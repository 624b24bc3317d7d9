//! The closed enumeration of supported logical column types.

use std::fmt;

/// Logical column type as declared by a result cursor's schema.
///
/// The set is closed: any declared type name outside it parses to
/// [`SqlType::Unknown`], which the decoder materializes as a null cell
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Single byte.
    Byte,
    /// Identifier / UUID.
    Identifier,
    /// Fixed-point decimal.
    Decimal,
    /// Calendar timestamp.
    Timestamp,
    /// Time-of-day duration.
    Time,
    /// Variable text.
    Text,
    /// Raw byte sequence.
    Bytes,
    /// Boolean flag.
    Bool,
    /// Any type outside the closed set.
    Unknown,
}

impl SqlType {
    /// Parse a declared type name, case-insensitively.
    ///
    /// Accepts the canonical names plus the common database-native
    /// spellings; everything else is [`SqlType::Unknown`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "int16" | "smallint" => Self::Int16,
            "int32" | "int" => Self::Int32,
            "int64" | "bigint" => Self::Int64,
            "byte" | "tinyint" => Self::Byte,
            "uuid" | "uniqueidentifier" => Self::Identifier,
            "decimal" | "numeric" => Self::Decimal,
            "timestamp" | "datetime" | "datetime2" => Self::Timestamp,
            "time" => Self::Time,
            "text" | "varchar" | "nvarchar" | "char" | "nchar" => Self::Text,
            "bytes" | "varbinary" | "binary" | "image" => Self::Bytes,
            "bool" | "boolean" | "bit" => Self::Bool,
            _ => Self::Unknown,
        }
    }

    /// Canonical name of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Byte => "byte",
            Self::Identifier => "uuid",
            Self::Decimal => "decimal",
            Self::Timestamp => "timestamp",
            Self::Time => "time",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Bool => "bool",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true for types inside the closed supported set.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
