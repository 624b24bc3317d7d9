//! Dynamically-typed cell values.
//!
//! A closed sum type over the supported logical column types. Accessors
//! follow the sentinel-on-null convention of the row read helpers: a null or
//! mismatched cell yields the type's zero-value sentinel rather than an
//! error.

use bigdecimal::BigDecimal;
use chrono::{NaiveDateTime, TimeDelta};
use uuid::Uuid;

/// One decoded cell of a database row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Database null, or an unsupported column type.
    Null,
    /// 16-bit signed integer (smallint).
    Int16(i16),
    /// 32-bit signed integer (int).
    Int32(i32),
    /// 64-bit signed integer (bigint).
    Int64(i64),
    /// Single byte (tinyint).
    Byte(u8),
    /// Identifier / UUID (uniqueidentifier).
    Identifier(Uuid),
    /// Fixed-point decimal.
    Decimal(BigDecimal),
    /// Calendar timestamp (datetime).
    Timestamp(NaiveDateTime),
    /// Time-of-day duration (time).
    Duration(TimeDelta),
    /// Variable text (varchar / nvarchar).
    Text(String),
    /// Raw byte sequence (varbinary / binary).
    Bytes(Vec<u8>),
    /// Boolean flag (bit).
    Bool(bool),
}

impl Value {
    /// Returns true for a null cell.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Cell as a 16-bit integer, `i16::MIN` on null or mismatch.
    #[must_use]
    pub const fn as_i16(&self) -> i16 {
        match self {
            Self::Int16(v) => *v,
            _ => i16::MIN,
        }
    }

    /// Cell as a 32-bit integer, `i32::MIN` on null or mismatch.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        match self {
            Self::Int32(v) => *v,
            _ => i32::MIN,
        }
    }

    /// Cell as a 64-bit integer, `i64::MIN` on null or mismatch.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        match self {
            Self::Int64(v) => *v,
            _ => i64::MIN,
        }
    }

    /// Cell as a single byte, `0` on null or mismatch.
    #[must_use]
    pub const fn as_byte(&self) -> u8 {
        match self {
            Self::Byte(v) => *v,
            _ => 0,
        }
    }

    /// Cell as an identifier, the nil UUID on null or mismatch.
    #[must_use]
    pub const fn as_identifier(&self) -> Uuid {
        match self {
            Self::Identifier(v) => *v,
            _ => Uuid::nil(),
        }
    }

    /// Cell as a decimal, zero on null or mismatch.
    #[must_use]
    pub fn as_decimal(&self) -> BigDecimal {
        match self {
            Self::Decimal(v) => v.clone(),
            _ => BigDecimal::from(0),
        }
    }

    /// Cell as a timestamp, `NaiveDateTime::MIN` on null or mismatch.
    #[must_use]
    pub const fn as_timestamp(&self) -> NaiveDateTime {
        match self {
            Self::Timestamp(v) => *v,
            _ => NaiveDateTime::MIN,
        }
    }

    /// Cell as a time-of-day duration, `TimeDelta::MIN` on null or mismatch.
    #[must_use]
    pub fn as_duration(&self) -> TimeDelta {
        match self {
            Self::Duration(v) => *v,
            _ => TimeDelta::MIN,
        }
    }

    /// Cell as text, empty on null or mismatch.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(v) => v,
            _ => "",
        }
    }

    /// Cell as raw bytes, empty on null or mismatch.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(v) => v,
            _ => &[],
        }
    }

    /// Cell as a boolean, `false` on null or mismatch.
    #[must_use]
    pub const fn as_bool(&self) -> bool {
        match self {
            Self::Bool(v) => *v,
            _ => false,
        }
    }
}
