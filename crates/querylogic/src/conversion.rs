//! Cell decoding, dispatched by resolved column type.
//!
//! One decode step per cell: the materializer handles database-nulls before
//! dispatch, so decoders only ever see non-null cells. Types outside the
//! closed set decode to a null cell, never an error.

use crate::client::{CellReader, ClientResult};
use crate::row::Row;
use crate::schema::Column;
use crate::types::{SqlType, Value};

/// Decode the non-null cell described by `column` from the reader's current
/// record into the destination row.
pub fn decode_cell(reader: &dyn CellReader, row: &mut Row, column: &Column) -> ClientResult<()> {
    let ordinal = column.ordinal;
    let value = match column.data_type {
        SqlType::Int16 => Value::Int16(reader.get_i16(ordinal)?),
        SqlType::Int32 => Value::Int32(reader.get_i32(ordinal)?),
        SqlType::Int64 => Value::Int64(reader.get_i64(ordinal)?),
        SqlType::Byte => Value::Byte(reader.get_byte(ordinal)?),
        SqlType::Identifier => Value::Identifier(reader.get_identifier(ordinal)?),
        SqlType::Decimal => Value::Decimal(reader.get_decimal(ordinal)?),
        SqlType::Timestamp => Value::Timestamp(reader.get_timestamp(ordinal)?),
        SqlType::Time => Value::Duration(reader.get_duration(ordinal)?),
        SqlType::Text => Value::Text(reader.get_string(ordinal)?),
        SqlType::Bytes => Value::Bytes(read_binary(reader, ordinal)?),
        SqlType::Bool => Value::Bool(reader.get_bool(ordinal)?),
        SqlType::Unknown => {
            tracing::debug!(column = %column.name, "unsupported column type, storing null");
            Value::Null
        }
    };
    row.add(&column.name, value);
    Ok(())
}

/// Read a binary cell: probe the length with a zero-length read, read into
/// an exact-size buffer, then strip the trailing zero padding fixed-length
/// binary columns carry.
fn read_binary(reader: &dyn CellReader, ordinal: usize) -> ClientResult<Vec<u8>> {
    let size = reader.read_bytes(ordinal, 0, None)?;
    let mut buffer = vec![0_u8; size as usize];
    reader.read_bytes(ordinal, 0, Some(&mut buffer))?;
    while buffer.last() == Some(&0) {
        buffer.pop();
    }
    Ok(buffer)
}
