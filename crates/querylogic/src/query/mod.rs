//! Result materialization: drives a cursor and produces rows.
//!
//! Six operations are exposed: single result set, all result sets and
//! non-query execution, each in a synchronous and an asynchronous form.
//! Both forms produce identical content for the same data; they differ only
//! in where they suspend. Any client fault is re-wrapped at the operation
//! boundary into the single query execution error carrying the command
//! text; a fault partway through a multi-result-set read discards the whole
//! materialization.

mod async_exec;

pub use async_exec::{modify_data_async, query_data_async, query_data_set_async};

use crate::client::{CellReader, ClientResult, Command, Connection, CursorBehavior, ResultCursor};
use crate::conversion::decode_cell;
use crate::datamap::DataMap;
use crate::error::{QueryError, Result};
use crate::row::{Row, Rows};
use crate::schema::Metadata;
use crate::types::Value;

/// Row key under which non-query executions record the affected-row count.
pub const ROWS_AFFECTED: &str = "rows_affected";

/// Execute a command returning a single result set.
///
/// The connection is closed on every exit path.
pub fn query_data(connection: &mut dyn Connection, command: &Command) -> Result<Rows> {
    let outcome = read_single(connection, command);
    connection.close();
    outcome.map_err(|source| QueryError::execution(command.text(), source))
}

/// Execute a command returning one or more result sets.
///
/// The connection is closed on every exit path.
pub fn query_data_set(connection: &mut dyn Connection, command: &Command) -> Result<DataMap> {
    let outcome = read_all(connection, command);
    connection.close();
    outcome.map_err(|source| QueryError::execution(command.text(), source))
}

/// Execute a non-query command.
///
/// Returns a single row holding [`ROWS_AFFECTED`] plus, when the command
/// declared output parameters, each post-execution output value under its
/// name with the `@` prefix stripped. The connection is closed on every
/// exit path.
pub fn modify_data(connection: &mut dyn Connection, command: &mut Command) -> Result<Row> {
    let output_names = command.output_parameter_names();
    let outcome = run_non_query(connection, command);
    connection.close();
    let affected = outcome.map_err(|source| QueryError::execution(command.text(), source))?;
    Ok(non_query_row(command, affected, &output_names))
}

fn run_non_query(connection: &mut dyn Connection, command: &mut Command) -> ClientResult<u64> {
    connection.open()?;
    connection.execute_non_query(command)
}

fn read_single(connection: &mut dyn Connection, command: &Command) -> ClientResult<Rows> {
    connection.open()?;
    let mut cursor = connection.execute_reader(command, CursorBehavior::Default)?;
    read_result_set(cursor.as_mut())
}

fn read_all(connection: &mut dyn Connection, command: &Command) -> ClientResult<DataMap> {
    connection.open()?;
    let mut cursor = connection.execute_reader(command, CursorBehavior::Default)?;
    let mut map = DataMap::new();
    map.push(read_result_set(cursor.as_mut())?);
    while cursor.next_result()? {
        map.push(read_result_set(cursor.as_mut())?);
    }
    tracing::debug!(result_sets = map.len(), "materialized data map");
    Ok(map)
}

fn read_result_set(cursor: &mut dyn ResultCursor) -> ClientResult<Rows> {
    let metadata = Metadata::from_schema(cursor.schema());
    let mut rows = Rows::new();
    while cursor.advance()? {
        let reader: &dyn CellReader = &*cursor;
        rows.push(materialize_row(reader, &metadata)?);
    }
    tracing::debug!(rows = rows.len(), columns = metadata.len(), "materialized result set");
    Ok(rows)
}

/// Build one row from the reader's current record, decoding each column in
/// ordinal order. Database-nulls short-circuit to a null cell without
/// consulting the decoder.
pub(crate) fn materialize_row(reader: &dyn CellReader, metadata: &Metadata) -> ClientResult<Row> {
    let mut row = Row::new();
    for column in &metadata.columns {
        if reader.is_null(column.ordinal)? {
            row.add(&column.name, Value::Null);
        } else {
            decode_cell(reader, &mut row, column)?;
        }
    }
    Ok(row)
}

/// Assemble the non-query result row from the affected count and the
/// command's post-execution output parameters.
pub(crate) fn non_query_row(command: &Command, affected: u64, output_names: &[String]) -> Row {
    let mut row = Row::new();
    row.add(ROWS_AFFECTED, Value::Int64(affected as i64));
    for name in output_names {
        let value = command
            .parameter(name)
            .map_or(Value::Null, |parameter| parameter.value.clone());
        row.add(name.trim_start_matches('@'), value);
    }
    row
}
