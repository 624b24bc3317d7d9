//! Asynchronous materializer operations.
//!
//! Suspension points sit at connection open, per-record advance and
//! result-set advance. Result sets are always read strictly sequentially
//! and awaited, since they come in order from a single cursor. The
//! multi-result-set path hands connection closure to the cursor via
//! [`CursorBehavior::CloseConnection`]; the other paths close the
//! connection on every exit.

use crate::client::{
    AsyncConnection, AsyncResultCursor, CellReader, ClientResult, Command, CursorBehavior,
};
use crate::datamap::DataMap;
use crate::error::{QueryError, Result};
use crate::row::{Row, Rows};
use crate::schema::Metadata;

use super::{materialize_row, non_query_row};

/// Asynchronously execute a command returning a single result set.
pub async fn query_data_async(
    connection: &mut dyn AsyncConnection,
    command: &Command,
) -> Result<Rows> {
    let outcome = read_single(connection, command).await;
    connection.close().await;
    outcome.map_err(|source| QueryError::execution(command.text(), source))
}

/// Asynchronously execute a command returning one or more result sets.
///
/// The connection stays open until the cursor itself signals closure.
pub async fn query_data_set_async(
    connection: &mut dyn AsyncConnection,
    command: &Command,
) -> Result<DataMap> {
    read_all(connection, command)
        .await
        .map_err(|source| QueryError::execution(command.text(), source))
}

/// Asynchronously execute a non-query command; see
/// [`super::modify_data`] for the result row shape.
pub async fn modify_data_async(
    connection: &mut dyn AsyncConnection,
    command: &mut Command,
) -> Result<Row> {
    let output_names = command.output_parameter_names();
    let outcome = run_non_query(connection, command).await;
    connection.close().await;
    let affected = outcome.map_err(|source| QueryError::execution(command.text(), source))?;
    Ok(non_query_row(command, affected, &output_names))
}

async fn run_non_query(
    connection: &mut dyn AsyncConnection,
    command: &mut Command,
) -> ClientResult<u64> {
    connection.open().await?;
    connection.execute_non_query(command).await
}

async fn read_single(
    connection: &mut dyn AsyncConnection,
    command: &Command,
) -> ClientResult<Rows> {
    connection.open().await?;
    let mut cursor = connection
        .execute_reader(command, CursorBehavior::Default)
        .await?;
    read_result_set(cursor.as_mut()).await
}

async fn read_all(
    connection: &mut dyn AsyncConnection,
    command: &Command,
) -> ClientResult<DataMap> {
    connection.open().await?;
    let mut cursor = connection
        .execute_reader(command, CursorBehavior::CloseConnection)
        .await?;
    let mut map = DataMap::new();
    map.push(read_result_set(cursor.as_mut()).await?);
    while cursor.next_result().await? {
        map.push(read_result_set(cursor.as_mut()).await?);
    }
    tracing::debug!(result_sets = map.len(), "materialized data map");
    Ok(map)
}

async fn read_result_set(cursor: &mut (dyn AsyncResultCursor + '_)) -> ClientResult<Rows> {
    let metadata = Metadata::from_schema(cursor.schema());
    let mut rows = Rows::new();
    while cursor.advance().await? {
        let reader: &dyn CellReader = &*cursor;
        rows.push(materialize_row(reader, &metadata)?);
    }
    tracing::debug!(rows = rows.len(), columns = metadata.len(), "materialized result set");
    Ok(rows)
}
