//! Result cursor and connection traits implemented by database clients.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{NaiveDateTime, TimeDelta};
use uuid::Uuid;

use super::command::Command;

/// Fault type raised by client implementations.
///
/// Kept as a boxed error so the original fault survives as the cause chain
/// of the wrapped query execution error.
pub type ClientError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Connection-close policy attached to a cursor at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorBehavior {
    /// The caller closes the connection itself.
    Default,
    /// The connection is closed when the cursor is disposed.
    CloseConnection,
}

/// One column description from a result set schema.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    /// Column name as returned by the database.
    pub name: String,
    /// Declared type name, resolvable via [`crate::types::SqlType::from_name`].
    pub type_name: String,
    /// Zero-based ordinal position.
    pub ordinal: usize,
}

/// Per-record cell access shared by the sync and async cursors.
///
/// Getters address the current record by ordinal and are only called for
/// cells the materializer has already established as non-null.
pub trait CellReader {
    /// Schema of the current result set; empty when the result set has no
    /// typed columns.
    fn schema(&self) -> &[ColumnDescriptor];

    /// True if the cell at the ordinal is database-null.
    fn is_null(&self, ordinal: usize) -> ClientResult<bool>;

    /// Read a 16-bit integer cell.
    fn get_i16(&self, ordinal: usize) -> ClientResult<i16>;

    /// Read a 32-bit integer cell.
    fn get_i32(&self, ordinal: usize) -> ClientResult<i32>;

    /// Read a 64-bit integer cell.
    fn get_i64(&self, ordinal: usize) -> ClientResult<i64>;

    /// Read a single-byte cell.
    fn get_byte(&self, ordinal: usize) -> ClientResult<u8>;

    /// Read an identifier cell.
    fn get_identifier(&self, ordinal: usize) -> ClientResult<Uuid>;

    /// Read a fixed-point decimal cell.
    fn get_decimal(&self, ordinal: usize) -> ClientResult<BigDecimal>;

    /// Read a calendar timestamp cell.
    fn get_timestamp(&self, ordinal: usize) -> ClientResult<NaiveDateTime>;

    /// Read a time-of-day duration cell.
    fn get_duration(&self, ordinal: usize) -> ClientResult<TimeDelta>;

    /// Read a text cell.
    fn get_string(&self, ordinal: usize) -> ClientResult<String>;

    /// Read a boolean cell.
    fn get_bool(&self, ordinal: usize) -> ClientResult<bool>;

    /// Chunked binary read.
    ///
    /// With `buffer` set to `None` this is a length probe returning the
    /// total cell size; with a buffer it copies from `offset` and returns
    /// the number of bytes written.
    fn read_bytes(
        &self,
        ordinal: usize,
        offset: u64,
        buffer: Option<&mut [u8]>,
    ) -> ClientResult<u64>;
}

/// Synchronous result cursor over one or more result sets.
pub trait ResultCursor: CellReader {
    /// Advance to the next record of the current result set.
    fn advance(&mut self) -> ClientResult<bool>;

    /// Advance to the next result set, refreshing [`CellReader::schema`].
    fn next_result(&mut self) -> ClientResult<bool>;
}

/// Asynchronous result cursor; cell getters stay synchronous since they
/// address the already-fetched current record.
#[async_trait]
pub trait AsyncResultCursor: CellReader + Send {
    /// Advance to the next record of the current result set.
    async fn advance(&mut self) -> ClientResult<bool>;

    /// Advance to the next result set, refreshing [`CellReader::schema`].
    async fn next_result(&mut self) -> ClientResult<bool>;
}

/// Synchronous database connection.
pub trait Connection {
    /// Open the connection.
    fn open(&mut self) -> ClientResult<()>;

    /// Close the connection; idempotent.
    fn close(&mut self);

    /// Execute a command and return a cursor over its result sets.
    fn execute_reader(
        &mut self,
        command: &Command,
        behavior: CursorBehavior,
    ) -> ClientResult<Box<dyn ResultCursor + '_>>;

    /// Execute a non-query command, returning the affected-row count and
    /// writing post-execution values back into the command's output
    /// parameters.
    fn execute_non_query(&mut self, command: &mut Command) -> ClientResult<u64>;
}

/// Asynchronous database connection.
#[async_trait]
pub trait AsyncConnection: Send {
    /// Open the connection.
    async fn open(&mut self) -> ClientResult<()>;

    /// Close the connection; idempotent.
    async fn close(&mut self);

    /// Execute a command and return a cursor over its result sets.
    async fn execute_reader(
        &mut self,
        command: &Command,
        behavior: CursorBehavior,
    ) -> ClientResult<Box<dyn AsyncResultCursor + '_>>;

    /// Execute a non-query command, returning the affected-row count and
    /// writing post-execution values back into the command's output
    /// parameters.
    async fn execute_non_query(&mut self, command: &mut Command) -> ClientResult<u64>;
}
