//! Abstractions over the external database client.
//!
//! The materializer consumes these seams rather than any concrete driver:
//! a [`Command`] carrying text, kind and parameters, and the
//! [`Connection`] / [`ResultCursor`] pair (with async counterparts) that
//! execute it and expose the result stream.

pub mod command;
pub mod cursor;

pub use command::{Command, CommandKind, Direction, Parameter};
pub use cursor::{
    AsyncConnection, AsyncResultCursor, CellReader, ClientError, ClientResult, ColumnDescriptor,
    Connection, CursorBehavior, ResultCursor,
};
