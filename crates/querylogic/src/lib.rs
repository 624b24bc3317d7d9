//! Result-set materialization and type resolution over an abstract SQL
//! client.
//!
//! querylogic sits above a relational database client: it executes
//! parameterized commands through the [`client`] seams, maps raw result
//! sets into generic row collections and converts typed column values
//! through a closed decoder over the supported logical types.
//!
//! # Example
//!
//! ```rust,ignore
//! use querylogic::{Command, Value, query};
//!
//! let mut command = Command::procedure("dbo.GetOrders");
//! command.add_parameter("customer_id", Value::Int32(42));
//!
//! let rows = query::query_data(&mut connection, &command)?;
//! for row in &rows {
//!     println!("{}", row.get("order_id")?.as_i64());
//! }
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod config;
pub mod conversion;
pub mod datamap;
pub mod error;
pub mod format;
pub mod m2m;
pub mod parallel;
pub mod query;
pub mod row;
pub mod schema;
pub mod types;

// Re-export main types for convenience
pub use client::{Command, CommandKind, Connection, Direction, Parameter};
pub use config::ConnectionConfig;
pub use datamap::DataMap;
pub use error::{QueryError, Result};
pub use format::{LiteralFormat, format_literal, literal_format};
pub use m2m::{ComplexM2M, M2MKey};
pub use parallel::try_parallelize;
pub use query::{
    ROWS_AFFECTED, modify_data, modify_data_async, query_data, query_data_async, query_data_set,
    query_data_set_async,
};
pub use row::{Row, Rows};
pub use schema::{Column, Metadata};
pub use types::{SqlType, Value};
