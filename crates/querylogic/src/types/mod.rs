//! Cell value and logical column type definitions.

pub mod sql_type;
pub mod value;

pub use sql_type::SqlType;
pub use value::Value;
