//! Error hierarchy for querylogic.
//!
//! One canonical error struct wrapping a `pub(crate)` kind enum, with
//! `is_xxx()` predicate methods rather than an exposed `ErrorKind` so new
//! failure modes can be added without breaking changes.

use thiserror::Error;

use crate::client::ClientError;

/// Root error type for querylogic.
///
/// Every fault raised while opening a connection, executing a command or
/// reading a cursor is re-wrapped at the operation boundary into the single
/// execution kind, carrying the original command text and the underlying
/// fault as a cause chain. Lookup errors (missing column, missing relation
/// key, empty data map) are distinct kinds that signal programmer error and
/// are never wrapped.
#[derive(Error, Debug)]
#[error("{kind}")]
pub struct QueryError {
    #[source]
    kind: ErrorKind,
}

/// Internal error classification.
#[derive(Error, Debug)]
#[non_exhaustive]
pub(crate) enum ErrorKind {
    /// Fault raised by the underlying client during command execution.
    #[error("query execution error: command: {command}: {message}")]
    Execution {
        command: String,
        message: String,
        #[source]
        source: ClientError,
    },

    /// A row was indexed with a column name that is not present.
    #[error("column not found: {column}")]
    ColumnNotFound { column: String },

    /// A data map was accessed before any result set was appended.
    #[error("data map holds no result sets")]
    NoResultSets,

    /// A relationship index was read with a parent key never added.
    #[error("relation not found for key: {key}")]
    RelationNotFound { key: String },

    /// A binding helper was given a command it does not support.
    #[error("unsupported command: {message}")]
    UnsupportedCommand { message: String },

    /// A parallelized task failed or panicked.
    #[error("parallel task failed: {message}")]
    Task { message: String },
}

impl QueryError {
    /// Create the wrapped execution error for a client fault.
    #[must_use]
    pub fn execution(command: impl Into<String>, source: ClientError) -> Self {
        let message = source.to_string();
        Self {
            kind: ErrorKind::Execution {
                command: command.into(),
                message,
                source,
            },
        }
    }

    /// Create error for a missing row column.
    #[must_use]
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::ColumnNotFound {
                column: column.into(),
            },
        }
    }

    /// Create error for access to an empty data map.
    #[must_use]
    pub const fn no_result_sets() -> Self {
        Self {
            kind: ErrorKind::NoResultSets,
        }
    }

    /// Create error for a missing relationship key.
    #[must_use]
    pub fn relation_not_found(key: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::RelationNotFound { key: key.into() },
        }
    }

    /// Create error for an unsupported command.
    #[must_use]
    pub fn unsupported_command(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::UnsupportedCommand {
                message: message.into(),
            },
        }
    }

    /// Create error for a failed parallel task.
    #[must_use]
    pub fn task(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Task {
                message: message.into(),
            },
        }
    }

    /// Returns true if this is a wrapped execution error.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self.kind, ErrorKind::Execution { .. })
    }

    /// Returns true if this is a missing-column error.
    #[must_use]
    pub const fn is_column_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::ColumnNotFound { .. })
    }

    /// Returns true if this is an empty-data-map error.
    #[must_use]
    pub const fn is_no_result_sets(&self) -> bool {
        matches!(self.kind, ErrorKind::NoResultSets)
    }

    /// Returns true if this is a missing-relation error.
    #[must_use]
    pub const fn is_relation_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::RelationNotFound { .. })
    }

    /// Returns true if this is an unsupported-command error.
    #[must_use]
    pub const fn is_unsupported_command(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedCommand { .. })
    }

    /// Returns true if this is a parallel-task error.
    #[must_use]
    pub const fn is_task(&self) -> bool {
        matches!(self.kind, ErrorKind::Task { .. })
    }

    /// Command text carried by an execution error, if any.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Execution { command, .. } => Some(command),
            _ => None,
        }
    }
}

/// Result type alias for querylogic operations.
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_carries_command() {
        let source: ClientError = "login failed".into();
        let err = QueryError::execution("exec dbo.GetUsers", source);
        assert!(err.is_execution());
        assert_eq!(err.command(), Some("exec dbo.GetUsers"));
        let display = err.to_string();
        assert!(display.contains("exec dbo.GetUsers"));
        assert!(display.contains("login failed"));
    }

    #[test]
    fn test_execution_error_preserves_source() {
        use std::error::Error as _;
        let source: ClientError = "socket closed".into();
        let err = QueryError::execution("select 1", source);
        // The original client fault stays reachable through the standard
        // cause chain.
        let mut cause: Option<&dyn std::error::Error> = err.source();
        let mut reached_client_fault = false;
        while let Some(current) = cause {
            if current.to_string() == "socket closed" {
                reached_client_fault = true;
            }
            cause = current.source();
        }
        assert!(reached_client_fault);
    }

    #[test]
    fn test_column_not_found() {
        let err = QueryError::column_not_found("user_id");
        assert!(err.is_column_not_found());
        assert!(!err.is_execution());
        assert!(err.to_string().contains("user_id"));
    }

    #[test]
    fn test_relation_not_found() {
        let err = QueryError::relation_not_found("42");
        assert!(err.is_relation_not_found());
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_no_result_sets() {
        let err = QueryError::no_result_sets();
        assert!(err.is_no_result_sets());
    }

    #[test]
    fn test_unsupported_command() {
        let err = QueryError::unsupported_command("output parameters require a stored procedure");
        assert!(err.is_unsupported_command());
    }
}
