//! Command abstraction and parameter binding helpers.

use crate::error::{QueryError, Result};
use crate::types::Value;

/// How the command text is interpreted by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Text names a stored procedure.
    StoredProcedure,
    /// Text is a literal SQL statement.
    Statement,
}

/// Parameter direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Supplied by the caller.
    Input,
    /// Written back by the database after execution.
    Output,
}

/// One typed command parameter.
///
/// Names carry the `@` prefix added by the binding helpers. After a
/// non-query execution the client writes post-execution values back into
/// output parameters.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// Prefixed parameter name.
    pub name: String,
    /// Current value; for output parameters, the default before execution.
    pub value: Value,
    /// In or out.
    pub direction: Direction,
    /// Marker for structured / table-valued parameters.
    pub structured: bool,
}

/// A configured database command: text, kind and typed parameter list.
///
/// The connection is supplied separately to the materializer operations;
/// the command itself is plain data.
#[derive(Debug, Clone)]
pub struct Command {
    text: String,
    kind: CommandKind,
    parameters: Vec<Parameter>,
}

impl Command {
    /// New stored-procedure command.
    #[must_use]
    pub fn procedure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CommandKind::StoredProcedure,
            parameters: Vec::new(),
        }
    }

    /// New literal-statement command.
    #[must_use]
    pub fn statement(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CommandKind::Statement,
            parameters: Vec::new(),
        }
    }

    /// Command text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Command kind.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Bound parameters, in binding order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Mutable view of the bound parameters, for clients writing back
    /// output values.
    pub fn parameters_mut(&mut self) -> &mut [Parameter] {
        &mut self.parameters
    }

    /// Bind an input parameter. The name is prefixed with `@`.
    pub fn add_parameter(&mut self, name: &str, value: Value) -> &mut Self {
        self.parameters.push(Parameter {
            name: format!("@{name}"),
            value,
            direction: Direction::Input,
            structured: false,
        });
        self
    }

    /// Bind a structured (table-valued) input parameter.
    ///
    /// Structured parameters are only supported on stored-procedure
    /// commands; binding one to a literal statement fails immediately.
    pub fn structured_parameter(&mut self, name: &str, value: Value) -> Result<&mut Self> {
        if self.kind != CommandKind::StoredProcedure {
            return Err(QueryError::unsupported_command(
                "structured parameters require a stored-procedure command",
            ));
        }
        self.parameters.push(Parameter {
            name: format!("@{name}"),
            value,
            direction: Direction::Input,
            structured: true,
        });
        Ok(self)
    }

    /// Declare an output parameter with a default value used to carry the
    /// post-execution result.
    ///
    /// Output parameters are only supported on stored-procedure commands;
    /// declaring one on a literal statement fails immediately.
    pub fn out_parameter(&mut self, name: &str, default: Value) -> Result<&mut Self> {
        if self.kind != CommandKind::StoredProcedure {
            return Err(QueryError::unsupported_command(
                "output parameters require a stored-procedure command",
            ));
        }
        self.parameters.push(Parameter {
            name: format!("@{name}"),
            value: default,
            direction: Direction::Output,
            structured: false,
        });
        Ok(self)
    }

    /// Names of all declared output parameters, prefixed.
    #[must_use]
    pub fn output_parameter_names(&self) -> Vec<String> {
        self.parameters
            .iter()
            .filter(|p| p.direction == Direction::Output)
            .map(|p| p.name.clone())
            .collect()
    }

    /// Look up a bound parameter by its prefixed name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
