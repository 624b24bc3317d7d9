//! Literal quoting table for callers building literal SQL fragments.
//!
//! Maps each supported type name, plus the database-native spellings, to the
//! formatting template it needs in a conditional clause. The materializer
//! never consults this table.

use crate::types::SqlType;

/// Formatting template for one literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralFormat {
    /// Rendered bare: `{0}`.
    Bare,
    /// Rendered single-quoted: `'{0}'`.
    Quoted,
    /// Rendered as national text: `N'{0}'`.
    NationalQuoted,
}

impl LiteralFormat {
    /// Apply the template to a rendered value.
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Bare => value.to_owned(),
            Self::Quoted => format!("'{value}'"),
            Self::NationalQuoted => format!("N'{value}'"),
        }
    }

    /// The raw template string.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Bare => "{0}",
            Self::Quoted => "'{0}'",
            Self::NationalQuoted => "N'{0}'",
        }
    }
}

/// Look up the literal format for a declared type name.
///
/// National-text quoting applies only to the `nvarchar`/`nchar` spellings;
/// every other textual or temporal type is single-quoted. Returns `None`
/// for names outside the table.
#[must_use]
pub fn literal_format(type_name: &str) -> Option<LiteralFormat> {
    // The national spellings are distinguished before the type fold, since
    // SqlType collapses them into Text.
    match type_name.to_ascii_lowercase().as_str() {
        "nvarchar" | "nchar" => return Some(LiteralFormat::NationalQuoted),
        _ => {}
    }

    match SqlType::from_name(type_name) {
        SqlType::Int16 | SqlType::Int32 | SqlType::Int64 | SqlType::Byte | SqlType::Decimal
        | SqlType::Bool => Some(LiteralFormat::Bare),
        SqlType::Identifier | SqlType::Timestamp | SqlType::Time | SqlType::Text => {
            Some(LiteralFormat::Quoted)
        }
        SqlType::Bytes | SqlType::Unknown => None,
    }
}

/// Render a value as a SQL literal fragment for the given type name.
#[must_use]
pub fn format_literal(type_name: &str, value: &str) -> Option<String> {
    literal_format(type_name).map(|f| f.apply(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_types() {
        assert_eq!(literal_format("int"), Some(LiteralFormat::Bare));
        assert_eq!(literal_format("smallint"), Some(LiteralFormat::Bare));
        assert_eq!(literal_format("tinyint"), Some(LiteralFormat::Bare));
        assert_eq!(literal_format("decimal"), Some(LiteralFormat::Bare));
        assert_eq!(literal_format("bit"), Some(LiteralFormat::Bare));
    }

    #[test]
    fn test_quoted_types() {
        assert_eq!(literal_format("uniqueidentifier"), Some(LiteralFormat::Quoted));
        assert_eq!(literal_format("varchar"), Some(LiteralFormat::Quoted));
        assert_eq!(literal_format("datetime"), Some(LiteralFormat::Quoted));
        assert_eq!(literal_format("time"), Some(LiteralFormat::Quoted));
    }

    #[test]
    fn test_national_quoting() {
        assert_eq!(literal_format("nvarchar"), Some(LiteralFormat::NationalQuoted));
        assert_eq!(literal_format("NVARCHAR"), Some(LiteralFormat::NationalQuoted));
        assert_eq!(format_literal("nvarchar", "café"), Some("N'café'".into()));
    }

    #[test]
    fn test_unknown_type_has_no_format() {
        assert_eq!(literal_format("geography"), None);
        assert_eq!(literal_format("varbinary"), None);
    }

    #[test]
    fn test_apply_templates() {
        assert_eq!(LiteralFormat::Bare.apply("42"), "42");
        assert_eq!(LiteralFormat::Quoted.apply("abc"), "'abc'");
        assert_eq!(LiteralFormat::NationalQuoted.template(), "N'{0}'");
    }
}
