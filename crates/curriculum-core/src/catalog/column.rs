//! Column definitions for tables.

use super::types::ColumnType;
use serde::Serialize;

/// A column definition within a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Column data type.
    pub column_type: ColumnType,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Whether the column participates in the primary key.
    pub primary_key: bool,
    /// Server-side default value.
    pub default: Option<DefaultValue>,
    /// Foreign-key targets, in declaration order.
    pub foreign_keys: Vec<ForeignKeyRef>,
    /// Reference into another system that the store does not enforce.
    pub cross_system: Option<CrossSystemRef>,
    /// Free-text description of the column.
    pub comment: Option<String>,
    /// Whether a single-column index is declared.
    pub indexed: bool,
}

/// Server-side default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
    /// Current timestamp (evaluated at insert time).
    CurrentTimestamp,
}

/// A foreign-key target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeyRef {
    /// Referenced table name.
    pub table: String,
    /// Referenced column name.
    pub column: String,
}

/// A reference to data held by an external system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossSystemRef {
    /// Name of the external system.
    pub system: String,
    /// What the column points at in that system.
    pub target: String,
}

impl DefaultValue {
    /// Render as a SQL literal.
    pub fn sql_literal(&self) -> String {
        match self {
            DefaultValue::Null => "NULL".to_string(),
            DefaultValue::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            DefaultValue::Int(i) => i.to_string(),
            DefaultValue::Float(f) => format!("{:?}", f),
            DefaultValue::String(s) => format!("'{}'", s.replace('\'', "''")),
            DefaultValue::CurrentTimestamp => "CURRENT_TIMESTAMP".to_string(),
        }
    }
}

impl ForeignKeyRef {
    /// Create a reference to `table.column`.
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

impl std::fmt::Display for ForeignKeyRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

impl ColumnDef {
    /// Create a new nullable column.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
            primary_key: false,
            default: None,
            foreign_keys: Vec::new(),
            cross_system: None,
            comment: None,
            indexed: false,
        }
    }

    /// Mark as part of the primary key. Key columns are never nullable.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Mark as NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Add a foreign-key target.
    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.foreign_keys.push(ForeignKeyRef::new(table, column));
        self
    }

    /// Declare an unenforced reference into an external system.
    pub fn cross_system(mut self, system: impl Into<String>, target: impl Into<String>) -> Self {
        self.cross_system = Some(CrossSystemRef {
            system: system.into(),
            target: target.into(),
        });
        self
    }

    /// Set the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Mark as indexed.
    pub fn with_index(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Check if this column has a default value.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Check if this column references another table.
    pub fn is_foreign_key(&self) -> bool {
        !self.foreign_keys.is_empty()
    }

    /// The foreign-key target used for cross-referencing.
    ///
    /// When several targets are declared the first one wins.
    pub fn primary_reference(&self) -> Option<&ForeignKeyRef> {
        self.foreign_keys.first()
    }

    /// Names starting with an underscore are reserved for internal use.
    pub fn is_internal(&self) -> bool {
        self.name.starts_with('_')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_builder() {
        let column = ColumnDef::new("ratio", ColumnType::Integer)
            .not_null()
            .with_default(DefaultValue::Int(1))
            .comment("Relative enrolment weight.");

        assert_eq!(column.name, "ratio");
        assert!(!column.nullable);
        assert!(!column.primary_key);
        assert!(column.has_default());
        assert_eq!(column.comment.as_deref(), Some("Relative enrolment weight."));
    }

    #[test]
    fn test_primary_key_is_not_nullable() {
        let column = ColumnDef::new("cost_id", ColumnType::Integer).primary_key();

        assert!(column.primary_key);
        assert!(!column.nullable);
    }

    #[test]
    fn test_first_reference_wins() {
        let column = ColumnDef::new("hecos", ColumnType::Integer)
            .references("hecos_code", "hecos")
            .references("legacy_hecos", "code");

        assert!(column.is_foreign_key());
        assert_eq!(
            column.primary_reference(),
            Some(&ForeignKeyRef::new("hecos_code", "hecos"))
        );
    }

    #[test]
    fn test_cross_system_reference_is_not_a_foreign_key() {
        let column = ColumnDef::new("student_id", ColumnType::char(11))
            .primary_key()
            .cross_system("student records", "student list");

        assert!(!column.is_foreign_key());
        assert!(column.cross_system.is_some());
    }

    #[test]
    fn test_internal_names() {
        assert!(ColumnDef::new("_row_version", ColumnType::Integer).is_internal());
        assert!(!ColumnDef::new("row_version", ColumnType::Integer).is_internal());
    }

    #[test]
    fn test_default_literals() {
        assert_eq!(DefaultValue::Null.sql_literal(), "NULL");
        assert_eq!(DefaultValue::Bool(true).sql_literal(), "1");
        assert_eq!(DefaultValue::Bool(false).sql_literal(), "0");
        assert_eq!(DefaultValue::Int(1).sql_literal(), "1");
        assert_eq!(DefaultValue::Float(1.0).sql_literal(), "1.0");
        assert_eq!(DefaultValue::String("MISC".into()).sql_literal(), "'MISC'");
        assert_eq!(DefaultValue::String("it's".into()).sql_literal(), "'it''s'");
        assert_eq!(
            DefaultValue::CurrentTimestamp.sql_literal(),
            "CURRENT_TIMESTAMP"
        );
    }
}
