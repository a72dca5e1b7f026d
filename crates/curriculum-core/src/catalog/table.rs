//! Table definitions.

use super::column::ColumnDef;
use serde::Serialize;
use std::fmt;

/// A table definition, keyed by its entity identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDef {
    /// Entity identifier (unique within the registry).
    pub entity: String,
    /// Name of the table in the database.
    pub table_name: String,
    /// Namespace the table belongs to.
    pub namespace: Namespace,
    /// Human-readable description of the entity.
    pub description: Option<String>,
    /// Column definitions, in declaration order.
    pub columns: Vec<ColumnDef>,
    /// Multi-column index definitions.
    pub indexes: Vec<IndexDef>,
    /// How rows of this table are written.
    pub lifecycle: Lifecycle,
}

/// Grouping of tables by purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Namespace {
    /// Curriculum and costing entities.
    Core,
    /// Append-only history of mutable entities.
    Audit,
    /// Mirror of the external student-records system.
    StudentRecords,
}

/// Write discipline of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lifecycle {
    /// Rows are inserted, updated and deleted by the application.
    #[default]
    Mutable,
    /// Rows are only ever inserted.
    AppendOnly,
    /// Rows are never written by this system.
    ReadOnly,
}

/// A named index over one or more columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDef {
    /// Index name.
    pub name: String,
    /// Indexed columns, in order.
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
}

impl Namespace {
    /// All namespaces, in load order.
    pub const ALL: [Namespace; 3] = [
        Namespace::Core,
        Namespace::Audit,
        Namespace::StudentRecords,
    ];

    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Core => "core",
            Namespace::Audit => "audit",
            Namespace::StudentRecords => "student-records",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Lifecycle {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Mutable => "mutable",
            Lifecycle::AppendOnly => "append-only",
            Lifecycle::ReadOnly => "read-only",
        }
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IndexDef {
    /// Create a non-unique index.
    pub fn new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            unique: false,
        }
    }
}

impl TableDef {
    /// Create a new table definition in the core namespace.
    pub fn new(entity: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            table_name: table_name.into(),
            namespace: Namespace::Core,
            description: None,
            columns: Vec::new(),
            indexes: Vec::new(),
            lifecycle: Lifecycle::default(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a column to the table.
    pub fn with_column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns.
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = ColumnDef>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Add a multi-column index.
    pub fn with_index(mut self, index: IndexDef) -> Self {
        self.indexes.push(index);
        self
    }

    /// Move the table into a namespace.
    pub fn in_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    /// Set the write discipline.
    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns forming the primary key, in declaration order.
    pub fn primary_key(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    /// Names of the primary-key columns.
    pub fn primary_key_names(&self) -> Vec<&str> {
        self.primary_key().map(|c| c.name.as_str()).collect()
    }

    /// Check if the table has a composite primary key.
    pub fn has_composite_key(&self) -> bool {
        self.primary_key().count() > 1
    }

    /// Columns with at least one foreign-key target.
    pub fn foreign_key_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.is_foreign_key())
    }

    /// All indexes: declared multi-column ones, then single-column flags.
    pub fn all_indexes(&self) -> Vec<IndexDef> {
        let mut indexes = self.indexes.clone();
        indexes.extend(
            self.columns
                .iter()
                .filter(|c| c.indexed)
                .map(|c| IndexDef::new(format!("ix_{}_{}", self.table_name, c.name), [&c.name])),
        );
        indexes
    }

    /// Check if the application may update or delete rows.
    pub fn is_mutable(&self) -> bool {
        self.lifecycle == Lifecycle::Mutable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColumnType;

    fn cost_week() -> TableDef {
        TableDef::new("CostWeek", "cost_week")
            .with_description("Which academic weeks that a cost runs.")
            .with_column(
                ColumnDef::new("cost_id", ColumnType::Integer)
                    .primary_key()
                    .references("cost", "cost_id"),
            )
            .with_column(ColumnDef::new("acad_week", ColumnType::Integer).primary_key())
    }

    #[test]
    fn test_table_builder() {
        let table = cost_week();

        assert_eq!(table.entity, "CostWeek");
        assert_eq!(table.table_name, "cost_week");
        assert_eq!(table.namespace, Namespace::Core);
        assert_eq!(table.columns.len(), 2);
        assert!(table.is_mutable());
    }

    #[test]
    fn test_composite_primary_key() {
        let table = cost_week();

        assert!(table.has_composite_key());
        assert_eq!(table.primary_key_names(), vec!["cost_id", "acad_week"]);
        assert_eq!(table.foreign_key_columns().count(), 1);
    }

    #[test]
    fn test_get_column() {
        let table = cost_week();

        assert!(table.get_column("acad_week").is_some());
        assert!(table.get_column("nonexistent").is_none());
    }

    #[test]
    fn test_all_indexes() {
        let table = TableDef::new("CGroupConfig", "cgroup_config")
            .with_column(
                ColumnDef::new("cgroup_id", ColumnType::Integer)
                    .primary_key()
                    .with_index(),
            )
            .with_index(IndexDef::new("IX_pair", ["cgroup_id", "component_id"]));

        let indexes = table.all_indexes();
        assert_eq!(indexes.len(), 2);
        assert_eq!(indexes[0].name, "IX_pair");
        assert_eq!(indexes[1].name, "ix_cgroup_config_cgroup_id");
        assert_eq!(indexes[1].columns, vec!["cgroup_id"]);
    }

    #[test]
    fn test_namespace_names() {
        assert_eq!(Namespace::StudentRecords.to_string(), "student-records");
        assert_eq!(Namespace::ALL.len(), 3);
        assert_eq!(Lifecycle::AppendOnly.to_string(), "append-only");
    }
}
