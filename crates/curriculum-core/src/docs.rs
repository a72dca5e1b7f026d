//! Documentation synthesis.
//!
//! Produces a reStructuredText-style description for every registered table:
//! its database name, its own description, and one entry per column. Foreign
//! key columns are documented with a cross-reference to the entity they point
//! at instead of their comment.
//!
//! Synthesis is a pure function of the registry. The registry is never
//! modified, so running it again yields the same output.

use crate::catalog::{ColumnDef, SchemaRegistry, TableDef};
use crate::error::Error;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{debug, info};

/// Marker prepended to primary-key column notes.
pub const PK_MARKER: &str = "**[PK]**";

/// Marker opening a foreign-key cross-reference note.
pub const FK_MARKER: &str = "**[FK]**";

/// Placeholder for absent descriptions.
pub const DESCRIPTION_MISSING: &str = "Description missing";

/// Order in which columns are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnOrder {
    /// Order in which the columns were declared.
    #[default]
    Declaration,
    /// Sorted by column name.
    Alphabetical,
}

/// Options controlling the synthesized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocOptions {
    /// Column listing order.
    pub column_order: ColumnOrder,
    /// Spaces per indentation level.
    pub indent: usize,
    /// Prefix placed before entity names in cross-references
    /// (e.g. a module path for a documentation tool).
    pub xref_prefix: String,
}

impl DocOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self {
            column_order: ColumnOrder::Declaration,
            indent: 4,
            xref_prefix: String::new(),
        }
    }

    /// Set the column order.
    pub fn with_column_order(mut self, order: ColumnOrder) -> Self {
        self.column_order = order;
        self
    }

    /// Set the indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the cross-reference prefix.
    pub fn with_xref_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.xref_prefix = prefix.into();
        self
    }
}

impl Default for DocOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Synthesized documentation keyed by entity identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableDocs {
    docs: IndexMap<String, String>,
}

impl TableDocs {
    /// Documentation for one entity.
    pub fn get(&self, entity: &str) -> Option<&str> {
        self.docs.get(entity).map(String::as_str)
    }

    /// Iterate `(entity, doc)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.docs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of documented entities.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if nothing was documented.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Synthesize documentation for every registered table.
///
/// Fails with [`Error::UnresolvedReference`] if any foreign key names a table
/// that no entity is registered for; no partial output is returned.
pub fn synthesize(registry: &SchemaRegistry, options: &DocOptions) -> Result<TableDocs, Error> {
    let mut docs = IndexMap::with_capacity(registry.len());
    for table in registry.tables() {
        let doc = table_doc(registry, table, options)?;
        debug!(entity = %table.entity, bytes = doc.len(), "synthesized table documentation");
        docs.insert(table.entity.clone(), doc);
    }
    info!(tables = docs.len(), "documentation synthesized");
    Ok(TableDocs { docs })
}

/// Render the documentation block for a single table.
pub fn table_doc(
    registry: &SchemaRegistry,
    table: &TableDef,
    options: &DocOptions,
) -> Result<String, Error> {
    let s = " ".repeat(options.indent);
    let mut out = String::new();

    let _ = writeln!(out, "{s}:Name in DB: ``{}``", table.table_name);
    out.push('\n');
    let description = table.description.as_deref().unwrap_or(DESCRIPTION_MISSING);
    for line in description.trim().lines() {
        let line = line.trim_end();
        if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "{s}{line}");
        }
    }
    out.push('\n');
    let _ = write!(out, "{s}Attributes\n{s}{}", "-".repeat(10));

    for column in ordered_columns(table, options.column_order) {
        let note = column_note(registry, table, column, options)?;
        let _ = write!(out, "\n{s}{} : {}\n{s}{s}{note}", column.name, column.column_type);
    }
    Ok(out)
}

/// The note documenting one column.
///
/// Foreign-key columns get a cross-reference to the first declared target;
/// other columns get their comment. Key columns are prefixed with
/// [`PK_MARKER`].
pub fn column_note(
    registry: &SchemaRegistry,
    table: &TableDef,
    column: &ColumnDef,
    options: &DocOptions,
) -> Result<String, Error> {
    let note = match column.primary_reference() {
        Some(target) => {
            let entity = registry.entity_for_table(&target.table).ok_or_else(|| {
                Error::UnresolvedReference {
                    entity: table.entity.clone(),
                    column: column.name.clone(),
                    table: target.table.clone(),
                }
            })?;
            format!("{FK_MARKER} See `{}{}`.", options.xref_prefix, entity)
        }
        None => column
            .comment
            .clone()
            .unwrap_or_else(|| DESCRIPTION_MISSING.to_string()),
    };

    if column.primary_key {
        Ok(format!("{PK_MARKER} {note}"))
    } else {
        Ok(note)
    }
}

fn ordered_columns(table: &TableDef, order: ColumnOrder) -> Vec<&ColumnDef> {
    let mut columns: Vec<&ColumnDef> = table.columns.iter().filter(|c| !c.is_internal()).collect();
    if order == ColumnOrder::Alphabetical {
        columns.sort_by(|a, b| a.name.cmp(&b.name));
    }
    columns
}
