//! SQL rendering of table definitions.
//!
//! Produces `CREATE TABLE` and `CREATE INDEX` statements that hand the
//! declared shape to a relational store. Every statement is idempotent
//! (`IF NOT EXISTS`); nothing here alters an existing table.

use crate::catalog::{ColumnDef, SchemaRegistry, TableDef};
use crate::error::Error;
use tracing::debug;

/// Quote an identifier.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn quote_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(", ")
}

fn column_sql(column: &ColumnDef) -> String {
    let mut sql = format!("{} {}", quote_ident(&column.name), column.column_type);
    if !column.nullable {
        sql.push_str(" NOT NULL");
    }
    if let Some(default) = &column.default {
        sql.push_str(" DEFAULT ");
        sql.push_str(&default.sql_literal());
    }
    sql
}

/// Render the `CREATE TABLE` statement for one table.
pub fn create_table(table: &TableDef) -> String {
    let mut parts: Vec<String> = table.columns.iter().map(column_sql).collect();

    let key = table.primary_key_names();
    if !key.is_empty() {
        parts.push(format!("PRIMARY KEY ({})", quote_list(key)));
    }

    for column in table.foreign_key_columns() {
        for target in &column.foreign_keys {
            parts.push(format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                quote_ident(&column.name),
                quote_ident(&target.table),
                quote_ident(&target.column)
            ));
        }
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n);",
        quote_ident(&table.table_name),
        parts.join(",\n    ")
    )
}

/// Render the `CREATE INDEX` statements for one table.
pub fn create_indexes(table: &TableDef) -> Vec<String> {
    table
        .all_indexes()
        .iter()
        .map(|index| {
            format!(
                "CREATE {}INDEX IF NOT EXISTS {} ON {} ({});",
                if index.unique { "UNIQUE " } else { "" },
                quote_ident(&index.name),
                quote_ident(&table.table_name),
                quote_list(index.columns.iter().map(String::as_str))
            )
        })
        .collect()
}

/// Render every statement needed to create the registry, referenced tables
/// first and each table followed by its indexes.
pub fn schema_statements(registry: &SchemaRegistry) -> Result<Vec<String>, Error> {
    let mut statements = Vec::new();
    for table in registry.dependency_order()? {
        statements.push(create_table(table));
        statements.extend(create_indexes(table));
    }
    debug!(statements = statements.len(), "rendered schema statements");
    Ok(statements)
}

/// Render the whole registry as one script.
pub fn schema_script(registry: &SchemaRegistry) -> Result<String, Error> {
    Ok(schema_statements(registry)?.join("\n\n"))
}
