//! Output formatters for command results.

use crate::commands::CheckReport;
use crate::error::CliError;
use clap::ValueEnum;
use comfy_table::{Cell, Table};
use curriculum_core::TableDef;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
    /// Plain text
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter {
    /// Format a table listing.
    fn format_tables(&self, tables: &[&TableDef]) -> Result<String, CliError>;

    /// Format synthesized documentation as `(entity, doc)` pairs.
    fn format_docs(&self, docs: &[(&str, &str)]) -> Result<String, CliError>;

    /// Format rendered DDL statements.
    fn format_ddl(&self, statements: &[String]) -> Result<String, CliError>;

    /// Format the outcome of applying the schema.
    fn format_check(&self, report: &CheckReport) -> Result<String, CliError>;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Text => Box::new(TextFormatter),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_tables(&self, tables: &[&TableDef]) -> Result<String, CliError> {
        let mut table = Table::new();
        table.set_header(vec![
            "Entity",
            "Table",
            "Namespace",
            "Lifecycle",
            "Columns",
            "Primary key",
            "References",
        ]);

        for def in tables {
            table.add_row(vec![
                Cell::new(&def.entity),
                Cell::new(&def.table_name),
                Cell::new(def.namespace),
                Cell::new(def.lifecycle),
                Cell::new(def.columns.len()),
                Cell::new(def.primary_key_names().join(", ")),
                Cell::new(referenced_tables(def).join(", ")),
            ]);
        }

        Ok(format!("{}\n{} table(s)", table, tables.len()))
    }

    fn format_docs(&self, docs: &[(&str, &str)]) -> Result<String, CliError> {
        let mut table = Table::new();
        table.set_header(vec!["Entity", "Documentation"]);

        for (entity, doc) in docs {
            table.add_row(vec![Cell::new(entity), Cell::new(doc)]);
        }

        Ok(table.to_string())
    }

    fn format_ddl(&self, statements: &[String]) -> Result<String, CliError> {
        Ok(statements.join("\n\n"))
    }

    fn format_check(&self, report: &CheckReport) -> Result<String, CliError> {
        let mut table = Table::new();
        table.set_header(vec!["Check", "Result"]);
        table.add_row(vec![Cell::new("Database"), Cell::new(&report.database)]);
        table.add_row(vec![Cell::new("Tables"), Cell::new(report.tables)]);
        table.add_row(vec![Cell::new("Indexes"), Cell::new(report.indexes)]);
        table.add_row(vec![Cell::new("Statements"), Cell::new(report.statements)]);

        Ok(table.to_string())
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_tables(&self, tables: &[&TableDef]) -> Result<String, CliError> {
        let rows: Vec<serde_json::Value> = tables
            .iter()
            .map(|def| {
                serde_json::json!({
                    "entity": def.entity,
                    "table": def.table_name,
                    "namespace": def.namespace.as_str(),
                    "lifecycle": def.lifecycle.as_str(),
                    "columns": def.columns.len(),
                    "primary_key": def.primary_key_names(),
                    "references": referenced_tables(def),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&rows)?)
    }

    fn format_docs(&self, docs: &[(&str, &str)]) -> Result<String, CliError> {
        let mut obj = serde_json::Map::new();
        for (entity, doc) in docs {
            obj.insert(entity.to_string(), serde_json::Value::String(doc.to_string()));
        }

        Ok(serde_json::to_string_pretty(&serde_json::Value::Object(obj))?)
    }

    fn format_ddl(&self, statements: &[String]) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "statements": statements
        }))?)
    }

    fn format_check(&self, report: &CheckReport) -> Result<String, CliError> {
        Ok(serde_json::json!({
            "database": report.database,
            "tables": report.tables,
            "indexes": report.indexes,
            "statements": report.statements,
        })
        .to_string())
    }
}

/// Plain-text formatter.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_tables(&self, tables: &[&TableDef]) -> Result<String, CliError> {
        let lines: Vec<String> = tables
            .iter()
            .map(|def| format!("{}\t{}\t{}", def.entity, def.table_name, def.namespace))
            .collect();
        Ok(lines.join("\n"))
    }

    fn format_docs(&self, docs: &[(&str, &str)]) -> Result<String, CliError> {
        let sections: Vec<String> = docs
            .iter()
            .map(|(entity, doc)| format!("{}\n{}\n\n{}", entity, "=".repeat(entity.len()), doc))
            .collect();
        Ok(sections.join("\n\n"))
    }

    fn format_ddl(&self, statements: &[String]) -> Result<String, CliError> {
        Ok(statements.join("\n\n"))
    }

    fn format_check(&self, report: &CheckReport) -> Result<String, CliError> {
        Ok(format!(
            "ok: {} tables, {} indexes created in {} ({} statements)",
            report.tables, report.indexes, report.database, report.statements
        ))
    }
}

/// Distinct tables a definition's foreign keys point at, in column order.
fn referenced_tables(def: &TableDef) -> Vec<&str> {
    let mut targets: Vec<&str> = Vec::new();
    for column in def.foreign_key_columns() {
        for target in &column.foreign_keys {
            if !targets.contains(&target.table.as_str()) {
                targets.push(&target.table);
            }
        }
    }
    targets
}
