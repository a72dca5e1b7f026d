//! Subcommand implementations.

use crate::error::CliError;
use crate::formatter::Formatter;
use curriculum_core::{sql, CurriculumModel, Namespace, TableDef};
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

/// Outcome of applying the schema to a database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Where the schema was applied.
    pub database: String,
    /// Tables present afterwards.
    pub tables: usize,
    /// Indexes present afterwards, excluding implicit key indexes.
    pub indexes: usize,
    /// Statements executed.
    pub statements: usize,
}

/// List registered tables, optionally restricted to one namespace.
pub fn tables(
    model: &CurriculumModel,
    namespace: Option<Namespace>,
    formatter: &dyn Formatter,
) -> Result<String, CliError> {
    let tables: Vec<&TableDef> = match namespace {
        Some(ns) => model.registry().tables_in(ns).collect(),
        None => model.registry().tables().collect(),
    };
    formatter.format_tables(&tables)
}

/// Print documentation for one entity, or for all of them.
pub fn docs(
    model: &CurriculumModel,
    entity: Option<&str>,
    formatter: &dyn Formatter,
) -> Result<String, CliError> {
    let docs: Vec<(&str, &str)> = match entity {
        Some(entity) => vec![(entity, model.doc(entity)?)],
        None => model.docs().iter().collect(),
    };
    formatter.format_docs(&docs)
}

/// Print the CREATE statements for the whole model.
pub fn ddl(model: &CurriculumModel, formatter: &dyn Formatter) -> Result<String, CliError> {
    let statements = sql::schema_statements(model.registry())?;
    formatter.format_ddl(&statements)
}

/// Apply the schema to an SQLite database and report what it holds.
pub fn check(
    model: &CurriculumModel,
    database: Option<&Path>,
    formatter: &dyn Formatter,
) -> Result<String, CliError> {
    let report = apply_schema(model, database)?;
    formatter.format_check(&report)
}

/// Create every table and index of the model in an SQLite database.
///
/// Foreign keys are enforced on the connection. The statements are
/// idempotent, so an existing database is left as it is.
pub fn apply_schema(
    model: &CurriculumModel,
    database: Option<&Path>,
) -> Result<CheckReport, CliError> {
    let conn = match database {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Connection::open(path)?
        }
        None => Connection::open_in_memory()?,
    };
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    let statements = sql::schema_statements(model.registry())?;
    let tx = conn.unchecked_transaction()?;
    for statement in &statements {
        tx.execute_batch(statement)?;
    }
    tx.commit()?;

    let tables = count_objects(&conn, "table")?;
    let indexes = count_objects(&conn, "index")?;
    let database = database
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ":memory:".to_string());

    info!(%database, tables, indexes, "schema applied");

    Ok(CheckReport {
        database,
        tables,
        indexes,
        statements: statements.len(),
    })
}

fn count_objects(conn: &Connection, kind: &str) -> Result<usize, CliError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name NOT LIKE 'sqlite_%'",
        [kind],
        |row| row.get(0),
    )?;
    Ok(usize::try_from(count).unwrap_or_default())
}
