//! The curriculum model's table definitions.
//!
//! Tables are grouped by [`Namespace`]: curriculum and costing entities,
//! audit history, and the student-records mirror.

pub mod audit;
pub mod curriculum;
pub mod srs;

use crate::catalog::{Namespace, SchemaRegistry, TableDef};
use crate::error::Error;

/// Table definitions of one namespace.
pub fn tables(namespace: Namespace) -> Vec<TableDef> {
    match namespace {
        Namespace::Core => curriculum::tables(),
        Namespace::Audit => audit::tables(),
        Namespace::StudentRecords => srs::tables(),
    }
}

/// Build the registry holding every table, namespace by namespace.
pub fn registry() -> Result<SchemaRegistry, Error> {
    let mut registry = SchemaRegistry::new();
    for namespace in Namespace::ALL {
        registry.extend(tables(namespace))?;
    }
    Ok(registry)
}
