//! Schema registry - the explicit set of table definitions.

use super::{ColumnDef, ForeignKeyRef, Namespace, TableDef};
use crate::error::Error;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// All registered table definitions, keyed by entity identifier.
///
/// Iteration follows registration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaRegistry {
    /// Table definitions keyed by entity identifier.
    tables: IndexMap<String, TableDef>,
    /// Table name to entity identifier.
    #[serde(skip)]
    by_table: HashMap<String, String>,
}

/// A foreign-key edge between two registered tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference<'a> {
    /// Referencing table.
    pub from: &'a TableDef,
    /// Referencing column.
    pub column: &'a ColumnDef,
    /// Referenced table.
    pub to: &'a TableDef,
    /// Referenced column.
    pub target: &'a ForeignKeyRef,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table definition.
    ///
    /// Foreign keys are not resolved here, so tables may be registered in
    /// any order; see [`SchemaRegistry::validate`].
    pub fn register(&mut self, table: TableDef) -> Result<(), Error> {
        if self.tables.contains_key(&table.entity) {
            return Err(Error::DuplicateEntity(table.entity));
        }
        if let Some(existing) = self.by_table.get(&table.table_name) {
            return Err(Error::DuplicateTable {
                table: table.table_name,
                entity: existing.clone(),
            });
        }
        if table.columns.is_empty() {
            return Err(Error::InvalidDefinition {
                entity: table.entity,
                reason: "table has no columns".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for column in &table.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(Error::InvalidDefinition {
                    entity: table.entity.clone(),
                    reason: format!("column `{}` is declared twice", column.name),
                });
            }
        }

        debug!(
            entity = %table.entity,
            table = %table.table_name,
            namespace = %table.namespace,
            columns = table.columns.len(),
            "registered table"
        );

        self.by_table
            .insert(table.table_name.clone(), table.entity.clone());
        self.tables.insert(table.entity.clone(), table);
        Ok(())
    }

    /// Register a table and return the registry.
    pub fn with_table(mut self, table: TableDef) -> Result<Self, Error> {
        self.register(table)?;
        Ok(self)
    }

    /// Register several tables in order.
    pub fn extend(&mut self, tables: impl IntoIterator<Item = TableDef>) -> Result<(), Error> {
        for table in tables {
            self.register(table)?;
        }
        Ok(())
    }

    /// Get a table by entity identifier.
    pub fn get(&self, entity: &str) -> Option<&TableDef> {
        self.tables.get(entity)
    }

    /// Get a table by its database name.
    pub fn get_by_table(&self, table_name: &str) -> Option<&TableDef> {
        self.by_table
            .get(table_name)
            .and_then(|entity| self.tables.get(entity))
    }

    /// Resolve a table name to its entity identifier.
    pub fn entity_for_table(&self, table_name: &str) -> Option<&str> {
        self.by_table.get(table_name).map(String::as_str)
    }

    /// Resolve an entity identifier to its table name.
    pub fn table_for_entity(&self, entity: &str) -> Option<&str> {
        self.tables.get(entity).map(|t| t.table_name.as_str())
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// All tables in registration order.
    pub fn tables(&self) -> impl Iterator<Item = &TableDef> {
        self.tables.values()
    }

    /// Tables of one namespace in registration order.
    pub fn tables_in(&self, namespace: Namespace) -> impl Iterator<Item = &TableDef> {
        self.tables.values().filter(move |t| t.namespace == namespace)
    }

    /// List all entity identifiers.
    pub fn entity_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Serialize every table definition to JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(&self.tables)
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Foreign-key edges leaving an entity.
    pub fn references_from(&self, entity: &str) -> Result<Vec<Reference<'_>>, Error> {
        let from = self
            .get(entity)
            .ok_or_else(|| Error::UnknownEntity(entity.to_string()))?;

        let mut refs = Vec::new();
        for column in from.foreign_key_columns() {
            for target in &column.foreign_keys {
                let to = self.resolve(from, column, target)?;
                refs.push(Reference {
                    from,
                    column,
                    to,
                    target,
                });
            }
        }
        Ok(refs)
    }

    /// Foreign-key edges arriving at an entity.
    pub fn references_to(&self, entity: &str) -> Result<Vec<Reference<'_>>, Error> {
        let to = self
            .get(entity)
            .ok_or_else(|| Error::UnknownEntity(entity.to_string()))?;

        let mut refs = Vec::new();
        for from in self.tables() {
            for column in from.foreign_key_columns() {
                for target in column.foreign_keys.iter().filter(|t| t.table == to.table_name) {
                    refs.push(Reference {
                        from,
                        column,
                        to,
                        target,
                    });
                }
            }
        }
        Ok(refs)
    }

    /// Check every cross-table and in-table reference.
    pub fn validate(&self) -> Result<(), Error> {
        for table in self.tables() {
            for index in table.all_indexes() {
                for name in &index.columns {
                    if table.get_column(name).is_none() {
                        return Err(Error::UnknownColumn {
                            entity: table.entity.clone(),
                            column: name.clone(),
                        });
                    }
                }
            }

            for column in table.foreign_key_columns() {
                for target in &column.foreign_keys {
                    let referenced = self.resolve(table, column, target)?;
                    if referenced.get_column(&target.column).is_none() {
                        return Err(Error::UnknownColumn {
                            entity: referenced.entity.clone(),
                            column: target.column.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Tables ordered so that referenced tables come before referencing ones.
    ///
    /// Ties keep registration order. Tables caught in a reference cycle are
    /// appended in registration order.
    pub fn dependency_order(&self) -> Result<Vec<&TableDef>, Error> {
        let mut pending: IndexMap<&str, HashSet<&str>> = IndexMap::new();
        for table in self.tables() {
            let mut deps = HashSet::new();
            for column in table.foreign_key_columns() {
                for target in &column.foreign_keys {
                    let referenced = self.resolve(table, column, target)?;
                    if referenced.entity != table.entity {
                        deps.insert(referenced.entity.as_str());
                    }
                }
            }
            pending.insert(table.entity.as_str(), deps);
        }

        let mut ordered = Vec::with_capacity(pending.len());
        let mut placed: HashSet<&str> = HashSet::new();
        loop {
            let ready = pending
                .iter()
                .find(|(_, deps)| deps.iter().all(|d| placed.contains(d)))
                .map(|(entity, _)| *entity);
            match ready {
                Some(entity) => {
                    pending.shift_remove(entity);
                    placed.insert(entity);
                    ordered.push(&self.tables[entity]);
                }
                None => break,
            }
        }
        ordered.extend(pending.keys().map(|entity| &self.tables[*entity]));
        Ok(ordered)
    }

    fn resolve(
        &self,
        table: &TableDef,
        column: &ColumnDef,
        target: &ForeignKeyRef,
    ) -> Result<&TableDef, Error> {
        self.get_by_table(&target.table)
            .ok_or_else(|| Error::UnresolvedReference {
                entity: table.entity.clone(),
                column: column.name.clone(),
                table: target.table.clone(),
            })
    }
}
