//! Core error types.

use thiserror::Error;

/// Schema definition errors.
///
/// All of these indicate a broken model and are raised while the registry is
/// built or documented, never while rows are written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two tables share an entity identifier.
    #[error("entity `{0}` is already registered")]
    DuplicateEntity(String),

    /// Two entities map to the same table.
    #[error("table `{table}` is already registered by entity `{entity}`")]
    DuplicateTable {
        /// Table name.
        table: String,
        /// Entity that registered it first.
        entity: String,
    },

    /// Lookup of an entity that is not registered.
    #[error("unknown entity `{0}`")]
    UnknownEntity(String),

    /// A key or index names a column the table does not have.
    #[error("entity `{entity}` has no column `{column}`")]
    UnknownColumn {
        /// Entity identifier.
        entity: String,
        /// Column name.
        column: String,
    },

    /// A foreign key points at a table no entity is registered for.
    #[error("column `{entity}.{column}` references unregistered table `{table}`")]
    UnresolvedReference {
        /// Entity owning the column.
        entity: String,
        /// Column carrying the foreign key.
        column: String,
        /// Referenced table name.
        table: String,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Any other structural problem in a definition.
    #[error("invalid definition for `{entity}`: {reason}")]
    InvalidDefinition {
        /// Entity identifier.
        entity: String,
        /// What is wrong.
        reason: String,
    },
}
