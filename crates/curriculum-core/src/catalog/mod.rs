//! Table catalog for the curriculum model.
//!
//! The catalog holds declarative metadata about tables, columns, keys and
//! indexes. Nothing here reads or writes rows.

mod column;
mod registry;
mod table;
mod types;

pub use column::{ColumnDef, CrossSystemRef, DefaultValue, ForeignKeyRef};
pub use registry::{Reference, SchemaRegistry};
pub use table::{IndexDef, Lifecycle, Namespace, TableDef};
pub use types::ColumnType;
