//! Curriculum Core - table catalog, schema definitions and documentation.
//!
//! This crate declares the relational model of the curriculum-costing and
//! timetabling system and documents it. Persistence is left to the store
//! that consumes these definitions.

pub mod catalog;
pub mod docs;
pub mod error;
pub mod model;
pub mod schema;
pub mod sql;

pub use catalog::{
    ColumnDef, ColumnType, CrossSystemRef, DefaultValue, ForeignKeyRef, IndexDef, Lifecycle,
    Namespace, Reference, SchemaRegistry, TableDef,
};
pub use docs::{ColumnOrder, DocOptions, TableDocs};
pub use error::Error;
pub use model::CurriculumModel;
