//! The loaded curriculum model: registry plus synthesized documentation.

use std::sync::OnceLock;

use tracing::info;

use crate::catalog::{SchemaRegistry, TableDef};
use crate::docs::{synthesize, DocOptions, TableDocs};
use crate::error::Error;
use crate::schema;

static SHARED: OnceLock<CurriculumModel> = OnceLock::new();

/// Immutable view of every table definition and its documentation.
#[derive(Debug, Clone)]
pub struct CurriculumModel {
    registry: SchemaRegistry,
    docs: TableDocs,
    options: DocOptions,
}

impl CurriculumModel {
    /// Build, validate and document the model with default options.
    pub fn load() -> Result<Self, Error> {
        Self::load_with(DocOptions::default())
    }

    /// Build, validate and document the model.
    ///
    /// Any definition error aborts the load; no partially documented model
    /// is ever returned.
    pub fn load_with(options: DocOptions) -> Result<Self, Error> {
        Self::from_registry(schema::registry()?, options)
    }

    /// Validate and document an already-built registry.
    pub fn from_registry(registry: SchemaRegistry, options: DocOptions) -> Result<Self, Error> {
        registry.validate()?;
        let docs = synthesize(&registry, &options)?;
        info!(
            tables = registry.len(),
            documented = docs.len(),
            "curriculum model loaded"
        );
        Ok(Self {
            registry,
            docs,
            options,
        })
    }

    /// The process-wide model, loaded on first use with default options.
    ///
    /// Documentation is synthesized once; later calls return the cached
    /// model.
    pub fn shared() -> Result<&'static CurriculumModel, Error> {
        if let Some(model) = SHARED.get() {
            return Ok(model);
        }
        let model = Self::load()?;
        Ok(SHARED.get_or_init(|| model))
    }

    /// The table registry.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// All synthesized documentation.
    pub fn docs(&self) -> &TableDocs {
        &self.docs
    }

    /// The options the documentation was synthesized with.
    pub fn options(&self) -> &DocOptions {
        &self.options
    }

    /// Get a table by entity identifier.
    pub fn table(&self, entity: &str) -> Option<&TableDef> {
        self.registry.get(entity)
    }

    /// Documentation for one entity.
    pub fn doc(&self, entity: &str) -> Result<&str, Error> {
        self.docs
            .get(entity)
            .ok_or_else(|| Error::UnknownEntity(entity.to_string()))
    }
}
