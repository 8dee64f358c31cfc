use async_trait::async_trait;

use crate::{Dialect, Result};

/// A row of the engine's tables view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDescriptor {
    pub name: String,
    /// Database the table lives in. Linked or attached databases show up here with their own name.
    pub catalog: String,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>, catalog: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalog: catalog.into(),
        }
    }
}

/// Column metadata as reported by the driver for a zero-row select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Engine specific type name, e.g. `INT4` or `nvarchar`.
    pub native_type_name: String,
    pub is_nullable: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, native_type_name: impl Into<String>, is_nullable: bool) -> Self {
        Self {
            name: name.into(),
            native_type_name: native_type_name.into(),
            is_nullable,
        }
    }
}

/// Where the connection actually landed. The catalog is read from the live connection, never
/// taken from configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionContext {
    pub catalog: String,
    pub schema: String,
}

/// Unfiltered output of the tables view, together with the context it was read in.
#[derive(Clone, Debug)]
pub struct CatalogListing {
    pub context: ConnectionContext,
    pub tables: Vec<TableDescriptor>,
}

impl CatalogListing {
    /// Drop every table that is not in the active catalog.
    pub fn into_active_tables(self) -> (ConnectionContext, Vec<TableDescriptor>) {
        let tables = retain_active_catalog(self.tables, &self.context);
        (self.context, tables)
    }
}

pub fn retain_active_catalog(mut tables: Vec<TableDescriptor>, context: &ConnectionContext) -> Vec<TableDescriptor> {
    tables.retain(|t| t.catalog.eq_ignore_ascii_case(&context.catalog));
    tables
}

/// Something that can enumerate tables and describe their columns.
///
/// Implementations open a fresh connection for every call and release it before returning.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    fn dialect(&self) -> Dialect;

    async fn read_catalog(&self) -> Result<CatalogListing>;

    async fn describe_table(&self, context: &ConnectionContext, table: &TableDescriptor) -> Result<Vec<ColumnDescriptor>>;
}
