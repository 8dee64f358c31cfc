use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::render::{render_model, MODEL_EXTENSION};
use crate::{ConnectionContext, Error, Result, SchemaSource, TableDescriptor};

/// A table that could not be generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableFailure {
    pub table: String,
    pub message: String,
}

impl fmt::Display for TableFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error getting schema for table {}: {}", self.table, self.message)
    }
}

/// Outcome of a run. Failures of individual tables do not fail the run, they end up here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub generated: Vec<PathBuf>,
    pub failures: Vec<TableFailure>,
}

impl GenerationReport {
    pub fn succeeded(&self) -> usize {
        self.generated.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

pub struct Generator<S> {
    source: S,
}

impl<S: SchemaSource> Generator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Tables of the active catalog. Errors here abort the run.
    pub async fn tables(&self) -> Result<(ConnectionContext, Vec<TableDescriptor>)> {
        let listing = self.source.read_catalog().await?;
        let total = listing.tables.len();
        let (context, tables) = listing.into_active_tables();
        if tables.len() != total {
            debug!(
                catalog = %context.catalog,
                skipped = total - tables.len(),
                "Skipped tables from other catalogs"
            );
        }
        Ok((context, tables))
    }

    /// Write one `<table>.cs` per table into `output`, creating the directory if needed.
    /// Existing files are overwritten.
    pub async fn generate_models(&self, output: &Path) -> Result<GenerationReport> {
        fs::create_dir_all(output)?;
        let (context, tables) = self.tables().await?;
        info!(count = tables.len(), catalog = %context.catalog, "Generating models");

        let mut report = GenerationReport::default();
        for table in &tables {
            match self.generate_table(&context, table, output).await {
                Ok(path) => {
                    debug!("{}: Generated model", path.display());
                    report.generated.push(path);
                }
                Err(e) => {
                    let failure = TableFailure {
                        table: table.name.clone(),
                        message: e.to_string(),
                    };
                    error!("{failure}");
                    report.failures.push(failure);
                }
            }
        }
        Ok(report)
    }

    async fn generate_table(&self, context: &ConnectionContext, table: &TableDescriptor, output: &Path) -> Result<PathBuf> {
        if !is_file_stem(&table.name) {
            return Err(Error::InvalidTableName(table.name.clone()));
        }
        let columns = self.source.describe_table(context, table).await?;
        let code = render_model(&table.name, &columns, self.source.dialect())?;
        let path = output.join(format!("{}.{}", table.name, MODEL_EXTENSION));
        fs::write(&path, code)?;
        Ok(path)
    }
}

/// The model file must land directly in the output directory.
fn is_file_stem(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(&['/', '\\', '\0'][..])
}
