use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use modelgen_core::typemap::map_type;
use modelgen_core::{Generator, SchemaSource, SqlxSource};

use crate::command::Connect;
use crate::util::create_runtime;

#[derive(Parser, Debug)]
pub struct Info {
    #[clap(flatten)]
    connect: Connect,

    /// Only show this table
    #[clap(long, short)]
    table: Option<String>,
}

impl Info {
    pub fn run(self) -> Result<()> {
        let settings = self.connect.settings(None)?;
        let runtime = create_runtime()?;
        let generator = Generator::new(SqlxSource::from_settings(&settings));

        let (context, mut tables) = runtime
            .block_on(generator.tables())
            .with_context(|| format!("Failed to read tables from {} database", settings.dialect))?;
        if let Some(name) = &self.table {
            tables.retain(|t| &t.name == name);
        }

        eprintln!("Catalog: {} (schema {})", context.catalog, context.schema);
        for table in &tables {
            eprintln!("Table: {}", table.name);
            let columns = match runtime.block_on(generator.source().describe_table(&context, table)) {
                Ok(columns) => columns,
                Err(e) => {
                    eprintln!("  {} {}", "ERROR".red(), e);
                    continue;
                }
            };
            for column in columns {
                let native = settings.dialect.normalize_type_name(&column.native_type_name);
                let ty = map_type(&native, column.is_nullable);
                let nullable = if column.is_nullable { " " } else { " NOT NULL " };
                eprintln!("  {}: {}{}=> {}", column.name, column.native_type_name, nullable, ty);
            }
        }
        Ok(())
    }
}
