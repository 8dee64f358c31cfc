use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use modelgen_core::{Generator, SqlxSource};
use tracing::debug;

use crate::command::Connect;
use crate::util::create_runtime;

#[derive(Parser, Debug)]
pub struct Generate {
    #[clap(flatten)]
    connect: Connect,

    /// Directory the models are written to [default: ./Models]
    #[clap(long, short)]
    output: Option<PathBuf>,
}

impl Generate {
    pub fn run(self) -> Result<()> {
        let settings = self.connect.settings(self.output)?;
        debug!(dialect = %settings.dialect, schema = %settings.schema, "Resolved settings");
        let runtime = create_runtime()?;

        let generator = Generator::new(SqlxSource::from_settings(&settings));
        let report = runtime
            .block_on(generator.generate_models(&settings.output))
            .with_context(|| format!("Failed to reflect {} database", settings.dialect))?;

        eprintln!(
            "{} C# models generated in {}: {} written, {} failed",
            "SUCCESS".green(),
            settings.output.display(),
            report.succeeded(),
            report.failed()
        );
        Ok(())
    }
}
