use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use modelgen_core::config::{Config, Settings};

mod generate;
mod info;

pub use generate::*;
pub use info::*;

/// Where to connect, shared by every command.
#[derive(Args, Debug, Default)]
pub struct Connect {
    /// Database url [default: $DATABASE_URL]
    #[clap(long)]
    url: Option<String>,

    /// Database schema name [default: public for postgres, main for sqlite]
    #[clap(long)]
    schema: Option<String>,

    /// Config file to use instead of searching for .modelgen.toml
    #[clap(long)]
    config: Option<PathBuf>,
}

impl Connect {
    /// Flags win over the environment, which wins over the config file.
    pub fn settings(&self, output: Option<PathBuf>) -> Result<Settings> {
        let flags = Config {
            database_url: self.url.clone(),
            schema: self.schema.clone(),
            output,
        };
        let file = match &self.config {
            Some(path) => crate::config::read(path)?,
            None => crate::config::load_config()?,
        };
        let settings = flags.or(Config::from_env()).or(file).resolve()?;
        Ok(settings)
    }
}
