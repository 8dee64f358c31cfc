use std::env::var;
use std::path::PathBuf;

use serde::Deserialize;

use crate::{Dialect, Error, Result};

pub const OUTPUT_FOLDER: &str = "./Models";

pub fn get_var_database_url() -> Option<String> {
    var("DATABASE_URL").ok()
}

pub fn get_var_schema() -> Option<String> {
    var("MODELGEN_SCHEMA").ok()
}

pub fn get_var_output_folder() -> Option<PathBuf> {
    var("MODELGEN_OUTPUT").ok().map(PathBuf::from)
}

/// Partial settings from one source (flags, environment, or a config file).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: Option<String>,
    pub schema: Option<String>,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: get_var_database_url(),
            schema: get_var_schema(),
            output: get_var_output_folder(),
        }
    }

    /// Fill whatever is unset in `self` from `fallback`.
    pub fn or(self, fallback: Config) -> Config {
        Config {
            database_url: self.database_url.or(fallback.database_url),
            schema: self.schema.or(fallback.schema),
            output: self.output.or(fallback.output),
        }
    }

    pub fn resolve(self) -> Result<Settings> {
        let database_url = self.database_url.ok_or(Error::MissingDatabaseUrl)?;
        let dialect = Dialect::from_url(&database_url)?;
        Ok(Settings {
            schema: self.schema.unwrap_or_else(|| dialect.default_schema().to_string()),
            output: self.output.unwrap_or_else(|| PathBuf::from(OUTPUT_FOLDER)),
            database_url,
            dialect,
        })
    }
}

/// Everything a run needs, fully resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub dialect: Dialect,
    pub schema: String,
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_precedence() {
        let flags = Config {
            schema: Some("sales".to_string()),
            ..Config::default()
        };
        let file = Config {
            database_url: Some("postgres://localhost/shop".to_string()),
            schema: Some("public".to_string()),
            output: Some(PathBuf::from("gen")),
        };
        let settings = flags.or(Config::default()).or(file).resolve().unwrap();
        assert_eq!(settings.schema, "sales");
        assert_eq!(settings.database_url, "postgres://localhost/shop");
        assert_eq!(settings.output, PathBuf::from("gen"));
        assert_eq!(settings.dialect, Dialect::Postgres);
    }

    #[test]
    fn test_defaults() {
        let config = Config {
            database_url: Some("sqlite://shop.db".to_string()),
            ..Config::default()
        };
        let settings = config.resolve().unwrap();
        assert_eq!(settings.schema, "main");
        assert_eq!(settings.output, PathBuf::from("./Models"));
    }

    #[test]
    fn test_missing_url() {
        assert_matches!(Config::default().resolve(), Err(Error::MissingDatabaseUrl));
    }
}
