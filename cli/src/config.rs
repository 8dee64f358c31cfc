use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use modelgen_core::config::Config;
use tracing::debug;

static CONFIG_REL_PATHS: [&str; 2] = [".modelgen/config.toml", ".modelgen.toml"];

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("."), PathBuf::from("..")];
    paths.extend(dirs::config_dir());
    paths.extend(dirs::home_dir());
    paths
}

pub fn load_config() -> Result<Config> {
    find_config(&search_paths())
}

/// First config file found wins. No file at all is fine.
pub fn find_config(search_paths: &[PathBuf]) -> Result<Config> {
    for p in search_paths {
        for rel_path in &CONFIG_REL_PATHS {
            let path = p.join(rel_path);
            if path.exists() {
                debug!("{}: Using config", path.display());
                return read(&path);
            }
        }
    }
    Ok(Config::default())
}

pub fn read(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let buf = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config = toml::from_str(&buf).with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join(".modelgen.toml"), "schema = \"second\"\n").unwrap();
        fs::create_dir(first.path().join(".modelgen")).unwrap();
        fs::write(first.path().join(".modelgen").join("config.toml"), "schema = \"nested\"\n").unwrap();
        fs::write(first.path().join(".modelgen.toml"), "schema = \"flat\"\n").unwrap();

        let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let config = find_config(&paths).unwrap();
        assert_eq!(config.schema.as_deref(), Some("nested"));

        let config = find_config(&paths[1..]).unwrap();
        assert_eq!(config.schema.as_deref(), Some("second"));
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn test_no_config() {
        let empty = tempfile::tempdir().unwrap();
        let config = find_config(&[empty.path().to_path_buf()]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "schema = [1, 2").unwrap();
        assert!(read(&path).is_err());

        fs::write(&path, "database_url = \"postgres://localhost/shop\"\noutput = \"Generated\"\n").unwrap();
        let config = read(&path).unwrap();
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/shop"));
        assert_eq!(config.output, Some(PathBuf::from("Generated")));
    }
}
