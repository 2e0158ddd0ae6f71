use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::ProbeConfig;

/// Default location of the probe configuration, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./config.yml";

/// Reasons the probe configuration could not be loaded.
/// All of them are fatal: no probe is sent when one occurs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("stat {}: {source}", .path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is a directory, not a normal file", .path.display())]
    IsDirectory { path: PathBuf },

    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is empty", .path.display())]
    Empty { path: PathBuf },

    #[error("parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Check that `path` points at something that exists and is not a directory.
pub fn validate_config_path(path: &Path) -> Result<(), ConfigError> {
    let metadata = std::fs::metadata(path).map_err(|source| ConfigError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        return Err(ConfigError::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Load the probe configuration from a YAML file.
/// The path is validated first, then the file is read and parsed into a `ProbeConfig`.
/// Missing `sites` or `methods` keys yield empty lists; an empty document is rejected.
pub fn load_config(path: &Path) -> Result<ProbeConfig, ConfigError> {
    validate_config_path(path)?;

    let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if config_str.trim().is_empty() {
        return Err(ConfigError::Empty {
            path: path.to_path_buf(),
        });
    }

    let config: ProbeConfig =
        serde_yaml::from_str(&config_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!(
        "Loaded {} site(s) and {} method(s) from {}",
        config.sites.len(),
        config.methods.len(),
        path.display()
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(
            &dir,
            "sites:\n  - http://a.test\n  - http://b.test\nmethods:\n  - GET\n  - HEAD\n",
        );

        let config = load_config(&path).expect("config should load");
        assert_eq!(config.sites, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.methods, vec!["GET", "HEAD"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.yml");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");

        let err = validate_config_path(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IsDirectory { .. }));
        assert!(err.to_string().contains("is a directory, not a normal file"));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(&dir, "  \n\n");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(&dir, "sites: [http://a.test\nmethods: GET\n");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
