use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SavingsConfig;
use crate::core::CalculatorError;

pub const CONFIG_FILE_NAME: &str = ".savingscalc.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// A parsed configuration file and where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: SavingsConfig,
}

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML document and check its values.
pub fn parse_and_validate_config(contents: &str) -> Result<SavingsConfig, CalculatorError> {
    let config = toml::from_str::<SavingsConfig>(contents)
        .map_err(|e| CalculatorError::config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;
    config.base_input(None)?;
    config.default_format()?;
    Ok(config)
}

/// `Ok(None)` when the file does not exist.
pub(crate) fn try_load_config_from_path(
    config_path: &Path,
) -> Result<Option<LoadedConfig>, CalculatorError> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => return handle_read_error(config_path, &e).map(|()| None),
    };

    let config = parse_and_validate_config(&contents).map_err(|e| attach_path(e, config_path))?;
    tracing::debug!("Loaded config from {}", config_path.display());
    Ok(Some(LoadedConfig {
        path: config_path.to_path_buf(),
        config,
    }))
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) -> Result<(), CalculatorError> {
    if error.kind() == std::io::ErrorKind::NotFound {
        return Ok(());
    }
    tracing::warn!(
        "Failed to read config file {}: {}",
        config_path.display(),
        error
    );
    Err(CalculatorError::config_with_path(
        format!("Failed to read config file: {error}"),
        config_path,
    ))
}

fn attach_path(error: CalculatorError, config_path: &Path) -> CalculatorError {
    match error {
        CalculatorError::Config { message, path: None } => {
            CalculatorError::config_with_path(message, config_path)
        }
        other => other,
    }
}

/// `start`, its parent, its grandparent, ... up to `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest `.savingscalc.toml` at or above `start`.
pub fn discover_config(start: &Path) -> Result<Option<LoadedConfig>, CalculatorError> {
    for dir in directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH) {
        if let Some(loaded) = try_load_config_from_path(&dir.join(CONFIG_FILE_NAME))? {
            return Ok(Some(loaded));
        }
    }
    tracing::debug!(
        "No config found after checking {} directories. Using built-in defaults.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(None)
}

/// Search upwards from the current directory.
pub fn load_config() -> Result<Option<LoadedConfig>, CalculatorError> {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("Failed to get current directory: {}. Using built-in defaults.", e);
            return Ok(None);
        }
    };
    discover_config(&current)
}

/// Load an explicitly named file. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, CalculatorError> {
    try_load_config_from_path(path)?.ok_or_else(|| {
        CalculatorError::config_with_path("Config file not found", path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_valid_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [defaults]
            region = "gcc"
            time_saved = 2
            time_unit = "hours"

            [output]
            default_format = "json"
        "#})
        .unwrap();

        let defaults = config.defaults.unwrap();
        assert_eq!(defaults.region.as_deref(), Some("gcc"));
        assert_eq!(defaults.time_saved, Some(2.0));
        assert_eq!(
            config.output.unwrap().default_format.as_deref(),
            Some("json")
        );
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_and_validate_config("invalid toml [[ content").unwrap_err();
        assert!(err.to_string().contains("Failed to parse .savingscalc.toml"));
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        let err = parse_and_validate_config(indoc! {r#"
            [defaults]
            region = "narnia"
        "#})
        .unwrap_err();
        assert!(matches!(err, CalculatorError::Config { .. }));
        assert!(err.to_string().contains("narnia"));
    }

    #[test]
    fn test_directory_ancestors_depth_limit() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
            ]
        );
    }

    #[test]
    fn test_directory_ancestors_stop_at_root() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a"), 10).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/")]);
    }

    #[test]
    fn test_discover_config_in_parent() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("team").join("project");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[defaults]\nregion = \"asia\"\n",
        )
        .unwrap();

        let loaded = discover_config(&nested).unwrap().unwrap();
        assert_eq!(loaded.path, root.path().join(CONFIG_FILE_NAME));
        assert_eq!(
            loaded.config.defaults.unwrap().region.as_deref(),
            Some("asia")
        );
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("nope.toml");
        let err = load_config_from(&path).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::config_with_path("Config file not found", &path)
        );
    }

    #[test]
    fn test_parse_error_carries_path() {
        let root = TempDir::new().unwrap();
        let path = root.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[defaults]\ncost_of_ai = -5\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        let CalculatorError::Config { path: Some(found), .. } = err else {
            panic!("expected a configuration error with a path");
        };
        assert_eq!(found, path);
    }
}
