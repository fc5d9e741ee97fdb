use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::{ConfigError, GovroiConfig};

const CONFIG_FILE_NAME: &str = ".govroi.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string.
/// Out-of-range overrides reset the override sections to defaults with a
/// warning instead of failing the whole file.
pub fn parse_and_validate_config(contents: &str) -> Result<GovroiConfig, String> {
    let mut config = toml::from_str::<GovroiConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Err(e) = config.validate() {
        eprintln!("Warning: Invalid config value: {}. Using defaults.", e);
        config.costs = None;
        config.risk = None;
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<GovroiConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Load a config file the user named explicitly. Unlike ambient discovery,
/// a missing or malformed file here is an error, not a silent default.
pub fn load_config_file(path: &Path) -> Result<GovroiConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_and_validate_config(&contents).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Discover `.govroi.toml` in the current directory or its ancestors.
/// Fail-open: any problem yields the compiled-in defaults.
pub fn load_config() -> GovroiConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}", e);
            return GovroiConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Pure function to generate directory ancestors up to a depth limit
pub(crate) fn directory_ancestors(
    start: PathBuf,
    max_depth: usize,
) -> impl Iterator<Item = PathBuf> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_ancestors_walks_upward() {
        let ancestors: Vec<_> =
            directory_ancestors(PathBuf::from("/a/b/c"), 10).collect();
        assert_eq!(
            ancestors,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/"),
            ]
        );
    }

    #[test]
    fn directory_ancestors_respects_depth_limit() {
        let ancestors: Vec<_> =
            directory_ancestors(PathBuf::from("/a/b/c/d/e"), 2).collect();
        assert_eq!(ancestors.len(), 2);
    }
}
