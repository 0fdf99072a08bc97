//! Path handling for the Zellij plugin sandbox.

use std::path::{Path, PathBuf};

const DATA_DIR: &str = "/data";
const HOST_DIR: &str = "/host";
const TRACE_FILE_NAME: &str = "folio-otlp.json";

/// The plugin's private data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(DATA_DIR)
}

/// Where spans are exported.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use folio::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/cv/experience.toml"), "/host/cv/experience.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/x.toml"), "/data/x.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        HOST_DIR.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_DIR}/{rest}")
    } else {
        path.to_string()
    }
}

/// Resolves a path from the plugin configuration.
///
/// `~` expands to `/host`; other relative paths are taken relative to `/host`
/// as well, since that is where the user's working directory is mounted.
#[must_use]
pub fn resolve_config_path(path: &str) -> PathBuf {
    let expanded = PathBuf::from(expand_tilde(path.trim()));
    if expanded.is_absolute() {
        expanded
    } else {
        Path::new(HOST_DIR).join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(trace_file(), PathBuf::from("/data/folio-otlp.json"));
    }

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }

    #[test]
    fn config_paths_resolve_under_host() {
        assert_eq!(resolve_config_path("~/cv.toml"), PathBuf::from("/host/cv.toml"));
        assert_eq!(resolve_config_path("cv.json"), PathBuf::from("/host/cv.json"));
        assert_eq!(resolve_config_path(" /data/cv.toml "), PathBuf::from("/data/cv.toml"));
    }
}
