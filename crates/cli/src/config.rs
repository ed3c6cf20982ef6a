// Configuration - store location resolution

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default queue document (expanded against the user's home)
pub const DEFAULT_STORE_PATH: &str = "~/.deq/queue.json";

/// Env var overriding the store location when `--path` is not given
pub const STORE_PATH_ENV: &str = "DEQ_PATH";

/// Resolve the store path to an absolute location.
///
/// `~` and `$VARS` are expanded; a relative result is joined onto `cwd`.
pub fn resolve_store_path(raw: Option<&str>, cwd: &Path) -> Result<PathBuf> {
    let raw = raw.unwrap_or(DEFAULT_STORE_PATH);
    let expanded =
        shellexpand::full(raw).with_context(|| format!("Failed to expand store path {raw:?}"))?;

    let path = PathBuf::from(expanded.as_ref());
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(cwd.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_kept() {
        let path = resolve_store_path(Some("/var/tmp/q.json"), Path::new("/work")).unwrap();
        assert_eq!(path, PathBuf::from("/var/tmp/q.json"));
    }

    #[test]
    fn test_relative_path_joined_to_cwd() {
        let path = resolve_store_path(Some("data/q.json"), Path::new("/work")).unwrap();
        assert_eq!(path, PathBuf::from("/work/data/q.json"));
    }

    #[test]
    fn test_default_expands_home() {
        let path = resolve_store_path(None, Path::new("/work")).unwrap();

        assert!(path.is_absolute());
        assert!(!path.to_string_lossy().contains('~'));
        assert!(path.ends_with(".deq/queue.json"));
    }

    #[test]
    fn test_unknown_variable_fails() {
        let err = resolve_store_path(Some("$DEQ_TEST_SURELY_UNSET_VAR/q.json"), Path::new("/"));
        assert!(err.is_err());
    }
}
