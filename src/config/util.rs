//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/_components/nav/  ← cwd
/// /home/user/site/components.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_from_parent() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("_components/nav");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(tmp.path().join("components.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("components.toml")).unwrap();
        assert_eq!(found, tmp.path().join("components.toml"));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("components.toml")).unwrap();
        assert_ne!(
            find_config_from(tmp.path(), Path::new("components.toml")),
            Some(tmp.path().join("components.toml"))
        );
    }

    #[test]
    fn test_find_absolute_missing() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_file(&tmp.path().join("missing.toml")), None);
    }
}
