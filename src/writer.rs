//! Persist bundle artifacts into the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::asset::BundleArtifact;
use crate::log;

/// `/components.css` -> `{output_dir}/components.css`
pub fn output_path(artifact: &BundleArtifact, output_dir: &Path) -> PathBuf {
    let file = artifact.dest.file_name();
    output_dir.join(file.trim_start_matches('/'))
}

/// Write every artifact, creating parent directories as needed.
///
/// Returns the written paths in artifact order.
pub fn write_artifacts(artifacts: &[BundleArtifact], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let path = output_path(artifact, output_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }
        fs::write(&path, &artifact.content)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;

        log!("bundle"; "{} ({} bytes)", artifact.dest.file_name(), artifact.content.len());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetKind, Destination};
    use tempfile::TempDir;

    fn artifact(file: &str, content: &str) -> BundleArtifact {
        BundleArtifact {
            kind: AssetKind::Style,
            dest: Destination::from_file(file),
            content: content.into(),
        }
    }

    #[test]
    fn test_output_path_strips_leading_slash() {
        let path = output_path(&artifact("/assets/components.css", ""), Path::new("/out"));
        assert_eq!(path, PathBuf::from("/out/assets/components.css"));
    }

    #[test]
    fn test_write_artifacts_creates_dirs() {
        let tmp = TempDir::new().unwrap();
        let artifacts = vec![
            artifact("/assets/components.css", ".btn{}\n.card{}"),
            artifact("components.js", "open()"),
        ];

        let written = write_artifacts(&artifacts, tmp.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read_to_string(tmp.path().join("assets/components.css")).unwrap(),
            ".btn{}\n.card{}"
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("components.js")).unwrap(),
            "open()"
        );
    }

    #[test]
    fn test_write_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(write_artifacts(&[], tmp.path()).unwrap().is_empty());
    }
}
