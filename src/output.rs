//! Persistence of resolved values for the packaging step

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseVersionError, Result};
use crate::resolver::ResolvedVersion;

pub const VERSION_CODE_FILE: &str = "code.txt";
pub const VERSION_NAME_FILE: &str = "name.txt";

/// Paths of the two output files inside `dir`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub code: PathBuf,
    pub name: PathBuf,
}

impl OutputFiles {
    pub fn in_dir(dir: &Path) -> Self {
        OutputFiles {
            code: dir.join(VERSION_CODE_FILE),
            name: dir.join(VERSION_NAME_FILE),
        }
    }
}

/// Write `code.txt` and `name.txt` into `dir`.
///
/// A field that was not inferred has its file removed, so a stale value from
/// an earlier run is never picked up.
pub fn write_outputs(dir: &Path, resolved: &ResolvedVersion) -> Result<OutputFiles> {
    let files = OutputFiles::in_dir(dir);

    match &resolved.code {
        Some(code) => write_value(&files.code, &code.value.to_string())?,
        None => remove_stale(&files.code)?,
    }

    match &resolved.name {
        Some(name) => write_value(&files.name, &name.value)?,
        None => remove_stale(&files.name)?,
    }

    Ok(files)
}

fn write_value(path: &Path, value: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ReleaseVersionError::output(format!("Cannot create {}: {}", parent.display(), e))
        })?;
    }
    fs::write(path, value)
        .map_err(|e| ReleaseVersionError::output(format!("Cannot write {}: {}", path.display(), e)))
}

fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ReleaseVersionError::output(format!(
            "Cannot remove {}: {}",
            path.display(),
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionSource;
    use crate::resolver::Resolved;
    use tempfile::TempDir;

    fn resolved(code: Option<i64>, name: Option<&str>) -> ResolvedVersion {
        ResolvedVersion {
            code: code.map(|value| Resolved {
                value,
                source: VersionSource::LatestGitTag,
            }),
            name: name.map(|value| Resolved {
                value: value.to_string(),
                source: VersionSource::LatestGitTag,
            }),
        }
    }

    #[test]
    fn test_write_outputs_creates_directories() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("generated").join("debug");

        let files = write_outputs(&out, &resolved(Some(5), Some("1.2.3"))).unwrap();

        assert_eq!(fs::read_to_string(files.code).unwrap(), "5");
        assert_eq!(fs::read_to_string(files.name).unwrap(), "1.2.3");
    }

    #[test]
    fn test_disabled_field_removes_stale_file() {
        let dir = TempDir::new().unwrap();
        write_outputs(dir.path(), &resolved(Some(5), Some("1.2.3"))).unwrap();

        let files = write_outputs(dir.path(), &resolved(None, Some("1.2.4"))).unwrap();

        assert!(!files.code.exists());
        assert_eq!(fs::read_to_string(files.name).unwrap(), "1.2.4");
    }

    #[test]
    fn test_nothing_inferred_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let files = write_outputs(dir.path(), &resolved(None, None)).unwrap();
        assert!(!files.code.exists());
        assert!(!files.name.exists());
    }
}
