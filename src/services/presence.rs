use crate::domain::error::CheckerError;
use std::io::ErrorKind;
use std::path::Path;

/// Whether `path` exists. Only "not found" counts as absent; any other
/// failure is returned so it is never mistaken for missing content.
pub fn path_exists(path: &Path) -> Result<bool, CheckerError> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(CheckerError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Checks `master/<rel>` for a path relative to a collection root.
pub fn is_dir_in_master(master: &Path, rel: &Path) -> Result<bool, CheckerError> {
    path_exists(&master.join(rel))
}
