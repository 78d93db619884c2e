use crate::domain::error::CheckerError;
use crate::services::metadata::DeletedPaths;
use crate::services::presence::is_dir_in_master;
use crate::services::report::Inconsistencies;
use crate::services::walk::{walk_dirs, WalkDecision};
use std::path::Path;

pub fn collection_inconsistency(collection: &str) -> String {
    format!("dirs from collection '{collection}' missing from publishing master")
}

/// Directories of a published collection that are neither in master nor
/// explained by a deletion. Once a directory is found missing its subtree
/// is not visited, so each gap is reported once, at its topmost directory.
pub fn missing_dirs(
    publish_log: &Path,
    master: &Path,
    collection: &str,
    deleted: &DeletedPaths,
) -> Result<Vec<String>, CheckerError> {
    let coldir = publish_log.join(collection);
    let mut missing = Vec::new();
    walk_dirs::<CheckerError, _, _>(
        &coldir,
        |rel, uri| {
            if is_dir_in_master(master, rel)? {
                return Ok(WalkDecision::Continue);
            }
            if !deleted.contains(uri) {
                missing.push(uri.to_string());
            }
            Ok(WalkDecision::SkipSubtree)
        },
        |source| CheckerError::Walk {
            collection: collection.to_string(),
            source,
        },
    )?;
    Ok(missing)
}

/// Validates one collection, recording a single inconsistency when any of its
/// directories are missing. Returns whether the collection is consistent.
pub fn check_published_collection(
    publish_log: &Path,
    master: &Path,
    collection: &str,
    deleted: &DeletedPaths,
    found: &Inconsistencies,
) -> Result<bool, CheckerError> {
    tracing::info!(collection, "checking published collection");

    let missing = missing_dirs(publish_log, master, collection, deleted).map_err(|e| {
        tracing::error!(collection, error = %e, "error while checking dirs in published collection");
        e
    })?;

    if missing.is_empty() {
        tracing::info!(collection, "published collection consistent");
        return Ok(true);
    }

    tracing::info!(
        collection,
        missing_dirs = ?missing,
        "dirs from collection missing from publishing master"
    );
    found.record(collection_inconsistency(collection));
    Ok(false)
}
