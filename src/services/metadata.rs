use crate::domain::error::CheckerError;
use crate::domain::models::{CollectionMetadata, METADATA_SUFFIX};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub fn metadata_path(publish_log: &Path, collection: &str) -> PathBuf {
    publish_log.join(format!("{collection}{METADATA_SUFFIX}"))
}

pub fn load_collection_metadata(path: &Path) -> Result<CollectionMetadata, CheckerError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CheckerError::MetadataUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CheckerError::MetadataMalformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Root uris removed from master by the given collection.
pub fn deleted_roots(publish_log: &Path, collection: &str) -> Result<Vec<String>, CheckerError> {
    let path = metadata_path(publish_log, collection);
    let meta = load_collection_metadata(&path)?;
    if let Some(ended) = meta.publish_end_date {
        tracing::debug!(collection, publish_end_date = %ended, "loaded collection metadata");
    }
    Ok(meta
        .pending_deletes
        .into_iter()
        .map(|pd| pd.root.uri)
        .collect())
}

/// Deletions seen so far while walking the publish log from newest to oldest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletedPaths(BTreeSet<String>);

impl DeletedPaths {
    pub fn merged(mut self, roots: impl IntoIterator<Item = String>) -> Self {
        self.0.extend(roots);
        self
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.0.contains(uri)
    }
}
