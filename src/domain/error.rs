use std::path::PathBuf;

/// Failures that mean the check itself could not run to completion.
/// These are never turned into inconsistencies.
#[derive(thiserror::Error, Debug)]
pub enum CheckerError {
    #[error("zebedee root undefined in checker")]
    RootUndefined,
    #[error("unable to read collection metadata {}: {source}", .path.display())]
    MetadataUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to decode collection metadata {}: {source}", .path.display())]
    MetadataMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected error searching for published collections: {0}")]
    Glob(#[from] globset::Error),
    #[error("error walking dir tree of collection '{collection}': {source}")]
    Walk {
        collection: String,
        #[source]
        source: walkdir::Error,
    },
    #[error("published collection name is not valid UTF-8: {}", .path.display())]
    NonUtf8Name { path: PathBuf },
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum NotificationError {
    #[error("slack request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("slack api rejected message: {0}")]
    Api(String),
}
