use std::path::PathBuf;

use roller::CreateError;

/// Failure to obtain or decode a JSON feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to read feed {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse feed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to fetch feed: {0}")]
    Fetch(String),
}

/// Why the history roller could not be mounted.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Create(#[from] CreateError),
}

/// The slide-list region of a page could not be located.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpliceError {
    #[error("start marker `{0}` not found")]
    MissingStartMarker(String),

    #[error("end marker `{0}` not found after the start marker")]
    MissingEndMarker(String),
}
