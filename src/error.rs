// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid records file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Similarity threshold must be between 0 and 100, got {0}")]
    ThresholdOutOfRange(u32),

    #[error("Keyword at position {0} is empty")]
    EmptyKeyword(usize),

    #[error("No result stored for job {0}")]
    UnknownJob(u64),

    #[error("Cluster index {index} out of range (result has {len} clusters)")]
    ClusterIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ClusterError>;

// Allow `?` on std::io::Error by converting to ClusterError::Io with unknown path.
impl From<std::io::Error> for ClusterError {
    fn from(source: std::io::Error) -> Self {
        ClusterError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
