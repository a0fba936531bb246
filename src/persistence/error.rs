use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing the task file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("read tasks file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unmarshal tasks from {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("marshal tasks: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("write tasks {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

impl StoreError {
    /// Short label for the error band
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Read { .. } | Self::Decode { .. } => "load error",
            Self::Encode(_) | Self::Write { .. } => "save error",
        }
    }
}
