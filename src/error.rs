//! Errors returned by chain building, generation and the preset/corpus helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No key of the chain starts with an uppercase word, so there is nothing to seed a
    /// sentence with. An empty chain always ends up here.
    #[error("no chain key starts with an uppercase word")]
    EmptyStarterPool,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse presets: {0}")]
    Presets(#[from] serde_json::Error),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
