//! Configuration errors.

use std::path::PathBuf;

use vistoria_ingest::IngestError;
use vistoria_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid [aliases] entry: {0}")]
    Alias(#[from] ModelError),

    #[error("invalid encoding setting: {0}")]
    Encoding(#[from] IngestError),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
