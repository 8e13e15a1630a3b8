use std::{io, path::PathBuf};
use stubs_schema::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read schema file '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse schema file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid schema file: {0}")]
    Invalid(ErrorTree),

    #[error(transparent)]
    Schema(#[from] stubs_schema::Error),
}
