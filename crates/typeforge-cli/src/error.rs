use std::path::PathBuf;

use typeforge_core::TypeSystemError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("{origin}: {source}")]
    Types {
        origin: String,
        #[source]
        source: TypeSystemError,
    },
    #[error("unknown type '{0}'")]
    UnknownType(String),
    #[error("'{0}' is an open generic definition")]
    OpenDefinition(String),
    #[error(transparent)]
    Normalize(#[from] typeforge_lib::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
