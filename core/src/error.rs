//! Error type shared by the core loaders and the n-gram model.
use std::path::PathBuf;

/// Errors raised while training, persisting or loading core data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The training corpus given to `fit` does not exist.
    #[error("corpus not found: {}", .0.display())]
    CorpusNotFound(PathBuf),

    /// A frequency table (vocabulary or bigram dump) does not exist.
    #[error("frequency table not found: {}", .0.display())]
    TableNotFound(PathBuf),

    /// A model parameter is out of range, e.g. a discount outside (0, 1).
    #[error("invalid model parameter: {0}")]
    InvalidParameter(String),

    /// The persisted model is unreadable, corrupt or from an unsupported format version.
    #[error("failed to load model from {}: {reason}", path.display())]
    ModelLoad { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode error: {0}")]
    Encode(#[from] bincode::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config encode error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
}

impl Error {
    pub(crate) fn model_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::ModelLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
