use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Post '{0}' not found.")]
    PostNotFound(String),

    #[error("Post already exists at {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Malformed post {}: {reason}", path.display())]
    MalformedPost { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Front matter error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Process error: {0}")]
    Process(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Api(String),
}

impl From<confique::Error> for BlogError {
    fn from(err: confique::Error) -> Self {
        BlogError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;
