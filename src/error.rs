use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AuditError {
    /// The batch root (or single target file) does not exist. Fatal for the
    /// whole invocation; nothing gets processed.
    PathNotFound(PathBuf),
    /// The external decoder could not open or parse an image.
    Decode(String),
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotFound(path) => write!(f, "path not found: {}", path.display()),
            Self::Decode(message) => write!(f, "decode error: {message}"),
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Serialization(err) => write!(f, "report serialization error: {err}"),
        }
    }
}

impl std::error::Error for AuditError {}

impl From<std::io::Error> for AuditError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
