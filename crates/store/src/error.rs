use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure while reading or writing a store file, or a rejected request.
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Encode(serde_json::Error),
    /// Username or password was empty
    EmptyCredentials,
    UserExists(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            StoreError::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            StoreError::Encode(e) => write!(f, "failed to encode store: {e}"),
            StoreError::EmptyCredentials => f.write_str("username and password must not be empty"),
            StoreError::UserExists(user) => write!(f, "user '{user}' already exists"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Parse { source, .. } => Some(source),
            StoreError::Encode(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
