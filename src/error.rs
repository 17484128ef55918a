use thiserror::Error;

#[derive(Error, Debug)]
pub enum JugaadError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Sector not found: {0}")]
    SectorNotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<&str> for JugaadError {
    fn from(error: &str) -> Self {
        JugaadError::Runtime(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, JugaadError>;
