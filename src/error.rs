use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AusaurError {
    #[error("Slug already in use: {0}")]
    SlugConflict(String),

    #[error("Invalid article: {0}")]
    InvalidArticle(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, AusaurError>;

impl From<std::io::Error> for AusaurError {
    fn from(e: std::io::Error) -> Self {
        AusaurError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AusaurError {
    fn from(e: serde_json::Error) -> Self {
        AusaurError::Json(e.to_string())
    }
}
