use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl BookshelfError {
    /// Machine-readable code attached to GraphQL errors as the `code` extension.
    pub fn code(&self) -> &'static str {
        match self {
            BookshelfError::Config(_) => "CONFIG",
            BookshelfError::NotFound { .. } => "NOT_FOUND",
            BookshelfError::Io(_) => "IO",
            BookshelfError::Yaml(_) => "PARSE",
        }
    }
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
