use crate::model::TodoId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    TodoNotFound(TodoId),

    #[error("Invalid todo id: {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
