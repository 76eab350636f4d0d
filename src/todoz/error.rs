use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Todo with ID {0} not found")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, TodozError>;
