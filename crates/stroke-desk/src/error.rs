use thiserror::Error;

use stroke_core::FieldError;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{field} expects true or false, got '{value}'")]
    InvalidFlag { field: String, value: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
