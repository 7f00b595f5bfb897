use thiserror::Error;

/// Rejection of a single field edit at the form boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{field} expects a {expected} value")]
    WrongKind {
        field: String,
        expected: &'static str,
    },

    #[error("{field}: '{value}' is not a whole number")]
    NotANumber { field: String, value: String },

    #[error("{field}: score {value} is outside range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: u32,
        min: u8,
        max: u8,
    },

    #[error("{field} cannot be marked untestable")]
    UntestableNotAllowed { field: String },
}
