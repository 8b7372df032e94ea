use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Record '{0}' not found")]
    RecordNotFound(String),

    #[error("Field '{field}' not found on {entity}")]
    FieldNotFound { entity: &'static str, field: String },

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition { from: String, to: String },

    #[error("Duplicate record id '{0}'")]
    DuplicateId(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
