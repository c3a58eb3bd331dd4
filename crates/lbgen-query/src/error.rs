use thiserror::Error;

use lbgen_model::EntityKind;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("label key is empty")]
    EmptyLabelKey,

    #[error("operation not defined for {0} collections")]
    UnsupportedOperation(EntityKind),

    #[error("invalid label pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type QueryResult<T> = Result<T, QueryError>;
