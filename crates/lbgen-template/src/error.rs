use thiserror::Error;

use lbgen_query::QueryError;

use crate::provider::ProviderError;
use crate::value::Value;

/// Failure of one registry function call.
///
/// Messages carry the function name in the `(name)` prefix shape templates
/// report, so a failed render points at the offending call site.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("({func}) wrong number of arguments: expected {expected}, got {got}")]
    Arity {
        func: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("({func}) input is nil")]
    NilInput { func: &'static str },

    #[error("({func}) unsupported input kind: expected entity collection, got {got}")]
    UnsupportedKind {
        func: &'static str,
        got: &'static str,
    },

    #[error("({func}) invalid argument {index}: expected {expected}, got {got}")]
    Argument {
        func: &'static str,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    #[error("({func}) {reason}")]
    InvalidCall {
        func: &'static str,
        reason: &'static str,
    },

    #[error("({func}) {source}")]
    Query {
        func: &'static str,
        #[source]
        source: QueryError,
    },

    #[error("({func}) {source}")]
    Provider {
        func: &'static str,
        #[source]
        source: ProviderError,
    },
}

impl TemplateError {
    pub(crate) fn query(func: &'static str, source: QueryError) -> Self {
        TemplateError::Query { func, source }
    }

    pub(crate) fn argument(
        func: &'static str,
        index: usize,
        expected: &'static str,
        got: &Value,
    ) -> Self {
        TemplateError::Argument {
            func,
            index,
            expected,
            got: got.type_name(),
        }
    }
}

pub type TemplateResult = Result<Value, TemplateError>;
