use crate::field::Field;
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Error {
    /// The expression is not six whitespace-separated fields and is not a known macro.
    #[error("malformed cron expression: {0:?}")]
    MalformedExpression(String),
    /// A field contains a token outside the grammar, or a value outside the field's range.
    #[error("malformed cron expression: invalid token {token:?} in {field} field")]
    MalformedToken {
        /// Field the offending token belongs to.
        field: Field,
        /// Offending token, verbatim.
        token: String,
    },
    /// No occurrence exists within the forward search horizon.
    #[error("unsatisfiable schedule {0:?}: no occurrence within the search horizon")]
    UnsatisfiableSchedule(String),
}

impl Error {
    /// Shorthand used all over the parser.
    pub(crate) fn token(field: Field, token: impl Into<String>) -> Self {
        Self::MalformedToken {
            field,
            token: token.into(),
        }
    }
}
