use thiserror::Error;

/// Errors returned by the ruby matcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RubyError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("input too long: {slots} text units, {tokens} pronunciation tokens (limit {limit})")]
    LengthExceeded {
        slots: usize,
        tokens: usize,
        limit: usize,
    },
}

impl RubyError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
