use thiserror::Error;

/// Result alias for every fallible operation in this crate that isn't
/// config-level (config validation goes through `anyhow`).
pub type HexResult<T> = Result<T, HexError>;

/// Everything that can go wrong in coordinate math. All operations are pure,
/// so none of these are worth retrying with the same input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// The caller passed a value outside the domain of the operation, e.g. a
    /// negative range or an unknown direction index.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The operation exists in the API but has no implementation. Returned
    /// instead of a guessed value.
    #[error("{0} is not supported")]
    Unimplemented(&'static str),

    /// Internal math disagreed with itself. Reaching this is a bug.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl HexError {
    pub(crate) fn invalid_argument(
        name: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HexError::invalid_argument("range", "must be positive, got -1")
                .to_string(),
            "invalid argument `range`: must be positive, got -1"
        );
        assert_eq!(
            HexError::Unimplemented("rotation").to_string(),
            "rotation is not supported"
        );
    }
}
