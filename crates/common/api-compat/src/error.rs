//! Error types for api-compat.
//!
//! Every error here is a usage error raised synchronously to the immediate
//! caller. None of them are transient, so nothing in this crate retries.

use thiserror::Error;

/// Result type alias for api-compat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for api-compat operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Both the deprecated and the replacement parameter were supplied.
    #[error("Do not use deprecated \"{old_arg}\" now that you are using \"{new_arg}\".")]
    AmbiguousParameter {
        /// Name of the deprecated parameter.
        old_arg: String,
        /// Name of the parameter that replaced it.
        new_arg: String,
    },

    /// A value passed under a deprecated name could not be converted to
    /// the shape the replacement parameter expects.
    ///
    /// Never raised by this crate itself. It is meant for the coercions
    /// callers pass to
    /// [`try_normalize_renamed_param`](crate::api::try_normalize_renamed_param).
    #[error("Invalid value for \"{arg}\": {message}")]
    InvalidValue {
        /// Name of the parameter that carried the value.
        arg: String,
        /// What was wrong with it.
        message: String,
    },
}

impl Error {
    /// Create an ambiguous parameter error.
    pub fn ambiguous_parameter(old_arg: impl Into<String>, new_arg: impl Into<String>) -> Self {
        Self::AmbiguousParameter {
            old_arg: old_arg.into(),
            new_arg: new_arg.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(arg: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            arg: arg.into(),
            message: message.into(),
        }
    }

    /// The parameter names this error refers to, old name first.
    pub fn parameters(&self) -> Vec<&str> {
        match self {
            Self::AmbiguousParameter { old_arg, new_arg } => vec![old_arg, new_arg],
            Self::InvalidValue { arg, .. } => vec![arg],
        }
    }
}
