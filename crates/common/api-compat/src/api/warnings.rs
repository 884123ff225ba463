use std::fmt;

/// `tracing` target every experimental warning is emitted under.
pub const EXPERIMENTAL_TARGET: &str = "api_compat::experimental";

/// `tracing` target every deprecation warning is emitted under.
pub const DEPRECATION_TARGET: &str = "api_compat::deprecation";

/// `tracing` target for quiet-scope bookkeeping, logged at `trace` level.
pub const SUPPRESSION_TARGET: &str = "api_compat::suppression";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentalWarning {
    subject: String,
    message: String,
}

impl ExperimentalWarning {
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Name of the experimental function, type or parameter.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn emit(&self) {
        tracing::warn!(
            target: EXPERIMENTAL_TARGET,
            subject = %self.subject,
            warning = %self,
            "ExperimentalWarning"
        );
    }
}

impl fmt::Display for ExperimentalWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExperimentalWarning {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationWarning {
    subject: String,
    message: String,
}

impl DeprecationWarning {
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Name of the deprecated item.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn emit(&self) {
        tracing::warn!(
            target: DEPRECATION_TARGET,
            subject = %self.subject,
            warning = %self,
            "DeprecationWarning"
        );
    }
}

impl fmt::Display for DeprecationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DeprecationWarning {}
