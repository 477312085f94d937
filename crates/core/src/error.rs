//! Configuration error model.

use thiserror::Error;

/// Result type used by registry setup and rule resolution.
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Rule configuration error.
///
/// Both variants indicate a setup bug rather than a transient failure: the
/// registry should be built all-or-nothing before the first tick.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A default rule was registered while another default was installed.
    #[error("default rule already defined ({existing}); refusing to install {rejected}")]
    DuplicateDefault { existing: String, rejected: String },

    /// No rule matched the name and no default rule is installed.
    #[error("no rule resolved for {0:?} and no default rule is defined")]
    NoRuleResolved(String),
}

impl ConfigurationError {
    pub fn duplicate_default(existing: impl Into<String>, rejected: impl Into<String>) -> Self {
        Self::DuplicateDefault {
            existing: existing.into(),
            rejected: rejected.into(),
        }
    }

    pub fn no_rule_resolved(name: impl Into<String>) -> Self {
        Self::NoRuleResolved(name.into())
    }
}
