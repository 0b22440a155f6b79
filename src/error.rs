use thiserror::Error;

/// Errors from parsing replacer settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name does not refer to any rule.
    #[error("unknown emoji rule: {0:?}")]
    UnknownRule(String),

    /// The name does not refer to any replace mode.
    #[error("unknown replace mode: {0:?}")]
    UnknownMode(String),
}

/// Result alias using this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
