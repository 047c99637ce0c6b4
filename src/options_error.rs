use thiserror::Error;

use crate::OptionKey;

/// Root cause of a failed option operation.
///
/// Every [`OptionsError`] carries exactly one of these as its source, so callers
/// can match on the cause without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// The key is absent from the option set.
    #[error("option not found")]
    NotFound,
    /// The stored value does not have the requested type or capability.
    #[error("wrong type expected from option")]
    TypeMismatch,
    /// A capability was requested but the stored value is nil.
    #[error("option holds a nil value")]
    NilValue,
    /// The key already holds a value.
    #[error("option has already been set")]
    DuplicatedKey,
}

/// Failure of a read or write, wrapped with the key it concerns.
///
/// The display form is `<context>: <cause>`, for example
/// `cannot read option 'timeout' from provided option set: option not found`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}: {kind}")]
pub struct OptionsError {
    key: OptionKey,
    context: String,
    #[source]
    kind: ErrorKind,
}

impl OptionsError {
    pub(crate) fn new(key: impl Into<OptionKey>, context: String, kind: ErrorKind) -> Self {
        Self {
            key: key.into(),
            context,
            kind,
        }
    }

    pub(crate) fn unreadable(key: &str, kind: ErrorKind) -> Self {
        Self::new(
            key,
            format!("cannot read option '{key}' from provided option set"),
            kind,
        )
    }

    pub(crate) fn unwritable(key: &OptionKey, kind: ErrorKind) -> Self {
        Self::new(
            key,
            format!("cannot write option '{key}' to provided option set"),
            kind,
        )
    }

    /// The root cause.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether the root cause is `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// The key the failed operation addressed.
    pub fn key(&self) -> &OptionKey {
        &self.key
    }
}
