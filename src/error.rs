use crate::TypeName;
use thiserror::Error;

/// A payload was requested from a container in the state that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("cannot get value of {article} {variant} {container}")]
pub struct InvalidState {
    article: &'static str,
    variant: &'static str,
    container: &'static str,
}

impl InvalidState {
    pub(crate) const NONE_OPTION: Self = Self {
        article: "a",
        variant: "none",
        container: "option",
    };

    pub(crate) const ERROR_RESULT: Self = Self {
        article: "an",
        variant: "error",
        container: "result",
    };

    /// The state the container was in, `"none"` or `"error"`.
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    #[track_caller]
    pub(crate) fn fail(self) -> ! {
        #[cfg(feature = "tracing")]
        tracing::error!(variant = self.variant, container = self.container, "invalid state access");
        panic!("{}", self)
    }
}

/// The payload of an [`AnyOption`](crate::AnyOption) is not of the requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("the type of {expected} does not match the wrapped type {found}")]
pub struct TypeMismatch {
    pub expected: TypeName,
    pub found: TypeName,
}

/// Stored by [`Result::from_nullable`](crate::Result::from_nullable) when there
/// was no value to wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
#[error("cannot use a null value to create a result")]
pub struct NullValue;
