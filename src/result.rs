use crate::{
    error::{InvalidState, NullValue},
    Container, Option, TypeName,
};
use core::fmt;

/// Either a success value (`Ok`) or a failure carrying the reason (`Error`).
///
/// ```
/// use options::Result;
/// use std::io;
///
/// let failed: Result<(), io::Error> = Result::error(io::Error::new(io::ErrorKind::Other, "I failed"));
/// let message = failed.match_with(|_| "ok".to_owned(), |e| e.to_string());
/// assert_eq!(message, "I failed");
/// ```
///
/// `Display` renders `Ok(value)` for a success and `Error(TypeName)` for a
/// failure, naming the error's type rather than its message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Container)]
pub enum Result<T, E> {
    Ok(T),
    #[container(display_with = type_name)]
    Error(E),
}

impl<T, E> Result<T, E> {
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    pub fn error(error: E) -> Self {
        Self::Error(error)
    }

    /// Wraps a present value as `Ok`, or records [`NullValue`] as the error.
    pub fn from_nullable(value: core::option::Option<T>) -> Self
    where
        E: From<NullValue>,
    {
        match value {
            Some(value) => Self::Ok(value),
            None => Self::Error(NullValue.into()),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the result is `Error`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => InvalidState::ERROR_RESULT.fail(),
        }
    }

    pub fn try_unwrap(self) -> core::result::Result<T, InvalidState> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(_) => Err(InvalidState::ERROR_RESULT),
        }
    }

    pub fn into_ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Error(_) => Option::None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Error(error) => Option::Some(error),
        }
    }

    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => Result::Error(error),
        }
    }

    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => Result::Error(error),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(value) => Ok(value),
            Result::Error(error) => Err(error),
        }
    }
}

/// Writes the short type name of `E`, e.g. `Error` for `std::io::Error` or
/// `Box<dyn Error>` for a boxed trait object.
fn type_name<E>(_: &E, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&TypeName::of::<E>(), f)
}
