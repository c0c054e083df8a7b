use crate::{error::InvalidState, Container};

/// A value that is either present (`Some`) or absent (`None`).
///
/// Inspect it with one of the `match_*` methods, which run exactly one of the
/// two handlers:
///
/// ```
/// use options::Option;
///
/// assert_eq!(Option::some(5).match_with(|v| v * 2, || -1), 10);
/// assert_eq!(Option::<i32>::none().match_with(|v| v * 2, || -1), -1);
/// ```
///
/// `Display` renders `Some(5)` and `None()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Container)]
pub enum Option<T> {
    Some(T),
    None,
}

impl<T> Option<T> {
    pub fn some(value: T) -> Self {
        Self::Some(value)
    }

    pub fn none() -> Self {
        Self::None
    }

    pub fn some_default() -> Self
    where
        T: Default,
    {
        Self::Some(T::default())
    }

    /// Collapses an absent value into `None`.
    pub fn from_nullable(value: core::option::Option<T>) -> Self {
        match value {
            core::option::Option::Some(value) => Self::Some(value),
            core::option::Option::None => Self::None,
        }
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics if the option is `None`. Prefer [`match_with`](Self::match_with).
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => InvalidState::NONE_OPTION.fail(),
        }
    }

    pub fn try_unwrap(self) -> core::result::Result<T, InvalidState> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(InvalidState::NONE_OPTION),
        }
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(value: core::option::Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Option::Some(value) => Some(value),
            Option::None => None,
        }
    }
}
