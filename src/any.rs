use crate::{
    error::{InvalidState, TypeMismatch},
    Option, TypeName,
};
use core::{any::Any, fmt};

/// An untyped payload as accepted by [`AnyOption::from_object`].
pub type Object = Box<dyn Any + Send + Sync>;

struct Erased {
    value: Object,
    type_name: TypeName,
}

impl Erased {
    fn downcast<V: Any>(self) -> core::result::Result<V, TypeMismatch> {
        let found = self.type_name;
        match self.value.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(_) => {
                let expected = TypeName::of::<V>();
                #[cfg(feature = "tracing")]
                tracing::debug!(%expected, %found, "erased option matched against the wrong type");
                Err(TypeMismatch { expected, found })
            }
        }
    }
}

/// A type-erased [`Option`] for call sites that only know the payload type at
/// runtime.
///
/// Every `match_*` method names the expected payload type. If the option is
/// `Some` and holds anything else, the call returns [`TypeMismatch`] without
/// running either handler.
///
/// ```
/// use options::AnyOption;
///
/// let option = AnyOption::some(5_i32);
/// assert_eq!(option.match_with::<i32, _>(|v| v * 2, || -1), Ok(10));
///
/// let option = AnyOption::some("five");
/// assert!(option.match_with::<i32, _>(|v| v * 2, || -1).is_err());
/// ```
pub struct AnyOption(Option<Erased>);

impl AnyOption {
    pub fn some<V: Any + Send + Sync>(value: V) -> Self {
        Self(Option::Some(Erased {
            value: Box::new(value),
            type_name: TypeName::of::<V>(),
        }))
    }

    pub fn some_default<V: Any + Send + Sync + Default>() -> Self {
        Self::some(V::default())
    }

    pub fn none() -> Self {
        Self(Option::None)
    }

    /// Collapses an absent object into `None`.
    ///
    /// The concrete type behind `dyn Any` cannot be named, so mismatches on
    /// such an option report the wrapped type as `dyn Any`.
    pub fn from_object(value: core::option::Option<Object>) -> Self {
        Self(match value {
            Some(value) => Option::Some(Erased {
                value,
                type_name: TypeName::ERASED,
            }),
            None => Option::None,
        })
    }

    pub fn to_object(self) -> core::option::Option<Object> {
        match self.0 {
            Option::Some(erased) => Some(erased.value),
            Option::None => None,
        }
    }

    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Name of the wrapped type, if any.
    pub fn type_name(&self) -> core::option::Option<TypeName> {
        match &self.0 {
            Option::Some(erased) => Some(erased.type_name),
            Option::None => None,
        }
    }

    /// # Panics
    ///
    /// Panics if the option is `None`.
    #[track_caller]
    pub fn value(&self) -> &(dyn Any + Send + Sync) {
        match &self.0 {
            Option::Some(erased) => erased.value.as_ref(),
            Option::None => InvalidState::NONE_OPTION.fail(),
        }
    }

    pub fn try_value(&self) -> core::result::Result<&(dyn Any + Send + Sync), InvalidState> {
        match &self.0 {
            Option::Some(erased) => Ok(erased.value.as_ref()),
            Option::None => Err(InvalidState::NONE_OPTION),
        }
    }

    pub fn match_do<V: Any>(
        self,
        on_some: impl FnOnce(V),
        on_none: impl FnOnce(),
    ) -> core::result::Result<(), TypeMismatch> {
        self.into_typed::<V>()?.match_do(on_some, on_none);
        Ok(())
    }

    pub fn match_do_or<V: Any, R>(
        self,
        default: R,
        on_some: impl FnOnce(V),
        on_none: impl FnOnce() -> R,
    ) -> core::result::Result<R, TypeMismatch> {
        Ok(self.into_typed::<V>()?.match_do_or(default, on_some, on_none))
    }

    pub fn match_with_or<V: Any, R>(
        self,
        default: R,
        on_some: impl FnOnce(V) -> R,
        on_none: impl FnOnce(),
    ) -> core::result::Result<R, TypeMismatch> {
        Ok(self.into_typed::<V>()?.match_with_or(default, on_some, on_none))
    }

    pub fn match_with<V: Any, R>(
        self,
        on_some: impl FnOnce(V) -> R,
        on_none: impl FnOnce() -> R,
    ) -> core::result::Result<R, TypeMismatch> {
        Ok(self.into_typed::<V>()?.match_with(on_some, on_none))
    }

    fn into_typed<V: Any>(self) -> core::result::Result<Option<V>, TypeMismatch> {
        match self.0 {
            Option::Some(erased) => erased.downcast().map(Option::Some),
            Option::None => Ok(Option::None),
        }
    }
}

impl Default for AnyOption {
    fn default() -> Self {
        Self::none()
    }
}

impl<V: Any + Send + Sync> From<Option<V>> for AnyOption {
    fn from(option: Option<V>) -> Self {
        option.match_with(Self::some, Self::none)
    }
}

impl fmt::Display for AnyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Option::Some(erased) => write!(f, "Some({})", erased.type_name),
            Option::None => f.write_str("None()"),
        }
    }
}

impl fmt::Debug for AnyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Option::Some(erased) => f.debug_tuple("Some").field(&erased.type_name.as_str()).finish(),
            Option::None => f.write_str("None"),
        }
    }
}
