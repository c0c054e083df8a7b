//! `Option` and `Result` containers with exhaustive `match_*` dispatch.
//!
//! Both containers, and any other two-variant enum, get their queries,
//! `match_*` methods and `Display` impl from [`Container`].

#[doc(inline)]
pub use options_impl::*;

mod any;
mod error;
mod option;
mod result;
mod type_name;

pub use any::{AnyOption, Object};
pub use error::{InvalidState, NullValue, TypeMismatch};
pub use option::Option;
pub use result::Result;
pub use type_name::TypeName;
