use core::fmt::{self, Write};

/// A type's name as reported by [`core::any::type_name`].
///
/// `Display` drops the module path from every path in the name while keeping
/// generics, tuples and references intact, so
/// `alloc::boxed::Box<dyn core::error::Error>` renders as `Box<dyn Error>` and
/// `(u8, std::io::error::Error)` as `(u8, Error)`. The full name is available
/// through [`as_str`](Self::as_str).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeName(&'static str);

impl TypeName {
    pub(crate) const ERASED: Self = Self("dyn Any");

    pub fn of<T: ?Sized>() -> Self {
        Self(core::any::type_name::<T>())
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while !rest.is_empty() {
            let end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
                .unwrap_or(rest.len());
            let (path, tail) = rest.split_at(end);
            f.write_str(path.rsplit("::").next().unwrap_or(path))?;
            let mut chars = tail.chars();
            if let Some(c) = chars.next() {
                f.write_char(c)?;
            }
            rest = chars.as_str();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TypeName;

    fn short(full: &'static str) -> String {
        TypeName(full).to_string()
    }

    #[test]
    fn strips_module_paths() {
        assert_eq!(short("std::io::error::Error"), "Error");
        assert_eq!(short("u32"), "u32");
        assert_eq!(short("dyn Any"), "dyn Any");
    }

    #[test]
    fn keeps_generic_arguments() {
        assert_eq!(short("alloc::boxed::Box<dyn core::error::Error>"), "Box<dyn Error>");
        assert_eq!(short("alloc::vec::Vec<alloc::string::String>"), "Vec<String>");
        assert_eq!(
            short("alloc::boxed::Box<dyn core::error::Error + core::marker::Send + core::marker::Sync>"),
            "Box<dyn Error + Send + Sync>"
        );
    }

    #[test]
    fn keeps_tuples_arrays_and_references() {
        assert_eq!(short("(u8, std::io::error::Error)"), "(u8, Error)");
        assert_eq!(short("[u8; 4]"), "[u8; 4]");
        assert_eq!(short("&std::io::error::Error"), "&Error");
        assert_eq!(short("&str"), "&str");
    }

    #[test]
    fn of_reports_the_full_name() {
        assert_eq!(TypeName::of::<String>().as_str(), "alloc::string::String");
        assert_eq!(TypeName::of::<String>().to_string(), "String");
    }
}
