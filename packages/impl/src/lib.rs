use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the queries, the `match_*` family and `Display` for an enum with
/// exactly two variants.
///
/// See `options::Option` for the generated surface. A variant may carry
/// `#[container(display_with = path)]` to render its payload through
/// `path(&payload, &mut Formatter)` instead of its `Display` impl.
#[proc_macro_derive(Container, attributes(container))]
pub fn derive_container(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    options_lib::container::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
