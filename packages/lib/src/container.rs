use crate::{attr::VariantAttrs, utils::prefixed};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields, Path, Result, Type, Variant};

/// Expands `#[derive(Container)]`.
///
/// The input must be an enum with exactly two variants, each either a unit
/// variant or a tuple variant with a single field. The output is an inherent
/// impl with the `is_*` queries and the four `match_*` shapes, plus a
/// `Display` impl rendering `Variant(payload)`.
pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "only enum is supported",
            ))
        }
    };
    if data.variants.len() != 2 {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "expected exactly two variants",
        ));
    }
    let branches = data
        .variants
        .iter()
        .map(Branch::from_variant)
        .collect::<Result<Vec<_>>>()?;
    if branches[0].query() == branches[1].query() {
        return Err(syn::Error::new_spanned(
            branches[1].ident,
            format!(
                "variants `{}` and `{}` both generate `{}`",
                branches[0].ident,
                branches[1].ident,
                branches[0].query()
            ),
        ));
    }
    let methods = expand_methods(&input, &branches[0], &branches[1]);
    let display = expand_display(&input, &branches);
    Ok(quote!(
        #methods
        #display
    ))
}

pub struct Branch<'a> {
    ident: &'a Ident,
    payload: Option<&'a Type>,
    display_with: Option<Path>,
}

impl<'a> Branch<'a> {
    pub fn from_variant(variant: &'a Variant) -> Result<Self> {
        let payload = match &variant.fields {
            Fields::Unit => None,
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                fields.unnamed.first().map(|field| &field.ty)
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "expected a unit variant or a single unnamed field",
                ))
            }
        };
        let attrs = VariantAttrs::from_attrs(&variant.attrs)?;
        Ok(Self {
            ident: &variant.ident,
            payload,
            display_with: attrs.display_with,
        })
    }

    pub fn query(&self) -> Ident {
        prefixed("is", self.ident)
    }

    pub fn handler(&self) -> Ident {
        prefixed("on", self.ident)
    }

    fn pattern(&self) -> TokenStream {
        let ident = self.ident;
        match self.payload {
            Some(_) => quote!(Self::#ident(__value)),
            None => quote!(Self::#ident),
        }
    }

    fn wildcard(&self) -> TokenStream {
        let ident = self.ident;
        match self.payload {
            Some(_) => quote!(Self::#ident(..)),
            None => quote!(Self::#ident),
        }
    }

    fn args(&self) -> TokenStream {
        match self.payload {
            Some(ty) => quote!(#ty),
            None => TokenStream::default(),
        }
    }

    fn call(&self) -> TokenStream {
        let handler = self.handler();
        match self.payload {
            Some(_) => quote!(#handler(__value)),
            None => quote!(#handler()),
        }
    }

    fn display(&self) -> TokenStream {
        let name = self.ident.to_string();
        match (self.payload, &self.display_with) {
            (None, _) => quote!(::core::write!(__f, "{}()", #name)),
            (Some(_), None) => quote!(::core::write!(__f, "{}({})", #name, __value)),
            (Some(_), Some(path)) => quote!({
                __f.write_str(#name)?;
                __f.write_str("(")?;
                #path(__value, __f)?;
                __f.write_str(")")
            }),
        }
    }
}

fn expand_methods(input: &DeriveInput, a: &Branch, b: &Branch) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let (query_a, query_b) = (a.query(), b.query());
    let (wild_a, wild_b) = (a.wildcard(), b.wildcard());
    let (on_a, on_b) = (a.handler(), b.handler());
    let (pat_a, pat_b) = (a.pattern(), b.pattern());
    let (args_a, args_b) = (a.args(), b.args());
    let (call_a, call_b) = (a.call(), b.call());

    let doc_query_a = format!("Returns `true` if this is `{}`.", a.ident);
    let doc_query_b = format!("Returns `true` if this is `{}`.", b.ident);
    let doc_do = format!(
        "Runs `{}` or `{}`, whichever matches.",
        on_a, on_b
    );
    let doc_do_or = format!(
        "Runs `{}` and returns `default` on `{}`, otherwise returns the result of `{}`.",
        on_a, a.ident, on_b
    );
    let doc_with_or = format!(
        "Returns the result of `{}` on `{}`, otherwise runs `{}` and returns `default`.",
        on_a, a.ident, on_b
    );
    let doc_with = format!(
        "Returns the result of `{}` or `{}`, whichever matches.",
        on_a, on_b
    );

    quote!(
        impl #impl_generics #name #ty_generics #where_clause {
            #[doc = #doc_query_a]
            #[inline]
            pub fn #query_a(&self) -> bool {
                ::core::matches!(self, #wild_a)
            }

            #[doc = #doc_query_b]
            #[inline]
            pub fn #query_b(&self) -> bool {
                ::core::matches!(self, #wild_b)
            }

            #[doc = #doc_do]
            pub fn match_do<__A, __B>(self, #on_a: __A, #on_b: __B)
            where
                __A: ::core::ops::FnOnce(#args_a),
                __B: ::core::ops::FnOnce(#args_b),
            {
                match self {
                    #pat_a => #call_a,
                    #pat_b => #call_b,
                }
            }

            #[doc = #doc_do_or]
            pub fn match_do_or<__R, __A, __B>(self, default: __R, #on_a: __A, #on_b: __B) -> __R
            where
                __A: ::core::ops::FnOnce(#args_a),
                __B: ::core::ops::FnOnce(#args_b) -> __R,
            {
                match self {
                    #pat_a => {
                        #call_a;
                        default
                    }
                    #pat_b => #call_b,
                }
            }

            #[doc = #doc_with_or]
            pub fn match_with_or<__R, __A, __B>(self, default: __R, #on_a: __A, #on_b: __B) -> __R
            where
                __A: ::core::ops::FnOnce(#args_a) -> __R,
                __B: ::core::ops::FnOnce(#args_b),
            {
                match self {
                    #pat_a => #call_a,
                    #pat_b => {
                        #call_b;
                        default
                    }
                }
            }

            #[doc = #doc_with]
            pub fn match_with<__R, __A, __B>(self, #on_a: __A, #on_b: __B) -> __R
            where
                __A: ::core::ops::FnOnce(#args_a) -> __R,
                __B: ::core::ops::FnOnce(#args_b) -> __R,
            {
                match self {
                    #pat_a => #call_a,
                    #pat_b => #call_b,
                }
            }
        }
    )
}

fn expand_display(input: &DeriveInput, branches: &[Branch]) -> TokenStream {
    let name = &input.ident;
    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for branch in branches.iter().filter(|b| b.display_with.is_none()) {
            if let Some(ty) = branch.payload {
                where_clause
                    .predicates
                    .push(parse_quote!(#ty: ::core::fmt::Display));
            }
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let arms = branches.iter().map(|branch| {
        let pattern = branch.pattern();
        let display = branch.display();
        quote!(#pattern => #display,)
    });

    quote!(
        impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, __f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    #(#arms)*
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_err(input: DeriveInput) -> String {
        match expand(input) {
            Ok(_) => panic!("expected expansion to fail"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn rejects_structs() {
        let input: DeriveInput = parse_quote!(
            struct Maybe<T>(Option<T>);
        );
        assert_eq!(expand_err(input), "only enum is supported");
    }

    #[test]
    fn rejects_wrong_variant_count() {
        let input: DeriveInput = parse_quote!(
            enum Tri {
                A,
                B,
                C,
            }
        );
        assert_eq!(expand_err(input), "expected exactly two variants");
    }

    #[test]
    fn rejects_named_fields() {
        let input: DeriveInput = parse_quote!(
            enum Reply {
                Found { id: u32 },
                Missing,
            }
        );
        assert_eq!(
            expand_err(input),
            "expected a unit variant or a single unnamed field"
        );
    }

    #[test]
    fn rejects_unknown_attribute() {
        let input: DeriveInput = parse_quote!(
            enum Reply {
                #[container(rename = Other)]
                Found(u32),
                Missing,
            }
        );
        assert_eq!(expand_err(input), "expected `display_with`");
    }

    #[test]
    fn rejects_duplicate_display_with() {
        let input: DeriveInput = parse_quote!(
            enum Reply {
                #[container(display_with = first, display_with = second)]
                Found(u32),
                Missing,
            }
        );
        assert_eq!(expand_err(input), "duplicate `display_with` option");
    }

    #[test]
    fn rejects_colliding_method_names() {
        let input: DeriveInput = parse_quote!(
            enum Shout {
                Foo,
                FOO,
            }
        );
        assert_eq!(
            expand_err(input),
            "variants `Foo` and `FOO` both generate `is_foo`"
        );
    }

    #[test]
    fn names_methods_after_variants() {
        let input: DeriveInput = parse_quote!(
            enum Lookup<T> {
                Found(T),
                NotFound,
            }
        );
        let tokens = expand(input).unwrap().to_string();
        for name in ["is_found", "is_not_found", "on_found", "on_not_found"] {
            assert!(tokens.contains(name), "missing `{name}` in {tokens}");
        }
        assert!(tokens.contains("T : :: core :: fmt :: Display"));
    }

    #[test]
    fn display_with_skips_display_bound() {
        let input: DeriveInput = parse_quote!(
            enum Outcome<T, E> {
                Done(T),
                #[container(display_with = render)]
                Failed(E),
            }
        );
        let tokens = expand(input).unwrap().to_string();
        assert!(tokens.contains("render (__value , __f)"));
        assert!(!tokens.contains("E : :: core :: fmt :: Display"));
    }
}
