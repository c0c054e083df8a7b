use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Path, Result, Token,
};

mod kw {
    use syn::custom_keyword;

    custom_keyword!(display_with);
}

/// Options collected from `#[container(...)]` on a variant.
#[derive(Default)]
pub struct VariantAttrs {
    pub display_with: Option<Path>,
}

impl VariantAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut this = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path.is_ident("container")) {
            let args =
                attr.parse_args_with(Punctuated::<VariantArg, Token![,]>::parse_terminated)?;
            for arg in args {
                match arg {
                    VariantArg::DisplayWith(path) => {
                        if this.display_with.is_some() {
                            return Err(syn::Error::new_spanned(
                                path,
                                "duplicate `display_with` option",
                            ));
                        }
                        this.display_with = Some(path);
                    }
                }
            }
        }
        Ok(this)
    }
}

pub enum VariantArg {
    DisplayWith(Path),
}

impl Parse for VariantArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(kw::display_with) {
            input.parse::<kw::display_with>()?;
            input.parse::<Token![=]>()?;
            Ok(VariantArg::DisplayWith(input.parse()?))
        } else {
            Err(lookahead.error())
        }
    }
}
