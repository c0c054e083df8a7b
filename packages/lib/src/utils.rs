use proc_macro2::Ident;
use quote::format_ident;

/// Converts a variant name such as `NotFound` into `not_found`.
///
/// A run of capitals is one word, so `HTTPError` becomes `http_error`.
pub fn snake_case(name: &str) -> String {
    let chars = name.chars().collect::<Vec<_>>();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).map_or(false, |c| c.is_lowercase());
            if prev != '_' && (!prev.is_uppercase() || next_lower) {
                out.push('_');
            }
        }
        out.extend(ch.to_lowercase());
    }
    out
}

pub fn prefixed(prefix: &str, name: &Ident) -> Ident {
    let snake = snake_case(&name.to_string());
    format_ident!("{}_{}", prefix, snake, span = name.span())
}
