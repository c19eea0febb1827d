use proc_macro2::TokenStream;
use syn::{Expr, GenericArgument, Lit, PathArguments, Type, UnOp};

#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// The field is spelled `Option<T>` (or a path ending in `Option<T>`).
///
/// Only the spelling is inspected, so aliases of `Option` are not recognized.
#[inline]
pub(crate) fn is_option(ty: &Type) -> bool {
    option_inner(ty).is_some()
}

/// `T` for a type spelled `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let last = type_path.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match &args.args[0] {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// The type is spelled `f32` or `f64`.
pub(crate) fn is_float(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .get_ident()
            .is_some_and(|ident| ident == "f32" || ident == "f64"),
        Type::Group(group) => is_float(&group.elem),
        Type::Paren(paren) => is_float(&paren.elem),
        _ => false,
    }
}

/// A non-string literal, possibly negated: `42`, `-1.5`, `true`, `'c'`.
///
/// Such defaults are typed by the field directly, since `Into` would leave the
/// literal's own type ambiguous.
pub(crate) fn is_plain_literal(expr: &Expr) -> bool {
    literal_matches(expr, &|lit| !matches!(lit, Lit::Str(_) | Lit::ByteStr(_) | Lit::CStr(_)))
}

/// An integer literal, possibly negated.
pub(crate) fn is_int_literal(expr: &Expr) -> bool {
    literal_matches(expr, &|lit| matches!(lit, Lit::Int(_)))
}

/// Any literal, string literals included.
pub(crate) fn is_literal(expr: &Expr) -> bool {
    literal_matches(expr, &|_| true)
}

fn literal_matches(expr: &Expr, pred: &dyn Fn(&Lit) -> bool) -> bool {
    match expr {
        Expr::Lit(lit) => pred(&lit.lit),
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            literal_matches(&unary.expr, pred)
        }
        Expr::Group(group) => literal_matches(&group.expr, pred),
        Expr::Paren(paren) => literal_matches(&paren.expr, pred),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::{is_float, is_int_literal, is_literal, is_option, is_plain_literal, option_inner};

    #[test]
    fn option_spelling() {
        assert!(is_option(&parse_quote!(Option<u8>)));
        assert!(is_option(&parse_quote!(::core::option::Option<Vec<u8>>)));
        assert!(!is_option(&parse_quote!(Vec<Option<u8>>)));
        assert!(!is_option(&parse_quote!(Option)));
        assert!(!is_option(&parse_quote!(&Option<u8>)));

        let ty: syn::Type = parse_quote!(Option<f64>);
        let inner = option_inner(&ty).unwrap();
        assert!(is_float(inner));
    }

    #[test]
    fn float_spelling() {
        assert!(is_float(&parse_quote!(f32)));
        assert!(is_float(&parse_quote!(f64)));
        assert!(!is_float(&parse_quote!(i64)));
    }

    #[test]
    fn plain_literals() {
        assert!(is_plain_literal(&parse_quote!(42)));
        assert!(is_plain_literal(&parse_quote!(-1)));
        assert!(is_plain_literal(&parse_quote!((0.5))));
        assert!(is_plain_literal(&parse_quote!(false)));
        assert!(!is_plain_literal(&parse_quote!("main")));
        assert!(!is_plain_literal(&parse_quote!(vec![1])));
        assert!(!is_plain_literal(&parse_quote!(Some(1))));
    }

    #[test]
    fn literal_kinds() {
        assert!(is_int_literal(&parse_quote!(-3)));
        assert!(!is_int_literal(&parse_quote!(3.0)));
        assert!(is_literal(&parse_quote!("main")));
        assert!(!is_literal(&parse_quote!(String::new())));
    }
}
