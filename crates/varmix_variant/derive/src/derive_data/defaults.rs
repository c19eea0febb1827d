use proc_macro2::Span;
use syn::Expr;

/// The right-hand side of a defaults entry.
#[derive(Debug, Clone)]
pub(crate) enum DefaultSpec {
    /// `a = expr` or `#[var(default = expr)]`.
    Value(Expr),
    /// `#[var(default)]`, the field type's `Default::default()`.
    DefaultTrait,
    /// `a = NoDefault` or `#[var(no_default)]`.
    NoDefault,
}

impl DefaultSpec {
    /// Interprets the value of a `defaults(name = value)` entry.
    pub fn from_expr(expr: Expr) -> Self {
        match &expr {
            Expr::Path(p) if p.qself.is_none() && p.path.is_ident("NoDefault") => Self::NoDefault,
            _ => Self::Value(expr),
        }
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        !matches!(self, Self::NoDefault)
    }
}

/// One entry of a defaults descriptor, from either the type or a field.
#[derive(Debug, Clone)]
pub(crate) struct DefaultDecl {
    pub name: String,
    pub span: Span,
    pub spec: DefaultSpec,
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::DefaultSpec;

    #[test]
    fn sentinel_is_recognized() {
        assert!(matches!(
            DefaultSpec::from_expr(parse_quote!(NoDefault)),
            DefaultSpec::NoDefault
        ));
        assert!(matches!(
            DefaultSpec::from_expr(parse_quote!(NO_DEFAULT)),
            DefaultSpec::Value(_)
        ));
        assert!(DefaultSpec::from_expr(parse_quote!(-1)).has_value());
    }
}
