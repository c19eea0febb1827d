use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::spanned::Spanned;
use syn::{Attribute, Field, LitBool, MetaNameValue, Path, Token, Type, parenthesized};

use super::{DefaultDecl, DefaultSpec};
use crate::VAR_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// `#[var(...)]` attributes on the type.
///
/// Every derive parses all of them, and only acts on those it needs, so the
/// same attribute list can be shared by `#[derive(Record, VarDef)]`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `defaults(a = expr, b = NoDefault)`, `Some` even when written empty.
    pub defaults: Option<Vec<DefaultDecl>>,
    /// `serialize_empty_container = bool`
    pub serialize_empty_container: Option<LitBool>,
    /// `serialize_default_value = bool`
    pub serialize_default_value: Option<LitBool>,
    /// `policy = PATH`
    pub policy: Option<Path>,
    /// `target = Type`, repeatable.
    pub targets: Vec<Type>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(VAR_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("defaults") {
            // `defaults()` declares a descriptor without entries.
            let content;
            parenthesized!(content in meta.input);
            let entries = content.parse_terminated(MetaNameValue::parse, Token![,])?;
            let defaults = self.defaults.get_or_insert_with(Vec::new);
            for entry in entries {
                let ident = entry.path.require_ident()?;
                defaults.push(DefaultDecl {
                    name: ident.unraw().to_string(),
                    span: ident.span(),
                    spec: DefaultSpec::from_expr(entry.value),
                });
            }
            Ok(())
        } else if meta.path.is_ident("serialize_empty_container") {
            let value: LitBool = meta.value()?.parse()?;
            set_once(&mut self.serialize_empty_container, value, &meta)
        } else if meta.path.is_ident("serialize_default_value") {
            let value: LitBool = meta.value()?.parse()?;
            set_once(&mut self.serialize_default_value, value, &meta)
        } else if meta.path.is_ident("policy") {
            let value: Path = meta.value()?.parse()?;
            set_once(&mut self.policy, value, &meta)
        } else if meta.path.is_ident("target") {
            self.targets.push(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error(
                "unknown `var` attribute, expected `defaults`, `serialize_empty_container`, \
                 `serialize_default_value`, `policy` or `target`",
            ))
        }
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// `#[var(...)]` attributes on a named field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `default`, `default = expr` or `no_default`.
    pub default: Option<DefaultDecl>,
}

impl FieldAttributes {
    pub fn parse_attrs(field: &Field) -> syn::Result<Self> {
        let mut this = Self::default();
        let Some(ident) = &field.ident else {
            return Ok(this);
        };
        let name = ident.unraw().to_string();

        for attr in &field.attrs {
            if !attr.path().is_ident(VAR_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let spec = if meta.path.is_ident("default") {
                    if meta.input.peek(Token![=]) {
                        DefaultSpec::Value(meta.value()?.parse()?)
                    } else {
                        DefaultSpec::DefaultTrait
                    }
                } else if meta.path.is_ident("no_default") {
                    DefaultSpec::NoDefault
                } else {
                    return Err(meta.error(
                        "unknown `var` field attribute, expected `default` or `no_default`",
                    ));
                };

                if this.default.is_some() {
                    return Err(meta.error(format_args!("duplicate default for `{name}`")));
                }
                this.default = Some(DefaultDecl {
                    name: name.clone(),
                    span: meta.path.span(),
                    spec,
                });
                Ok(())
            })?;
        }
        Ok(this)
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("attribute given more than once"));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::{FieldAttributes, TypeAttributes};
    use crate::derive_data::DefaultSpec;

    #[test]
    fn type_level() {
        let ast: DeriveInput = parse_quote! {
            #[derive(Record)]
            #[var(defaults(a = 42, b = NoDefault, c = vec![1, 2]))]
            #[var(serialize_default_value = false, target = Other<u8>, target = Third)]
            struct R;
        };
        let attrs = TypeAttributes::parse_attrs(&ast.attrs).unwrap();

        let defaults = attrs.defaults.unwrap();
        let names: Vec<_> = defaults.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert!(matches!(defaults[1].spec, DefaultSpec::NoDefault));
        assert!(matches!(defaults[2].spec, DefaultSpec::Value(_)));

        assert_eq!(attrs.serialize_default_value.map(|b| b.value), Some(false));
        assert!(attrs.serialize_empty_container.is_none());
        assert_eq!(attrs.targets.len(), 2);
    }

    #[test]
    fn empty_descriptor_is_still_a_descriptor() {
        let ast: DeriveInput = parse_quote! {
            #[var(defaults())]
            struct R;
        };
        let attrs = TypeAttributes::parse_attrs(&ast.attrs).unwrap();
        assert_eq!(attrs.defaults.map(|d| d.len()), Some(0));
    }

    #[test]
    fn type_level_errors() {
        let ast: DeriveInput = parse_quote! {
            #[var(policy = A, policy = B)]
            struct R;
        };
        assert!(TypeAttributes::parse_attrs(&ast.attrs).is_err());

        let ast: DeriveInput = parse_quote! {
            #[var(serialise_default_value = false)]
            struct R;
        };
        let err = TypeAttributes::parse_attrs(&ast.attrs).unwrap_err();
        assert!(err.to_string().starts_with("unknown `var` attribute"));
    }

    #[test]
    fn field_level() {
        let ast: DeriveInput = parse_quote! {
            struct R {
                #[var(default = "x")]
                a: String,
                #[var(default)]
                b: u8,
                #[var(no_default)]
                c: u8,
                #[serde(skip)]
                d: u8,
            }
        };
        let syn::Data::Struct(data) = &ast.data else {
            unreachable!()
        };
        let specs: Vec<_> = data
            .fields
            .iter()
            .map(|f| FieldAttributes::parse_attrs(f).unwrap().default.map(|d| d.spec))
            .collect();
        assert!(matches!(specs[0], Some(DefaultSpec::Value(_))));
        assert!(matches!(specs[1], Some(DefaultSpec::DefaultTrait)));
        assert!(matches!(specs[2], Some(DefaultSpec::NoDefault)));
        assert!(specs[3].is_none());
    }

    #[test]
    fn field_level_duplicate() {
        let ast: DeriveInput = parse_quote! {
            struct R {
                #[var(default = 1, no_default)]
                a: u8,
            }
        };
        let syn::Data::Struct(data) = &ast.data else {
            unreachable!()
        };
        let field = data.fields.iter().next().unwrap();
        let err = FieldAttributes::parse_attrs(field).unwrap_err();
        assert_eq!(err.to_string(), "duplicate default for `a`");
    }
}
