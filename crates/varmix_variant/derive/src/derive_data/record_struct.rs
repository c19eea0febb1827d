use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, WherePredicate, parse_quote};

use super::{DefaultDecl, FieldAttributes, TypeAttributes};

/// A named field of a record.
#[derive(Debug)]
pub(crate) struct RecordField<'a> {
    pub ident: &'a Ident,
    /// The field name without `r#`.
    pub name: String,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

/// A struct with named fields, with its `#[var(...)]` attributes parsed.
#[derive(Debug)]
pub(crate) struct RecordStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    pub fields: Vec<RecordField<'a>>,
}

impl<'a> RecordStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "only structs with named fields are supported",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "only structs with named fields are supported",
            ));
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let Some(ident) = &field.ident else {
                continue;
            };
            fields.push(RecordField {
                ident,
                name: ident.unraw().to_string(),
                ty: &field.ty,
                attrs: FieldAttributes::parse_attrs(field)?,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            attrs,
            fields,
        })
    }

    /// All defaults entries: type-level ones first, then field-level ones in
    /// field order. `None` if the record declares neither.
    pub fn descriptor(&self) -> Option<Vec<&DefaultDecl>> {
        let from_fields = self.fields.iter().filter_map(|f| f.attrs.default.as_ref());
        match &self.attrs.defaults {
            Some(list) => Some(list.iter().chain(from_fields).collect()),
            None => {
                let list: Vec<_> = from_fields.collect();
                if list.is_empty() { None } else { Some(list) }
            }
        }
    }

    /// The defaults entry for the field called `name`.
    pub fn default_of(&self, name: &str) -> Option<&DefaultDecl> {
        self.attrs
            .defaults
            .iter()
            .flatten()
            .chain(self.fields.iter().filter_map(|f| f.attrs.default.as_ref()))
            .find(|d| d.name == name)
    }

    /// Rejects a name listed twice in the descriptor.
    pub fn check_duplicates(&self) -> syn::Result<()> {
        let Some(descriptor) = self.descriptor() else {
            return Ok(());
        };
        let mut errors: Option<syn::Error> = None;
        for (index, decl) in descriptor.iter().enumerate() {
            if descriptor[..index].iter().any(|d| d.name == decl.name) {
                let err = syn::Error::new(
                    decl.span,
                    format_args!("duplicate default for `{}`", decl.name),
                );
                combine(&mut errors, err);
            }
        }
        errors.map_or(Ok(()), Err)
    }

    /// Requires a descriptor that lists every field, and nothing else.
    pub fn check_explicit(&self) -> syn::Result<()> {
        let Some(descriptor) = self.descriptor() else {
            return Err(syn::Error::new(
                self.ident.span(),
                format_args!(
                    "`{}` must have a defaults descriptor, add `#[var(defaults(...))]`",
                    self.ident
                ),
            ));
        };

        let mut errors: Option<syn::Error> = None;
        for field in &self.fields {
            if !descriptor.iter().any(|d| d.name == field.name) {
                let err = syn::Error::new(
                    field.ident.span(),
                    format_args!(
                        "`{}` not present in defaults, give it a value or `NoDefault`",
                        field.name
                    ),
                );
                combine(&mut errors, err);
            }
        }
        for decl in &descriptor {
            if !self.fields.iter().any(|f| f.name == decl.name) {
                let err = syn::Error::new(
                    decl.span,
                    format_args!("unknown field `{}` in defaults", decl.name),
                );
                combine(&mut errors, err);
            }
        }
        errors.map_or(Ok(()), Err)
    }

    /// The policy attributes, if any were given.
    pub fn has_policy_attrs(&self) -> bool {
        self.attrs.policy.is_some()
            || self.attrs.serialize_default_value.is_some()
            || self.attrs.serialize_empty_container.is_some()
    }

    /// `impl` generics, type generics and a where clause.
    ///
    /// For generic records every field type is bounded by `field_bound`, and
    /// `extra` predicates are appended.
    pub fn split_generics(
        &self,
        field_bound: Option<&TokenStream>,
        extra: &[WherePredicate],
    ) -> (TokenStream, TokenStream, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut where_clause = where_clause.cloned().unwrap_or_else(|| parse_quote!(where));
        if let Some(bound) = field_bound
            && self.generics.type_params().next().is_some()
        {
            for field in &self.fields {
                let ty = field.ty;
                where_clause.predicates.push(parse_quote!(#ty: #bound));
            }
        }
        where_clause.predicates.extend(extra.iter().cloned());

        (
            impl_generics.to_token_stream(),
            ty_generics.to_token_stream(),
            if where_clause.predicates.is_empty() {
                TokenStream::new()
            } else {
                where_clause.to_token_stream()
            },
        )
    }

    /// `Self: bound` for generic records, nothing otherwise.
    pub fn generic_bounds_on_self(&self, bound: &dyn ToTokens) -> Vec<WherePredicate> {
        if self.generics.type_params().next().is_none() {
            return Vec::new();
        }
        let ident = self.ident;
        let (_, ty_generics, _) = self.generics.split_for_impl();
        vec![parse_quote!(#ident #ty_generics: #bound)]
    }
}

fn combine(slot: &mut Option<syn::Error>, err: syn::Error) {
    match slot {
        Some(first) => first.combine(err),
        None => *slot = Some(err),
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::{DeriveInput, parse_quote};

    use super::RecordStruct;

    fn names(record: &RecordStruct) -> Vec<String> {
        record
            .descriptor()
            .unwrap_or_default()
            .iter()
            .map(|d| d.name.clone())
            .collect()
    }

    #[test]
    fn rejects_non_records() {
        let ast: DeriveInput = parse_quote!(struct T(u8););
        assert!(RecordStruct::from_ast(&ast).is_err());
        let ast: DeriveInput = parse_quote!(enum E { A });
        assert!(RecordStruct::from_ast(&ast).is_err());
    }

    #[test]
    fn descriptor_merges_type_and_fields() {
        let ast: DeriveInput = parse_quote! {
            #[var(defaults(b = NoDefault))]
            struct R {
                #[var(default = 1)]
                a: i32,
                b: Option<i32>,
                r#type: u8,
            }
        };
        let record = RecordStruct::from_ast(&ast).unwrap();
        assert_eq!(names(&record), ["b", "a"]);
        assert_eq!(record.fields[2].name, "type");
        assert!(record.default_of("a").is_some_and(|d| d.spec.has_value()));
        assert!(record.default_of("type").is_none());
        assert!(record.check_duplicates().is_ok());
    }

    #[test]
    fn no_descriptor() {
        let ast: DeriveInput = parse_quote!(struct R { x: i32 });
        let record = RecordStruct::from_ast(&ast).unwrap();
        assert!(record.descriptor().is_none());

        let err = record.check_explicit().unwrap_err();
        assert!(err.to_string().starts_with("`R` must have a defaults descriptor"));
    }

    #[test]
    fn duplicates() {
        let ast: DeriveInput = parse_quote! {
            #[var(defaults(x = 1))]
            struct R {
                #[var(no_default)]
                x: i32,
            }
        };
        let record = RecordStruct::from_ast(&ast).unwrap();
        let err = record.check_duplicates().unwrap_err();
        assert_eq!(err.to_string(), "duplicate default for `x`");
    }

    #[test]
    fn explicit_coverage() {
        let ast: DeriveInput = parse_quote! {
            #[var(defaults(x = 0, bogus = 1))]
            struct R {
                x: i32,
                y: i32,
            }
        };
        let record = RecordStruct::from_ast(&ast).unwrap();
        let messages: Vec<_> = record
            .check_explicit()
            .unwrap_err()
            .into_iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(
            messages,
            [
                "`y` not present in defaults, give it a value or `NoDefault`",
                "unknown field `bogus` in defaults",
            ]
        );

        let ast: DeriveInput = parse_quote! {
            #[var(defaults(x = 0, y = NoDefault))]
            struct R {
                x: i32,
                y: i32,
            }
        };
        assert!(RecordStruct::from_ast(&ast).unwrap().check_explicit().is_ok());
    }

    #[test]
    fn generic_bounds() {
        let ast: DeriveInput = parse_quote! {
            struct R<T> where T: Clone {
                a: Vec<T>,
            }
        };
        let record = RecordStruct::from_ast(&ast).unwrap();
        let bound = quote!(Field);
        let (_, _, where_clause) = record.split_generics(Some(&bound), &[]);
        assert_eq!(
            where_clause.to_string(),
            quote!(where T: Clone, Vec<T>: Field).to_string()
        );

        let ast: DeriveInput = parse_quote!(struct S { a: u8 });
        let record = RecordStruct::from_ast(&ast).unwrap();
        let (_, _, where_clause) = record.split_generics(Some(&bound), &[]);
        assert!(where_clause.is_empty());
    }
}
