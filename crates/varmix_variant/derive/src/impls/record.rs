use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::ext::IdentExt;
use syn::{DeriveInput, Expr, ExprLit, Lit, LitFloat, LitStr, Type};

use crate::derive_data::{DefaultSpec, RecordField, RecordStruct};
use crate::path::fp::{DefaultFP, IntoFP, OptionFP, ResultFP};
use crate::utils::{is_float, is_int_literal, is_literal, is_plain_literal, option_inner};

pub(crate) fn impl_record(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let info = RecordStruct::from_ast(ast)?;
    info.check_duplicates()?;

    let varmix_variant_path = crate::path::varmix_variant();
    let record_ = crate::path::record_(&varmix_variant_path);
    let field_ = crate::path::field_(&varmix_variant_path);
    let field_visitor_ = crate::path::field_visitor_(&varmix_variant_path);
    let field_visitor_mut_ = crate::path::field_visitor_mut_(&varmix_variant_path);
    let default_entry_ = crate::path::default_entry_(&varmix_variant_path);
    let default_value_ = crate::path::default_value_(&varmix_variant_path);
    let variant_error_ = crate::path::variant_error_(&varmix_variant_path);

    let type_name = info.ident.unraw().to_string();

    let defaults = match info.descriptor() {
        Some(descriptor) => {
            let entries = descriptor.iter().map(|decl| {
                let name = LitStr::new(&decl.name, decl.span);
                if decl.spec.has_value() {
                    quote!(#default_entry_::value(#name))
                } else {
                    quote!(#default_entry_::no_default(#name))
                }
            });
            quote! {{
                const ENTRIES: &[#default_entry_] = &[ #(#entries),* ];
                #OptionFP::Some(ENTRIES)
            }}
        }
        None => quote!(#OptionFP::None),
    };

    let members: Vec<_> = info.fields.iter().map(|f| f.ident).collect();
    let names: Vec<_> = info
        .fields
        .iter()
        .map(|f| LitStr::new(&f.name, f.ident.span()))
        .collect();
    let default_values: Vec<_> = info
        .fields
        .iter()
        .map(|f| default_value(&info, f, &default_value_))
        .collect();

    let some_ = quote!(#OptionFP::Some);

    let ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics(Some(&field_), &[]);

    Ok(quote! {
        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const FIELDS: &'static [&'static str] = &[ #(#names),* ];
            const DEFAULTS: #OptionFP<&'static [#default_entry_]> = #defaults;

            fn visit_fields<__V: #field_visitor_>(&self, __visitor: &mut __V) {
                #(
                    #field_visitor_::visit(__visitor, #names, &self.#members, #default_values);
                )*
            }

            fn visit_fields_mut<__V: #field_visitor_mut_>(
                &mut self,
                __visitor: &mut __V,
            ) -> #ResultFP<(), #variant_error_> {
                #(
                    #field_visitor_mut_::visit(__visitor, #names, &mut self.#members, #default_values)?;
                )*
                #ResultFP::Ok(())
            }

            fn visit_field_mut<__V: #field_visitor_mut_>(
                &mut self,
                __name: &str,
                __visitor: &mut __V,
            ) -> #OptionFP<#ResultFP<(), #variant_error_>> {
                match __name {
                    #(
                        #names => #some_(
                            #field_visitor_mut_::visit(__visitor, #names, &mut self.#members, #default_values)
                        ),
                    )*
                    _ => #OptionFP::None,
                }
            }
        }
    })
}

/// The `DefaultValue<F>` expression passed along with a field.
///
/// Value defaults become a non-capturing closure, so a default that does not
/// convert to the field type is reported at the defaults entry.
fn default_value(
    info: &RecordStruct,
    field: &RecordField,
    default_value_: &TokenStream,
) -> TokenStream {
    let ty = field.ty;
    let Some(decl) = info.default_of(&field.name) else {
        return quote!(#default_value_::<#ty>::Unlisted);
    };
    match &decl.spec {
        DefaultSpec::NoDefault => quote!(#default_value_::<#ty>::NoDefault),
        DefaultSpec::DefaultTrait => {
            quote!(#default_value_::<#ty>::Value(<#ty as #DefaultFP>::default))
        }
        DefaultSpec::Value(expr) => {
            // A literal for an optional field is the payload of `Some`.
            let value = match option_inner(ty) {
                Some(inner) if is_literal(expr) => {
                    let payload = converted(expr, inner, decl.span);
                    quote_spanned!(decl.span=> #OptionFP::Some(#payload))
                }
                _ => converted(expr, ty, decl.span),
            };
            quote_spanned! {decl.span=>
                #default_value_::<#ty>::Value(|| {
                    let __value: #ty = #value;
                    __value
                })
            }
        }
    }
}

/// `expr` converted to `ty`.
///
/// Plain literals are typed by `ty` directly, an integer literal widens to a
/// float field, anything else goes through `Into`.
fn converted(expr: &Expr, ty: &Type, span: Span) -> TokenStream {
    if is_int_literal(expr) && is_float(ty) {
        widened(expr)
    } else if is_plain_literal(expr) {
        quote!(#expr)
    } else {
        quote_spanned!(span=> #IntoFP::into(#expr))
    }
}

/// Rewrites an integer literal as the float literal of the same value.
fn widened(expr: &Expr) -> TokenStream {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(int), .. }) => {
            let float = LitFloat::new(&format!("{}.0", int.base10_digits()), int.span());
            quote!(#float)
        }
        Expr::Unary(unary) => {
            let inner = widened(&unary.expr);
            quote!(-#inner)
        }
        Expr::Group(group) => widened(&group.expr),
        Expr::Paren(paren) => widened(&paren.expr),
        other => quote!(#other),
    }
}
