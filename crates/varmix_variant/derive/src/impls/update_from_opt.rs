use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::DeriveInput;

use crate::derive_data::RecordStruct;
use crate::path::fp::{FromFP, OptionFP};
use crate::utils::is_option;

/// Implements `UpdateFromOpt<Self>` for every `#[var(target = ...)]`.
///
/// The generated body names the target's fields directly, so a field of the
/// options record without a counterpart fails to compile at that field.
pub(crate) fn impl_update_from_opt(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let info = RecordStruct::from_ast(ast)?;
    if info.attrs.targets.is_empty() {
        return Err(syn::Error::new(
            info.ident.span(),
            "`UpdateFromOpt` needs at least one `#[var(target = Type)]`",
        ));
    }

    let varmix_variant_path = crate::path::varmix_variant();
    let update_from_opt_ = crate::path::update_from_opt_(&varmix_variant_path);

    let ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics(None, &[]);

    let members: Vec<_> = info.fields.iter().map(|f| f.ident).collect();
    let bindings: Vec<_> = info
        .fields
        .iter()
        .map(|f| format_ident!("__{}", f.name, span = Span::mixed_site()))
        .collect();

    let assignments: Vec<_> = info
        .fields
        .iter()
        .zip(&bindings)
        .map(|(field, binding)| {
            let member = field.ident;
            if is_option(field.ty) {
                quote_spanned! {member.span()=>
                    if let #OptionFP::Some(__value) = #binding {
                        self.#member = #FromFP::from(__value);
                    }
                }
            } else {
                quote_spanned! {member.span()=>
                    self.#member = #FromFP::from(#binding);
                }
            }
        })
        .collect();

    let impls = info.attrs.targets.iter().map(|target| {
        quote! {
            impl #impl_generics #update_from_opt_<#ident #ty_generics> for #target #where_clause {
                fn update_opt(&mut self, __opts: #ident #ty_generics) {
                    let #ident { #(#members: #bindings),* } = __opts;
                    #(#assignments)*
                }
            }
        }
    });

    Ok(quote! {
        #(#impls)*
    })
}
