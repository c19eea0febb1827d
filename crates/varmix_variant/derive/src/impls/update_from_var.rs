use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::RecordStruct;

pub(crate) fn impl_update_from_var(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let info = RecordStruct::from_ast(ast)?;

    let varmix_variant_path = crate::path::varmix_variant();
    let update_from_var_ = crate::path::update_from_var_(&varmix_variant_path);
    let field_ = crate::path::field_(&varmix_variant_path);

    let ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics(Some(&field_), &[]);

    Ok(quote! {
        impl #impl_generics #update_from_var_ for #ident #ty_generics #where_clause {}
    })
}
