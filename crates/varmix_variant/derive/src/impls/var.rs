use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use super::impl_variant_traits;
use crate::derive_data::RecordStruct;
use crate::path::fp::DefaultFP;

pub(crate) fn impl_var(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let info = RecordStruct::from_ast(ast)?;

    let varmix_variant_path = crate::path::varmix_variant();
    let var_ = crate::path::var_(&varmix_variant_path);
    let field_ = crate::path::field_(&varmix_variant_path);

    let extra = info.generic_bounds_on_self(&DefaultFP);

    let ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics(Some(&field_), &extra);

    let variant_traits = impl_variant_traits(
        &info,
        &varmix_variant_path,
        &extra,
        quote!(<Self as #var_>::to_var),
        quote!(<Self as #var_>::from_var),
    );

    Ok(quote! {
        impl #impl_generics #var_ for #ident #ty_generics #where_clause {}

        #variant_traits
    })
}
