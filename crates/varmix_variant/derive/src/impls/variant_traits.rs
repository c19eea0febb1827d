use proc_macro2::TokenStream;
use quote::quote;
use syn::WherePredicate;

use crate::derive_data::RecordStruct;
use crate::path::fp::ResultFP;

/// `ToVariant` and `FromVariant` for a record, delegating to the given
/// record-trait functions so the record can be a field of another record.
pub(crate) fn impl_variant_traits(
    info: &RecordStruct,
    varmix_variant_path: &syn::Path,
    extra: &[WherePredicate],
    to_fn: TokenStream,
    from_fn: TokenStream,
) -> TokenStream {
    let field_ = crate::path::field_(varmix_variant_path);
    let to_variant_ = crate::path::to_variant_(varmix_variant_path);
    let from_variant_ = crate::path::from_variant_(varmix_variant_path);
    let variant_ = crate::path::variant_(varmix_variant_path);
    let variant_error_ = crate::path::variant_error_(varmix_variant_path);

    let ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics(Some(&field_), extra);

    quote! {
        impl #impl_generics #to_variant_ for #ident #ty_generics #where_clause {
            #[inline]
            fn to_variant(&self) -> #variant_ {
                #to_fn(self)
            }
        }

        impl #impl_generics #from_variant_ for #ident #ty_generics #where_clause {
            #[inline]
            fn from_variant(__variant: &#variant_) -> #ResultFP<Self, #variant_error_> {
                #from_fn(__variant)
            }
        }
    }
}
