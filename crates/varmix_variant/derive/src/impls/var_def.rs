use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use super::impl_variant_traits;
use crate::derive_data::RecordStruct;
use crate::path::fp::DefaultFP;

pub(crate) fn impl_var_def(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let info = RecordStruct::from_ast(ast)?;

    let varmix_variant_path = crate::path::varmix_variant();
    let var_def_ = crate::path::var_def_(&varmix_variant_path);
    let field_ = crate::path::field_(&varmix_variant_path);

    let policy = policy_const(&info, &varmix_variant_path)?;

    let extra = info.generic_bounds_on_self(&DefaultFP);
    let ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics(Some(&field_), &extra);

    let variant_traits = impl_variant_traits(
        &info,
        &varmix_variant_path,
        &extra,
        quote!(<Self as #var_def_>::to_var_def),
        quote!(<Self as #var_def_>::from_var_def),
    );

    Ok(quote! {
        impl #impl_generics #var_def_ for #ident #ty_generics #where_clause {
            #policy
        }

        #variant_traits
    })
}

/// `const POLICY` from `policy = PATH` or the `serialize_*` flags.
fn policy_const(info: &RecordStruct, varmix_variant_path: &syn::Path) -> syn::Result<TokenStream> {
    let var_def_policy_ = crate::path::var_def_policy_(varmix_variant_path);
    let attrs = &info.attrs;

    if let Some(path) = &attrs.policy {
        if let Some(flag) = attrs
            .serialize_empty_container
            .as_ref()
            .or(attrs.serialize_default_value.as_ref())
        {
            return Err(syn::Error::new(
                flag.span(),
                "`policy` cannot be combined with `serialize_*` flags",
            ));
        }
        return Ok(quote! {
            const POLICY: #var_def_policy_ = #path;
        });
    }

    if !info.has_policy_attrs() {
        return Ok(crate::utils::empty());
    }

    let mut policy = quote!(#var_def_policy_::DEFAULT);
    if let Some(flag) = &attrs.serialize_empty_container {
        policy = quote!(#policy.with_serialize_empty_container(#flag));
    }
    if let Some(flag) = &attrs.serialize_default_value {
        policy = quote!(#policy.with_serialize_default_value(#flag));
    }
    Ok(quote! {
        const POLICY: #var_def_policy_ = #policy;
    })
}

pub(crate) fn impl_var_def_explicit(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let info = RecordStruct::from_ast(ast)?;
    info.check_explicit()?;
    if info.has_policy_attrs() {
        return Err(syn::Error::new(
            info.ident.span(),
            "`VarDefExplicit` always uses the stock policy, derive `VarDef` to choose one",
        ));
    }

    let varmix_variant_path = crate::path::varmix_variant();
    let var_def_ = crate::path::var_def_(&varmix_variant_path);
    let var_def_explicit_ = crate::path::var_def_explicit_(&varmix_variant_path);
    let field_ = crate::path::field_(&varmix_variant_path);

    let extra = info.generic_bounds_on_self(&DefaultFP);
    let ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics(Some(&field_), &extra);

    // Generic records are checked when a method is instantiated.
    let checked = if info.generics.params.is_empty() {
        quote! {
            const _: () = <#ident as #var_def_explicit_>::CHECKED;
        }
    } else {
        crate::utils::empty()
    };

    let variant_traits = impl_variant_traits(
        &info,
        &varmix_variant_path,
        &extra,
        quote!(<Self as #var_def_explicit_>::to_var_explicit),
        quote!(<Self as #var_def_explicit_>::from_var_explicit),
    );

    Ok(quote! {
        impl #impl_generics #var_def_ for #ident #ty_generics #where_clause {}

        impl #impl_generics #var_def_explicit_ for #ident #ty_generics #where_clause {}

        #checked

        #variant_traits
    })
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::policy_const;
    use crate::derive_data::RecordStruct;

    fn policy_of(ast: &DeriveInput) -> syn::Result<String> {
        let info = RecordStruct::from_ast(ast).unwrap();
        policy_const(&info, &parse_quote!(::varmix_variant)).map(|t| t.to_string())
    }

    #[test]
    fn stock_policy_emits_nothing() {
        let ast: DeriveInput = parse_quote!(struct R { a: u8 });
        assert_eq!(policy_of(&ast).unwrap(), "");
    }

    #[test]
    fn flags_build_on_default() {
        let ast: DeriveInput = parse_quote! {
            #[var(serialize_default_value = false)]
            struct R { a: u8 }
        };
        let policy = policy_of(&ast).unwrap();
        assert!(policy.contains("VarDefPolicy :: DEFAULT . with_serialize_default_value (false)"));
        assert!(!policy.contains("with_serialize_empty_container"));
    }

    #[test]
    fn path_and_flags_conflict() {
        let ast: DeriveInput = parse_quote! {
            #[var(policy = QUIET, serialize_empty_container = true)]
            struct R { a: u8 }
        };
        assert!(policy_of(&ast).is_err());

        let ast: DeriveInput = parse_quote! {
            #[var(policy = crate::QUIET)]
            struct R { a: u8 }
        };
        assert!(policy_of(&ast).unwrap().contains("crate :: QUIET"));
    }
}
