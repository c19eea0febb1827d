//! Paths of the items generated code refers to.
//!
//! Everything goes through `varmix_variant::__macro_exports`, so moving an item
//! inside `varmix_variant` only needs a change there.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `varmix_variant` crate.
///
/// 1. For crates that depend on `varmix_variant`, `::varmix_variant` is returned.
/// 2. For crates that depend on `varmix`, `::varmix::variant` is returned.
/// 3. For other situations, `::varmix_variant` is returned, but this may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so the result is passed around
/// rather than requested again.
pub(crate) fn varmix_variant() -> syn::Path {
    varmix_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("varmix_variant"))
}

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Items

macro_rules! define_item_paths {
    ($($fn_name:ident => $item:ident,)*) => {$(
        #[inline(always)]
        pub(crate) fn $fn_name(varmix_variant_path: &syn::Path) -> TokenStream {
            quote! {
                #varmix_variant_path::__macro_exports::$item
            }
        }
    )*};
}

define_item_paths! {
    record_ => Record,
    field_ => Field,
    field_visitor_ => FieldVisitor,
    field_visitor_mut_ => FieldVisitorMut,
    default_value_ => DefaultValue,
    default_entry_ => DefaultEntry,
    variant_ => Variant,
    variant_error_ => VariantError,
    to_variant_ => ToVariant,
    from_variant_ => FromVariant,
    var_ => Var,
    var_def_ => VarDef,
    var_def_policy_ => VarDefPolicy,
    var_def_explicit_ => VarDefExplicit,
    update_from_var_ => UpdateFromVar,
    update_from_opt_ => UpdateFromOpt,
}
