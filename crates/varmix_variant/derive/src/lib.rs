//! Derive macros for `varmix_variant`.
//!
//! - [`Record`]: the field list and defaults descriptor every other derive builds on.
//! - [`Var`]: strict conversion.
//! - [`VarDef`]: defaults-aware conversion.
//! - [`VarDefExplicit`]: defaults-aware conversion with a complete descriptor.
//! - [`UpdateFromVar`]: in-place update from a map.
//! - [`UpdateFromOpt`]: in-place update from an options struct.
//!
//! All of them read `#[var(...)]` attributes.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static VAR_ATTRIBUTE_NAME: &str = "var";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

fn expand(
    input: TokenStream,
    imp: fn(&DeriveInput) -> syn::Result<proc_macro2::TokenStream>,
) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    imp(&ast).unwrap_or_else(syn::Error::into_compile_error).into()
}

/// # Record Description
///
/// `#[derive(Record)]` implements `Record` for a struct with named fields:
/// the type name, the field names in declaration order, the defaults
/// descriptor, and visits over the fields.
///
/// Every field type must implement `ToVariant`, `FromVariant` and `PartialEq`.
///
/// ## Defaults Descriptor
///
/// Defaults are given on the type, on the fields, or both:
///
/// ```rust, ignore
/// #[derive(Record)]
/// #[var(defaults(port = 8080, motd = NoDefault))]
/// struct Server {
///     port: u16,
///     motd: Option<String>,
///     #[var(default = "localhost")]
///     host: String,
///     #[var(default)]
///     peers: Vec<String>,
///     #[var(no_default)]
///     id: u64,
/// }
/// ```
///
/// - `name = expr`, `#[var(default = expr)]`: the default value. Non-string
///   literals take the field type directly, other expressions are converted
///   with `Into`, so a default of the wrong type does not compile.
/// - `#[var(default)]`: the field type's `Default::default()`.
/// - `name = NoDefault`, `#[var(no_default)]`: listed without a value.
///
/// Naming a field twice does not compile. Keys naming no field are kept in the
/// descriptor, and rejected by `VarDefExplicit`.
#[proc_macro_derive(Record, attributes(var))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    expand(input, impls::impl_record)
}

/// # Strict Conversion
///
/// `#[derive(Var)]` implements `Var`, plus `ToVariant` and `FromVariant`
/// through it. Requires `Record` and `Default`.
///
/// ```rust, ignore
/// #[derive(Record, Var, Default)]
/// struct Pair {
///     i: i32,
///     s: String,
/// }
/// ```
///
/// Derive at most one of `Var`, `VarDef` and `VarDefExplicit`, since each
/// implements `ToVariant` and `FromVariant`.
#[proc_macro_derive(Var, attributes(var))]
pub fn derive_var(input: TokenStream) -> TokenStream {
    expand(input, impls::impl_var)
}

/// # Defaults-aware Conversion
///
/// `#[derive(VarDef)]` implements `VarDef`, plus `ToVariant` and
/// `FromVariant` through it. Requires `Record` and `Default`.
///
/// ## Policy
///
/// The stock policy serializes everything. Flags turn omission on:
///
/// ```rust, ignore
/// #[derive(Record, VarDef, Default)]
/// #[var(defaults(a = 0), serialize_default_value = false, serialize_empty_container = false)]
/// struct R {
///     a: i32,
///     items: Vec<u8>,
/// }
/// ```
///
/// Or name a `VarDefPolicy` constant:
///
/// ```rust, ignore
/// const QUIET: VarDefPolicy = VarDefPolicy::DEFAULT.with_serialize_default_value(false);
///
/// #[derive(Record, VarDef, Default)]
/// #[var(policy = QUIET)]
/// struct R { /* ... */ }
/// ```
///
/// `policy` and the flags are mutually exclusive.
#[proc_macro_derive(VarDef, attributes(var))]
pub fn derive_var_def(input: TokenStream) -> TokenStream {
    expand(input, impls::impl_var_def)
}

/// # Explicit Defaults
///
/// `#[derive(VarDefExplicit)]` implements `VarDef` with the stock policy and
/// `VarDefExplicit`, plus `ToVariant` and `FromVariant` through the latter.
/// Requires `Record` and `Default`.
///
/// The defaults descriptor must list every field, each with a value or
/// `NoDefault`, and no other key. Violations are reported at the field or key.
///
/// ```rust, ignore
/// #[derive(Record, VarDefExplicit, Default)]
/// #[var(defaults(x = 0, y = NoDefault))]
/// struct R {
///     x: i32,
///     y: Option<i32>,
/// }
/// ```
#[proc_macro_derive(VarDefExplicit, attributes(var))]
pub fn derive_var_def_explicit(input: TokenStream) -> TokenStream {
    expand(input, impls::impl_var_def_explicit)
}

/// # Update From a Map
///
/// `#[derive(UpdateFromVar)]` implements `UpdateFromVar`. Requires `Record`.
#[proc_macro_derive(UpdateFromVar, attributes(var))]
pub fn derive_update_from_var(input: TokenStream) -> TokenStream {
    expand(input, impls::impl_update_from_var)
}

/// # Update From an Options Struct
///
/// `#[derive(UpdateFromOpt)]` on an options struct `O` implements
/// `UpdateFromOpt<O>` for each `#[var(target = Type)]`.
///
/// ```rust, ignore
/// #[derive(UpdateFromOpt)]
/// #[var(target = Server, target = Client)]
/// struct Endpoint {
///     host: Option<String>,
///     port: Option<u16>,
/// }
/// ```
///
/// Fields spelled `Option<..>` are applied only when `Some`, other fields
/// always overwrite. Values are converted with `From`. A field missing from a
/// target does not compile.
#[proc_macro_derive(UpdateFromOpt, attributes(var))]
pub fn derive_update_from_opt(input: TokenStream) -> TokenStream {
    expand(input, impls::impl_update_from_opt)
}
