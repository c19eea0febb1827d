#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    varmix_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// Derive output names this crate as `::varmix_variant`, which must also work
// inside the crate's own tests and doctests.
extern crate self as varmix_variant;

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod macros;

pub mod convert;
pub mod record;
pub mod traits;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use convert::{FromVariant, ToVariant, from_variant, from_variant_into, to_variant};
pub use error::{DefaultsError, VariantError};
pub use record::{DefaultKind, DefaultValue, Field, Record};
pub use traits::{UpdateFromOpt, UpdateFromVar, Var, VarDef, VarDefExplicit, VarDefPolicy};
pub use value::{Variant, VariantKind, VariantMap};

pub use varmix_variant_derive as derive;
