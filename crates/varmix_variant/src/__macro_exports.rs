//! Paths used by derive output and `macro_rules!` expansions.
//!
//! Generated code only names items through `::varmix_variant::__macro_exports`,
//! so downstream crates need no `alloc` in scope.

pub use alloc::vec::Vec;

pub use crate::convert::{FromVariant, ToVariant};
pub use crate::error::VariantError;
pub use crate::record::{DefaultEntry, DefaultValue, Field, FieldVisitor, FieldVisitorMut, Record};
pub use crate::traits::{UpdateFromOpt, UpdateFromVar, Var, VarDef, VarDefExplicit, VarDefPolicy};
pub use crate::value::Variant;
