//! The record traits.
//!
//! Each trait adds record-level operations on top of [`Record`](crate::Record):
//!
//! | trait | operations | missing key | unknown key |
//! |---|---|---|---|
//! | [`Var`] | `to_var` / `from_var` | `MissingField` | ignored |
//! | [`VarDef`] | `to_var_def` / `from_var_def` | default, absent optional, or `MissingField` | ignored |
//! | [`VarDefExplicit`] | `to_var_explicit` / `from_var_explicit` | as `VarDef` | ignored |
//! | [`UpdateFromVar`] | `update_var` | left unchanged | `UnknownField` |
//! | [`UpdateFromOpt`] | `update_opt` | left unchanged | compile error |
//!
//! All of them are derivable. `Var`, `VarDef` and `VarDefExplicit` derives also
//! implement [`ToVariant`](crate::ToVariant) and [`FromVariant`](crate::FromVariant)
//! for the record, so records nest inside each other; derive at most one of the three.

// -----------------------------------------------------------------------------
// Modules

mod update_opt;
mod update_var;
mod var;
mod var_def_explicit;

pub mod var_def;

// -----------------------------------------------------------------------------
// Exports

pub use update_opt::UpdateFromOpt;
pub use update_var::UpdateFromVar;
pub use var::Var;
pub use var_def::{VarDef, VarDefPolicy};
pub use var_def_explicit::VarDefExplicit;
