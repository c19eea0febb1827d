// -----------------------------------------------------------------------------
// Modules

mod record;
mod update_from_opt;
mod update_from_var;
mod var;
mod var_def;
mod variant_traits;

// -----------------------------------------------------------------------------
// Internal API

use variant_traits::impl_variant_traits;

pub(crate) use record::impl_record;
pub(crate) use update_from_opt::impl_update_from_opt;
pub(crate) use update_from_var::impl_update_from_var;
pub(crate) use var::impl_var;
pub(crate) use var_def::{impl_var_def, impl_var_def_explicit};
