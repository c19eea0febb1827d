//! Parsing of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod defaults;
mod record_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use defaults::{DefaultDecl, DefaultSpec};
pub(crate) use record_struct::{RecordField, RecordStruct};
