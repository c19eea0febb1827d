//! The compile-time description of a record.
//!
//! [`Record`] is usually implemented with `#[derive(Record)]`. It lists the
//! field names in declaration order, the optional defaults descriptor, and
//! visits every field together with its default. The record traits in
//! [`crate::traits`] are built on top of these visits.
//!
//! ```
//! use varmix_variant::derive::Record;
//! use varmix_variant::record::{self, Record};
//!
//! #[derive(Record, Default, PartialEq, Debug)]
//! #[var(defaults(b = NoDefault))]
//! struct Conf {
//!     #[var(default = 42)]
//!     a: i32,
//!     b: Option<i32>,
//! }
//!
//! assert_eq!(Conf::FIELDS, ["a", "b"]);
//! assert!(record::has_defaults::<Conf>());
//! assert!(record::has_default_value::<Conf>("a"));
//! assert!(record::no_default::<Conf>("b"));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod defaults;

// -----------------------------------------------------------------------------
// Exports

pub use defaults::{DefaultEntry, DefaultKind, DefaultValue};
pub use defaults::{has_default_value, has_defaults, no_default, present, validate_explicit};

use crate::{FromVariant, ToVariant, VariantError};

// -----------------------------------------------------------------------------
// Field

/// Bound shared by every record field.
///
/// Equality is needed to omit fields equal to their default.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a record field",
    note = "a field must implement `ToVariant`, `FromVariant` and `PartialEq`"
)]
pub trait Field: ToVariant + FromVariant + PartialEq {}

impl<T: ToVariant + FromVariant + PartialEq> Field for T {}

// -----------------------------------------------------------------------------
// Visitors

/// Receives the fields of a record by shared reference.
pub trait FieldVisitor {
    fn visit<F: Field>(&mut self, name: &'static str, value: &F, default: DefaultValue<F>);
}

/// Receives the fields of a record by mutable reference.
///
/// Returning an error stops the visit.
pub trait FieldVisitorMut {
    fn visit<F: Field>(
        &mut self,
        name: &'static str,
        value: &mut F,
        default: DefaultValue<F>,
    ) -> Result<(), VariantError>;
}

// -----------------------------------------------------------------------------
// Record

/// A struct with named fields known at compile time.
///
/// It's recommended to use the [derive macro](crate::derive::Record) rather
/// than implementing this trait by hand.
///
/// # Contract
///
/// - `FIELDS` holds unique names, in the order `visit_fields` visits them.
/// - `visit_field_mut` visits the field called `name` and returns `None` only
///   if there is no such field.
/// - The [`DefaultValue`] passed for a field agrees with `DEFAULTS`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Record`",
    note = "consider annotating `{Self}` with `#[derive(Record)]`"
)]
pub trait Record {
    /// The type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// The defaults descriptor, `None` if the record has none.
    const DEFAULTS: Option<&'static [DefaultEntry]>;

    /// Visits every field in declaration order.
    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V);

    /// Visits every field in declaration order, stopping at the first error.
    fn visit_fields_mut<V: FieldVisitorMut>(&mut self, visitor: &mut V) -> Result<(), VariantError>;

    /// Visits the field called `name`.
    fn visit_field_mut<V: FieldVisitorMut>(
        &mut self,
        name: &str,
        visitor: &mut V,
    ) -> Option<Result<(), VariantError>>;
}
