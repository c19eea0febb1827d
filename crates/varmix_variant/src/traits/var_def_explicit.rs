use crate::record::validate_explicit;
use crate::traits::var_def::{self, VarDef, VarDefPolicy};
use crate::{DefaultsError, Variant, VariantError};

/// [`VarDef`] with the stock policy, for records whose defaults descriptor
/// lists every field.
///
/// The descriptor is checked by [`CHECKED`](VarDefExplicit::CHECKED) when a
/// method of this trait is compiled. The derive macro reports the same
/// problems earlier, pointing at the offending field or key.
///
/// # Examples
///
/// ```
/// use varmix_variant::{VarDefExplicit, varmap};
/// use varmix_variant::derive::{Record, VarDefExplicit};
///
/// #[derive(Record, VarDefExplicit, Default, Debug, PartialEq)]
/// #[var(defaults(x = 1, y = NoDefault))]
/// struct R {
///     x: i32,
///     y: Option<i32>,
/// }
///
/// assert_eq!(R::from_var_explicit(&varmap! {}), Ok(R { x: 1, y: None }));
/// assert_eq!(R { x: 1, y: Some(2) }.to_var_explicit(), varmap! { "x" => 1, "y" => 2 });
/// ```
///
/// A field missing from the descriptor does not compile:
///
/// ```compile_fail
/// use varmix_variant::derive::{Record, VarDefExplicit};
///
/// #[derive(Record, VarDefExplicit, Default)]
/// #[var(defaults(x = 1))]
/// struct R {
///     x: i32,
///     y: i32,
/// }
/// ```
///
/// # Hand-written records
///
/// A const panic message cannot format values, so for a [`Record`](crate::Record)
/// implemented by hand the failure of `CHECKED` does not name the field or key.
/// [`validate_explicit`] returns the same verdict as a [`DefaultsError`] that
/// does, for example in a unit test of the impl.
pub trait VarDefExplicit: VarDef {
    /// Evaluates to `()` if the defaults descriptor is complete, and fails
    /// to compile otherwise.
    const CHECKED: () = match validate_explicit::<Self>() {
        Ok(()) => (),
        Err(DefaultsError::Unlisted { .. }) => {
            panic!("`VarDefExplicit` requires a `defaults` descriptor")
        }
        Err(DefaultsError::Missing { .. }) => {
            panic!("a field is not present in the `defaults` descriptor")
        }
        Err(DefaultsError::UnknownKey { .. }) => {
            panic!("the `defaults` descriptor names an unknown field")
        }
    };

    #[inline]
    fn to_var_explicit(&self) -> Variant {
        let () = Self::CHECKED;
        var_def::to_variant_with(self, VarDefPolicy::DEFAULT)
    }

    #[inline]
    fn from_var_explicit(variant: &Variant) -> Result<Self, VariantError> {
        let () = Self::CHECKED;
        var_def::from_variant(variant)
    }
}
