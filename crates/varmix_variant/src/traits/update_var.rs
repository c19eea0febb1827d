use crate::record::{DefaultValue, Field, FieldVisitorMut, Record};
use crate::{Variant, VariantError};

/// In-place update from a map.
///
/// Entries are applied in map order. A key naming no field fails with
/// [`VariantError::UnknownField`]; fields without an entry keep their value.
///
/// On failure, entries before the failing one stay applied.
///
/// # Examples
///
/// ```
/// use varmix_variant::{UpdateFromVar, VariantError, varmap};
/// use varmix_variant::derive::{Record, UpdateFromVar};
///
/// #[derive(Record, UpdateFromVar)]
/// struct R {
///     n: String,
///     v: i32,
/// }
///
/// let mut r = R { n: "k".into(), v: 1 };
/// r.update_var(&varmap! { "v" => 5 }).unwrap();
/// assert_eq!((r.n.as_str(), r.v), ("k", 5));
///
/// let err = r.update_var(&varmap! { "z" => 0 }).unwrap_err();
/// assert_eq!(err.field_name(), Some("z"));
/// ```
pub trait UpdateFromVar: Record {
    fn update_var(&mut self, variant: &Variant) -> Result<(), VariantError> {
        for (key, value) in variant.map()? {
            match self.visit_field_mut(key, &mut Assign { value }) {
                Some(result) => result?,
                None => {
                    return Err(VariantError::UnknownField {
                        record: Self::TYPE_NAME,
                        key: key.clone(),
                    });
                }
            }
            log::debug!("`{}`: updated `{key}`", Self::TYPE_NAME);
        }
        Ok(())
    }
}

struct Assign<'a> {
    value: &'a Variant,
}

impl FieldVisitorMut for Assign<'_> {
    #[inline]
    fn visit<F: Field>(
        &mut self,
        name: &'static str,
        value: &mut F,
        _: DefaultValue<F>,
    ) -> Result<(), VariantError> {
        *value = F::from_variant(self.value).map_err(|e| e.in_field(name))?;
        Ok(())
    }
}
