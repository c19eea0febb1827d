use alloc::string::String;

use crate::record::{DefaultValue, Field, FieldVisitor, FieldVisitorMut, Record};
use crate::{Variant, VariantError, VariantMap};

/// Strict one-to-one conversion.
///
/// Encoding writes every field under its name, absent optionals as
/// [`Variant::Null`]. Decoding requires a key for every field, and fails with
/// [`VariantError::MissingField`] otherwise, even for optional fields.
/// Defaults are not consulted.
///
/// # Examples
///
/// ```
/// use varmix_variant::{Var, VariantError, varmap};
/// use varmix_variant::derive::{Record, Var};
///
/// #[derive(Record, Var, Default, Debug, PartialEq)]
/// struct R {
///     i: i32,
///     s: String,
/// }
///
/// let r = R { i: 7, s: "a".into() };
/// assert_eq!(r.to_var(), varmap! { "i" => 7, "s" => "a" });
/// assert_eq!(R::from_var(&varmap! { "i" => 7, "s" => "a" }), Ok(r));
///
/// let err = R::from_var(&varmap! { "i" => 7 }).unwrap_err();
/// assert_eq!(err, VariantError::MissingField { record: "R", field: "s" });
/// ```
pub trait Var: Record + Default {
    fn to_var(&self) -> Variant {
        let mut encoder = Encoder {
            map: VariantMap::with_capacity_and_hasher(Self::FIELDS.len(), Default::default()),
        };
        self.visit_fields(&mut encoder);
        Variant::Map(encoder.map)
    }

    fn from_var(variant: &Variant) -> Result<Self, VariantError> {
        let mut decoder = Decoder {
            record: Self::TYPE_NAME,
            map: variant.map()?,
        };
        let mut record = Self::default();
        record.visit_fields_mut(&mut decoder)?;
        Ok(record)
    }
}

struct Encoder {
    map: VariantMap,
}

impl FieldVisitor for Encoder {
    #[inline]
    fn visit<F: Field>(&mut self, name: &'static str, value: &F, _: DefaultValue<F>) {
        self.map.insert(String::from(name), value.to_variant());
    }
}

struct Decoder<'a> {
    record: &'static str,
    map: &'a VariantMap,
}

impl FieldVisitorMut for Decoder<'_> {
    fn visit<F: Field>(
        &mut self,
        name: &'static str,
        value: &mut F,
        _: DefaultValue<F>,
    ) -> Result<(), VariantError> {
        let Some(item) = self.map.get(name) else {
            return Err(VariantError::MissingField {
                record: self.record,
                field: name,
            });
        };
        *value = F::from_variant(item).map_err(|e| e.in_field(name))?;
        Ok(())
    }
}
