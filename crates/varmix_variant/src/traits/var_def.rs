//! Defaults-aware conversion.
//!
//! [`VarDef`] runs with the record's [`VarDef::POLICY`]. The functions of this
//! module run any [`VarDefPolicy`] on any [`Record`].

use alloc::string::String;

use crate::record::{DefaultValue, Field, FieldVisitor, FieldVisitorMut, Record};
use crate::{Variant, VariantError, VariantMap};

// -----------------------------------------------------------------------------
// VarDefPolicy

/// Controls which fields [`VarDef`] encoding may omit.
///
/// Decoding does not depend on the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarDefPolicy {
    /// If `false`, container fields holding no element are omitted.
    pub serialize_empty_container: bool,
    /// If `false`, fields equal to their default value are omitted.
    pub serialize_default_value: bool,
}

impl VarDefPolicy {
    /// Serialize everything.
    pub const DEFAULT: Self = Self {
        serialize_empty_container: true,
        serialize_default_value: true,
    };

    #[inline]
    pub const fn with_serialize_empty_container(mut self, value: bool) -> Self {
        self.serialize_empty_container = value;
        self
    }

    #[inline]
    pub const fn with_serialize_default_value(mut self, value: bool) -> Self {
        self.serialize_default_value = value;
        self
    }
}

impl Default for VarDefPolicy {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

// -----------------------------------------------------------------------------
// VarDef

/// Conversion that consults the defaults descriptor.
///
/// Encoding, per field in declaration order:
///
/// - an absent optional is omitted;
/// - with `serialize_default_value == false`, a field equal to its default value is omitted;
/// - with `serialize_empty_container == false`, an empty container is omitted;
/// - anything else is written under its name.
///
/// Decoding, per field in declaration order:
///
/// - a present key is decoded, `Null` decoding to an absent optional;
/// - a missing key takes the default value if there is one;
/// - otherwise a missing optional is left absent;
/// - otherwise decoding fails with [`VariantError::MissingField`].
///
/// Keys naming no field are ignored.
///
/// # Examples
///
/// ```
/// use varmix_variant::{VarDef, Variant, varmap};
/// use varmix_variant::derive::{Record, VarDef};
///
/// #[derive(Record, VarDef, Default, Debug, PartialEq)]
/// #[var(defaults(a = 42, b = NoDefault))]
/// struct R {
///     a: i32,
///     b: Option<i32>,
/// }
///
/// assert_eq!(R::from_var_def(&varmap! {}), Ok(R { a: 42, b: None }));
/// assert_eq!(R::from_var_def(&varmap! { "a" => 1, "b" => Variant::Null }), Ok(R { a: 1, b: None }));
/// assert_eq!(R::from_var_def(&varmap! { "a" => 1, "b" => 9 }), Ok(R { a: 1, b: Some(9) }));
///
/// assert_eq!(R { a: 1, b: None }.to_var_def(), varmap! { "a" => 1 });
/// ```
pub trait VarDef: Record + Default {
    /// The policy used by [`to_var_def`](VarDef::to_var_def).
    const POLICY: VarDefPolicy = VarDefPolicy::DEFAULT;

    #[inline]
    fn to_var_def(&self) -> Variant {
        to_variant_with(self, Self::POLICY)
    }

    #[inline]
    fn from_var_def(variant: &Variant) -> Result<Self, VariantError> {
        from_variant(variant)
    }
}

// -----------------------------------------------------------------------------
// Functions

/// Encodes `record` under `policy`.
pub fn to_variant_with<R: Record + ?Sized>(record: &R, policy: VarDefPolicy) -> Variant {
    let mut encoder = Encoder {
        record: R::TYPE_NAME,
        policy,
        map: VariantMap::with_capacity_and_hasher(R::FIELDS.len(), Default::default()),
    };
    record.visit_fields(&mut encoder);
    Variant::Map(encoder.map)
}

/// Decodes a fresh `R` from `variant`.
pub fn from_variant<R: Record + Default>(variant: &Variant) -> Result<R, VariantError> {
    let map = variant.map()?;
    let mut decoder = Decoder {
        record: R::TYPE_NAME,
        map,
    };
    let mut record = R::default();
    record.visit_fields_mut(&mut decoder)?;

    if log::log_enabled!(log::Level::Debug) {
        for key in map.keys() {
            if !R::FIELDS.contains(&key.as_str()) {
                log::debug!("`{}`: ignored unknown key '{key}'", R::TYPE_NAME);
            }
        }
    }

    Ok(record)
}

struct Encoder {
    record: &'static str,
    policy: VarDefPolicy,
    map: VariantMap,
}

impl FieldVisitor for Encoder {
    fn visit<F: Field>(&mut self, name: &'static str, value: &F, default: DefaultValue<F>) {
        let Some(encoded) = value.to_variant_opt() else {
            log::trace!("`{}`: `{name}` is absent, omitted", self.record);
            return;
        };

        // A present optional always carries its payload.
        if F::absent().is_some() {
            self.map.insert(String::from(name), encoded);
            return;
        }

        if !self.policy.serialize_default_value
            && let DefaultValue::Value(make) = default
            && *value == make()
        {
            log::trace!("`{}`: `{name}` equals its default, omitted", self.record);
            return;
        }

        if !self.policy.serialize_empty_container && value.is_empty_container() {
            log::trace!("`{}`: `{name}` is an empty container, omitted", self.record);
            return;
        }

        self.map.insert(String::from(name), encoded);
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
        default: DefaultValue<F>,
    ) -> Result<(), VariantError> {
        if let Some(item) = self.map.get(name) {
            *value = F::from_variant(item).map_err(|e| e.in_field(name))?;
        } else if let DefaultValue::Value(make) = default {
            log::trace!("`{}`: `{name}` missing, using its default", self.record);
            *value = make();
        } else if let Some(absent) = F::absent() {
            *value = absent;
        } else {
            return Err(VariantError::MissingField {
                record: self.record,
                field: name,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{VarDefPolicy, to_variant_with};
    use crate::derive::{Record, VarDef};
    use crate::{VarDef, Variant, VariantError, VariantKind, varmap};

    #[derive(Record, VarDef, Default, Debug, PartialEq)]
    #[var(defaults(a = 42, b = NoDefault))]
    struct Ab {
        a: i32,
        b: Option<i32>,
    }

    #[derive(Record, VarDef, Default, Debug, PartialEq)]
    #[var(defaults(a = 0), serialize_default_value = false)]
    struct OmitDefault {
        a: i32,
    }

    #[derive(Record, VarDef, Default, Debug, PartialEq)]
    #[var(serialize_empty_container = false)]
    struct OmitEmpty {
        items: Vec<u8>,
        index: BTreeMap<String, u8>,
        label: String,
        count: u8,
    }

    #[derive(Record, VarDef, Default, Debug, PartialEq)]
    #[var(serialize_default_value = false)]
    struct Tuned {
        a: i32,
        #[var(default = Some(3))]
        b: Option<i32>,
    }

    #[derive(Record, VarDef, Default, Debug, PartialEq)]
    #[var(defaults(ratio = 1, scale = -2, limit = 3, name = "n"))]
    struct Widened {
        ratio: f64,
        scale: f32,
        limit: Option<i32>,
        name: Option<String>,
    }

    const QUIET: VarDefPolicy = VarDefPolicy::DEFAULT
        .with_serialize_default_value(false)
        .with_serialize_empty_container(false);

    #[derive(Record, VarDef, Default, Debug, PartialEq)]
    #[var(policy = QUIET)]
    struct Settings {
        #[var(default = "main")]
        branch: String,
        #[var(default)]
        depth: u32,
        #[var(default = vec![String::from("origin")])]
        remotes: Vec<String>,
        mirrors: Vec<String>,
        token: Option<String>,
        #[var(no_default)]
        retries: u8,
    }

    #[test]
    fn literal_defaults() {
        assert_eq!(Ab::from_var_def(&varmap! {}), Ok(Ab { a: 42, b: None }));
        assert_eq!(
            Ab::from_var_def(&varmap! { "a" => 1, "b" => Variant::Null }),
            Ok(Ab { a: 1, b: None })
        );
        assert_eq!(
            Ab::from_var_def(&varmap! { "a" => 1, "b" => 9 }),
            Ok(Ab { a: 1, b: Some(9) })
        );
    }

    #[test]
    fn absent_optional_is_omitted() {
        let v = Ab { a: 5, b: None }.to_var_def();
        assert_eq!(v, varmap! { "a" => 5 });
        assert_eq!(Ab::from_var_def(&v), Ok(Ab { a: 5, b: None }));

        let v = Ab { a: 5, b: Some(0) }.to_var_def();
        assert_eq!(v, varmap! { "a" => 5, "b" => 0 });
    }

    #[test]
    fn stock_policy_keeps_defaults() {
        assert_eq!(Ab { a: 42, b: None }.to_var_def(), varmap! { "a" => 42 });
    }

    #[test]
    fn omit_default_value() {
        assert_eq!(OmitDefault { a: 0 }.to_var_def(), Variant::new_map());
        assert_eq!(OmitDefault { a: 1 }.to_var_def(), varmap! { "a" => 1 });
        assert_eq!(
            to_variant_with(&OmitDefault { a: 0 }, VarDefPolicy::DEFAULT),
            varmap! { "a" => 0 }
        );
    }

    #[test]
    fn present_optional_keeps_default_payload() {
        assert_eq!(
            Tuned { a: 1, b: Some(3) }.to_var_def(),
            varmap! { "a" => 1, "b" => 3 }
        );
        assert_eq!(Tuned { a: 0, b: None }.to_var_def(), varmap! { "a" => 0 });
        assert_eq!(Tuned::from_var_def(&varmap! { "a" => 0 }), Ok(Tuned { a: 0, b: Some(3) }));
    }

    #[test]
    fn literal_defaults_convert_to_field_type() {
        assert_eq!(
            Widened::from_var_def(&varmap! {}),
            Ok(Widened {
                ratio: 1.0,
                scale: -2.0,
                limit: Some(3),
                name: Some(String::from("n")),
            })
        );
    }

    #[test]
    fn omit_empty_container() {
        let r = OmitEmpty::default();
        assert_eq!(r.to_var_def(), varmap! { "count" => 0 });

        let r = OmitEmpty {
            items: vec![1],
            label: "l".into(),
            ..Default::default()
        };
        assert_eq!(
            r.to_var_def(),
            varmap! { "items" => vec![1_u8], "label" => "l", "count" => 0 }
        );
    }

    #[test]
    fn missing_without_default_fails() {
        assert_eq!(
            OmitEmpty::from_var_def(&varmap! { "items" => Variant::Seq(Vec::new()) }),
            Err(VariantError::MissingField {
                record: "OmitEmpty",
                field: "index"
            })
        );
    }

    #[test]
    fn null_container_is_a_mismatch() {
        let v = varmap! {
            "items" => Variant::Null,
            "index" => Variant::new_map(),
            "label" => "",
            "count" => 1,
        };
        let err = OmitEmpty::from_var_def(&v).unwrap_err();
        assert_eq!(err.field_name(), Some("items"));
        assert_eq!(
            err.root_cause(),
            &VariantError::Mismatch {
                expected: "sequence",
                found: VariantKind::Null
            }
        );
    }

    #[test]
    fn field_level_defaults() {
        let s = Settings::from_var_def(&varmap! { "mirrors" => Vec::<String>::new(), "retries" => 3 })
            .unwrap();
        assert_eq!(s.branch, "main");
        assert_eq!(s.depth, 0);
        assert_eq!(s.remotes, ["origin"]);
        assert_eq!(s.token, None);
        assert_eq!(s.retries, 3);

        assert_eq!(s.to_var_def(), varmap! { "retries" => 3 });

        let err = Settings::from_var_def(&varmap! { "mirrors" => Vec::<String>::new() }).unwrap_err();
        assert_eq!(err.field_name(), Some("retries"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let v = varmap! { "a" => 2, "zzz" => "?" };
        assert_eq!(Ab::from_var_def(&v), Ok(Ab { a: 2, b: None }));
    }

    #[test]
    fn defaulting_law() {
        for v in [varmap! {}, varmap! { "b" => 1 }, varmap! { "b" => Variant::Null }] {
            assert_eq!(Ab::from_var_def(&v).map(|r| r.a), Ok(42));
        }
    }
}
