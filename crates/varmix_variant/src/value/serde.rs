//! Bridges [`Variant`] to any `serde` data format.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Formatter};

use serde_core::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_core::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Variant, VariantMap};

// -----------------------------------------------------------------------------
// Serialize

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => {
                // Prefer the 64-bit entry points, many formats lack 128-bit support.
                if let Ok(i) = i64::try_from(*i) {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = u64::try_from(*i) {
                    serializer.serialize_u64(u)
                } else {
                    serializer.serialize_i128(*i)
                }
            }
            Self::Double(d) => serializer.serialize_f64(*d),
            Self::String(s) => serializer.serialize_str(s),
            Self::Seq(seq) => {
                let mut state = serializer.serialize_seq(Some(seq.len()))?;
                for item in seq {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Self::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Deserialize

/// A [`Visitor`] accepting any self-describing value.
struct VariantVisitor;

impl<'de> Visitor<'de> for VariantVisitor {
    type Value = Variant;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("any variant value")
    }

    #[inline]
    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Variant::Bool(v))
    }

    #[inline]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Variant::from(v))
    }

    #[inline]
    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(Variant::Integer(v))
    }

    #[inline]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Variant::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        i128::try_from(v)
            .map(Variant::Integer)
            .map_err(|_| E::custom("integer does not fit in 128 signed bits"))
    }

    #[inline]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Variant::Double(v))
    }

    #[inline]
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Variant::from(v))
    }

    #[inline]
    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Variant::String(v))
    }

    #[inline]
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Variant::Null)
    }

    #[inline]
    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Variant::Null)
    }

    #[inline]
    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Variant::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(item) = seq.next_element::<Variant>()? {
            items.push(item);
        }
        Ok(Variant::Seq(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries =
            VariantMap::with_capacity_and_hasher(map.size_hint().unwrap_or_default(), <_>::default());
        while let Some((key, value)) = map.next_entry::<String, Variant>()? {
            entries.insert(key, value);
        }
        Ok(Variant::Map(entries))
    }
}

impl<'de> Deserialize<'de> for Variant {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(VariantVisitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::{Variant, varmap, varseq};

    #[test]
    fn json_keeps_field_order() {
        let v = varmap! {
            "name" => "k",
            "values" => varseq![1, 2.5, true, Variant::Null],
            "nested" => varmap! { "z" => 0, "a" => -1 },
        };

        let text = serde_json::to_string(&v).unwrap();
        assert_eq!(
            text,
            r#"{"name":"k","values":[1,2.5,true,null],"nested":{"z":0,"a":-1}}"#
        );

        let back: Variant = serde_json::from_str(&text).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn large_unsigned_survives_json() {
        let v = Variant::from(u64::MAX);
        let text = serde_json::to_string(&v).unwrap();
        assert_eq!(text, "18446744073709551615");
        assert_eq!(serde_json::from_str::<Variant>(&text).unwrap(), v);
    }

    #[test]
    fn ron_round_trip() {
        let v = varmap! { "flag" => false, "label" => String::from("x") };
        let text = ron::to_string(&v).unwrap();
        let back: Variant = ron::from_str(&text).unwrap();
        assert_eq!(back, v);
    }
}
