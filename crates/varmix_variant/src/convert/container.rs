use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::BuildHasher;

use indexmap::IndexMap;

use super::{FromVariant, ToVariant};
use crate::{Variant, VariantError, VariantMap};

// -----------------------------------------------------------------------------
// Helpers

pub(super) fn seq_to_variant<'a, T, I>(items: I) -> Variant
where
    T: ToVariant + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Variant::Seq(items.into_iter().map(T::to_variant).collect())
}

/// Decodes every element of a sequence, tagging failures with their index.
pub(super) fn seq_from_variant<T, C>(variant: &Variant) -> Result<C, VariantError>
where
    T: FromVariant,
    C: FromIterator<T>,
{
    let seq = variant
        .as_seq()
        .ok_or_else(|| VariantError::mismatch("sequence", variant.kind()))?;
    seq.iter()
        .enumerate()
        .map(|(index, item)| T::from_variant(item).map_err(|e| e.at_index(index)))
        .collect()
}

pub(super) fn map_to_variant<'a, T, I>(entries: I) -> Variant
where
    T: ToVariant + 'a,
    I: IntoIterator<Item = (&'a String, &'a T)>,
{
    let mut map = VariantMap::default();
    for (key, value) in entries {
        map.insert(key.clone(), value.to_variant());
    }
    Variant::Map(map)
}

/// Decodes every value of a map, tagging failures with their key.
pub(super) fn map_from_variant<T, C>(variant: &Variant) -> Result<C, VariantError>
where
    T: FromVariant,
    C: FromIterator<(String, T)>,
{
    variant
        .map()?
        .iter()
        .map(|(key, value)| match T::from_variant(value) {
            Ok(value) => Ok((key.clone(), value)),
            Err(e) => Err(e.at_key(key)),
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Sequences

impl<T: ToVariant> ToVariant for [T] {
    #[inline]
    fn to_variant(&self) -> Variant {
        seq_to_variant(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ToVariant> ToVariant for Vec<T> {
    #[inline]
    fn to_variant(&self) -> Variant {
        seq_to_variant(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl<T: FromVariant> FromVariant for Vec<T> {
    #[inline]
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        seq_from_variant(variant)
    }
}

impl<T: ToVariant> ToVariant for VecDeque<T> {
    #[inline]
    fn to_variant(&self) -> Variant {
        seq_to_variant(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl<T: FromVariant> FromVariant for VecDeque<T> {
    #[inline]
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        seq_from_variant(variant)
    }
}

impl<T: ToVariant, const N: usize> ToVariant for [T; N] {
    #[inline]
    fn to_variant(&self) -> Variant {
        seq_to_variant(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        N == 0
    }
}

impl<T: FromVariant, const N: usize> FromVariant for [T; N] {
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        if let Some(seq) = variant.as_seq()
            && seq.len() != N
        {
            return Err(VariantError::Length {
                expected: N,
                found: seq.len(),
            });
        }
        let items: Vec<T> = seq_from_variant(variant)?;
        <[T; N]>::try_from(items).map_err(|items| VariantError::Length {
            expected: N,
            found: items.len(),
        })
    }
}

// -----------------------------------------------------------------------------
// Sets

impl<T: ToVariant> ToVariant for BTreeSet<T> {
    #[inline]
    fn to_variant(&self) -> Variant {
        seq_to_variant(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl<T: FromVariant + Ord> FromVariant for BTreeSet<T> {
    #[inline]
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        seq_from_variant(variant)
    }
}

// -----------------------------------------------------------------------------
// Maps

impl<T: ToVariant> ToVariant for BTreeMap<String, T> {
    #[inline]
    fn to_variant(&self) -> Variant {
        map_to_variant(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl<T: FromVariant> FromVariant for BTreeMap<String, T> {
    #[inline]
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        map_from_variant(variant)
    }
}

impl<T: ToVariant, S> ToVariant for IndexMap<String, T, S> {
    #[inline]
    fn to_variant(&self) -> Variant {
        map_to_variant(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl<T: FromVariant, S: BuildHasher + Default> FromVariant for IndexMap<String, T, S> {
    #[inline]
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        map_from_variant(variant)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::{FromVariant, ToVariant, Variant, VariantError, VariantKind, VariantMap};
    use crate::{varmap, varseq};

    #[test]
    fn vec_reports_failing_index() {
        let v = varseq![1, 2, "x"];
        let err = Vec::<i32>::from_variant(&v).unwrap_err();
        assert_eq!(
            err,
            VariantError::Index {
                index: 2,
                source: alloc::boxed::Box::new(VariantError::Mismatch {
                    expected: "integer",
                    found: VariantKind::String,
                }),
            }
        );
    }

    #[test]
    fn sequence_kinds_share_encoding() {
        let expected = varseq![1, 2];
        assert_eq!(vec![1, 2].to_variant(), expected);
        assert_eq!(VecDeque::from([1, 2]).to_variant(), expected);
        assert_eq!([1, 2].to_variant(), expected);
        assert_eq!(BTreeSet::from([2, 1]).to_variant(), expected);
        assert_eq!(<[i64; 2]>::from_variant(&expected), Ok([1, 2]));
    }

    #[test]
    fn array_length_is_checked() {
        assert_eq!(
            <[u8; 3]>::from_variant(&varseq![1, 2]),
            Err(VariantError::Length {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn null_is_not_an_empty_container() {
        assert_eq!(
            Vec::<u8>::from_variant(&Variant::Null),
            Err(VariantError::Mismatch {
                expected: "sequence",
                found: VariantKind::Null,
            })
        );
    }

    #[test]
    fn maps_keep_keys() {
        let tree = BTreeMap::from([(String::from("b"), 2), (String::from("a"), 1)]);
        let v = tree.to_variant();
        assert_eq!(v, varmap! { "a" => 1, "b" => 2 });
        assert_eq!(BTreeMap::<String, i32>::from_variant(&v), Ok(tree.clone()));

        let err = BTreeMap::<String, bool>::from_variant(&v).unwrap_err();
        assert!(matches!(&err, VariantError::Key { key, .. } if key == "a"));

        let dynamic = VariantMap::from_variant(&v).unwrap();
        assert_eq!(Variant::Map(dynamic), v);
    }

    #[test]
    fn emptiness() {
        assert!(Vec::<u8>::new().is_empty_container());
        assert!(BTreeMap::<String, u8>::new().is_empty_container());
        assert!(VariantMap::default().is_empty_container());
        assert!(!vec![0].is_empty_container());
        assert!(<[u8; 0]>::default().is_empty_container());
    }
}
