use core::hash::{BuildHasher, Hash};
use std::collections::{HashMap, HashSet};

use alloc::string::String;

use super::container::{map_from_variant, map_to_variant, seq_from_variant, seq_to_variant};
use super::{FromVariant, ToVariant};
use crate::{Variant, VariantError};

impl<T: ToVariant, S> ToVariant for HashMap<String, T, S> {
    #[inline]
    fn to_variant(&self) -> Variant {
        map_to_variant(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl<T: FromVariant, S: BuildHasher + Default> FromVariant for HashMap<String, T, S> {
    #[inline]
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        map_from_variant(variant)
    }
}

/// Iteration order of a `HashSet` is unspecified, so is the element order of
/// the encoded sequence.
impl<T: ToVariant, S> ToVariant for HashSet<T, S> {
    #[inline]
    fn to_variant(&self) -> Variant {
        seq_to_variant(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> FromVariant for HashSet<T, S>
where
    T: FromVariant + Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        seq_from_variant(variant)
    }
}
