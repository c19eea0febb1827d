//! The dynamically typed value tree records convert to and from.
//!
//! - [`Variant`]: null, bool, integer, double, string, sequence or map.
//! - [`VariantMap`]: the map payload, ordered by insertion.
//! - [`VariantKind`]: the tag of a [`Variant`], used in error messages.
//!
//! Primitives convert into a [`Variant`] with [`From`], and back out with
//! [`TryFrom<&Variant>`](TryFrom). Both are the lowest layer of the
//! [`ToVariant`](crate::ToVariant) / [`FromVariant`](crate::FromVariant) dispatch.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod map;
mod primitive;
mod serde;

// -----------------------------------------------------------------------------
// Exports

pub use kind::VariantKind;
pub use map::{FixedHashState, VariantMap};

use alloc::string::String;
use alloc::vec::Vec;

use crate::VariantError;

// -----------------------------------------------------------------------------
// Variant

/// A self-describing dynamic value.
///
/// Integers are stored as `i128` so that every 64-bit signed or unsigned
/// primitive round-trips without loss.
///
/// # Examples
///
/// ```
/// use varmix_variant::{Variant, varmap};
///
/// let v = varmap! { "i" => 7, "s" => "a" };
///
/// let map = v.map().unwrap();
/// assert_eq!(map["i"], Variant::Integer(7));
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["i", "s"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Variant {
    #[default]
    Null,
    Bool(bool),
    Integer(i128),
    Double(f64),
    String(String),
    Seq(Vec<Variant>),
    Map(VariantMap),
}

impl Variant {
    /// Creates an empty [`Variant::Map`].
    #[inline]
    pub fn new_map() -> Self {
        Self::Map(VariantMap::default())
    }

    /// Returns the tag of this value.
    #[inline]
    pub const fn kind(&self) -> VariantKind {
        match self {
            Self::Null => VariantKind::Null,
            Self::Bool(_) => VariantKind::Bool,
            Self::Integer(_) => VariantKind::Integer,
            Self::Double(_) => VariantKind::Double,
            Self::String(_) => VariantKind::String,
            Self::Seq(_) => VariantKind::Seq,
            Self::Map(_) => VariantKind::Map,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Same as [`is_null`](Self::is_null).
    #[inline]
    pub const fn empty(&self) -> bool {
        self.is_null()
    }

    /// Returns the map payload, or [`VariantError::Mismatch`] if this is not a map.
    #[inline]
    pub fn map(&self) -> Result<&VariantMap, VariantError> {
        self.as_map()
            .ok_or_else(|| VariantError::mismatch("map", self.kind()))
    }

    #[inline]
    pub const fn as_map(&self) -> Option<&VariantMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_map_mut(&mut self) -> Option<&mut VariantMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn into_map(self) -> Result<VariantMap, Self> {
        match self {
            Self::Map(map) => Ok(map),
            other => Err(other),
        }
    }

    #[inline]
    pub const fn as_seq(&self) -> Option<&Vec<Variant>> {
        match self {
            Self::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as `f64`, widening integers.
    #[inline]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Looks up `key` if this is a map.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Variant> {
        self.as_map().and_then(|map| map.get(key))
    }
}
