use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt::Display;

use thiserror::Error;

use crate::value::VariantKind;

// -----------------------------------------------------------------------------
// VariantError

/// Failure of a conversion between a [`Variant`](crate::Variant) and a Rust value.
///
/// Failures inside a record are wrapped in [`VariantError::Field`], so the
/// outermost error always names the field that could not be decoded.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum VariantError {
    #[error("`{field}` of `{record}` not found in map, and default value is not provided")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("'{key}' no such member of `{record}`")]
    UnknownField { record: &'static str, key: String },

    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: VariantKind,
    },

    #[error("integer {value} out of range for `{target}`")]
    OutOfRange { value: i128, target: &'static str },

    #[error("expected a sequence of length {expected}, found length {found}")]
    Length { expected: usize, found: usize },

    #[error("field `{field}`: {source}")]
    Field {
        field: &'static str,
        source: Box<VariantError>,
    },

    #[error("index {index}: {source}")]
    Index {
        index: usize,
        source: Box<VariantError>,
    },

    #[error("key '{key}': {source}")]
    Key {
        key: String,
        source: Box<VariantError>,
    },

    #[error("{0}")]
    Custom(String),
}

impl VariantError {
    /// Error for a user-defined [`FromVariant`](crate::FromVariant) implementation.
    #[inline]
    pub fn custom(msg: impl Display) -> Self {
        Self::Custom(msg.to_string())
    }

    #[inline]
    pub(crate) fn mismatch(expected: &'static str, found: VariantKind) -> Self {
        Self::Mismatch { expected, found }
    }

    #[inline]
    pub(crate) fn in_field(self, field: &'static str) -> Self {
        Self::Field {
            field,
            source: Box::new(self),
        }
    }

    #[inline]
    pub(crate) fn at_index(self, index: usize) -> Self {
        Self::Index {
            index,
            source: Box::new(self),
        }
    }

    #[inline]
    pub(crate) fn at_key(self, key: &str) -> Self {
        Self::Key {
            key: key.into(),
            source: Box::new(self),
        }
    }

    /// The record field this error is about, if any.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. } | Self::Field { field, .. } => Some(field),
            Self::UnknownField { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Strip the [`Field`](Self::Field), [`Index`](Self::Index) and
    /// [`Key`](Self::Key) wrappers and return the underlying failure.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Field { source, .. } | Self::Index { source, .. } | Self::Key { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

// -----------------------------------------------------------------------------
// DefaultsError

/// A defaults descriptor that does not cover its record exactly.
///
/// Produced by [`validate_explicit`](crate::record::validate_explicit), which
/// `VarDefExplicit` evaluates at compile time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DefaultsError {
    #[error("`{record}` must have a `defaults` descriptor")]
    Unlisted { record: &'static str },

    #[error("`{field}` not present in defaults() of `{record}`")]
    Missing {
        record: &'static str,
        field: &'static str,
    },

    #[error("there are unknown fields in defaults() of `{record}`: `{key}`")]
    UnknownKey {
        record: &'static str,
        key: &'static str,
    },
}
