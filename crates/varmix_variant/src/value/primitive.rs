use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::{Variant, VariantMap};
use crate::VariantError;

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($($ty:ident),* $(,)?) => {$(
        impl From<$ty> for Variant {
            #[inline]
            fn from(value: $ty) -> Self {
                // Lossless: every source type is at most 64 bits wide, or i128 itself.
                Self::Integer(value as i128)
            }
        }

        impl TryFrom<&Variant> for $ty {
            type Error = VariantError;

            fn try_from(value: &Variant) -> Result<Self, Self::Error> {
                match value {
                    Variant::Integer(i) => <$ty>::try_from(*i).map_err(|_| VariantError::OutOfRange {
                        value: *i,
                        target: stringify!($ty),
                    }),
                    other => Err(VariantError::mismatch("integer", other.kind())),
                }
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

// -----------------------------------------------------------------------------
// Floats

impl From<f64> for Variant {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<f32> for Variant {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Double(f64::from(value))
    }
}

impl TryFrom<&Variant> for f64 {
    type Error = VariantError;

    #[inline]
    fn try_from(value: &Variant) -> Result<Self, Self::Error> {
        value
            .as_double()
            .ok_or_else(|| VariantError::mismatch("double", value.kind()))
    }
}

impl TryFrom<&Variant> for f32 {
    type Error = VariantError;

    #[inline]
    fn try_from(value: &Variant) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|d| d as f32)
    }
}

// -----------------------------------------------------------------------------
// Bool

impl From<bool> for Variant {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl TryFrom<&Variant> for bool {
    type Error = VariantError;

    #[inline]
    fn try_from(value: &Variant) -> Result<Self, Self::Error> {
        value
            .as_bool()
            .ok_or_else(|| VariantError::mismatch("bool", value.kind()))
    }
}

// -----------------------------------------------------------------------------
// Text

impl From<String> for Variant {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Variant {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<char> for Variant {
    #[inline]
    fn from(value: char) -> Self {
        Self::String(value.to_string())
    }
}

impl TryFrom<&Variant> for String {
    type Error = VariantError;

    #[inline]
    fn try_from(value: &Variant) -> Result<Self, Self::Error> {
        value
            .as_str()
            .map(String::from)
            .ok_or_else(|| VariantError::mismatch("string", value.kind()))
    }
}

impl TryFrom<&Variant> for char {
    type Error = VariantError;

    fn try_from(value: &Variant) -> Result<Self, Self::Error> {
        let s = value
            .as_str()
            .ok_or_else(|| VariantError::mismatch("single character string", value.kind()))?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(VariantError::custom("expected a single character string")),
        }
    }
}

// -----------------------------------------------------------------------------
// Composite

impl From<Vec<Variant>> for Variant {
    #[inline]
    fn from(value: Vec<Variant>) -> Self {
        Self::Seq(value)
    }
}

impl From<VariantMap> for Variant {
    #[inline]
    fn from(value: VariantMap) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Variant>> From<Option<T>> for Variant {
    /// `None` becomes [`Variant::Null`].
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Variant> for Variant {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Variant>>(iter: I) -> Self {
        Self::Seq(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Variant)> for Variant {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, Variant)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::{Variant, VariantError, VariantKind};

    #[test]
    fn unsigned_extremes_are_lossless() {
        let v = Variant::from(u64::MAX);
        assert_eq!(v, Variant::Integer(u64::MAX as i128));
        assert_eq!(u64::try_from(&v), Ok(u64::MAX));
        assert_eq!(
            i64::try_from(&v),
            Err(VariantError::OutOfRange {
                value: u64::MAX as i128,
                target: "i64",
            })
        );
    }

    #[test]
    fn narrowing_reports_range() {
        let v = Variant::from(300);
        assert!(matches!(
            u8::try_from(&v),
            Err(VariantError::OutOfRange { value: 300, target: "u8" })
        ));
        assert_eq!(u16::try_from(&v), Ok(300));
    }

    #[test]
    fn kind_mismatch() {
        assert_eq!(
            bool::try_from(&Variant::from("yes")),
            Err(VariantError::Mismatch {
                expected: "bool",
                found: VariantKind::String,
            })
        );
        assert_eq!(f64::try_from(&Variant::from(2)), Ok(2.0));
        assert_eq!(String::try_from(&Variant::from('x')), Ok(String::from("x")));
        assert!(char::try_from(&Variant::from("xy")).is_err());
    }

    #[test]
    fn none_is_null() {
        assert_eq!(Variant::from(None::<i32>), Variant::Null);
        assert_eq!(Variant::from(Some(true)), Variant::Bool(true));
    }
}
