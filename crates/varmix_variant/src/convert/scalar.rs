use alloc::boxed::Box;
use alloc::string::String;

use super::{FromVariant, ToVariant};
use crate::{Variant, VariantError};

// -----------------------------------------------------------------------------
// Primitives

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl ToVariant for $ty {
            #[inline]
            fn to_variant(&self) -> Variant {
                Variant::from(*self)
            }
        }

        impl FromVariant for $ty {
            #[inline]
            fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
                <$ty>::try_from(variant)
            }
        }
    )*};
}

impl_scalar!(
    bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize,
);

// -----------------------------------------------------------------------------
// Text

impl ToVariant for str {
    #[inline]
    fn to_variant(&self) -> Variant {
        Variant::from(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl ToVariant for String {
    #[inline]
    fn to_variant(&self) -> Variant {
        Variant::from(self.as_str())
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl FromVariant for String {
    #[inline]
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        String::try_from(variant)
    }
}

// -----------------------------------------------------------------------------
// Variant

impl ToVariant for Variant {
    #[inline]
    fn to_variant(&self) -> Variant {
        self.clone()
    }

    fn is_empty_container(&self) -> bool {
        match self {
            Variant::Seq(seq) => seq.is_empty(),
            Variant::Map(map) => map.is_empty(),
            _ => false,
        }
    }
}

impl FromVariant for Variant {
    #[inline]
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        Ok(variant.clone())
    }
}

// -----------------------------------------------------------------------------
// Option

impl<T: ToVariant> ToVariant for Option<T> {
    /// `None` encodes as [`Variant::Null`].
    #[inline]
    fn to_variant(&self) -> Variant {
        self.as_ref().map_or(Variant::Null, T::to_variant)
    }

    #[inline]
    fn to_variant_opt(&self) -> Option<Variant> {
        self.as_ref().map(T::to_variant)
    }
}

impl<T: FromVariant> FromVariant for Option<T> {
    /// [`Variant::Null`] decodes as `None`.
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        if variant.is_null() {
            Ok(None)
        } else {
            T::from_variant(variant).map(Some)
        }
    }

    #[inline]
    fn absent() -> Option<Self> {
        Some(None)
    }
}

// -----------------------------------------------------------------------------
// Indirection

impl<T: ToVariant + ?Sized> ToVariant for &T {
    #[inline]
    fn to_variant(&self) -> Variant {
        T::to_variant(self)
    }

    #[inline]
    fn to_variant_opt(&self) -> Option<Variant> {
        T::to_variant_opt(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        T::is_empty_container(self)
    }
}

impl<T: ToVariant + ?Sized> ToVariant for Box<T> {
    #[inline]
    fn to_variant(&self) -> Variant {
        T::to_variant(self)
    }

    #[inline]
    fn to_variant_opt(&self) -> Option<Variant> {
        T::to_variant_opt(self)
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        T::is_empty_container(self)
    }
}

impl<T: FromVariant> FromVariant for Box<T> {
    #[inline]
    fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
        T::from_variant(variant).map(Box::new)
    }

    #[inline]
    fn absent() -> Option<Self> {
        T::absent().map(Box::new)
    }
}
