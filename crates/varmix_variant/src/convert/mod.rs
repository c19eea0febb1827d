//! Type-directed conversion between Rust values and [`Variant`].
//!
//! Every field of a record is converted through [`ToVariant`] and
//! [`FromVariant`]. Implementations are selected at compile time:
//!
//! 1. a hand-written implementation on the type itself;
//! 2. primitives, through `From<T> for Variant` and `TryFrom<&Variant> for T`;
//! 3. records, through the impls emitted by `#[derive(Var)]`, `#[derive(VarDef)]`
//!    or `#[derive(VarDefExplicit)]`;
//! 4. containers, element by element.
//!
//! A type matching none of these does not compile.
//!
//! ## Implemented Menu
//!
//! - scalar: `bool`, `i8`-`i128`, `u8`-`u64`, `isize`, `usize`, `f32`, `f64`, `char`, `String`, `str`
//! - dynamic: [`Variant`], `IndexMap<String, T, S>` (which includes [`VariantMap`](crate::VariantMap))
//! - optional: `Option<T>`
//! - alloc: `Box<T>`, `Vec<T>`, `VecDeque<T>`, `[T; N]`, `BTreeSet<T>`, `BTreeMap<String, T>`
//! - std: ("std" feature) `HashMap<String, T, S>`, `HashSet<T, S>`

// -----------------------------------------------------------------------------
// Modules

mod container;
mod scalar;

crate::cfg::std! {
    mod std_impls;
}

// -----------------------------------------------------------------------------
// Traits

use crate::{Variant, VariantError};

/// Conversion of a value into a [`Variant`].
///
/// Besides the conversion itself, the trait carries the two facts record
/// encoders need about a field: whether it is an absent optional, and whether
/// it is an empty container.
///
/// # Examples
///
/// A hand-written implementation takes precedence over everything else:
///
/// ```
/// use varmix_variant::{ToVariant, Variant};
///
/// struct Celsius(f64);
///
/// impl ToVariant for Celsius {
///     fn to_variant(&self) -> Variant {
///         Variant::String(format!("{}C", self.0))
///     }
/// }
///
/// assert_eq!(Celsius(21.5).to_variant(), Variant::from("21.5C"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `ToVariant` so cannot be converted into a `Variant`",
    note = "consider annotating `{Self}` with `#[derive(Var)]` or `#[derive(VarDef)]`"
)]
pub trait ToVariant {
    fn to_variant(&self) -> Variant;

    /// `None` when the value is an absent optional, otherwise the encoded value.
    #[inline]
    fn to_variant_opt(&self) -> Option<Variant> {
        Some(self.to_variant())
    }

    /// `true` only for a container holding no element.
    #[inline]
    fn is_empty_container(&self) -> bool {
        false
    }
}

/// Construction of a value from a [`Variant`].
///
/// # Examples
///
/// ```
/// use varmix_variant::{FromVariant, Variant, VariantError};
///
/// assert_eq!(u8::from_variant(&Variant::from(7)), Ok(7));
/// assert!(matches!(
///     u8::from_variant(&Variant::from(700)),
///     Err(VariantError::OutOfRange { .. })
/// ));
/// assert_eq!(Option::<u8>::from_variant(&Variant::Null), Ok(None));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FromVariant` so cannot be created from a `Variant`",
    note = "consider annotating `{Self}` with `#[derive(Var)]` or `#[derive(VarDef)]`"
)]
pub trait FromVariant: Sized {
    fn from_variant(variant: &Variant) -> Result<Self, VariantError>;

    /// The value a field takes when its key is missing and no default is given.
    ///
    /// Optionals return `Some(None)`, everything else `None`.
    #[inline]
    fn absent() -> Option<Self> {
        None
    }
}

// -----------------------------------------------------------------------------
// Shortcuts

/// Converts `value` into a [`Variant`].
#[inline]
pub fn to_variant<T: ToVariant + ?Sized>(value: &T) -> Variant {
    value.to_variant()
}

/// Constructs a `T` from `variant`.
#[inline]
pub fn from_variant<T: FromVariant>(variant: &Variant) -> Result<T, VariantError> {
    T::from_variant(variant)
}

/// Assigns the value decoded from `variant` to `target`.
///
/// `target` is left untouched on failure.
#[inline]
pub fn from_variant_into<T: FromVariant>(
    target: &mut T,
    variant: &Variant,
) -> Result<(), VariantError> {
    *target = T::from_variant(variant)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{FromVariant, ToVariant, from_variant, from_variant_into, to_variant};
    use crate::{Variant, VariantError};

    #[derive(Debug, PartialEq)]
    struct Rgb(u8, u8, u8);

    impl ToVariant for Rgb {
        fn to_variant(&self) -> Variant {
            Variant::String(alloc::format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2))
        }
    }

    impl FromVariant for Rgb {
        fn from_variant(variant: &Variant) -> Result<Self, VariantError> {
            let hex = String::from_variant(variant)?;
            let channel = |i: usize| {
                hex.get(i..i + 2)
                    .and_then(|s| u8::from_str_radix(s, 16).ok())
                    .ok_or_else(|| VariantError::custom("malformed color"))
            };
            Ok(Rgb(channel(1)?, channel(3)?, channel(5)?))
        }
    }

    #[test]
    fn user_conversion_is_used() {
        let v = to_variant(&Rgb(255, 0, 16));
        assert_eq!(v, Variant::from("#ff0010"));
        assert_eq!(from_variant::<Rgb>(&v), Ok(Rgb(255, 0, 16)));
        assert_eq!(
            from_variant::<Rgb>(&Variant::from("#zz")),
            Err(VariantError::Custom("malformed color".into()))
        );
    }

    #[test]
    fn assignment_form() {
        let mut x = 1_i32;
        from_variant_into(&mut x, &Variant::from(5)).unwrap();
        assert_eq!(x, 5);

        assert!(from_variant_into(&mut x, &Variant::from("five")).is_err());
        assert_eq!(x, 5);
    }

    #[test]
    fn optional_markers() {
        assert_eq!(None::<i32>.to_variant_opt(), None);
        assert_eq!(Some(3).to_variant_opt(), Some(Variant::from(3)));
        assert_eq!(None::<i32>.to_variant(), Variant::Null);
        assert_eq!(Option::<i32>::absent(), Some(None));
        assert_eq!(i32::absent(), None);
    }
}
