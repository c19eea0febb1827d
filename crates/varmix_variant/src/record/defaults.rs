use core::fmt;

use super::Record;
use crate::DefaultsError;

// -----------------------------------------------------------------------------
// Descriptor

/// What the defaults descriptor says about one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultKind {
    /// The field has a default value.
    Value,
    /// The field is listed with the `NoDefault` sentinel.
    NoDefault,
}

/// One entry of a defaults descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultEntry {
    pub name: &'static str,
    pub kind: DefaultKind,
}

impl DefaultEntry {
    #[inline]
    pub const fn value(name: &'static str) -> Self {
        Self {
            name,
            kind: DefaultKind::Value,
        }
    }

    #[inline]
    pub const fn no_default(name: &'static str) -> Self {
        Self {
            name,
            kind: DefaultKind::NoDefault,
        }
    }
}

/// The default of a single field, as passed to field visitors.
pub enum DefaultValue<F> {
    /// The field is not in the defaults descriptor, or there is no descriptor.
    Unlisted,
    /// The field is listed as `NoDefault`.
    NoDefault,
    /// The field is listed with a value.
    Value(fn() -> F),
}

impl<F> DefaultValue<F> {
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Creates the default value, if there is one.
    #[inline]
    pub fn value(&self) -> Option<F> {
        match self {
            Self::Value(make) => Some(make()),
            _ => None,
        }
    }
}

// `F` need not be `Clone`, only the function pointer is copied.
impl<F> Clone for DefaultValue<F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for DefaultValue<F> {}

impl<F> fmt::Debug for DefaultValue<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlisted => f.write_str("Unlisted"),
            Self::NoDefault => f.write_str("NoDefault"),
            Self::Value(_) => f.write_str("Value(..)"),
        }
    }
}

// -----------------------------------------------------------------------------
// Predicates

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn find_entry(entries: &[DefaultEntry], name: &str) -> Option<DefaultKind> {
    let mut i = 0;
    while i < entries.len() {
        if str_eq(entries[i].name, name) {
            return Some(entries[i].kind);
        }
        i += 1;
    }
    None
}

const fn contains(names: &[&str], name: &str) -> bool {
    let mut i = 0;
    while i < names.len() {
        if str_eq(names[i], name) {
            return true;
        }
        i += 1;
    }
    false
}

const fn kind_of<R: Record + ?Sized>(name: &str) -> Option<DefaultKind> {
    match R::DEFAULTS {
        Some(entries) => find_entry(entries, name),
        None => None,
    }
}

/// `R` has a defaults descriptor.
#[inline]
pub const fn has_defaults<R: Record + ?Sized>() -> bool {
    R::DEFAULTS.is_some()
}

/// `name` is a key of the defaults descriptor of `R`.
#[inline]
pub const fn present<R: Record + ?Sized>(name: &str) -> bool {
    kind_of::<R>(name).is_some()
}

/// The entry for `name` is the `NoDefault` sentinel.
#[inline]
pub const fn no_default<R: Record + ?Sized>(name: &str) -> bool {
    matches!(kind_of::<R>(name), Some(DefaultKind::NoDefault))
}

/// The entry for `name` carries a value.
#[inline]
pub const fn has_default_value<R: Record + ?Sized>(name: &str) -> bool {
    matches!(kind_of::<R>(name), Some(DefaultKind::Value))
}

/// Checks that the defaults descriptor of `R` lists exactly the fields of `R`.
///
/// Entries are checked in order: a missing descriptor first, then fields
/// absent from it, then keys naming no field.
///
/// # Examples
///
/// ```
/// use varmix_variant::{DefaultsError, derive::Record, record::validate_explicit};
///
/// #[derive(Record)]
/// #[var(defaults(x = 0))]
/// struct Complete {
///     x: i32,
/// }
///
/// #[derive(Record)]
/// #[var(defaults(x = 0, y = 1))]
/// struct Typo {
///     x: i32,
/// }
///
/// assert_eq!(validate_explicit::<Complete>(), Ok(()));
/// assert_eq!(
///     validate_explicit::<Typo>(),
///     Err(DefaultsError::UnknownKey { record: "Typo", key: "y" })
/// );
/// ```
pub const fn validate_explicit<R: Record + ?Sized>() -> Result<(), DefaultsError> {
    let Some(entries) = R::DEFAULTS else {
        return Err(DefaultsError::Unlisted {
            record: R::TYPE_NAME,
        });
    };

    let mut i = 0;
    while i < R::FIELDS.len() {
        if find_entry(entries, R::FIELDS[i]).is_none() {
            return Err(DefaultsError::Missing {
                record: R::TYPE_NAME,
                field: R::FIELDS[i],
            });
        }
        i += 1;
    }

    let mut i = 0;
    while i < entries.len() {
        if !contains(R::FIELDS, entries[i].name) {
            return Err(DefaultsError::UnknownKey {
                record: R::TYPE_NAME,
                key: entries[i].name,
            });
        }
        i += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{has_default_value, has_defaults, no_default, present, validate_explicit};
    use crate::DefaultsError;
    use crate::derive::Record;

    #[derive(Record)]
    struct Bare {
        x: i32,
    }

    #[derive(Record)]
    #[var(defaults(a = 42, b = NoDefault))]
    struct Listed {
        a: i32,
        b: Option<i32>,
    }

    #[derive(Record)]
    #[var(defaults())]
    struct Empty {
        x: i32,
    }

    #[derive(Record)]
    #[var(defaults(y = 1))]
    struct Partial {
        x: i32,
        y: i32,
    }

    #[derive(Record)]
    struct FieldLevel {
        #[var(default = 3)]
        x: i32,
        #[var(no_default)]
        z: u8,
    }

    #[test]
    fn predicates() {
        assert!(!has_defaults::<Bare>());
        assert!(!present::<Bare>("x"));
        assert!(!has_default_value::<Bare>("x"));

        assert!(has_defaults::<Listed>());
        assert!(present::<Listed>("a") && present::<Listed>("b"));
        assert!(!present::<Listed>("c"));
        assert!(has_default_value::<Listed>("a"));
        assert!(!has_default_value::<Listed>("b"));
        assert!(no_default::<Listed>("b"));
        assert!(!no_default::<Listed>("a"));

        assert!(has_defaults::<Empty>());
        assert!(!present::<Empty>("x"));
        assert_eq!(
            validate_explicit::<Empty>(),
            Err(DefaultsError::Missing {
                record: "Empty",
                field: "x"
            })
        );
    }

    #[test]
    fn predicates_are_const() {
        const A: bool = has_default_value::<Listed>("a");
        const CHECK: Result<(), DefaultsError> = validate_explicit::<Listed>();
        assert!(A);
        assert_eq!(CHECK, Ok(()));
    }

    #[test]
    fn explicit_validation() {
        assert_eq!(
            validate_explicit::<Bare>(),
            Err(DefaultsError::Unlisted { record: "Bare" })
        );
        assert_eq!(
            validate_explicit::<Partial>(),
            Err(DefaultsError::Missing {
                record: "Partial",
                field: "x"
            })
        );
        assert_eq!(validate_explicit::<FieldLevel>(), Ok(()));
    }
}
