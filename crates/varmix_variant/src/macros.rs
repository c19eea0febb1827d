/// Builds a [`Variant::Map`](crate::Variant::Map) from `key => value` pairs.
///
/// Values go through [`ToVariant`](crate::ToVariant), so anything a record
/// field can hold is accepted, including nested records.
///
/// ```
/// use varmix_variant::{Variant, varmap};
///
/// let v = varmap! { "a" => 1, "b" => "x", "c" => Variant::Null };
/// assert_eq!(v.get("b"), Some(&Variant::from("x")));
///
/// assert!(varmap! {}.map().unwrap().is_empty());
/// ```
#[macro_export]
macro_rules! varmap {
    () => {
        $crate::Variant::new_map()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::VariantMap::default();
        $(
            map.insert(
                ::core::convert::Into::into($key),
                $crate::ToVariant::to_variant(&$value),
            );
        )+
        $crate::Variant::Map(map)
    }};
}

/// Builds a [`Variant::Seq`](crate::Variant::Seq) from values.
///
/// ```
/// use varmix_variant::{Variant, varseq};
///
/// let v = varseq![1, 2.5, "three"];
/// assert_eq!(v.as_seq().map(Vec::len), Some(3));
/// assert_eq!(varseq![], Variant::Seq(Vec::new()));
/// ```
#[macro_export]
macro_rules! varseq {
    () => {
        $crate::Variant::Seq($crate::__macro_exports::Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Variant::Seq($crate::__macro_exports::Vec::from([
            $( $crate::ToVariant::to_variant(&$value) ),+
        ]))
    };
}
