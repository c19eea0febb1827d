//! Feature aliases for compilation control.
//!
//! A crate declares its aliases once:
//!
//! ```
//! pub mod cfg {
//!     varmix_cfg::define_alias! {
//!         #[cfg(feature = "std")] => std,
//!         #[cfg(debug_assertions)] => debug,
//!     }
//! }
//!
//! cfg::debug! {
//!     fn only_in_debug() {}
//! }
//!
//! let on: bool = cfg::debug!();
//! # let _ = on;
//! ```
//!
//! Each alias expands its body when the condition holds and drops it otherwise.
//! The `if { .. } else { .. }` form picks one of two branches.
#![no_std]

/// Expands the body. Used as the target of an alias whose condition holds.
#[doc(hidden)]
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Drops the body. Used as the target of an alias whose condition does not hold.
#[doc(hidden)]
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

/// Defines one macro per `#[cfg(..)] => name` pair.
///
/// The generated macros are re-exports of [`enabled!`] or [`disabled!`],
/// so they can be used anywhere a macro can, including downstream crates.
#[macro_export]
macro_rules! define_alias {
    ($(#[cfg($meta:meta)] => $id:ident),+ $(,)?) => {
        $(
            #[cfg($meta)]
            #[doc(inline)]
            #[allow(unused_imports)]
            pub use $crate::enabled as $id;

            #[cfg(not($meta))]
            #[doc(inline)]
            #[allow(unused_imports)]
            pub use $crate::disabled as $id;
        )+
    };
}
