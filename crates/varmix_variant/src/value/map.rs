use alloc::string::String;
use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};
use indexmap::IndexMap;

use super::Variant;

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6A09E667F3BCC909);

/// Hash state for [`VariantMap`], based on `foldhash` with a fixed seed.
///
/// Lookups do not depend on a random source, so the map works without `std`.
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

/// The map payload of a [`Variant`].
///
/// Iteration follows insertion order, which makes encoded records list their
/// fields in declaration order.
pub type VariantMap = IndexMap<String, Variant, FixedHashState>;
