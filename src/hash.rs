//! Deterministic string hashing.
//!
//! The table's slot layout depends only on the keys and the capacity, never
//! on a per-process seed, so the default hasher is a plain 64-bit FNV-1a.

use core::hash::{BuildHasher, Hasher};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hash a key the way the default-hashed table does: FNV-1a over `str`'s
/// `Hash` encoding (the bytes followed by a `0xff` terminator).
///
/// A key's first probed slot in a `HashTable` is `hash_str(key) % capacity`.
#[inline]
pub fn hash_str(s: &str) -> u64 {
    FnvBuildHasher.hash_one(s)
}

#[inline]
fn fnv1a(mut state: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        state ^= u64::from(b);
        state = state.wrapping_mul(FNV_PRIME);
    }
    state
}

/// Streaming FNV-1a hasher.
#[derive(Clone, Copy, Debug)]
pub struct FnvHasher {
    state: u64,
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }
}

impl Hasher for FnvHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = fnv1a(self.state, bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// Seedless builder for [`FnvHasher`]; the default hasher of [`crate::HashTable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher::default()
    }
}
