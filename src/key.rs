//! The hashing capability a key type must provide to live in a `LinearMap`

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// Capability required of every `LinearMap` key.
///
/// `probe_hash` must be deterministic and pure: the same key has to produce
/// the same value for as long as it is stored in a map. Keys that compare
/// equal must hash equally.
pub trait ProbeKey: Eq {
    /// Returns the 64-bit hash used to pick the key's home slot
    fn probe_hash(&self) -> u64;
}

/// Unsigned integers hash to their own value
macro_rules! impl_identity_probe_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ProbeKey for $ty {
                #[allow(trivial_numeric_casts, clippy::cast_lossless)]
                fn probe_hash(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

impl_identity_probe_key!(u8, u16, u32, u64);

impl ProbeKey for usize {
    #[allow(clippy::cast_possible_truncation)]
    fn probe_hash(&self) -> u64 {
        // usize is at most 64 bits on every supported target
        *self as u64
    }
}

/// Adapter giving any `Hash + Eq` type the [`ProbeKey`] capability.
///
/// Hashes with the standard library's `DefaultHasher`, which is deterministic
/// within a process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hashed<T>(pub T);

impl<T: Hash + Eq> ProbeKey for Hashed<T> {
    fn probe_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

impl<T> From<T> for Hashed<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
