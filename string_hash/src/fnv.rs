/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The run-time half of the hashing machinery: an incremental 32-bit
//! [FNV-1a] hasher and the free functions built on top of it.
//!
//! [FNV-1a]: http://www.isthe.com/chongo/tech/comp/fnv/#FNV-1a

use std::ffi::CStr;
use std::hash::{BuildHasherDefault, Hasher};

/// A 32-bit FNV-1a hasher.
///
/// The hasher state *is* the running hash, so a hasher can be seeded
/// with the output of a previous hash to continue hashing where it left off.
///
/// ```
/// use std::hash::Hasher;
/// use string_hash::Fnv32;
///
/// let mut hasher = Fnv32::default();
/// hasher.write(b"foo");
/// hasher.write(b"bar");
/// assert_eq!(hasher.finish32(), string_hash::hash("foobar"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv32(u32);

impl Fnv32 {
    /// The 32-bit [FNV-1 prime].
    ///
    /// [FNV-1 prime]: http://www.isthe.com/chongo/tech/comp/fnv/#FNV-param
    pub const PRIME: u32 = 0x0100_0193;

    /// The 32-bit [FNV-1 offset basis].
    ///
    /// [FNV-1 offset basis]: http://www.isthe.com/chongo/tech/comp/fnv/#FNV-param
    pub const OFFSET_BASIS: u32 = 0x811c_9dc5;

    /// Creates an `Fnv32` with a given [offset basis].
    ///
    /// Passing the result of an earlier hash chains the two inputs together.
    ///
    /// [offset basis]: http://www.isthe.com/chongo/tech/comp/fnv/#FNV-param
    #[inline]
    #[must_use]
    pub const fn with_offset_basis(offset_basis: u32) -> Fnv32 {
        Fnv32(offset_basis)
    }

    /// The hash of everything written so far, without widening it to `u64`.
    #[inline]
    #[must_use]
    pub const fn finish32(&self) -> u32 {
        self.0
    }
}

/// A `Fnv32` initialized with the [32-bit FNV-1 offset basis].
///
/// [32-bit FNV-1 offset basis]: http://www.isthe.com/chongo/tech/comp/fnv/#FNV-param
impl Default for Fnv32 {
    #[inline]
    fn default() -> Fnv32 {
        Fnv32(Self::OFFSET_BASIS)
    }
}

impl Hasher for Fnv32 {
    #[inline]
    fn finish(&self) -> u64 {
        self.0 as u64
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let Fnv32(mut hash) = *self;

        for &byte in bytes {
            hash ^= byte as u32;
            hash = hash.wrapping_mul(Self::PRIME);
        }

        *self = Fnv32(hash);
    }
}

impl hash32::Hasher for Fnv32 {
    #[inline]
    fn finish32(&self) -> u32 {
        self.0
    }
}

/// A [`BuildHasher`](std::hash::BuildHasher) producing default-seeded [`Fnv32`] hashers.
pub type BuildFnv32Hasher = BuildHasherDefault<Fnv32>;

/// Hashes `bytes` one byte at a time, starting from the standard offset basis.
#[inline]
pub fn hash_bytes(bytes: &[u8]) -> u32 {
    hash_with_seed(bytes, Fnv32::OFFSET_BASIS)
}

/// Hashes `bytes` one byte at a time, starting from `seed` instead of the
/// standard offset basis.
///
/// `hash_with_seed(b, hash_bytes(a))` equals the hash of `a` followed by `b`.
#[inline]
pub fn hash_with_seed(bytes: &[u8], seed: u32) -> u32 {
    let mut hasher = Fnv32::with_offset_basis(seed);
    hasher.write(bytes);
    hasher.finish32()
}

/// Hashes a NUL-terminated string. The terminator is not part of the hash.
#[inline]
pub fn hash_cstr(text: &CStr) -> u32 {
    // `to_bytes` scans for the terminator.
    hash_bytes(text.to_bytes())
}
