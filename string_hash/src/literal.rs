/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The compile-time half of the hashing machinery.
//!
//! Every function in this module is a `const fn`, so text that is known
//! when the program is compiled can be hashed by the compiler:
//!
//! ```
//! use string_hash::literal::hash_literal;
//!
//! const GET: u32 = hash_literal("GET");
//! const PUT: u32 = hash_literal("PUT");
//!
//! fn verb(hash: u32) -> &'static str {
//!     match hash {
//!         GET => "read",
//!         PUT => "write",
//!         _ => "unknown",
//!     }
//! }
//!
//! assert_eq!(verb(string_hash::hash(&String::from("PUT"))), "write");
//! ```
//!
//! # Definition
//!
//! The hash is defined recursively over prefixes of the input:
//!
//! ```text
//! hash(prefix of length 0) = OFFSET_BASIS
//! hash(prefix of length I) = (hash(prefix of length I - 1) ^ byte[I - 1]) * PRIME
//! ```
//!
//! which is exactly what [`Fnv32`] computes with its loop. Evaluating the
//! definition literally would recurse once per byte; instead the prefix is
//! split in two halves and the hash of the left half seeds the hash of the
//! right half, so the recursion depth only grows with the logarithm of the
//! length. The bytes are still folded in strictly left to right.
//!
//! [`Fnv32`]: crate::Fnv32

use std::ffi::CStr;

use crate::Fnv32;

/// Hashes a string known at compile time.
#[inline]
#[must_use]
pub const fn hash_literal(text: &str) -> u32 {
    let bytes = text.as_bytes();
    hash_prefix(bytes, bytes.len())
}

/// Hashes a fixed-size byte array, e.g. a byte string literal like `b"abc"`.
#[inline]
#[must_use]
pub const fn hash_literal_bytes<const N: usize>(bytes: &[u8; N]) -> u32 {
    hash_prefix(bytes, N)
}

/// Hashes a C string literal, e.g. `c"abc"`. The terminator is not hashed.
#[inline]
#[must_use]
pub const fn hash_literal_cstr(text: &CStr) -> u32 {
    let bytes = text.to_bytes();
    hash_prefix(bytes, bytes.len())
}

/// Hashes the first `len` bytes of `bytes`.
///
/// # Panics
///
/// Panics if `len` is larger than `bytes.len()`. In a constant context
/// this is reported as a compilation error.
#[must_use]
pub const fn hash_prefix(bytes: &[u8], len: usize) -> u32 {
    assert!(len <= bytes.len(), "prefix length exceeds the input length");
    fold(Fnv32::OFFSET_BASIS, bytes, 0, len)
}

/// Folds `bytes[start..end]` into `hash`.
const fn fold(hash: u32, bytes: &[u8], start: usize, end: usize) -> u32 {
    match end - start {
        0 => hash,
        1 => (hash ^ bytes[start] as u32).wrapping_mul(Fnv32::PRIME),
        len => {
            let mid = start + len / 2;
            fold(fold(hash, bytes, start, mid), bytes, mid, end)
        }
    }
}
