/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! FFI layer to access, from C, the string hashing machinery implemented in Rust.
//!
//! C callers only ever have run-time strings, so every entry point here goes
//! through the [`Fnv32`] loop. Hashes computed on either side of the boundary
//! are interchangeable with [`StringHash`](string_hash::StringHash) values
//! computed at compile time in Rust.

#![allow(non_snake_case)]

use std::ffi::{CStr, c_char, c_void};

use string_hash::Fnv32;

/// Returns the 32-bit [FNV-1a hash] of the NUL-terminated string `text`.
/// The terminator is not hashed.
///
/// # Safety
///
/// 1. `text` must be a non-null pointer to a NUL-terminated string.
/// 2. The string must not be mutated while it's being hashed.
///
/// [FNV-1a hash]: http://www.isthe.com/chongo/tech/comp/fnv/#FNV-1a
#[unsafe(no_mangle)]
pub unsafe extern "C" fn StringHash_FromCStr(text: *const c_char) -> u32 {
    debug_assert!(!text.is_null(), "text must not be null");

    // Safety: see safety points 1 and 2 above.
    let text = unsafe { CStr::from_ptr(text) };

    string_hash::hash_cstr(text)
}

/// Returns the 32-bit [FNV-1a hash] of `buf` of length `len`.
///
/// # Safety
///
/// 1. If `len` is not zero, `buf` must be a non-null pointer to a valid region
///    of memory of `len` bytes.
/// 2. The memory must not be mutated while it's being hashed.
///
/// [FNV-1a hash]: http://www.isthe.com/chongo/tech/comp/fnv/#FNV-1a
#[unsafe(no_mangle)]
pub unsafe extern "C" fn StringHash_FromBuf(buf: *const c_void, len: usize) -> u32 {
    // Safety: the caller upholds the same requirements.
    unsafe { StringHash_FromBufWithSeed(buf, len, Fnv32::OFFSET_BASIS) }
}

/// Returns the 32-bit [FNV-1a hash] of `buf` of length `len` using an [offset basis] `seed`.
///
/// Passing the hash of a previous buffer as `seed` hashes the two buffers as if
/// they were contiguous.
///
/// # Safety
///
/// 1. If `len` is not zero, `buf` must be a non-null pointer to a valid region
///    of memory of `len` bytes.
/// 2. The memory must not be mutated while it's being hashed.
///
/// [FNV-1a hash]: http://www.isthe.com/chongo/tech/comp/fnv/#FNV-1a
/// [offset basis]: http://www.isthe.com/chongo/tech/comp/fnv/#FNV-param
#[unsafe(no_mangle)]
pub unsafe extern "C" fn StringHash_FromBufWithSeed(
    buf: *const c_void,
    len: usize,
    seed: u32,
) -> u32 {
    if len == 0 {
        return seed;
    }
    debug_assert!(!buf.is_null(), "buf must not be null");

    // Safety: see safety points 1 and 2 above.
    let bytes = unsafe { std::slice::from_raw_parts(buf as *const u8, len) };

    string_hash::hash_with_seed(bytes, seed)
}
