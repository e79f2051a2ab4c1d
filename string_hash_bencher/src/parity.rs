/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Cross-checks every hashing path against every other on a set of keys.

use std::ffi::{CString, c_void};
use std::hash::Hasher;

use string_hash::literal;
use string_hash_ffi::{StringHash_FromBuf, StringHash_FromCStr};
use thiserror::Error;

/// A way of hashing a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashPath {
    /// The `const fn` recursion, evaluated at run time.
    Literal,
    /// The [`string_hash::Fnv32`] loop over a slice.
    Dynamic,
    /// The [`string_hash::Fnv32`] loop over a NUL-terminated string.
    CStr,
    /// `StringHash_FromCStr`, as C code would call it.
    FfiCStr,
    /// `StringHash_FromBuf`, as C code would call it.
    FfiBuf,
}

impl HashPath {
    pub const ALL: [HashPath; 5] = [
        HashPath::Literal,
        HashPath::Dynamic,
        HashPath::CStr,
        HashPath::FfiCStr,
        HashPath::FfiBuf,
    ];
}

/// Errors raised while checking hashing paths against each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParityError {
    #[error("{path:?} hashed {key:?} to {actual:#010x}, the reference hash is {expected:#010x}")]
    Mismatch {
        key: String,
        path: HashPath,
        expected: u32,
        actual: u32,
    },
    #[error("key {0:?} contains a NUL byte and can't be passed as a C string")]
    InteriorNul(String),
}

/// Summary of a successful parity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParityReport {
    pub keys: usize,
    pub bytes: usize,
    pub distinct_hashes: usize,
}

/// The hash of `bytes` according to an implementation that shares no code with
/// the `string_hash` crate.
pub fn reference_hash(bytes: &[u8]) -> u32 {
    let mut hasher = hash32::FnvHasher::default();
    hasher.write(bytes);
    hash32::Hasher::finish32(&hasher)
}

/// Hashes `key` through `path`.
pub fn hash_through(path: HashPath, key: &str, c_key: &CString) -> u32 {
    let bytes = key.as_bytes();
    match path {
        HashPath::Literal => literal::hash_prefix(bytes, bytes.len()),
        HashPath::Dynamic => string_hash::hash_bytes(bytes),
        HashPath::CStr => string_hash::hash_cstr(c_key),
        // Safety: `c_key` is a valid NUL-terminated string that outlives the call.
        HashPath::FfiCStr => unsafe { StringHash_FromCStr(c_key.as_ptr()) },
        // Safety: `bytes` is valid for `bytes.len()` bytes and outlives the call.
        HashPath::FfiBuf => unsafe {
            StringHash_FromBuf(bytes.as_ptr() as *const c_void, bytes.len())
        },
    }
}

/// Checks that every [`HashPath`] agrees with [`reference_hash`] on every key.
///
/// # Errors
///
/// Returns the first disagreement found.
pub fn check_parity<S: AsRef<str>>(keys: &[S]) -> Result<ParityReport, ParityError> {
    let mut hashes = Vec::with_capacity(keys.len());
    let mut bytes = 0;

    for key in keys {
        let key = key.as_ref();
        let c_key = CString::new(key).map_err(|_| ParityError::InteriorNul(key.to_owned()))?;
        let expected = reference_hash(key.as_bytes());

        for path in HashPath::ALL {
            let actual = hash_through(path, key, &c_key);
            if actual != expected {
                return Err(ParityError::Mismatch {
                    key: key.to_owned(),
                    path,
                    expected,
                    actual,
                });
            }
        }

        tracing::trace!(key, hash = expected, "all paths agree");
        hashes.push(expected);
        bytes += key.len();
    }

    hashes.sort_unstable();
    hashes.dedup();

    Ok(ParityReport {
        keys: keys.len(),
        bytes,
        distinct_hashes: hashes.len(),
    })
}
