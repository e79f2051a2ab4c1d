/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::borrow::Cow;
use std::ffi::{CStr, CString};

use crate::{fnv, literal};

/// Textual input that can be hashed.
///
/// Which hashing path is used is decided by the implementing type, and
/// therefore at compile time: fixed-size arrays go through the `const`
/// [`literal`] path, everything whose length is only known at run time
/// goes through the [`Fnv32`](crate::Fnv32) loop.
/// Both paths produce the same hash for the same bytes.
pub trait HashInput {
    /// The 32-bit FNV-1a hash of `self`.
    fn fnv1a_32(&self) -> u32;
}

/// Hashes `text`, picking the hashing path from its type.
///
/// ```
/// let from_literal = string_hash::hash(b"abc");
/// let from_runtime = string_hash::hash(&String::from("abc"));
/// assert_eq!(from_literal, 0x1a47e90b);
/// assert_eq!(from_literal, from_runtime);
/// ```
#[inline]
pub fn hash<T: HashInput + ?Sized>(text: &T) -> u32 {
    text.fnv1a_32()
}

impl<const N: usize> HashInput for [u8; N] {
    #[inline]
    fn fnv1a_32(&self) -> u32 {
        literal::hash_literal_bytes(self)
    }
}

impl HashInput for [u8] {
    #[inline]
    fn fnv1a_32(&self) -> u32 {
        fnv::hash_bytes(self)
    }
}

impl HashInput for str {
    #[inline]
    fn fnv1a_32(&self) -> u32 {
        fnv::hash_bytes(self.as_bytes())
    }
}

impl HashInput for CStr {
    #[inline]
    fn fnv1a_32(&self) -> u32 {
        fnv::hash_cstr(self)
    }
}

impl HashInput for String {
    #[inline]
    fn fnv1a_32(&self) -> u32 {
        self.as_str().fnv1a_32()
    }
}

impl HashInput for Box<str> {
    #[inline]
    fn fnv1a_32(&self) -> u32 {
        (**self).fnv1a_32()
    }
}

impl HashInput for Cow<'_, str> {
    #[inline]
    fn fnv1a_32(&self) -> u32 {
        (**self).fnv1a_32()
    }
}

impl HashInput for Vec<u8> {
    #[inline]
    fn fnv1a_32(&self) -> u32 {
        self.as_slice().fnv1a_32()
    }
}

impl HashInput for CString {
    #[inline]
    fn fnv1a_32(&self) -> u32 {
        self.as_c_str().fnv1a_32()
    }
}

impl<T: HashInput + ?Sized> HashInput for &T {
    #[inline]
    fn fnv1a_32(&self) -> u32 {
        (**self).fnv1a_32()
    }
}
