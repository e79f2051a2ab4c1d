/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::fmt;

use crate::{HashInput, literal};

/// The 32-bit FNV-1a hash of a piece of text.
///
/// Functions that take `impl Into<StringHash>` can be called with literals
/// and with run-time strings alike, without hashing at every call site:
///
/// ```
/// use string_hash::StringHash;
///
/// fn is_ping(command: impl Into<StringHash>) -> bool {
///     command.into() == string_hash::string_hash!("PING")
/// }
///
/// assert!(is_ping("PING"));
/// assert!(is_ping(&String::from("PING")));
/// assert!(!is_ping(c"PONG"));
/// ```
///
/// Equality and ordering are those of the underlying hash value, so two
/// different texts that happen to collide compare equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct StringHash(u32);

impl StringHash {
    /// Hashes `text` at compile time when used in a constant context.
    #[inline]
    #[must_use]
    pub const fn new(text: &str) -> Self {
        Self(literal::hash_literal(text))
    }

    /// Hashes any supported text, picking the hashing path from its type.
    #[inline]
    #[must_use]
    pub fn of<T: HashInput + ?Sized>(text: &T) -> Self {
        Self(text.fnv1a_32())
    }

    /// Wraps an already computed hash, e.g. one received from C code.
    #[inline]
    #[must_use]
    pub const fn from_raw(hash: u32) -> Self {
        Self(hash)
    }

    /// The hash value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl<T: HashInput + ?Sized> From<&T> for StringHash {
    #[inline]
    fn from(text: &T) -> Self {
        Self::of(text)
    }
}

impl From<StringHash> for u32 {
    #[inline]
    fn from(hash: StringHash) -> Self {
        hash.0
    }
}

impl fmt::Debug for StringHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringHash({:#010x})", self.0)
    }
}

impl fmt::Display for StringHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl fmt::LowerHex for StringHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for StringHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Builds a [`StringHash`] from a string that is known at compile time.
///
/// The hash is stored in a `const` item, so it is always computed by the
/// compiler, never at run time.
///
/// ```
/// use string_hash::{StringHash, string_hash};
///
/// const HELLO: StringHash = string_hash!("hello");
/// assert_eq!(HELLO.get(), 0x4f9f2cab);
/// assert_eq!(string_hash!("hello"), StringHash::of(&String::from("hello")));
/// ```
#[macro_export]
macro_rules! string_hash {
    ($text:expr) => {{
        const HASH: $crate::StringHash = $crate::StringHash::new($text);
        HASH
    }};
}
