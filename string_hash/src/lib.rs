/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! 32-bit [FNV-1a] hashes of strings, computed at compile time when the
//! string is known at compile time and at run time otherwise.
//!
//! The hashes are meant to replace string comparisons with integer
//! comparisons, e.g. for identifier lookups or dispatch tables.
//! They are not collision resistant beyond what 32-bit FNV-1a offers,
//! and they are not suitable for anything security related.
//!
//! # Two paths, one hash
//!
//! - [`literal`] contains `const fn`s that the compiler evaluates for text
//!   embedded in the source code.
//! - [`Fnv32`] is an incremental [`Hasher`](std::hash::Hasher) for text
//!   that only exists at run time.
//!
//! [`hash`] and [`StringHash`] pick the right path based on the type of their
//! argument, so callers don't have to care which one they get: both produce
//! the same value for the same bytes.
//!
//! ```
//! use string_hash::{StringHash, string_hash};
//!
//! const ABC: StringHash = string_hash!("abc");
//!
//! let runtime = String::from_utf8(vec![b'a', b'b', b'c']).unwrap();
//! assert_eq!(StringHash::of(&runtime), ABC);
//! assert_eq!(ABC.get(), 0x1a47e90b);
//! ```
//!
//! # Implementation details
//!
//! The standard [fnv] crate only provides the 64-bit variant of the hash, so
//! the 32-bit parameters are defined here.
//!
//! [FNV-1a]: http://www.isthe.com/chongo/tech/comp/fnv/#FNV-1a
//! [fnv]: https://docs.rs/fnv

pub mod collision;
mod fnv;
mod input;
pub mod literal;
mod wrapper;

pub use fnv::{BuildFnv32Hasher, Fnv32, hash_bytes, hash_cstr, hash_with_seed};
pub use input::{HashInput, hash};
pub use wrapper::StringHash;
