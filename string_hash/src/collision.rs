/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Collision checks for sets of keys that are dispatched on by hash.
//!
//! A 32-bit hash can only stand in for a string comparison if no two keys
//! in the set share a hash. [`assert_distinct`] enforces that for key sets
//! known at compile time, [`check_distinct`] for key sets built at run time.
//!
//! ```
//! use string_hash::collision::assert_distinct;
//!
//! const COMMANDS: &[&str] = &["GET", "SET", "DEL"];
//! const _: () = assert_distinct(COMMANDS);
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use thiserror::Error;

use crate::{StringHash, literal};

/// Two different keys share the same hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("keys {first:?} and {second:?} both hash to {hash}")]
pub struct HashCollision {
    /// The key that was seen first.
    pub first: String,
    /// The key that collided with it.
    pub second: String,
    /// The shared hash.
    pub hash: StringHash,
}

/// Checks that no two different keys share a hash.
///
/// Repeated occurrences of the same key are not collisions.
///
/// # Errors
///
/// Returns the first colliding pair, in iteration order.
pub fn check_distinct<'a, I>(keys: I) -> Result<(), HashCollision>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashMap<StringHash, &str> = HashMap::new();

    for key in keys {
        let hash = StringHash::of(key);
        match seen.entry(hash) {
            Entry::Vacant(entry) => {
                entry.insert(key);
            }
            Entry::Occupied(entry) if *entry.get() == key => {}
            Entry::Occupied(entry) => {
                let collision = HashCollision {
                    first: (*entry.get()).to_owned(),
                    second: key.to_owned(),
                    hash,
                };
                tracing::warn!(
                    first = %collision.first,
                    second = %collision.second,
                    hash = %hash,
                    "hash collision between dispatch keys"
                );
                return Err(collision);
            }
        }
    }

    tracing::debug!(keys = seen.len(), "dispatch keys are collision-free");
    Ok(())
}

/// Panics if two different keys share a hash.
///
/// Meant to be evaluated in a constant context, where the panic becomes a
/// compilation error.
pub const fn assert_distinct(keys: &[&str]) {
    let mut i = 0;
    while i < keys.len() {
        let hash = literal::hash_literal(keys[i]);
        let mut j = i + 1;
        while j < keys.len() {
            if hash == literal::hash_literal(keys[j]) && !str_eq(keys[i], keys[j]) {
                panic!("two different keys share the same hash");
            }
            j += 1;
        }
        i += 1;
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
