/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property tests checking that every hashing path computes the same function.

use std::ffi::CString;
use std::hash::Hasher;

use proptest::prelude::*;
use string_hash::literal::{hash_literal, hash_prefix};
use string_hash::{Fnv32, StringHash, hash, hash_bytes, hash_cstr, hash_with_seed};

/// An independent FNV-1a implementation to compare against.
fn reference(bytes: &[u8]) -> u32 {
    use hash32::Hasher as _;

    let mut hasher = hash32::FnvHasher::default();
    hasher.write(bytes);
    hasher.finish32()
}

proptest! {
    #[test]
    #[cfg_attr(miri, ignore = "Too slow to be run under miri.")]
    fn literal_and_dynamic_paths_agree(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(hash_prefix(&bytes, bytes.len()), hash_bytes(&bytes));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Too slow to be run under miri.")]
    fn fixed_size_arrays_agree_with_slices(bytes in any::<[u8; 32]>()) {
        prop_assert_eq!(hash(&bytes), hash(&bytes[..]));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Too slow to be run under miri.")]
    fn strings_agree(text in ".*") {
        prop_assert_eq!(hash_literal(&text), hash(&text));
        prop_assert_eq!(StringHash::new(&text), StringHash::of(text.as_str()));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Too slow to be run under miri.")]
    fn c_strings_agree(bytes in proptest::collection::vec(1u8..=255, 0..128)) {
        let text = CString::new(bytes.clone()).unwrap();
        prop_assert_eq!(hash_cstr(&text), hash_bytes(&bytes));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Too slow to be run under miri.")]
    fn matches_reference_implementation(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(hash_bytes(&bytes), reference(&bytes));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Too slow to be run under miri.")]
    fn chained_equals_concatenated(
        head in proptest::collection::vec(any::<u8>(), 0..128),
        tail in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let whole: Vec<u8> = head.iter().chain(&tail).copied().collect();
        prop_assert_eq!(hash_with_seed(&tail, hash_bytes(&head)), hash_bytes(&whole));

        let mut hasher = Fnv32::default();
        hasher.write(&head);
        hasher.write(&tail);
        prop_assert_eq!(hasher.finish32(), hash_bytes(&whole));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Too slow to be run under miri.")]
    fn seed_is_threaded_through(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        seed in any::<u32>(),
    ) {
        // Multiplying by the odd prime and xoring a fixed byte are both
        // bijections on u32, so different seeds can never converge.
        prop_assume!(seed != Fnv32::OFFSET_BASIS);
        prop_assert_ne!(hash_with_seed(&bytes, seed), hash_bytes(&bytes));
    }
}
