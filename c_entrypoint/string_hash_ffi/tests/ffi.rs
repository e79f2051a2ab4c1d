/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

#![allow(clippy::undocumented_unsafe_blocks)]

use std::ffi::{CString, c_void};
use std::ptr;

use string_hash::{StringHash, string_hash};
use string_hash_ffi::{StringHash_FromBuf, StringHash_FromBufWithSeed, StringHash_FromCStr};

#[test]
fn cstr_matches_compile_time_hash() {
    let text = CString::new("hello").unwrap();
    let hash = unsafe { StringHash_FromCStr(text.as_ptr()) };

    assert_eq!(hash, 0x4f9f2cab);
    assert_eq!(StringHash::from_raw(hash), string_hash!("hello"));
}

#[test]
fn empty_cstr_is_offset_basis() {
    let hash = unsafe { StringHash_FromCStr(c"".as_ptr()) };
    assert_eq!(hash, 2166136261);
}

#[test]
fn cstr_stops_at_first_terminator() {
    let bytes = b"abc\0def\0";
    let hash = unsafe { StringHash_FromCStr(bytes.as_ptr().cast()) };
    assert_eq!(hash, 0x1a47e90b);
}

#[test]
fn buf_uses_explicit_length() {
    let bytes = b"abcdef";
    let hash = unsafe { StringHash_FromBuf(bytes.as_ptr() as *const c_void, 3) };
    assert_eq!(hash, 0x1a47e90b);
}

#[test]
fn buf_may_contain_nul_bytes() {
    let bytes = b"a\0b";
    let hash = unsafe { StringHash_FromBuf(bytes.as_ptr() as *const c_void, bytes.len()) };
    assert_eq!(hash, string_hash::hash(bytes));
}

#[test]
fn empty_buf_is_not_read() {
    assert_eq!(unsafe { StringHash_FromBuf(ptr::null(), 0) }, 2166136261);
    assert_eq!(
        unsafe { StringHash_FromBufWithSeed(ptr::null(), 0, 0x5f61767a) },
        0x5f61767a
    );
}

#[test]
fn seed_chains_buffers() {
    let foo = b"foo";
    let bar = b"bar";

    let seed = unsafe { StringHash_FromBuf(foo.as_ptr() as *const c_void, foo.len()) };
    let hash =
        unsafe { StringHash_FromBufWithSeed(bar.as_ptr() as *const c_void, bar.len(), seed) };

    assert_eq!(hash, string_hash!("foobar").get());
}

#[test]
fn custom_seed_changes_output() {
    let bytes = b"abc";
    let default = unsafe { StringHash_FromBuf(bytes.as_ptr() as *const c_void, bytes.len()) };
    let seeded =
        unsafe { StringHash_FromBufWithSeed(bytes.as_ptr() as *const c_void, bytes.len(), 0) };

    assert_ne!(default, seeded);
    assert_eq!(seeded, 0xa6b4da20);
}

