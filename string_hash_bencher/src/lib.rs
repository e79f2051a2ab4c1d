/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Supporting types and functions for benchmarking string hashing.
//!
//! This crate benchmarks the compile-time and run-time hashing paths against
//! each other, against the C entry points, and against the FNV implementation
//! of the `hash32` crate. It also checks that they all compute the same hashes.

pub use bencher::StringHashBencher;
pub use parity::{HashPath, ParityError, ParityReport, check_parity};

pub mod bencher;
pub mod corpus;
pub mod parity;
