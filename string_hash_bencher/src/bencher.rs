/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use criterion::{
    BenchmarkGroup, Criterion, Throughput,
    measurement::{Measurement, WallTime},
};
use std::ffi::CString;
use std::hash::Hasher;
use std::{hint::black_box, time::Duration};

use string_hash::{StringHash, literal, string_hash};
use string_hash_ffi::StringHash_FromCStr;

use crate::corpus::generate_keys;

/// A helper struct for benchmarking the hashing paths against each other
/// and against the `hash32` FNV implementation.
pub struct StringHashBencher {
    /// Keys to hash.
    keys: Vec<String>,

    /// The same keys, NUL-terminated.
    c_keys: Vec<CString>,

    /// How long to run benchmarks overall.
    measurement_time: Duration,

    /// The prefix added to the label of each benchmark group.
    prefix: String,
}

impl StringHashBencher {
    /// Creates a new `StringHashBencher` hashing `key_count` generated keys.
    pub fn new(prefix: String, key_count: usize, measurement_time: Duration) -> Self {
        let keys = generate_keys(key_count);
        let c_keys = keys
            .iter()
            .filter_map(|key| CString::new(key.as_str()).ok())
            .collect();

        Self {
            keys,
            c_keys,
            measurement_time,
            prefix,
        }
    }

    fn benchmark_group<'a>(
        &self,
        c: &'a mut Criterion,
        label: &str,
    ) -> BenchmarkGroup<'a, WallTime> {
        let mut group = c.benchmark_group(format!("{}|{}", self.prefix, label));
        group.measurement_time(self.measurement_time);
        group.warm_up_time(Duration::from_secs(1));
        group.throughput(Throughput::Bytes(
            self.keys.iter().map(|key| key.len() as u64).sum(),
        ));
        group
    }

    /// Benchmark hashing of run-time strings.
    pub fn dynamic_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Dynamic");
        dynamic_rust_benchmark(&mut group, &self.keys);
        dynamic_hash32_benchmark(&mut group, &self.keys);
        group.finish();
    }

    /// Benchmark hashing of NUL-terminated strings, which need a length scan first.
    pub fn cstr_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "CStr");
        cstr_rust_benchmark(&mut group, &self.c_keys);
        cstr_ffi_benchmark(&mut group, &self.c_keys);
        group.finish();
    }

    /// Benchmark the `const fn` path when it isn't evaluated by the compiler.
    pub fn literal_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Literal");
        literal_runtime_benchmark(&mut group, &self.keys);
        literal_loop_benchmark(&mut group, &self.keys);
        group.finish();

        // A hash computed by the compiler costs nothing but a load.
        let mut group = c.benchmark_group(format!("{}|Compile Time", self.prefix));
        group.bench_function("string_hash!", |b| {
            b.iter(|| {
                let hash: StringHash = string_hash!("AGGREGATE");
                black_box(hash)
            })
        });
        group.finish();
    }
}

fn dynamic_rust_benchmark<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, keys: &[String]) {
    group.bench_function("Rust", |b| {
        b.iter(|| {
            for key in keys {
                black_box(string_hash::hash(black_box(key.as_str())));
            }
        })
    });
}

fn dynamic_hash32_benchmark<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, keys: &[String]) {
    group.bench_function("hash32", |b| {
        b.iter(|| {
            for key in keys {
                let mut hasher = hash32::FnvHasher::default();
                hasher.write(black_box(key.as_bytes()));
                black_box(hash32::Hasher::finish32(&hasher));
            }
        })
    });
}

fn cstr_rust_benchmark<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, keys: &[CString]) {
    group.bench_function("Rust", |b| {
        b.iter(|| {
            for key in keys {
                black_box(string_hash::hash_cstr(black_box(key)));
            }
        })
    });
}

fn cstr_ffi_benchmark<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, keys: &[CString]) {
    group.bench_function("FFI", |b| {
        b.iter(|| {
            for key in keys {
                // Safety: `key` is a valid NUL-terminated string.
                black_box(unsafe { StringHash_FromCStr(black_box(key.as_ptr())) });
            }
        })
    });
}

fn literal_runtime_benchmark<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, keys: &[String]) {
    group.bench_function("const fn", |b| {
        b.iter(|| {
            for key in keys {
                black_box(literal::hash_literal(black_box(key.as_str())));
            }
        })
    });
}

fn literal_loop_benchmark<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, keys: &[String]) {
    group.bench_function("Loop", |b| {
        b.iter(|| {
            for key in keys {
                black_box(string_hash::hash_bytes(black_box(key.as_bytes())));
            }
        })
    });
}
