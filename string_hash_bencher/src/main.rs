/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Check that every hashing path agrees on a generated key set and report
//! how many distinct hashes the key set produces.
//!
//! Usage: `string_hash_bencher [KEY_COUNT]`. Logging verbosity is controlled
//! through `RUST_LOG`, e.g. `RUST_LOG=string_hash_bencher=trace`.

use std::error::Error;

use string_hash_bencher::{check_parity, corpus::generate_keys};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_KEY_COUNT: usize = 100_000;

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    init_tracing()?;

    let key_count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|e| format!("invalid key count {arg:?}: {e}"))?,
        None => DEFAULT_KEY_COUNT,
    };

    let keys = generate_keys(key_count);
    let report = check_parity(keys.as_slice())?;

    let collisions = report.keys - report.distinct_hashes;
    tracing::info!(
        keys = report.keys,
        bytes = report.bytes,
        distinct_hashes = report.distinct_hashes,
        collisions,
        "all hashing paths agree"
    );
    if collisions > 0 {
        tracing::warn!(collisions, "the key set contains colliding keys");
    }

    Ok(())
}

fn init_tracing() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
}
