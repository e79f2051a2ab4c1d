/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

/// Keys that look like the identifiers hashes usually stand in for:
/// command names, short field names, and longer dotted paths.
pub fn generate_keys(count: usize) -> Vec<String> {
    const COMMANDS: [&str; 12] = [
        "GET", "SET", "DEL", "PING", "INFO", "SEARCH", "AGGREGATE", "EXPLAIN", "PROFILE",
        "CURSOR", "SPELLCHECK", "DICTADD",
    ];

    let mut keys: Vec<String> = COMMANDS.iter().map(|c| c.to_string()).collect();

    // Edge cases.
    keys.extend([String::new(), "a".to_owned(), "\u{1F600}".to_owned()]);

    let mut i = 0;
    while keys.len() < count {
        let key = match i % 3 {
            0 => format!("field_{i}"),
            1 => format!("$.store.book[{i}].title"),
            _ => format!("{}:{i}", COMMANDS[i % COMMANDS.len()].to_lowercase()),
        };
        keys.push(key);
        i += 1;
    }

    keys.truncate(count);
    keys
}
