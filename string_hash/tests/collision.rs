/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use string_hash::StringHash;
use string_hash::collision::{HashCollision, assert_distinct, check_distinct};

const COMMANDS: &[&str] = &["GET", "SET", "DEL", "PING", "PONG", "PUT"];
const _: () = assert_distinct(COMMANDS);

#[test]
fn test_distinct_keys() {
    assert_eq!(check_distinct(COMMANDS.iter().copied()), Ok(()));
    assert_eq!(check_distinct([]), Ok(()));
}

#[test]
fn test_repeated_key_is_not_a_collision() {
    assert_eq!(check_distinct(["GET", "SET", "GET"]), Ok(()));
    assert_distinct(&["GET", "GET"]);
}

#[test]
fn test_known_collision() {
    // A well-known FNV-1a 32-bit collision.
    assert_eq!(StringHash::new("costarring"), StringHash::new("liquid"));

    let error = check_distinct(["GET", "costarring", "SET", "liquid"]).unwrap_err();
    assert_eq!(
        error,
        HashCollision {
            first: "costarring".to_owned(),
            second: "liquid".to_owned(),
            hash: StringHash::from_raw(0x5e4daa9d),
        }
    );
    assert_eq!(
        error.to_string(),
        r#"keys "costarring" and "liquid" both hash to 0x5e4daa9d"#
    );
}

#[test]
fn test_reports_first_collision() {
    let keys = ["declinate", "altarage", "zinke", "macallums"];
    let error = check_distinct(keys).unwrap_err();
    assert_eq!(error.first, "altarage");
    assert_eq!(error.second, "zinke");
}

#[test]
#[should_panic(expected = "two different keys share the same hash")]
fn test_assert_distinct_panics_at_run_time() {
    assert_distinct(&["GET", "costarring", "liquid"]);
}
