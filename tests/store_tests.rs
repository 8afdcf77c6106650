// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::store::{KvStore, MemStore, SqliteStore};

#[test]
fn sqlite_store_round_trips_and_overwrites() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    assert!(store.get("accounts").unwrap().is_none());

    store.set("accounts", b"[1]").unwrap();
    assert_eq!(store.get("accounts").unwrap().unwrap(), b"[1]");

    store.set("accounts", b"[1,2]").unwrap();
    assert_eq!(store.get("accounts").unwrap().unwrap(), b"[1,2]");
}

#[test]
fn mem_store_is_empty_until_written() {
    let mut store = MemStore::new();
    assert!(store.get("transactions").unwrap().is_none());
    store.set("transactions", b"[]").unwrap();
    assert_eq!(store.get("transactions").unwrap().unwrap(), b"[]");
}
