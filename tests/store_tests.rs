//! Integration tests for the storage facade.
//!
//! These tests exercise the public surface end to end: scope selection,
//! codec round trips through the facade, positional key queries, and the
//! plain-text fallback for entries written by other writers.

#![allow(clippy::unwrap_used, clippy::panic)]

use duostore::{MemoryArea, Scope, StorageArea, Store, Value};

#[test]
fn test_backend_selection_is_disjoint() -> Result<(), anyhow::Error> {
    let mut store = Store::in_memory();
    store.set("k", &Value::from(1), Scope::Session)?;

    assert_eq!(store.get("k", Scope::Persistent)?, None);
    assert_eq!(store.get("k", Scope::Session)?, Some(Value::from(1)));
    Ok(())
}

#[test]
fn test_missing_key_returns_none() -> Result<(), anyhow::Error> {
    let store = Store::in_memory();
    assert_eq!(store.get("missing-key", Scope::Persistent)?, None);
    Ok(())
}

#[test]
fn test_structured_values_roundtrip_through_facade() -> Result<(), anyhow::Error> {
    let mut store = Store::in_memory();

    let profile = Value::object_of([
        ("name", Value::from("ada")),
        ("age", Value::from(36)),
        ("active", Value::from(true)),
        ("nickname", Value::Null),
        ("scores", Value::from(vec![1, 2, 3])),
    ]);
    store.set("profile", &profile, Scope::Persistent)?;
    assert_eq!(store.get("profile", Scope::Persistent)?, Some(profile));
    Ok(())
}

#[test]
fn test_containers_keep_their_type() -> Result<(), anyhow::Error> {
    let mut store = Store::in_memory();

    let tags = Value::set_of([1, 2, 3]);
    let index = Value::map_of([("a", 1), ("b", 2)]);
    store.set("tags", &tags, Scope::Persistent)?;
    store.set("index", &index, Scope::Persistent)?;

    let tags_back = store.get("tags", Scope::Persistent)?.unwrap();
    assert!(tags_back.as_set().is_some(), "set decayed to another type");
    assert_eq!(tags_back, tags);

    let index_back = store.get("index", Scope::Persistent)?.unwrap();
    assert!(index_back.as_map().is_some(), "map decayed to another type");
    assert_eq!(index_back, index);
    Ok(())
}

#[test]
fn test_nested_container_field_survives() -> Result<(), anyhow::Error> {
    let mut store = Store::in_memory();

    let doc = Value::object_of([
        ("title", Value::from("doc")),
        ("labels", Value::set_of(["red", "blue"])),
    ]);
    store.set("doc", &doc, Scope::Persistent)?;

    let back = store.get("doc", Scope::Persistent)?.unwrap();
    assert!(back.get("labels").unwrap().as_set().is_some());
    assert_eq!(back, doc);
    Ok(())
}

#[test]
fn test_plain_text_entry_from_another_writer() -> Result<(), anyhow::Error> {
    // An entry stored as raw text, as an earlier writer would have done
    let mut persistent = MemoryArea::new();
    persistent.set_item("legacy", "hello")?;

    let store = Store::with_areas(Box::new(persistent), Box::new(MemoryArea::new()));
    assert_eq!(
        store.get("legacy", Scope::Persistent)?,
        Some(Value::from("hello"))
    );
    Ok(())
}

#[test]
fn test_index_query() -> Result<(), anyhow::Error> {
    let mut store = Store::in_memory();
    store.set("a", &Value::from(1), Scope::Persistent)?;
    store.set("b", &Value::from(2), Scope::Persistent)?;

    assert_eq!(store.key_name_at(0, Scope::Persistent).as_deref(), Some("a"));
    assert_eq!(store.key_name_at(5, Scope::Persistent), None);
    Ok(())
}

#[test]
fn test_overwrite_counts_key_once() -> Result<(), anyhow::Error> {
    let mut store = Store::in_memory();
    store.set("k", &Value::from(1), Scope::Persistent)?;
    store.set("k", &Value::from(2), Scope::Persistent)?;

    assert_eq!(store.get("k", Scope::Persistent)?, Some(Value::from(2)));
    assert_eq!(store.current_length(Scope::Persistent), 1);
    Ok(())
}

#[test]
fn test_remove_and_clear_all() -> Result<(), anyhow::Error> {
    let mut store = Store::in_memory();
    store.set("k", &Value::from(1), Scope::Persistent)?;
    store.remove("k", Scope::Persistent)?;
    assert_eq!(store.get("k", Scope::Persistent)?, None);

    store.set("a", &Value::from(1), Scope::Persistent)?;
    store.set("b", &Value::from(2), Scope::Persistent)?;
    store.clear_all(Scope::Persistent)?;
    assert_eq!(store.current_length(Scope::Persistent), 0);
    Ok(())
}

#[test]
fn test_clear_leaves_other_scope_alone() -> Result<(), anyhow::Error> {
    let mut store = Store::in_memory();
    store.set("p", &Value::from(1), Scope::Persistent)?;
    store.set("s", &Value::from(2), Scope::Session)?;

    store.clear_all(Scope::Session)?;
    assert_eq!(store.current_length(Scope::Session), 0);
    assert_eq!(store.get("p", Scope::Persistent)?, Some(Value::from(1)));
    Ok(())
}

#[cfg(feature = "persist")]
mod persist {
    use super::*;

    #[test]
    fn test_persistent_scope_survives_reopen() -> Result<(), anyhow::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("state.json");

        {
            let mut store = Store::open(&path)?;
            store.set("count", &Value::from(7), Scope::Persistent)?;
            store.set("tags", &Value::set_of(["x", "y"]), Scope::Persistent)?;
            store.set("draft", &Value::from("wip"), Scope::Session)?;
        }

        let store = Store::open(&path)?;
        assert_eq!(store.get("count", Scope::Persistent)?, Some(Value::from(7)));
        assert_eq!(
            store.get("tags", Scope::Persistent)?,
            Some(Value::set_of(["x", "y"]))
        );
        // The session scope is discarded with the store
        assert_eq!(store.get("draft", Scope::Session)?, None);
        Ok(())
    }

    #[test]
    fn test_key_order_survives_reopen() -> Result<(), anyhow::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("state.json");

        {
            let mut store = Store::open(&path)?;
            store.set("z", &Value::from(1), Scope::Persistent)?;
            store.set("a", &Value::from(2), Scope::Persistent)?;
            store.set("m", &Value::from(3), Scope::Persistent)?;
        }

        let store = Store::open(&path)?;
        assert_eq!(store.keys(Scope::Persistent), vec!["z", "a", "m"]);
        Ok(())
    }
}
