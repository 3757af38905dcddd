use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use bookplot_core::persistence::FavoritesStore;
use bookplot_core::sqlite::SqliteFavorites;

fn test_db_path(test_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("bookplot-{test_name}-{nanos}.sqlite3"))
}

#[test]
fn listing_a_fresh_database_creates_the_schema_and_returns_nothing() {
    let store = SqliteFavorites::new(test_db_path("fresh-list"));

    let rows = store.list_all().unwrap();

    assert!(rows.is_empty());
}

#[test]
fn upsert_then_list_contains_exactly_one_row_for_the_title() {
    let store = SqliteFavorites::new(test_db_path("upsert-list"));

    store
        .upsert("Sharp Objects", Some(47.82), "In stock")
        .unwrap();

    let rows = store.list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Sharp Objects");
    assert_eq!(rows[0].price.as_deref(), Some("47.82"));
    assert_eq!(rows[0].availability, "In stock");
}

#[test]
fn repeat_upsert_updates_in_place_without_growing_the_table() {
    let store = SqliteFavorites::new(test_db_path("repeat-upsert"));

    store
        .upsert("Sharp Objects", Some(47.82), "In stock")
        .unwrap();
    store
        .upsert("Sharp Objects", Some(45.0), "Out of stock")
        .unwrap();

    let rows = store.list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].price.as_deref(), Some("45"));
    assert_eq!(rows[0].availability, "Out of stock");
}

#[test]
fn absent_price_is_stored_as_null() {
    let store = SqliteFavorites::new(test_db_path("null-price"));

    store.upsert("The Requiem Red", None, "In stock").unwrap();

    let rows = store.list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].price, None);
}

#[test]
fn remove_of_absent_title_leaves_the_store_unchanged() {
    let store = SqliteFavorites::new(test_db_path("remove-absent"));

    store.upsert("Olio", Some(23.88), "In stock").unwrap();
    store.remove("Not a Stored Title").unwrap();

    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn remove_after_upsert_leaves_no_row_for_the_title() {
    let store = SqliteFavorites::new(test_db_path("remove-upserted"));

    store.upsert("Olio", Some(23.88), "In stock").unwrap();
    store.remove("Olio").unwrap();

    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn surrogate_ids_are_assigned_and_distinct() {
    let store = SqliteFavorites::new(test_db_path("surrogate-ids"));

    store.upsert("Olio", Some(23.88), "In stock").unwrap();
    store.upsert("Set Me Free", Some(17.46), "In stock").unwrap();

    let rows = store.list_all().unwrap();
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].id, rows[1].id);
}
