use hero_rarity::store::client::{decode_single_row, table_url};
use hero_rarity::store::{HeroStore, Snapshot, SnapshotStore};
use serde_json::json;

#[test]
fn test_table_url() {
    assert_eq!(
        table_url("https://abc.supabase.co/", "traits"),
        "https://abc.supabase.co/rest/v1/traits"
    );
}

#[test]
fn test_decode_single_row_encoded_attributes() {
    let row = decode_single_row(json!({
        "id": 3,
        "name": "Hero #3",
        "image_url": "https://img.example/3.png",
        "attributes": "[{\"trait_type\":\"Head\",\"value\":\"Cap\"}]",
        "rarity_score": 2.5,
        "rarity_rank": 100
    }))
    .unwrap()
    .unwrap();

    assert_eq!(row.id, 3);
    assert!(row.attributes.is_string());
    assert_eq!(row.rarity_rank, Some(100));
}

#[test]
fn test_snapshot_store_queries() {
    let snapshot: Snapshot = serde_json::from_value(json!({
        "traits": [
            {"category": "Season 1 Level", "value": "5", "count": 20, "rarity": 2.5},
            {"category": "Name", "value": "Zephyr", "count": 1, "rarity": "0.1"}
        ],
        "heroes": [
            {"id": 1, "created_at": "2024-11-01T10:00:00+00:00"},
            {"id": 2, "created_at": "not a timestamp"}
        ]
    }))
    .unwrap();

    let store = SnapshotStore::new(snapshot);

    let rows = store.fetch_traits().unwrap();
    assert_eq!(rows[0].category, "Name");
    assert_eq!(rows[0].rarity, 0.1);

    let latest = store.fetch_latest_created_at().unwrap().unwrap();
    assert_eq!(latest.to_rfc3339(), "2024-11-01T10:00:00+00:00");

    let hero = store.fetch_hero(1).unwrap().unwrap();
    assert!(hero.name.is_none());
    assert!(hero.attributes.is_null());
}
