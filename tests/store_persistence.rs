mod common;

use common::records;
use pixgrid::store::gallery::{GalleryIntent, GalleryState};
use pixgrid::store::{AppIntent, AppState, SnapshotStore, Store};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn snapshot_round_trips_without_loss() {
    let temp_dir = TempDir::new().unwrap();
    let snapshots = SnapshotStore::new(temp_dir.path().join("root.json"));

    let mut record = common::record(42, 1000);
    record.extra.insert("type".to_string(), json!("photo"));
    let mut state = GalleryState {
        page: 3,
        category: "cats".to_string(),
        ..GalleryState::default()
    };
    state
        .data_by_category
        .entry("cats".to_string())
        .or_default()
        .insert(3, vec![record]);

    snapshots.save(&state).unwrap();
    let loaded = snapshots.load().unwrap().expect("snapshot should exist");
    assert_eq!(loaded, state);
}

#[test]
fn load_without_snapshot_returns_none() {
    let temp_dir = TempDir::new().unwrap();
    let snapshots = SnapshotStore::new(temp_dir.path().join("root.json"));
    assert!(snapshots.load().unwrap().is_none());
}

#[test]
fn save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("root.json");
    let snapshots = SnapshotStore::new(path.clone());

    snapshots.save(&GalleryState::default()).unwrap();
    assert!(path.exists());
}

#[test]
fn dispatch_persists_the_gallery_domain() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("root.json");
    let store = Store::new(AppState::default(), Some(SnapshotStore::new(path.clone())));

    store.dispatch(AppIntent::Gallery(GalleryIntent::SetData {
        category: "sport".to_string(),
        page: 1,
        records: records(9),
    }));

    let reloaded = SnapshotStore::new(path).load().unwrap().unwrap();
    assert_eq!(reloaded.cached_page("sport", 1).map(<[_]>::len), Some(9));
}

#[test]
fn dispatch_bumps_the_version() {
    let store = Store::new(AppState::default(), None);
    assert_eq!(store.version(), 0);

    store.dispatch(AppIntent::Gallery(GalleryIntent::SetPage(2)));
    store.dispatch(AppIntent::Gallery(GalleryIntent::SetPage(3)));
    assert_eq!(store.version(), 2);
    assert_eq!(store.state().gallery.page, 3);
}
