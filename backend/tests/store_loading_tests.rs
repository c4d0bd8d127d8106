//! Startup loading against on-disk fixtures.

use bihar_map_api::models::Layer;
use bihar_map_api::store::{DataPaths, DataStore, StoreError};

mod support;

#[test]
fn test_load_all_fixtures() {
    let dir = support::fixture_dir();
    let store = DataStore::load(&DataPaths::in_dir(dir.path()));

    assert!(store.is_complete());
    assert_eq!(store.collection(Layer::District).unwrap().len(), 3);
    assert_eq!(store.collection(Layer::Block).unwrap().len(), 4);
    assert_eq!(store.collection(Layer::Village).unwrap().len(), 3);

    let skills = store.skills().unwrap();
    assert_eq!(skills.len(), 3);
    assert_eq!(skills[1].non_it_jobs, None);
    assert_eq!(skills[1].skill_development.in_progress, 0);
}

#[test]
fn test_missing_file_leaves_only_that_dataset_unset() {
    let dir = support::fixture_dir_without(&[support::DISTRICTS_FILE]);
    let store = DataStore::load(&DataPaths::in_dir(dir.path()));

    assert!(!store.is_complete());
    assert!(matches!(
        store.collection(Layer::District),
        Err(StoreError::NotLoaded("districts"))
    ));
    assert!(store.collection(Layer::Block).is_ok());
    assert!(store.skills().is_ok());
}

#[test]
fn test_malformed_json_is_tolerated() {
    let dir = support::fixture_dir();
    support::write(
        dir.path(),
        support::VILLAGES_FILE,
        "{\"type\": \"FeatureCollection\", \"features\": [",
    );

    let store = DataStore::load(&DataPaths::in_dir(dir.path()));
    assert!(store.collection(Layer::Village).is_err());
    assert!(store.collection(Layer::District).is_ok());
}

#[test]
fn test_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = DataStore::load(&DataPaths::in_dir(dir.path()));
    assert!(store.status().iter().all(|s| !s.loaded));
}
