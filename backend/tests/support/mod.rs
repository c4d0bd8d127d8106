#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const DISTRICTS: &str = r#"{
  "type": "FeatureCollection",
  "name": "bihar_districts",
  "features": [
    { "type": "Feature", "geometry": { "type": "Point", "coordinates": [85.13, 25.59] }, "properties": { "DISTRICT": "Patna" } },
    { "type": "Feature", "geometry": { "type": "Point", "coordinates": [85.0, 24.78] }, "properties": { "DISTRICT": "Gaya" } },
    { "type": "Feature", "geometry": { "type": "Point", "coordinates": [84.36, 26.22] }, "properties": { "DISTRICT": "Siwan" } }
  ]
}"#;

pub const BLOCKS: &str = r#"{
  "type": "FeatureCollection",
  "name": "bihar_blocks",
  "features": [
    { "type": "Feature", "geometry": null, "properties": { "district_name": "Patna", "block_name": "Danapur" } },
    { "type": "Feature", "geometry": null, "properties": { "district_name": "Gaya", "block_name": "Bodh Gaya" } },
    { "type": "Feature", "geometry": null, "properties": { "district_name": "patna", "block_name": "Phulwari" } },
    { "type": "Feature", "geometry": null, "properties": { "district_name": "West Champaran", "block_name": "Bagaha" } }
  ]
}"#;

pub const VILLAGES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "geometry": null, "properties": { "mandal_name": "Danapur", "village_name": "Shahpur" } },
    { "type": "Feature", "geometry": null, "properties": { "mandal_name": "DANAPUR", "village_name": "Maner" } },
    { "type": "Feature", "geometry": null, "properties": { "mandal_name": "Bodh Gaya", "village_name": "Bakraur" } }
  ]
}"#;

pub const SKILLS: &str = "\
district_name,mandal_name,it_jobs,non_it_jobs,test_results,completed,in_progress,pending
Patna,Danapur,120,80,95,10,5,2
Gaya,Bodh Gaya,40,n/a,70,3,,1
West Champaran,Bagaha,5,6,7,1,1,1
";

pub const DISTRICTS_FILE: &str = "bihar_districts.geojson";
pub const BLOCKS_FILE: &str = "bihar_blocks.geojson";
pub const VILLAGES_FILE: &str = "bihar_villages.geojson";
pub const SKILLS_FILE: &str = "bihar_skills_data.csv";

/// Temp data directory holding all four fixture files.
pub fn fixture_dir() -> TempDir {
    fixture_dir_without(&[])
}

/// Temp data directory missing the named files.
pub fn fixture_dir_without(missing: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (name, body) in [
        (DISTRICTS_FILE, DISTRICTS),
        (BLOCKS_FILE, BLOCKS),
        (VILLAGES_FILE, VILLAGES),
        (SKILLS_FILE, SKILLS),
    ] {
        if !missing.contains(&name) {
            write(dir.path(), name, body);
        }
    }
    dir
}

pub fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).expect("write fixture");
}
