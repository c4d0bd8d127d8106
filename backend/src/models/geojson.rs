//! GeoJSON containers served by the map endpoints.
//!
//! Geometry is never inspected. Only `properties` is read, and only to match a
//! name; everything else is carried through untouched so filtered and
//! annotated collections serialize the same way the source file did.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Property map of a single feature.
pub type Properties = Map<String, Value>;

/// A GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_kind")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Foreign members such as `name`, `crs` or `bbox`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A GeoJSON `Feature`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_kind")]
    pub kind: String,
    /// `None` only when the key was absent; an explicit `null` is kept.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Properties,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn collection_kind() -> String {
    "FeatureCollection".to_string()
}

fn feature_kind() -> String {
    "Feature".to_string()
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Properties, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Properties>::deserialize(deserializer)?.unwrap_or_default())
}

impl FeatureCollection {
    /// Build a collection that shares this one's `type` and foreign members but
    /// holds `features` instead.
    pub fn with_features(&self, features: Vec<Feature>) -> Self {
        Self {
            kind: self.kind.clone(),
            features,
            extra: self.extra.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Feature {
    /// String value of a property, if present and a string.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_foreign_members_survive_round_trip() {
        let raw = json!({
            "type": "FeatureCollection",
            "name": "bihar_blocks",
            "crs": { "type": "name", "properties": { "name": "EPSG:4326" } },
            "features": [{
                "type": "Feature",
                "id": 7,
                "geometry": { "type": "Point", "coordinates": [85.1, 25.6] },
                "properties": { "district_name": "Patna" }
            }]
        });

        let collection: FeatureCollection = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(collection.kind, "FeatureCollection");
        assert_eq!(collection.extra["name"], "bihar_blocks");
        assert_eq!(collection.features[0].extra["id"], 7);
        assert_eq!(serde_json::to_value(&collection).unwrap(), raw);
    }

    #[test]
    fn test_null_properties_read_as_empty() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": null,
            "properties": null
        }))
        .unwrap();

        assert!(feature.properties.is_empty());
        assert_eq!(feature.property_str("DISTRICT"), None);
    }

    #[test]
    fn test_property_str_ignores_non_strings() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": null,
            "properties": { "DISTRICT": 12, "name": "Gaya" }
        }))
        .unwrap();

        assert_eq!(feature.property_str("DISTRICT"), None);
        assert_eq!(feature.property_str("name"), Some("Gaya"));
    }

    #[test]
    fn test_missing_type_defaults() {
        let collection: FeatureCollection = serde_json::from_value(json!({
            "features": [
                { "properties": { "DISTRICT": "Patna" } },
                { "type": "Feature", "geometry": null, "properties": { "DISTRICT": "Gaya" } }
            ]
        }))
        .unwrap();

        assert_eq!(collection.kind, "FeatureCollection");
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.features[0].kind, "Feature");
        assert_eq!(collection.features[0].property_str("DISTRICT"), Some("Patna"));
    }

    #[test]
    fn test_geometry_presence_is_preserved() {
        let absent = json!({ "type": "Feature", "properties": { "name": "Gaya" } });
        let feature: Feature = serde_json::from_value(absent.clone()).unwrap();
        assert_eq!(feature.geometry, None);
        assert_eq!(serde_json::to_value(&feature).unwrap(), absent);

        let null = json!({ "type": "Feature", "geometry": null, "properties": {} });
        let feature: Feature = serde_json::from_value(null.clone()).unwrap();
        assert_eq!(feature.geometry, Some(Value::Null));
        assert_eq!(serde_json::to_value(&feature).unwrap(), null);
    }

    #[test]
    fn test_with_features_keeps_header() {
        let collection: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "name": "districts",
            "features": [{ "type": "Feature", "geometry": null, "properties": {} }]
        }))
        .unwrap();

        let empty = collection.with_features(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.extra["name"], "districts");
        assert_eq!(collection.len(), 1);
    }
}
