//! Name lookups over the statistics table and the boundary layers.
//!
//! All matching is case-insensitive and linear. Nothing here mutates its
//! input; filtering returns a fresh collection.

use crate::models::{Feature, FeatureCollection, Layer, StatKey, StatRecord};

/// Case-insensitive name equality.
pub fn names_match(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}

/// First record whose `key` column equals `value`, ignoring case.
pub fn find_stat<'a>(
    records: &'a [StatRecord],
    key: StatKey,
    value: &str,
) -> Option<&'a StatRecord> {
    records.iter().find(|r| names_match(r.name(key), value))
}

/// Whether a feature's `property` is a string equal to `value`, ignoring case.
pub fn feature_matches(feature: &Feature, property: &str, value: &str) -> bool {
    feature
        .property_str(property)
        .is_some_and(|name| names_match(name, value))
}

/// Copy of `collection` restricted to features whose `property` equals
/// `value`. Order is preserved and foreign members are kept.
pub fn filter_features(
    collection: &FeatureCollection,
    property: &str,
    value: &str,
) -> FeatureCollection {
    let features = collection
        .features
        .iter()
        .filter(|f| feature_matches(f, property, value))
        .cloned()
        .collect();
    collection.with_features(features)
}

/// [`filter_features`] keyed on the layer's own name property.
pub fn filter_layer(
    collection: &FeatureCollection,
    layer: Layer,
    value: &str,
) -> FeatureCollection {
    filter_features(collection, layer.name_property(), value)
}
