//! Chart payloads and the district/mandal drill-down views.

use serde::Serialize;

use crate::models::{FeatureCollection, Layer, StatKey, StatRecord};
use crate::store::DataStore;

use super::enrichment::DisplayTypeSource;
use super::lookup::{filter_layer, find_stat};
use super::{ServiceError, ServiceResult};

/// Labels shared by every chart, in value order.
pub const CHART_LABELS: [&str; 3] = ["IT Jobs", "Non-IT Jobs", "Test Results"];

pub const DISTRICT_NOT_FOUND: &str = "District not found or data missing.";
pub const MANDAL_NOT_FOUND: &str = "Mandal not found or data missing.";
pub const SKILLS_UNAVAILABLE: &str = "Skills data not available.";

/// Label/value series for a pie or bar chart. Unparsed figures serialize as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: [&'static str; 3],
    pub values: [Option<i64>; 3],
}

impl ChartData {
    pub fn from_record(record: &StatRecord) -> Self {
        Self {
            labels: CHART_LABELS,
            values: record.job_figures(),
        }
    }
}

/// Response body for a district drill-down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictDetails {
    pub pie_chart_data: ChartData,
    pub map_geojson: FeatureCollection,
}

/// Response body for a mandal drill-down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MandalDetails {
    pub bar_graph_data: ChartData,
    pub map_geojson: FeatureCollection,
}

fn skills(store: &DataStore) -> ServiceResult<&[StatRecord]> {
    store
        .skills()
        .map_err(|source| ServiceError::unavailable(SKILLS_UNAVAILABLE, source))
}

fn collection(store: &DataStore, layer: Layer) -> ServiceResult<&FeatureCollection> {
    store
        .collection(layer)
        .map_err(|source| ServiceError::unavailable(layer.unavailable_message(), source))
}

/// The full district layer, annotated with statistics.
pub fn state_map(
    store: &DataStore,
    display: &DisplayTypeSource,
) -> ServiceResult<FeatureCollection> {
    let districts = collection(store, Layer::District)?;
    let records = skills(store)?;
    Ok(display.annotate(districts, records))
}

/// Statistics for `district_name` and the blocks inside it.
///
/// Not found when there is no statistics row for the district. A district with
/// statistics but no block geometry yields an empty collection.
pub fn district_details(store: &DataStore, district_name: &str) -> ServiceResult<DistrictDetails> {
    let records = skills(store)?;
    let blocks = collection(store, Layer::Block)?;

    let record = find_stat(records, StatKey::District, district_name)
        .ok_or(ServiceError::NotFound(DISTRICT_NOT_FOUND))?;

    Ok(DistrictDetails {
        pie_chart_data: ChartData::from_record(record),
        map_geojson: filter_layer(blocks, Layer::Block, district_name),
    })
}

/// Statistics for `mandal_name` and the villages inside it.
pub fn mandal_details(store: &DataStore, mandal_name: &str) -> ServiceResult<MandalDetails> {
    let records = skills(store)?;
    let villages = collection(store, Layer::Village)?;

    let record = find_stat(records, StatKey::Mandal, mandal_name)
        .ok_or(ServiceError::NotFound(MANDAL_NOT_FOUND))?;

    Ok(MandalDetails {
        bar_graph_data: ChartData::from_record(record),
        map_geojson: filter_layer(villages, Layer::Village, mandal_name),
    })
}
