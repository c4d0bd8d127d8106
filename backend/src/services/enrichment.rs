//! District annotation for the state-level map.
//!
//! Each district feature gets its statistics merged into `properties`, plus a
//! `displayType` hint telling the dashboard which chart to draw. The hint is
//! drawn per response and is not stored anywhere.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
    Feature, FeatureCollection, Layer, SkillDevelopment, StatKey, StatRecord, NOT_AVAILABLE,
};

use super::lookup::find_stat;

/// Chart a district should be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayType {
    PieChart,
    BarGraph,
}

impl DisplayType {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayType::PieChart => "pieChart",
            DisplayType::BarGraph => "barGraph",
        }
    }

    /// Fair coin flip between the two chart types.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            DisplayType::PieChart
        } else {
            DisplayType::BarGraph
        }
    }
}

impl std::str::FromStr for DisplayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pieChart" => Ok(DisplayType::PieChart),
            "barGraph" => Ok(DisplayType::BarGraph),
            other => Err(format!("unknown display type '{}'", other)),
        }
    }
}

/// Where `displayType` values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayTypeSource {
    /// Thread RNG, different on every response.
    #[default]
    Random,
    /// Fresh RNG seeded identically for every response.
    Seeded(u64),
    /// Same value for every district.
    Fixed(DisplayType),
}

impl DisplayTypeSource {
    /// Annotate `districts` using this source.
    pub fn annotate(
        &self,
        districts: &FeatureCollection,
        records: &[StatRecord],
    ) -> FeatureCollection {
        match *self {
            DisplayTypeSource::Random => annotate_districts(districts, records, &mut rand::rng()),
            DisplayTypeSource::Seeded(seed) => {
                annotate_districts(districts, records, &mut StdRng::seed_from_u64(seed))
            }
            DisplayTypeSource::Fixed(display) => {
                annotate_districts_with(districts, records, |_| display)
            }
        }
    }
}

/// Copy of `districts` with statistics and a random `displayType` merged into
/// every feature's properties.
pub fn annotate_districts<R: Rng + ?Sized>(
    districts: &FeatureCollection,
    records: &[StatRecord],
    rng: &mut R,
) -> FeatureCollection {
    annotate_districts_with(districts, records, |_| DisplayType::pick(&mut *rng))
}

/// As [`annotate_districts`], with the display type chosen by `display`.
pub fn annotate_districts_with<F>(
    districts: &FeatureCollection,
    records: &[StatRecord],
    mut display: F,
) -> FeatureCollection
where
    F: FnMut(&Feature) -> DisplayType,
{
    let features = districts
        .features
        .iter()
        .map(|feature| {
            let record = feature
                .property_str(Layer::District.name_property())
                .and_then(|name| find_stat(records, StatKey::District, name));
            annotate_feature(feature, record, display(feature))
        })
        .collect();
    districts.with_features(features)
}

/// Copy of one feature with `displayType`, `skillDevelopment`, `itJobs`,
/// `nonItJobs` and `testResults` set. A missing record yields zeroed skill
/// counts and `"N/A"` figures.
pub fn annotate_feature(
    feature: &Feature,
    record: Option<&StatRecord>,
    display: DisplayType,
) -> Feature {
    let skill_development = record.map(|r| r.skill_development).unwrap_or_default();
    let [it_jobs, non_it_jobs, test_results] = record
        .map(StatRecord::job_figures)
        .unwrap_or([None, None, None]);

    let mut annotated = feature.clone();
    let props = &mut annotated.properties;
    props.insert("displayType".into(), Value::from(display.as_str()));
    props.insert("skillDevelopment".into(), skill_value(skill_development));
    props.insert("itJobs".into(), figure_value(it_jobs));
    props.insert("nonItJobs".into(), figure_value(non_it_jobs));
    props.insert("testResults".into(), figure_value(test_results));
    annotated
}

fn skill_value(sd: SkillDevelopment) -> Value {
    serde_json::json!({
        "completed": sd.completed,
        "in_progress": sd.in_progress,
        "pending": sd.pending,
    })
}

fn figure_value(value: Option<i64>) -> Value {
    match value {
        Some(v) => Value::from(v),
        None => Value::from(NOT_AVAILABLE),
    }
}
