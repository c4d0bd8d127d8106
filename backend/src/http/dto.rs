//! Data Transfer Objects for the HTTP API.
//!
//! Map and chart payloads are the service-layer types, which already
//! serialize to the wire shape. Only the health report is HTTP-specific.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use crate::models::FeatureCollection;
pub use crate::services::{ChartData, DistrictDetails, MandalDetails};
pub use crate::store::DatasetStatus;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `ok` when every dataset loaded, `degraded` otherwise
    pub status: &'static str,
    pub version: &'static str,
    pub loaded_at: DateTime<Utc>,
    pub datasets: Vec<DatasetStatus>,
}
