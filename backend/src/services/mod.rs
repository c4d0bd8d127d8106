//! Service layer between the data store and the HTTP handlers.
//!
//! Lookups, filtering and district annotation live here as plain functions
//! over borrowed data so they can be tested without a server.

pub mod charts;
pub mod enrichment;
pub mod lookup;




use crate::store::StoreError;

pub use charts::{
    district_details, mandal_details, state_map, ChartData, DistrictDetails, MandalDetails,
    CHART_LABELS,
};
pub use enrichment::{DisplayType, DisplayTypeSource};
pub use lookup::{filter_features, filter_layer, find_stat, names_match};

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Why a view could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No statistics row matches the requested name.
    #[error("{0}")]
    NotFound(&'static str),

    /// A dataset the view depends on did not load at startup.
    #[error("{message}")]
    Unavailable {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    pub fn unavailable(message: &'static str, source: StoreError) -> Self {
        Self::Unavailable { message, source }
    }
}
