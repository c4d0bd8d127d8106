//! # Bihar Map API
//!
//! Read-only backend for the regional skills dashboard.
//!
//! The service serves pre-built district, block and village boundaries
//! together with skill and employment statistics. A request picks a level
//! (state → district → mandal) and gets back the matching GeoJSON subset plus
//! the figures needed to draw a chart for it.
//!
//! ## Architecture
//!
//! - [`models`]: GeoJSON containers, statistics rows and the per-layer schema adapter
//! - [`store`]: one-time loading of the static files into an immutable store
//! - [`services`]: name lookup, layer filtering, district annotation, chart payloads
//! - [`config`]: layered defaults / TOML / environment settings
//! - [`http`]: axum router and handlers for the map API
//! - [`proxy`]: standalone CORS-forwarding proxy to another backend
//!
//! All state is read-only after startup, so handlers share it without locking.

pub mod config;
pub mod models;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(feature = "proxy")]
pub mod proxy;
