pub mod geojson;
pub mod layer;
pub mod stats;

pub use geojson::*;
pub use layer::*;
pub use stats::*;
