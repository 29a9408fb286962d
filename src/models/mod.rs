pub mod department;
pub mod payload;
pub mod records;

pub use department::{Department, DEPARTMENTS};
pub use payload::{GeoData, Metrics, PagePayload, ZoneEntry};
pub use records::{ForestRecord, LandRecord, MergedRow, UnmatchedForestEntry};
