//! NetCDF reader for NOAA gridded temperature-anomaly data.
//!
//! Reads NOAAGlobalTemp-style files: a monthly anomaly variable over
//! (time, level, lat, lon) dimensions, with a CF-style `units` attribute on
//! the time coordinate. The opened dataset implements
//! [`anomaly_extractor::AnomalyGrid`], so extraction code never sees NetCDF
//! details.

pub mod dataset;
pub mod error;
pub mod time_axis;

pub use dataset::{NoaaDataset, DEFAULT_VARIABLE};
pub use error::{DatasetError, DatasetResult};
