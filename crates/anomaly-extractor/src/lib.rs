//! Anomaly time-series extraction from gridded temperature datasets.
//!
//! Given a monthly temperature-anomaly grid and a target coordinate, this
//! crate snaps the coordinate to the nearest grid cell, weights each monthly
//! value by its calendar day count, and aggregates to one value per year.
//! The result is the series behind a "warming stripes" plot.
//!
//! The data source is abstracted behind the [`AnomalyGrid`] trait so the
//! extraction logic works against a NetCDF-backed dataset in production and
//! in-memory grids in tests, and so multiple datasets can coexist in one
//! process.

pub mod error;
pub mod extract;
pub mod series;
pub mod source;

pub use error::{ExtractError, ExtractResult};
pub use extract::{aggregate_annual, extract, nearest_cell, CellIndex, CUTOFF_YEAR};
pub use series::{AnnualAnomalySeries, YearValue};
pub use source::{AnomalyGrid, MonthlySample};
