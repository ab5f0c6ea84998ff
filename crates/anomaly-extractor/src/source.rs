//! Data source abstraction for monthly anomaly grids.

use chrono::NaiveDate;
use stripes_common::GridAxis;

use crate::error::ExtractResult;

/// One monthly anomaly sample at a grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySample {
    /// Calendar month of the sample, represented by a date within the month.
    pub date: NaiveDate,
    /// Anomaly value in the dataset's units (typically kelvin relative to a
    /// reference average). `None` when the dataset marks the month missing.
    pub value: Option<f32>,
}

impl MonthlySample {
    /// Create a sample for the given month.
    pub fn new(date: NaiveDate, value: Option<f32>) -> Self {
        Self { date, value }
    }
}

/// A gridded source of monthly anomaly values.
///
/// Implementations expose their longitude/latitude node arrays and the
/// monthly series at a cell, already reduced to the surface depth level.
/// The handle is read-only; extraction never mutates the source.
pub trait AnomalyGrid {
    /// Longitude node values of the grid.
    fn lon_axis(&self) -> &GridAxis;

    /// Latitude node values of the grid.
    fn lat_axis(&self) -> &GridAxis;

    /// The full monthly series at the cell `(lon_idx, lat_idx)`, in time
    /// order. Missing months carry `value: None`.
    fn monthly_series(&self, lon_idx: usize, lat_idx: usize)
        -> ExtractResult<Vec<MonthlySample>>;
}
