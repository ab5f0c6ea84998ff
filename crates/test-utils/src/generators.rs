//! Synthetic anomaly grids with predictable, verifiable values.

use std::collections::HashMap;

use chrono::NaiveDate;

use anomaly_extractor::{AnomalyGrid, ExtractError, ExtractResult, MonthlySample};
use stripes_common::GridAxis;

/// An in-memory anomaly grid for tests.
///
/// Every cell returns the default series unless an override was installed
/// with [`SyntheticGrid::with_cell_series`].
pub struct SyntheticGrid {
    lon_axis: GridAxis,
    lat_axis: GridAxis,
    default_series: Vec<MonthlySample>,
    overrides: HashMap<(usize, usize), Vec<MonthlySample>>,
}

impl SyntheticGrid {
    /// Create a grid over the given longitude and latitude nodes with an
    /// empty default series.
    pub fn new(lons: Vec<f64>, lats: Vec<f64>) -> Self {
        Self {
            lon_axis: GridAxis::new(lons),
            lat_axis: GridAxis::new(lats),
            default_series: Vec::new(),
            overrides: HashMap::new(),
        }
    }

    /// Set the series returned by every cell without an override.
    pub fn with_default_series(mut self, samples: Vec<MonthlySample>) -> Self {
        self.default_series = samples;
        self
    }

    /// Set the series for one specific cell.
    pub fn with_cell_series(
        mut self,
        lon_idx: usize,
        lat_idx: usize,
        samples: Vec<MonthlySample>,
    ) -> Self {
        self.overrides.insert((lon_idx, lat_idx), samples);
        self
    }
}

impl AnomalyGrid for SyntheticGrid {
    fn lon_axis(&self) -> &GridAxis {
        &self.lon_axis
    }

    fn lat_axis(&self) -> &GridAxis {
        &self.lat_axis
    }

    fn monthly_series(
        &self,
        lon_idx: usize,
        lat_idx: usize,
    ) -> ExtractResult<Vec<MonthlySample>> {
        Ok(self
            .overrides
            .get(&(lon_idx, lat_idx))
            .unwrap_or(&self.default_series)
            .clone())
    }
}

/// A grid whose reads always fail, for exercising error propagation.
pub struct ClosedGrid {
    lon_axis: GridAxis,
    lat_axis: GridAxis,
}

impl ClosedGrid {
    pub fn new() -> Self {
        Self {
            lon_axis: GridAxis::new(vec![0.0, 5.0]),
            lat_axis: GridAxis::new(vec![0.0, 5.0]),
        }
    }
}

impl Default for ClosedGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl AnomalyGrid for ClosedGrid {
    fn lon_axis(&self) -> &GridAxis {
        &self.lon_axis
    }

    fn lat_axis(&self) -> &GridAxis {
        &self.lat_axis
    }

    fn monthly_series(&self, _: usize, _: usize) -> ExtractResult<Vec<MonthlySample>> {
        Err(ExtractError::DataUnavailable(
            "synthetic dataset is closed".to_string(),
        ))
    }
}

/// Twelve months of the given year, all carrying the same value.
pub fn full_year(year: i32, value: f32) -> Vec<MonthlySample> {
    (1..=12)
        .map(|m| {
            MonthlySample::new(NaiveDate::from_ymd_opt(year, m, 1).unwrap(), Some(value))
        })
        .collect()
}

/// Months of a year with explicit values; `None` marks a missing month.
/// Takes at most twelve values, starting at January.
pub fn monthly_values(year: i32, values: &[Option<f32>]) -> Vec<MonthlySample> {
    values
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, v)| {
            MonthlySample::new(NaiveDate::from_ymd_opt(year, i as u32 + 1, 1).unwrap(), *v)
        })
        .collect()
}

/// A multi-year series with a linear warming trend: the anomaly for `year`
/// is `(year - start) * step`, constant across the year's months.
pub fn warming_trend(start: i32, end: i32, step: f32) -> Vec<MonthlySample> {
    let mut samples = Vec::new();
    for year in start..=end {
        samples.extend(full_year(year, (year - start) as f32 * step));
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_full_year_has_twelve_months() {
        let samples = full_year(1995, 0.5);
        assert_eq!(samples.len(), 12);
        assert!(samples.iter().all(|s| s.date.year() == 1995));
        assert!(samples.iter().all(|s| s.value == Some(0.5)));
    }

    #[test]
    fn test_monthly_values_marks_missing() {
        let samples = monthly_values(2000, &[Some(1.0), None, Some(3.0)]);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1].value, None);
        assert_eq!(samples[2].date.month(), 3);
    }

    #[test]
    fn test_warming_trend_is_linear() {
        let samples = warming_trend(1900, 1902, 0.1);
        assert_eq!(samples.len(), 36);
        assert_eq!(samples[0].value, Some(0.0));
        assert_eq!(samples[35].value, Some(0.2));
    }

    #[test]
    fn test_synthetic_grid_override() {
        let grid = SyntheticGrid::new(vec![0.0, 5.0], vec![0.0, 5.0])
            .with_default_series(full_year(1990, 1.0))
            .with_cell_series(1, 0, full_year(1990, 2.0));

        let default = grid.monthly_series(0, 0).unwrap();
        let special = grid.monthly_series(1, 0).unwrap();
        assert_eq!(default[0].value, Some(1.0));
        assert_eq!(special[0].value, Some(2.0));
    }
}
