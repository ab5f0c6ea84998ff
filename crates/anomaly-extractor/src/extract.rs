//! Nearest-cell extraction and days-weighted annual aggregation.

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::debug;

use stripes_common::days_in_month;

use crate::error::{ExtractError, ExtractResult};
use crate::series::{AnnualAnomalySeries, YearValue};
use crate::source::{AnomalyGrid, MonthlySample};

/// First year considered incomplete.
///
/// Years at or beyond this boundary are dropped so a partially-recorded
/// trailing year cannot skew the series. A policy constant, not derived from
/// the data.
pub const CUTOFF_YEAR: i32 = 2020;

/// The grid cell a query coordinate snapped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellIndex {
    /// Index into the longitude axis.
    pub lon_idx: usize,
    /// Index into the latitude axis.
    pub lat_idx: usize,
    /// Longitude node value at `lon_idx`.
    pub lon: f64,
    /// Latitude node value at `lat_idx`.
    pub lat: f64,
}

/// Snap a query coordinate to the nearest grid cell.
///
/// Longitude and latitude snap independently to their axis node arrays;
/// out-of-range queries land on the boundary node. Fails only when an axis
/// has no nodes.
pub fn nearest_cell<G: AnomalyGrid + ?Sized>(
    grid: &G,
    lon: f64,
    lat: f64,
) -> ExtractResult<CellIndex> {
    let lon_idx = grid
        .lon_axis()
        .nearest(lon)
        .ok_or_else(|| ExtractError::DataUnavailable("longitude axis has no nodes".to_string()))?;
    let lat_idx = grid
        .lat_axis()
        .nearest(lat)
        .ok_or_else(|| ExtractError::DataUnavailable("latitude axis has no nodes".to_string()))?;

    Ok(CellIndex {
        lon_idx,
        lat_idx,
        lon: grid.lon_axis().values()[lon_idx],
        lat: grid.lat_axis().values()[lat_idx],
    })
}

/// Extract the annual anomaly series nearest to `(lon, lat)`.
///
/// Snaps to the nearest cell, weights each present monthly value by its
/// calendar day count, aggregates per year, and drops years at or beyond
/// [`CUTOFF_YEAR`]. A cell with no present samples yields a valid empty
/// series.
pub fn extract<G: AnomalyGrid + ?Sized>(
    grid: &G,
    lon: f64,
    lat: f64,
) -> ExtractResult<AnnualAnomalySeries> {
    let cell = nearest_cell(grid, lon, lat)?;
    debug!(
        lon,
        lat,
        cell_lon = cell.lon,
        cell_lat = cell.lat,
        "snapped query to grid cell"
    );

    let samples = grid.monthly_series(cell.lon_idx, cell.lat_idx)?;
    Ok(aggregate_annual(&samples, CUTOFF_YEAR))
}

/// Aggregate monthly samples into annual values.
///
/// The annual value is `sum(value × days-in-month) / count(present months)`:
/// a days-weighted sum normalized by the number of samples, not by the total
/// day count. Missing months contribute to neither sum nor count, and a year
/// with no present samples emits no entry. Years `>= cutoff_year` are
/// discarded.
pub fn aggregate_annual(samples: &[MonthlySample], cutoff_year: i32) -> AnnualAnomalySeries {
    let mut by_year: BTreeMap<i32, (f64, u32)> = BTreeMap::new();

    for sample in samples {
        let year = sample.date.year();
        if year >= cutoff_year {
            continue;
        }
        // NaN from a source that did not map its fill value counts as missing.
        let value = match sample.value {
            Some(v) if !v.is_nan() => v,
            _ => continue,
        };

        let weighted = f64::from(value) * f64::from(days_in_month(sample.date));
        let entry = by_year.entry(year).or_insert((0.0, 0));
        entry.0 += weighted;
        entry.1 += 1;
    }

    AnnualAnomalySeries::new(
        by_year
            .into_iter()
            .map(|(year, (sum, count))| YearValue {
                year,
                value: sum / f64::from(count),
            })
            .collect(),
    )
}
