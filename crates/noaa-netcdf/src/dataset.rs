//! NetCDF-backed anomaly dataset.

use std::path::Path;

use tracing::{debug, info};

use anomaly_extractor::{AnomalyGrid, ExtractError, ExtractResult, MonthlySample};
use chrono::NaiveDate;
use stripes_common::GridAxis;

use crate::error::{DatasetError, DatasetResult};
use crate::time_axis::decode_time_axis;

/// Default name of the monthly anomaly variable in NOAA files.
pub const DEFAULT_VARIABLE: &str = "anom";

/// A read-only handle over a NOAA gridded anomaly file.
///
/// Opened once and passed explicitly to extraction; nothing here is global,
/// so several datasets can coexist in one process. Coordinate axes and the
/// time axis are loaded up front, anomaly values are read per queried cell.
pub struct NoaaDataset {
    file: netcdf::File,
    variable: String,
    lon_axis: GridAxis,
    lat_axis: GridAxis,
    time_axis: Vec<NaiveDate>,
    fill_value: Option<f32>,
    scale_factor: f32,
    add_offset: f32,
}

impl NoaaDataset {
    /// Open a dataset using the default anomaly variable name.
    pub fn open<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        Self::open_variable(path, DEFAULT_VARIABLE)
    }

    /// Open a dataset reading the named anomaly variable.
    ///
    /// The variable must be laid out as (time, level, lat, lon); the monthly
    /// series is read at level index 0, the surface.
    pub fn open_variable<P: AsRef<Path>>(path: P, variable: &str) -> DatasetResult<Self> {
        let path = path.as_ref();
        let file = netcdf::open(path)
            .map_err(|e| DatasetError::Open(format!("{}: {}", path.display(), e)))?;

        let lons = read_coordinate_values(&file, "lon")?;
        let lats = read_coordinate_values(&file, "lat")?;

        let time_var = file
            .variable("time")
            .ok_or_else(|| DatasetError::MissingData("time variable".to_string()))?;
        let time_values: Vec<f64> = time_var
            .get_values(..)
            .map_err(|e| DatasetError::InvalidFormat(format!("Failed to read time: {}", e)))?;
        let units = get_str_attr(&time_var, "units")
            .ok_or_else(|| DatasetError::MissingData("units attribute on time".to_string()))?;
        let time_axis = decode_time_axis(&time_values, &units)?;

        let anom_var = file
            .variable(variable)
            .ok_or_else(|| DatasetError::MissingData(format!("{} variable", variable)))?;

        let dims: Vec<String> = anom_var.dimensions().iter().map(|d| d.name()).collect();
        match dims.as_slice() {
            [t, _level, la, lo]
                if t.as_str() == "time" && la.as_str() == "lat" && lo.as_str() == "lon" => {}
            _ => {
                return Err(DatasetError::InvalidFormat(format!(
                    "expected (time, level, lat, lon) dimensions on {}, got ({})",
                    variable,
                    dims.join(", ")
                )))
            }
        }

        let fill_value =
            get_f32_attr(&anom_var, "missing_value").or_else(|| get_f32_attr(&anom_var, "_FillValue"));
        let scale_factor = get_f32_attr(&anom_var, "scale_factor").unwrap_or(1.0);
        let add_offset = get_f32_attr(&anom_var, "add_offset").unwrap_or(0.0);

        info!(
            path = %path.display(),
            variable,
            lons = lons.len(),
            lats = lats.len(),
            months = time_axis.len(),
            "opened anomaly dataset"
        );

        Ok(Self {
            file,
            variable: variable.to_string(),
            lon_axis: GridAxis::new(lons),
            lat_axis: GridAxis::new(lats),
            time_axis,
            fill_value,
            scale_factor,
            add_offset,
        })
    }

    /// Number of monthly time steps in the dataset.
    pub fn months(&self) -> usize {
        self.time_axis.len()
    }

    /// Calendar span of the time axis, if non-empty.
    pub fn time_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.time_axis.first()?, *self.time_axis.last()?))
    }

    /// Map a raw stored value to a present sample value.
    fn unpack(&self, raw: f32) -> Option<f32> {
        if raw.is_nan() || self.fill_value == Some(raw) {
            None
        } else {
            Some(raw * self.scale_factor + self.add_offset)
        }
    }
}

impl AnomalyGrid for NoaaDataset {
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
        let var = self.file.variable(&self.variable).ok_or_else(|| {
            ExtractError::DataUnavailable(format!("{} variable no longer readable", self.variable))
        })?;

        // One cell across all time steps, surface level only.
        let raw: Vec<f32> = var
            .get_values((.., 0..1, lat_idx..lat_idx + 1, lon_idx..lon_idx + 1))
            .map_err(|e| {
                ExtractError::DataUnavailable(format!(
                    "failed to read {} at cell ({}, {}): {}",
                    self.variable, lon_idx, lat_idx, e
                ))
            })?;

        if raw.len() != self.time_axis.len() {
            return Err(ExtractError::DataUnavailable(format!(
                "read {} values for {} time steps",
                raw.len(),
                self.time_axis.len()
            )));
        }

        debug!(lon_idx, lat_idx, months = raw.len(), "read monthly series");

        Ok(self
            .time_axis
            .iter()
            .zip(raw)
            .map(|(&date, value)| MonthlySample::new(date, self.unpack(value)))
            .collect())
    }
}

/// Read a 1-D coordinate variable's values.
fn read_coordinate_values(file: &netcdf::File, name: &str) -> DatasetResult<Vec<f64>> {
    let var = file
        .variable(name)
        .ok_or_else(|| DatasetError::MissingData(format!("{} variable", name)))?;
    var.get_values(..)
        .map_err(|e| DatasetError::InvalidFormat(format!("Failed to read {}: {}", name, e)))
}

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when checking for optional attributes.
fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

// Helper to get f32 attribute using TryInto
fn get_f32_attr(var: &netcdf::Variable, name: &str) -> Option<f32> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f32::try_from(attr_value).ok()
}

// Helper to get a string attribute
fn get_str_attr(var: &netcdf::Variable, name: &str) -> Option<String> {
    if !has_attr(var, name) {
        return None;
    }
    match var.attribute_value(name)?.ok()? {
        netcdf::AttributeValue::Str(s) => Some(s),
        _ => None,
    }
}
