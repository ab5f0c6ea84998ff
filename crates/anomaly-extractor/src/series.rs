//! Annual anomaly series types.

use serde::{Deserialize, Serialize};

/// One aggregated annual anomaly value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    /// Calendar year.
    pub year: i32,
    /// Days-weighted annual anomaly.
    pub value: f64,
}

/// An ordered sequence of annual anomaly values, one per calendar year,
/// years strictly increasing.
///
/// The series is owned by the caller that requested it; nothing is cached
/// across extractions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnualAnomalySeries {
    values: Vec<YearValue>,
}

impl AnnualAnomalySeries {
    /// Create a series from year-ordered values.
    ///
    /// Callers are expected to pass values sorted by strictly increasing
    /// year; [`crate::aggregate_annual`] always does.
    pub fn new(values: Vec<YearValue>) -> Self {
        debug_assert!(values.windows(2).all(|w| w[0].year < w[1].year));
        Self { values }
    }

    /// The (year, value) entries in year order.
    pub fn values(&self) -> &[YearValue] {
        &self.values
    }

    /// Iterate over entries in year order.
    pub fn iter(&self) -> impl Iterator<Item = &YearValue> {
        self.values.iter()
    }

    /// Number of years in the series.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series has no entries.
    ///
    /// An empty series is a valid result: the nearest cell simply has no
    /// data (an all-ocean dataset queried over land, for example).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First year covered, if any.
    pub fn first_year(&self) -> Option<i32> {
        self.values.first().map(|v| v.year)
    }

    /// Last year covered, if any.
    pub fn last_year(&self) -> Option<i32> {
        self.values.last().map(|v| v.year)
    }

    /// Smallest anomaly in the series, if any.
    ///
    /// Together with [`Self::max_value`] these are the color-scale bounds a
    /// stripes renderer would use.
    pub fn min_value(&self) -> Option<f64> {
        self.values.iter().map(|v| v.value).reduce(f64::min)
    }

    /// Largest anomaly in the series, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().map(|v| v.value).reduce(f64::max)
    }
}

impl IntoIterator for AnnualAnomalySeries {
    type Item = YearValue;
    type IntoIter = std::vec::IntoIter<YearValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
