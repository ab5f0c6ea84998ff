//! Coordinate axes with nearest-node lookup.

use serde::{Deserialize, Serialize};

/// An ordered array of coordinate nodes along one grid dimension.
///
/// Datasets store their longitude and latitude node values explicitly, so
/// lookup works on the actual node array rather than assuming a regular
/// spacing. Nodes are expected to be monotonic; `nearest` does not require it
/// but snapping is only meaningful on a monotonic axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridAxis {
    values: Vec<f64>,
}

impl GridAxis {
    /// Create an axis from its node values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The node values of this axis.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the axis has no nodes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index of the node nearest to `target`.
    ///
    /// Out-of-range targets snap to the first or last node; there is no
    /// wraparound for longitude axes. Ties resolve to the lower index.
    /// Returns `None` only when the axis is empty.
    pub fn nearest(&self, target: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in self.values.iter().enumerate() {
            let dist = (v - target).abs();
            match best {
                Some((_, d)) if dist >= d => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }
}
