//! Rectangular grid-cell generation from coordinate node arrays.

use crate::error::{OverlayError, OverlayResult};
use crate::geojson::{CellGeometry, CellProperties, GridFeature, GridFeatureCollection};

/// A grid cell defined by two opposite integer corners, x1 < x2 and y1 < y2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl GridCell {
    /// The cell's reported center: corner plus the x-extent on BOTH axes.
    ///
    /// The longitude extent `x2 - x1` is reused as the latitude offset, so
    /// for non-square cells this is not the true centroid. Existing overlay
    /// files encode this value; it is kept exactly rather than corrected.
    pub fn center(&self) -> (i64, i64) {
        let extent = self.x2 - self.x1;
        (self.x1 + extent, self.y1 + extent)
    }

    /// Label encoding the corner pair.
    pub fn name(&self) -> String {
        format!("({},{})-({},{})", self.x1, self.y1, self.x2, self.y2)
    }

    /// Convert the cell into its overlay feature.
    pub fn to_feature(&self, id: usize) -> GridFeature {
        let (lon_center, lat_center) = self.center();
        GridFeature {
            type_: "Feature".to_string(),
            id,
            properties: CellProperties {
                name: self.name(),
                lon_center,
                lat_center,
            },
            geometry: CellGeometry::rectangle(self.x1, self.y1, self.x2, self.y2),
        }
    }
}

/// Generate the grid-cell feature collection for the given node arrays.
///
/// Every adjacent pair of `x_nodes` combined with every adjacent pair of
/// `y_nodes` becomes one rectangular feature, corners truncated to integers.
/// Output is deterministic: x-pairs iterate in the outer loop, y-pairs in
/// the inner loop, and feature ids count up from zero in that order.
///
/// Node arrays must have at least two elements, be finite, and remain
/// strictly increasing after integer truncation; anything else fails with
/// [`OverlayError::InvalidInput`].
pub fn generate_grid(x_nodes: &[f64], y_nodes: &[f64]) -> OverlayResult<GridFeatureCollection> {
    let xs = truncate_axis("x", x_nodes)?;
    let ys = truncate_axis("y", y_nodes)?;

    let mut collection = GridFeatureCollection::new();
    let mut id = 0;
    for x_pair in xs.windows(2) {
        for y_pair in ys.windows(2) {
            let cell = GridCell {
                x1: x_pair[0],
                y1: y_pair[0],
                x2: x_pair[1],
                y2: y_pair[1],
            };
            collection.push(cell.to_feature(id));
            id += 1;
        }
    }

    Ok(collection)
}

/// Truncate an axis to integers, validating the node sequence.
fn truncate_axis(axis: &str, nodes: &[f64]) -> OverlayResult<Vec<i64>> {
    if nodes.len() < 2 {
        return Err(OverlayError::InvalidInput(format!(
            "{} axis needs at least 2 nodes, got {}",
            axis,
            nodes.len()
        )));
    }
    if nodes.iter().any(|v| !v.is_finite()) {
        return Err(OverlayError::InvalidInput(format!(
            "{} axis contains a non-finite node",
            axis
        )));
    }
    if nodes.windows(2).any(|w| w[0] >= w[1]) {
        return Err(OverlayError::InvalidInput(format!(
            "{} axis nodes must be strictly increasing",
            axis
        )));
    }

    let truncated: Vec<i64> = nodes.iter().map(|v| v.trunc() as i64).collect();
    if truncated.windows(2).any(|w| w[0] >= w[1]) {
        return Err(OverlayError::InvalidInput(format!(
            "{} axis nodes collapse after integer truncation",
            axis
        )));
    }

    Ok(truncated)
}

/// Node arrays for a global lon/lat grid with the given step in degrees:
/// longitudes spanning [-180, 180], latitudes [-90, 90], both inclusive.
pub fn global_grid_nodes(step: f64) -> (Vec<f64>, Vec<f64>) {
    (
        axis_nodes(-180.0, 180.0, step),
        axis_nodes(-90.0, 90.0, step),
    )
}

fn axis_nodes(start: f64, end: f64, step: f64) -> Vec<f64> {
    debug_assert!(step > 0.0);
    let count = ((end - start) / step).round() as usize;
    (0..=count).map(|i| start + i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_quirk_on_non_square_cell() {
        // x-extent 10, y-extent 5: the y-center offset still uses 10.
        let cell = GridCell { x1: 0, y1: 0, x2: 10, y2: 5 };
        assert_eq!(cell.center(), (10, 10));
    }

    #[test]
    fn test_name_encodes_corner_pair() {
        let cell = GridCell { x1: -180, y1: -90, x2: -175, y2: -85 };
        assert_eq!(cell.name(), "(-180,-90)-(-175,-85)");
    }

    #[test]
    fn test_truncation_is_toward_zero() {
        let xs = truncate_axis("x", &[-177.5, -172.5, 2.5, 7.9]).unwrap();
        assert_eq!(xs, vec![-177, -172, 2, 7]);
    }

    #[test]
    fn test_too_few_nodes_rejected() {
        let err = generate_grid(&[0.0], &[0.0, 5.0]).unwrap_err();
        assert!(matches!(err, OverlayError::InvalidInput(_)));
    }

    #[test]
    fn test_decreasing_nodes_rejected() {
        let err = generate_grid(&[0.0, 5.0], &[5.0, 0.0]).unwrap_err();
        assert!(matches!(err, OverlayError::InvalidInput(_)));
    }

    #[test]
    fn test_non_finite_node_rejected() {
        let err = generate_grid(&[0.0, f64::NAN], &[0.0, 5.0]).unwrap_err();
        assert!(matches!(err, OverlayError::InvalidInput(_)));
    }

    #[test]
    fn test_nodes_collapsing_under_truncation_rejected() {
        // 0.2 and 0.8 both truncate to 0.
        let err = generate_grid(&[0.2, 0.8], &[0.0, 5.0]).unwrap_err();
        assert!(matches!(err, OverlayError::InvalidInput(_)));
    }

    #[test]
    fn test_global_nodes_count() {
        let (xs, ys) = global_grid_nodes(5.0);
        assert_eq!(xs.len(), 73);
        assert_eq!(ys.len(), 37);
        assert_eq!(xs[0], -180.0);
        assert_eq!(*xs.last().unwrap(), 180.0);
        assert_eq!(ys[0], -90.0);
        assert_eq!(*ys.last().unwrap(), 90.0);
    }
}
