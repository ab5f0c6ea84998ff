//! GeoJSON feature types for the grid overlay.
//!
//! A trimmed-down FeatureCollection model carrying exactly what the map
//! overlay consumes: one Polygon feature per grid cell with a name and the
//! cell's reported center in its properties.

use serde::{Deserialize, Serialize};

use crate::error::OverlayResult;

/// A GeoJSON FeatureCollection of grid cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridFeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of cell features.
    pub features: Vec<GridFeature>,
}

impl GridFeatureCollection {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    /// Add a feature to the collection.
    pub fn push(&mut self, feature: GridFeature) {
        self.features.push(feature);
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Serialize the collection to its JSON wire form.
    ///
    /// Output is deterministic: field order follows the struct definitions
    /// and identical input produces byte-identical JSON.
    pub fn to_json(&self) -> OverlayResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for GridFeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A single grid-cell feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridFeature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// Feature identifier, sequential in generation order.
    pub id: usize,

    /// Cell name and reported center.
    pub properties: CellProperties,

    /// The cell rectangle.
    pub geometry: CellGeometry,
}

/// Properties attached to a grid-cell feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CellProperties {
    /// Human-readable label encoding the cell's corner pair.
    pub name: String,

    /// Reported center longitude.
    pub lon_center: i64,

    /// Reported center latitude.
    pub lat_center: i64,
}

/// A four-point polygon geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CellGeometry {
    /// Type identifier (always "Polygon").
    #[serde(rename = "type")]
    pub type_: String,

    /// A single linear ring of four [longitude, latitude] positions.
    pub coordinates: Vec<Vec<[i64; 2]>>,
}

impl CellGeometry {
    /// Build the rectangle ring (x1,y1),(x2,y1),(x2,y2),(x1,y2).
    ///
    /// The ring carries exactly four positions; the closing point is not
    /// repeated.
    pub fn rectangle(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self {
            type_: "Polygon".to_string(),
            coordinates: vec![vec![[x1, y1], [x2, y1], [x2, y2], [x1, y2]]],
        }
    }
}
