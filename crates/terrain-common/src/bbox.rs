//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::point::GeoPoint;

/// A geographic bounding box.
///
/// Coordinates are in the raster's native units, normally degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box enclosing all given corner points.
    ///
    /// Corners may arrive in any order; a flipped axis in the source
    /// transform only changes which corner holds the extreme value.
    pub fn enclosing(points: &[(f64, f64)]) -> Self {
        let mut bbox = Self::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        );
        for &(x, y) in points {
            bbox.min_x = bbox.min_x.min(x);
            bbox.min_y = bbox.min_y.min(y);
            bbox.max_x = bbox.max_x.max(x);
            bbox.max_y = bbox.max_y.max(y);
        }
        bbox
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Geographic centroid of the box.
    pub fn centroid(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Check if a point is contained within this bbox (edges included).
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Check if a geographic point is contained within this bbox.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.contains_point(point.lon, point.lat)
    }

    /// True when every edge is finite and min <= max on both axes.
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "min x = {}, max x = {}, min y = {}, max y = {}",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_unordered_corners() {
        let bbox = BoundingBox::enclosing(&[(10.0, 0.0), (0.0, -5.0), (10.0, -5.0), (0.0, 0.0)]);
        assert_eq!(bbox.min_x, 0.0);
        assert_eq!(bbox.max_x, 10.0);
        assert_eq!(bbox.min_y, -5.0);
        assert_eq!(bbox.max_y, 0.0);
        assert!(bbox.is_valid());
    }

    #[test]
    fn test_centroid() {
        let bbox = BoundingBox::new(0.0, 0.0, 5.0, 5.0);
        let c = bbox.centroid();
        assert_eq!(c.lon, 2.5);
        assert_eq!(c.lat, 2.5);
    }
}
