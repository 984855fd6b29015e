//! Common test fixtures for relief viewer tests.
//!
//! Geotransforms and extents that show up repeatedly across the suite.

/// GDAL-ordered geotransforms for testing.
pub mod transforms {
    /// 1 unit per pixel, north-up, origin at (0, 0).
    pub const UNIT_NORTH_UP: [f64; 6] = [0.0, 1.0, 0.0, 0.0, 0.0, -1.0];

    /// 1 unit per pixel, south-up (rows increase with latitude).
    pub const UNIT_SOUTH_UP: [f64; 6] = [0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

    /// A 5x5 degree box from (0, 0) to (5, 5) split into 100x100 pixels.
    pub const FIVE_DEGREE_BOX: [f64; 6] = [0.0, 0.05, 0.0, 5.0, 0.0, -0.05];

    /// A one-arc-second DEM tile over the Canary Islands.
    pub const CANARY_TILE: [f64; 6] = [
        -17.000138888888889,
        0.000277777777778,
        0.0,
        29.000138888888889,
        0.0,
        -0.000277777777778,
    ];
}

/// Raster sizes matching the transforms above.
pub mod sizes {
    pub const SMALL: (usize, usize) = (100, 100);
    pub const CANARY_TILE: (usize, usize) = (3601, 3601);
}

/// Geographic points of interest.
pub mod points {
    /// Summit of Teide, inside `CANARY_TILE`.
    pub const TEIDE: (f64, f64) = (-16.6425, 28.2725);

    /// Far outside every fixture transform.
    pub const OFF_MAP: (f64, f64) = (120.0, -60.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canary_tile_contains_teide() {
        let gt = transforms::CANARY_TILE;
        let (w, h) = sizes::CANARY_TILE;
        let max_x = gt[0] + w as f64 * gt[1];
        let min_y = gt[3] + h as f64 * gt[5];
        let (lon, lat) = points::TEIDE;
        assert!(lon > gt[0] && lon < max_x);
        assert!(lat > min_y && lat < gt[3]);
    }
}
