//! Test data generators for synthetic terrain and deposit fields.
//!
//! These generators create predictable, verifiable patterns that can be
//! used across the test suite.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being sliced or flipped
/// correctly by checking that grid[row][col] == col * 1000 + row.
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50);
/// assert_eq!(grid[0], 0.0);
/// assert_eq!(grid[1], 1000.0);
/// assert_eq!(grid[10], 1.0);
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Creates a flat elevation model at a constant height.
pub fn create_flat_dem(width: usize, height: usize, elevation: f32) -> Vec<f32> {
    vec![elevation; width * height]
}

/// Creates a tilted plane: elevation rises by `slope_x` per column and
/// `slope_y` per row, starting at `base`.
pub fn create_plane_dem(
    width: usize,
    height: usize,
    base: f32,
    slope_x: f32,
    slope_y: f32,
) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(base + col as f32 * slope_x + row as f32 * slope_y);
        }
    }
    data
}

/// Creates a volcano-like cone centered in the grid.
///
/// Elevation falls off linearly from `peak` at the center to 0 at the
/// grid's inscribed radius, with a small crater at the summit.
pub fn create_cone_dem(width: usize, height: usize, peak: f32) -> Vec<f32> {
    let cx = (width as f32 - 1.0) / 2.0;
    let cy = (height as f32 - 1.0) / 2.0;
    let radius = cx.min(cy).max(1.0);
    let crater = radius * 0.1;

    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let dx = col as f32 - cx;
            let dy = row as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let elevation = if dist < crater {
                peak * 0.9
            } else {
                (peak * (1.0 - dist / radius)).max(0.0)
            };
            data.push(elevation);
        }
    }
    data
}

/// Creates a deposit layer shaped like a downwind plume.
///
/// Thickness is highest near `(origin_row, origin_col)` and decays with
/// distance, stretched along the column axis. Cells far from the plume
/// are exactly zero, so masking can be checked.
pub fn create_plume_layer(
    width: usize,
    height: usize,
    origin_row: usize,
    origin_col: usize,
    max_thickness: f32,
) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let dr = row as f32 - origin_row as f32;
            let dc = (col as f32 - origin_col as f32) / 3.0;
            let dist2 = dr * dr + dc * dc;
            let value = max_thickness * (-dist2 / 8.0).exp();
            data.push(if value < 0.01 { 0.0 } else { value });
        }
    }
    data
}

/// Creates RGBA test pixels with a predictable gradient pattern.
///
/// Red increases along columns, green along rows, blue is fixed and the
/// image is fully opaque.
pub fn create_test_rgba_pixels(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for row in 0..height {
        for col in 0..width {
            pixels.push(((col * 255) / width.max(1)) as u8);
            pixels.push(((row * 255) / height.max(1)) as u8);
            pixels.push(128);
            pixels.push(255);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_grid() {
        let grid = create_test_grid(10, 5);
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[1], 1000.0);
        assert_eq!(grid[10], 1.0);
        assert_eq!(grid[11], 1001.0);
    }

    #[test]
    fn test_cone_peaks_in_center() {
        let dem = create_cone_dem(21, 21, 1000.0);
        let center = dem[10 * 21 + 10];
        let corner = dem[0];
        assert!(center > 800.0);
        assert_eq!(corner, 0.0);
    }

    #[test]
    fn test_plane_dem() {
        let dem = create_plane_dem(4, 3, 100.0, 2.0, 5.0);
        assert_eq!(dem[0], 100.0);
        assert_eq!(dem[3], 106.0);
        assert_eq!(dem[4], 105.0);
    }

    #[test]
    fn test_plume_has_zero_background() {
        let layer = create_plume_layer(40, 20, 10, 5, 3.0);
        assert!(layer[10 * 40 + 5] > 2.9);
        assert_eq!(layer[0 * 40 + 39], 0.0);
    }

    #[test]
    fn test_create_test_rgba_pixels() {
        let pixels = create_test_rgba_pixels(8, 4);
        assert_eq!(pixels.len(), 8 * 4 * 4);
        assert!(pixels.chunks(4).all(|p| p[3] == 255));
    }
}
