//! Shared test utilities for the relief viewer workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Lookup of optional real-world test data
//! - Skip macros for optional test data
//! - Synthetic terrain and deposit generators
//! - Common geotransform fixtures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, transforms, create_cone_dem};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro to skip a test if the required file is not found.
///
/// Real DEM tiles and simulation outputs are large and are not checked
/// in; tests that need them return early when they are missing.
///
/// # Usage
///
/// ```ignore
/// use test_utils::require_test_file;
///
/// #[test]
/// fn test_dem_loading() {
///     let path = require_test_file!("teide_dem.tif");
///     // Test code using path...
/// }
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "SKIPPED: Test file '{}' not found. Download test data or set TEST_DATA_DIR.",
                    $name
                );
                return;
            }
        }
    }};
}

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of coordinate pairs.
///
/// Works for `(lon, lat)` and `(x, y)` pairs alike.
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
}

/// Macro for element-wise approximate equality of two `f32` slices.
///
/// NaN matches NaN, so masked grids can be compared directly.
#[macro_export]
macro_rules! assert_grid_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: &[f32] = $left;
        let right: &[f32] = $right;
        assert_eq!(left.len(), right.len(), "grid lengths differ");
        for (i, (a, b)) in left.iter().zip(right.iter()).enumerate() {
            if a.is_nan() && b.is_nan() {
                continue;
            }
            if (a - b).abs() as f64 > $epsilon as f64 {
                panic!(
                    "assertion failed: grids differ at index {}: {:?} vs {:?}",
                    i, a, b
                );
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    fn test_assert_coords_approx_eq_passes() {
        assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
    }

    #[test]
    fn test_assert_grid_approx_eq_nan_matches() {
        let a = [1.0f32, f32::NAN, 3.0];
        let b = [1.00001f32, f32::NAN, 3.0];
        assert_grid_approx_eq!(&a, &b, 0.001);
    }

    #[test]
    #[should_panic(expected = "grids differ at index 1")]
    fn test_assert_grid_approx_eq_fails() {
        let a = [1.0f32, 2.0];
        let b = [1.0f32, 2.5];
        assert_grid_approx_eq!(&a, &b, 0.001);
    }
}
