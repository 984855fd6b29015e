//! Row-major matrices and pixel windows.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{TerrainError, TerrainResult};
use crate::point::PixelPoint;

/// A dense 2-D matrix of `f32` values in row-major order.
///
/// `width` is the number of columns (x) and `height` the number of rows (y).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Wrap existing row-major data.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> TerrainResult<Self> {
        if data.len() != width * height {
            return Err(TerrainError::InvalidRasterMetadata(format!(
                "grid data has {} values, expected {}x{} = {}",
                data.len(),
                width,
                height,
                width * height
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// A grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    pub fn zeros(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0.0)
    }

    /// A 0x0 grid.
    pub fn empty() -> Self {
        Self::zeros(0, 0)
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Matrix shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Flat index of `(row, col)`.
    #[inline]
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Value at `(row, col)`, or None outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.data[self.flat_index(row, col)])
    }

    /// Value under a pixel point, using the row/column swap of
    /// [`PixelPoint::to_row_col`].
    pub fn at(&self, point: &PixelPoint) -> Option<f32> {
        let (row, col) = point.to_row_col()?;
        self.get(row, col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        let idx = self.flat_index(row, col);
        self.data[idx] = value;
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Copy out the cells covered by `window`.
    ///
    /// Rows come from `window.rows()` and columns from `window.cols()`.
    /// The window is clipped to this grid first.
    pub fn slice(&self, window: &PixelWindow) -> Grid {
        let rows = window.y0.min(self.height)..window.y1.min(self.height);
        let cols = window.x0.min(self.width)..window.x1.min(self.width);
        let width = cols.len();
        let height = rows.len();

        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            let start = row * self.width;
            data.extend_from_slice(&self.data[start + cols.start..start + cols.end]);
        }

        Grid {
            data,
            width,
            height,
        }
    }

    /// Reverse the order of rows (mirror across the horizontal axis).
    pub fn flip_rows(&self) -> Grid {
        let mut data = Vec::with_capacity(self.data.len());
        for row in (0..self.height).rev() {
            data.extend_from_slice(self.row(row));
        }
        Grid {
            data,
            width: self.width,
            height: self.height,
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Grid {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.width {
            for row in 0..self.height {
                data.push(self.data[row * self.width + col]);
            }
        }
        Grid {
            data,
            width: self.height,
            height: self.width,
        }
    }

    /// Element-wise `self += other`. Shapes must match.
    pub fn add_assign(&mut self, other: &Grid) -> TerrainResult<()> {
        if self.shape() != other.shape() {
            return Err(TerrainError::LayerShapeMismatch {
                layer: "<summand>".to_string(),
                expected: self.shape(),
                found: other.shape(),
            });
        }
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += *b;
        }
        Ok(())
    }

    /// Replace every cell exactly equal to `value` with NaN.
    ///
    /// Returns the number of cells masked.
    pub fn mask_value(&mut self, value: f32) -> usize {
        let mut masked = 0;
        for v in self.data.iter_mut() {
            if *v == value {
                *v = f32::NAN;
                masked += 1;
            }
        }
        masked
    }

    /// Apply `f` to every cell.
    pub fn map<F>(&self, f: F) -> Grid
    where
        F: Fn(f32) -> f32,
    {
        Grid {
            data: self.data.iter().map(|&v| f(v)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Minimum and maximum over non-NaN cells.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Integer pixel bounds `[x0, x1) x [y0, y1)` on a raster.
///
/// Always normalized so that `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelWindow {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl PixelWindow {
    /// The window covering a whole raster.
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: width,
            y1: height,
        }
    }

    /// Build a window from two opposite corners in any order.
    ///
    /// Each coordinate is clamped independently to `[0, width]` or
    /// `[0, height]`, the pairs are swapped into ascending order, and the
    /// result is truncated to whole pixels.
    pub fn from_corners(a: PixelPoint, b: PixelPoint, width: usize, height: usize) -> Self {
        let clamp = |v: f64, max: usize| -> f64 {
            if v.is_nan() {
                0.0
            } else {
                v.clamp(0.0, max as f64)
            }
        };

        let mut x0 = clamp(a.x, width);
        let mut x1 = clamp(b.x, width);
        let mut y0 = clamp(a.y, height);
        let mut y1 = clamp(b.y, height);

        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
        }
        if y0 > y1 {
            std::mem::swap(&mut y0, &mut y1);
        }

        Self {
            x0: x0 as usize,
            y0: y0 as usize,
            x1: x1 as usize,
            y1: y1 as usize,
        }
    }

    pub fn width(&self) -> usize {
        self.x1 - self.x0
    }

    pub fn height(&self) -> usize {
        self.y1 - self.y0
    }

    /// Matrix rows covered by the window (the y range).
    pub fn rows(&self) -> Range<usize> {
        self.y0..self.y1
    }

    /// Matrix columns covered by the window (the x range).
    pub fn cols(&self) -> Range<usize> {
        self.x0..self.x1
    }

    /// True when the window has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}
