//! Grid - fixed-size 2D grid over one contiguous buffer
//!
//! Instead of: Vec<Vec<T>>   // Bad: not persistable as plain data, scattered rows
//! We have:    buffer[]      // Good: one linear allocation, row-major
//!
//! Cell `(x, y)` lives at `y * width + x`. Only the computed linear index is
//! validated, so `x` may run past `width` into the next row; use `in_bounds`
//! for a rectangular check.

use serde::{Deserialize, Serialize};

use crate::core::error::{Access, GridError};

mod indexing;
mod accessors;
mod fill_stack;
mod flood_fill;
mod iter;
mod persist;

pub use fill_stack::{FillStack, FillTask};
pub use iter::{Cells, Rows};
pub use persist::GridParts;

/// Row-major grid; `buffer.len() == width * height` for its whole lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridParts<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Grid<T> {
    width: u32,
    height: u32,
    buffer: Vec<T>,
}

/// Cell count for a `width` x `height` grid; `None` for a zero side or a
/// product that does not fit `usize` (32 bits on wasm32)
fn cell_count(width: u32, height: u32) -> Option<usize> {
    if width == 0 || height == 0 {
        return None;
    }
    (width as usize).checked_mul(height as usize)
}

impl<T: Default + Clone> Grid<T> {
    /// Create a grid with every cell at `T::default()`.
    ///
    /// Panics when a side is zero or `width * height` overflows `usize`;
    /// see `try_new`.
    #[track_caller]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, T::default())
    }

    pub fn try_new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::try_filled(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Panics on invalid dimensions, like `new`
    #[track_caller]
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        match Self::try_filled(width, height, value) {
            Ok(grid) => grid,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_filled(width: u32, height: u32, value: T) -> Result<Self, GridError> {
        let size = cell_count(width, height).ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            buffer: vec![value; size],
        })
    }

    /// Overwrite every cell in place
    pub fn fill(&mut self, value: T) {
        self.buffer.fill(value);
    }
}

/// Parameterless grid: no dimensions, no allocation. Only iteration is defined on it.
impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            buffer: Vec::new(),
        }
    }
}

impl<T> Grid<T> {
    /// Restore a grid verbatim from its three persisted fields.
    /// Both sides must be non-zero and the buffer must hold exactly `width * height` cells.
    pub fn from_parts(width: u32, height: u32, buffer: Vec<T>) -> Result<Self, GridError> {
        let expected = cell_count(width, height).ok_or(GridError::InvalidDimensions { width, height })?;
        if buffer.len() != expected {
            return Err(GridError::ShapeMismatch {
                width,
                height,
                len: buffer.len(),
            });
        }
        Ok(Self { width, height, buffer })
    }

    pub fn into_parts(self) -> (u32, u32, Vec<T>) {
        (self.width, self.height, self.buffer)
    }

    // === Raw buffer access for host interop ===
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }
}
