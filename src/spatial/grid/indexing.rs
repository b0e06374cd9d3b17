use super::*;

impl<T> Grid<T> {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    /// Total element count, `width * height`
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    // === Index conversion ===
    #[inline]
    fn linear_index(&self, x: i32, y: i32) -> i64 {
        y as i64 * self.width as i64 + x as i64
    }

    /// Translate `(x, y)` into a buffer index.
    ///
    /// Only the linear result is checked against `[0, len)`; `x` is not
    /// bounded by `width`, so `(width, 0)` resolves to `(0, 1)`.
    #[inline]
    pub fn compute_index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        let index = self.linear_index(x, y);
        if index < 0 || index >= self.buffer.len() as i64 {
            return Err(GridError::IndexOutOfRange {
                x,
                y,
                index,
                len: self.buffer.len(),
            });
        }
        Ok(index as usize)
    }

    /// Non-failing form of `compute_index`
    #[inline]
    pub fn is_valid_index(&self, x: i32, y: i32) -> bool {
        let index = self.linear_index(x, y);
        index >= 0 && index < self.buffer.len() as i64
    }

    /// Inverse of `compute_index` for `idx < len`
    #[inline]
    pub fn coords(&self, idx: usize) -> (i32, i32) {
        debug_assert!(self.width > 0, "coords: grid has no columns");
        let x = (idx % self.width as usize) as i32;
        let y = (idx / self.width as usize) as i32;
        (x, y)
    }

    // === Bounds checking ===
    /// Strict rectangular check, unlike `is_valid_index`
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as i64) < self.width as i64 && y >= 0 && (y as i64) < self.height as i64
    }
}
