use std::ops::{Index, IndexMut};

use super::super::*;

impl<T> Grid<T> {
    // === Flat access ===
    // No coordinate validation. Out-of-range indices panic like any slice access.

    #[inline]
    pub fn get_flat(&self, idx: usize) -> &T {
        &self.buffer[idx]
    }

    #[inline]
    pub fn set_flat(&mut self, idx: usize, value: T) {
        self.buffer[idx] = value;
    }

    // === UNSAFE ACCESS (ZERO OVERHEAD) ===
    // Debug builds still bounds-check through `fast!`; release builds do not.

    /// Fast read - UNSAFE: caller must ensure idx < len
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, idx: usize) -> &T {
        fast!(self.buffer, [idx])
    }

    /// Fast mutable read - UNSAFE: caller must ensure idx < len
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, idx: usize) -> &mut T {
        fast!(mut self.buffer, [idx])
    }

    /// Fast write - UNSAFE: caller must ensure idx < len
    #[inline(always)]
    pub unsafe fn set_unchecked(&mut self, idx: usize, value: T) {
        fast!(self.buffer, [idx] = value);
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &T {
        self.get_flat(idx)
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.buffer[idx]
    }
}
