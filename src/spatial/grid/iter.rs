//! Row-major iteration. Every iterator is finite and can be restarted by
//! asking the grid for a new one; the parameterless grid yields nothing.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use super::*;

/// One slice per row, top to bottom
pub type Rows<'a, T> = slice::Chunks<'a, T>;

/// `((x, y), &cell)` in row-major order
#[derive(Debug, Clone)]
pub struct Cells<'a, T> {
    inner: Enumerate<slice::Iter<'a, T>>,
    width: usize,
}

impl<'a, T> Iterator for Cells<'a, T> {
    type Item = ((i32, i32), &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (idx, value) = self.inner.next()?;
        let x = (idx % self.width) as i32;
        let y = (idx / self.width) as i32;
        Some(((x, y), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Cells<'_, T> {}
impl<T> FusedIterator for Cells<'_, T> {}

impl<T> Grid<T> {
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buffer.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.buffer.iter_mut()
    }

    pub fn cells(&self) -> Cells<'_, T> {
        Cells {
            inner: self.buffer.iter().enumerate(),
            width: self.width.max(1) as usize,
        }
    }

    pub fn rows(&self) -> Rows<'_, T> {
        // An empty buffer yields no chunks whatever the width
        self.buffer.chunks(self.width.max(1) as usize)
    }
}

impl<T> IntoIterator for Grid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
