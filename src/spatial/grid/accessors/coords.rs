//! `grid[(x, y)]` sugar over the checked accessors.
//! `Index` cannot return a `Result`, so a rejected coordinate panics with the error text.

use std::ops::{Index, IndexMut};

use super::super::*;

impl<T> Index<(i32, i32)> for Grid<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (x, y): (i32, i32)) -> &T {
        match self.get(x, y) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(i32, i32)> for Grid<T> {
    #[track_caller]
    fn index_mut(&mut self, (x, y): (i32, i32)) -> &mut T {
        match self.get_mut(x, y) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}
