use super::super::*;

impl<T> Grid<T> {
    // === Checked coordinate access ===

    /// Read cell `(x, y)`; a failed index is re-signalled as `OutOfRange`
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Result<&T, GridError> {
        let idx = self
            .compute_index(x, y)
            .map_err(|e| GridError::at(Access::Get, x, y, e))?;
        Ok(&self.buffer[idx])
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Result<&mut T, GridError> {
        let idx = self
            .compute_index(x, y)
            .map_err(|e| GridError::at(Access::GetMut, x, y, e))?;
        Ok(&mut self.buffer[idx])
    }

    /// Overwrite cell `(x, y)`; index failures propagate unchanged
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) -> Result<(), GridError> {
        let idx = self.compute_index(x, y)?;
        self.buffer[idx] = value;
        Ok(())
    }

    /// Overwrite cell `(x, y)` and hand back what was there
    pub fn replace(&mut self, x: i32, y: i32, value: T) -> Result<T, GridError> {
        let idx = self
            .compute_index(x, y)
            .map_err(|e| GridError::at(Access::Replace, x, y, e))?;
        Ok(std::mem::replace(&mut self.buffer[idx], value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn set_then_get_returns_value() {
        let mut grid = Grid::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                grid.set(x, y, x * 10 + y).unwrap();
            }
        }
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(*grid.get(x, y).unwrap(), x * 10 + y);
            }
        }
    }

    #[test]
    fn get_outside_grid_is_out_of_range() {
        let grid: Grid<i32> = Grid::new(3, 3);
        let err = grid.get(5, 5).unwrap_err();
        match &err {
            GridError::OutOfRange { access, x, y, .. } => {
                assert_eq!(*access, Access::Get);
                assert_eq!((*x, *y), (5, 5));
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
        assert!(matches!(
            err.source().and_then(|s| s.downcast_ref::<GridError>()),
            Some(GridError::IndexOutOfRange { index: 20, len: 9, .. })
        ));
    }

    #[test]
    fn set_outside_grid_propagates_index_error() {
        let mut grid: Grid<i32> = Grid::new(3, 3);
        assert_eq!(
            grid.set(0, -1, 4),
            Err(GridError::IndexOutOfRange { x: 0, y: -1, index: -3, len: 9 })
        );
        assert!(grid.iter().all(|&v| v == 0));
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut grid = Grid::filled(2, 2, 1u16);
        *grid.get_mut(1, 1).unwrap() += 4;
        assert_eq!(grid.get(1, 1), Ok(&5));
        assert!(matches!(
            grid.get_mut(2, 1),
            Err(GridError::OutOfRange { access: Access::GetMut, .. })
        ));
    }

    #[test]
    fn replace_returns_previous_value() {
        let mut grid = Grid::filled(2, 2, "grass".to_string());
        let old = grid.replace(0, 1, "water".to_string()).unwrap();
        assert_eq!(old, "grass");
        assert_eq!(grid.get(0, 1).unwrap(), "water");
    }
}
