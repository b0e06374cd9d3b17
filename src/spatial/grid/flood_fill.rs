//! 4-connected flood fill driven by an explicit stack.
//!
//! The seed is addressed like any checked access (linear index rule) and then
//! normalised to its in-grid coordinates; the region only grows through
//! in-bounds up/down/left/right neighbours, so it never wraps across a row edge.
//!
//! Visit order matches the classic recursive fill: the cell itself, then the
//! whole region reached through (x+1, y), then (x-1, y), (x, y+1), (x, y-1).
//! Guards run when a task is popped, exactly where the recursive version
//! would test them on entry.

use super::*;

/// Neighbour order of the recursive fill
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl<T: PartialEq + Clone> Grid<T> {
    /// Replace the region of `target_value` cells connected to `(x, y)` with `new_value`.
    ///
    /// Fails with `OutOfRange` when the seed is not a valid index. Neighbours
    /// outside the rectangle are skipped. Returns the number of cells rewritten.
    pub fn flood_fill(&mut self, x: i32, y: i32, new_value: T, target_value: T) -> Result<usize, GridError> {
        let mut stack = FillStack::for_len(self.len());
        self.flood_fill_with(&mut stack, x, y, new_value, target_value)
    }

    /// `flood_fill` reusing a caller-owned work-list
    pub fn flood_fill_with(
        &mut self,
        stack: &mut FillStack,
        x: i32,
        y: i32,
        new_value: T,
        target_value: T,
    ) -> Result<usize, GridError> {
        self.fill_region(stack, x, y, &new_value, &target_value, |_| {})
    }

    fn fill_region<F>(
        &mut self,
        stack: &mut FillStack,
        x: i32,
        y: i32,
        new_value: &T,
        target_value: &T,
        mut on_fill: F,
    ) -> Result<usize, GridError>
    where
        F: FnMut(usize),
    {
        stack.clear();
        stack.push(FillTask::Seed { x, y });

        let mut filled = 0;
        while let Some(task) = stack.pop() {
            let idx = match task {
                FillTask::Seed { x, y } => self
                    .compute_index(x, y)
                    .map_err(|e| GridError::at(Access::FloodFill, x, y, e))?,
                FillTask::Neighbor { x, y } if self.in_bounds(x, y) => {
                    y as usize * self.width as usize + x as usize
                }
                FillTask::Neighbor { .. } => continue,
            };
            let (cx, cy) = self.coords(idx);

            let current = &self.buffer[idx];
            // Already filled
            if current == new_value {
                continue;
            }
            // Region boundary
            if current != target_value {
                continue;
            }

            self.buffer[idx] = new_value.clone();
            filled += 1;
            on_fill(idx);

            // Reversed so (x+1, y) is popped first
            for &(dx, dy) in NEIGHBOR_OFFSETS.iter().rev() {
                if let (Some(nx), Some(ny)) = (cx.checked_add(dx), cy.checked_add(dy)) {
                    stack.push(FillTask::Neighbor { x: nx, y: ny });
                }
            }
        }

        Ok(filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_rows(rows: &[&[i32]]) -> Grid<i32> {
        let width = rows[0].len() as u32;
        let height = rows.len() as u32;
        let buffer = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Grid::from_parts(width, height, buffer).unwrap()
    }

    /// Recursive fill used as the order reference
    fn recursive_fill(grid: &mut Grid<i32>, x: i32, y: i32, new: i32, target: i32, order: &mut Vec<usize>) {
        if !grid.in_bounds(x, y) {
            return;
        }
        let idx = grid.compute_index(x, y).unwrap();
        let current = grid[idx];
        if current == new || current != target {
            return;
        }
        grid[idx] = new;
        order.push(idx);
        recursive_fill(grid, x + 1, y, new, target, order);
        recursive_fill(grid, x - 1, y, new, target, order);
        recursive_fill(grid, x, y + 1, new, target, order);
        recursive_fill(grid, x, y - 1, new, target, order);
    }

    #[test]
    fn uniform_grid_fills_completely() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.flood_fill(1, 1, 9, 0), Ok(9));
        assert!(grid.iter().all(|&v| v == 9));
    }

    #[test]
    fn center_wall_is_left_alone() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, 1).unwrap();
        assert_eq!(grid.flood_fill(0, 0, 5, 0), Ok(8));
        assert_eq!(grid.get(1, 1), Ok(&1));
        assert_eq!(grid.iter().filter(|&&v| v == 5).count(), 8);
    }

    #[test]
    fn same_new_and_target_is_a_no_op() {
        let mut grid = grid_from_rows(&[&[0, 1, 0], &[1, 1, 0], &[0, 0, 2]]);
        let before = grid.clone();
        assert_eq!(grid.flood_fill(1, 0, 1, 1), Ok(0));
        assert_eq!(grid, before);
    }

    #[test]
    fn seed_not_matching_target_changes_nothing() {
        let mut grid = grid_from_rows(&[&[3, 0], &[0, 0]]);
        assert_eq!(grid.flood_fill(0, 0, 7, 0), Ok(0));
        assert_eq!(grid.as_slice(), &[3, 0, 0, 0]);
    }

    #[test]
    fn invalid_seed_is_out_of_range() {
        let mut grid: Grid<i32> = Grid::new(3, 3);
        let err = grid.flood_fill(-1, 0, 1, 0).unwrap_err();
        assert!(matches!(
            err,
            GridError::OutOfRange { access: Access::FloodFill, x: -1, y: 0, .. }
        ));
        assert!(grid.iter().all(|&v| v == 0));
    }

    #[test]
    fn rectangle_is_contained() {
        // A = 1 inside [1..=3] x [1..=2], B = 0 elsewhere
        let mut grid = Grid::new(6, 5);
        for y in 1..=2 {
            for x in 1..=3 {
                grid.set(x, y, 1).unwrap();
            }
        }

        assert_eq!(grid.flood_fill(1, 1, 2, 1), Ok(6));
        for ((x, y), &v) in grid.cells() {
            let inside = (1..=3).contains(&x) && (1..=2).contains(&y);
            assert_eq!(v, if inside { 2 } else { 0 }, "cell ({}, {})", x, y);
        }
    }

    #[test]
    fn visit_order_matches_recursive_fill() {
        let rows: &[&[i32]] = &[
            &[0, 0, 1, 0, 0],
            &[0, 1, 0, 0, 1],
            &[0, 0, 0, 1, 0],
            &[1, 0, 1, 0, 0],
        ];
        let mut expected = grid_from_rows(rows);
        let mut expected_order = Vec::new();
        recursive_fill(&mut expected, 2, 2, 8, 0, &mut expected_order);

        let mut grid = grid_from_rows(rows);
        let mut order = Vec::new();
        let mut stack = FillStack::for_len(grid.len());
        let filled = grid
            .fill_region(&mut stack, 2, 2, &8, &0, |idx| order.push(idx))
            .unwrap();

        assert_eq!(order, expected_order);
        assert_eq!(filled, expected_order.len());
        assert_eq!(grid, expected);
    }

    #[test]
    fn region_does_not_wrap_across_row_edges() {
        // Right column of row 0 touches the left column of row 1 in the buffer
        let mut grid = grid_from_rows(&[&[1, 1, 0], &[0, 1, 1]]);
        assert_eq!(grid.flood_fill(2, 0, 4, 0), Ok(1));
        assert_eq!(grid.as_slice(), &[1, 1, 4, 0, 1, 1]);
    }

    #[test]
    fn wrapped_seed_is_normalised() {
        // (3, 0) on a 3-wide grid addresses (0, 1)
        let mut grid = grid_from_rows(&[&[1, 1, 1], &[0, 0, 1], &[1, 0, 1]]);
        assert_eq!(grid.flood_fill(3, 0, 6, 0), Ok(3));
        assert_eq!(grid.as_slice(), &[1, 1, 1, 6, 6, 1, 1, 6, 1]);
    }

    #[test]
    fn stack_is_reusable_between_fills() {
        let mut grid = Grid::new(4, 4);
        let mut stack = FillStack::for_len(grid.len());
        assert_eq!(grid.flood_fill_with(&mut stack, 0, 0, 1, 0), Ok(16));
        assert!(stack.is_empty());
        let capacity = stack.capacity();
        assert_eq!(grid.flood_fill_with(&mut stack, 3, 3, 2, 1), Ok(16));
        assert_eq!(stack.capacity(), capacity);
        assert!(grid.iter().all(|&v| v == 2));
    }

    #[test]
    fn large_uniform_grid_does_not_recurse() {
        let mut grid = Grid::new(512, 512);
        assert_eq!(grid.flood_fill(0, 0, 1u8, 0u8), Ok(512 * 512));
        assert!(grid.iter().all(|&v| v == 1));
    }

    #[test]
    fn struct_values_use_structural_equality() {
        #[derive(Debug, Clone, PartialEq, Default)]
        struct Tile {
            kind: u8,
            solid: bool,
        }

        let wall = Tile { kind: 1, solid: true };
        let floor = Tile { kind: 2, solid: false };
        let mut grid: Grid<Tile> = Grid::new(3, 1);
        grid.set(1, 0, wall.clone()).unwrap();

        assert_eq!(grid.flood_fill(0, 0, floor.clone(), Tile::default()), Ok(1));
        assert_eq!(grid.as_slice(), &[floor, wall, Tile::default()]);
    }
}
