//! Persisted shape: exactly `width`, `height` and `buffer`.
//! Deserializing goes through `GridParts` so a wrong-sized buffer is rejected.

use super::*;

/// The three plain-data fields a host stores for a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridParts<T> {
    pub width: u32,
    pub height: u32,
    pub buffer: Vec<T>,
}

impl<T> TryFrom<GridParts<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(parts: GridParts<T>) -> Result<Self, Self::Error> {
        Grid::from_parts(parts.width, parts.height, parts.buffer)
    }
}

impl<T> From<Grid<T>> for GridParts<T> {
    fn from(grid: Grid<T>) -> Self {
        let (width, height, buffer) = grid.into_parts();
        GridParts { width, height, buffer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_three_fields() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 0, 5).unwrap();

        let value = serde_json::to_value(&grid).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "width": 2, "height": 2, "buffer": [0, 5, 0, 0] })
        );
    }

    #[test]
    fn restoring_verbatim_gives_equal_grid() {
        let mut grid = Grid::new(3, 2);
        grid.flood_fill(0, 0, 4, 0).unwrap();
        grid.set(2, 1, 1).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);
        assert_eq!(restored.get(2, 1), Ok(&1));
    }

    #[test]
    fn wrong_buffer_length_fails_to_deserialize() {
        let json = r#"{"width":3,"height":3,"buffer":[0,0,0]}"#;
        let err = serde_json::from_str::<Grid<i32>>(json).unwrap_err();
        assert!(err.to_string().contains("does not fit a 3x3 grid"));
    }

    #[test]
    fn zero_sized_shape_fails_to_deserialize() {
        let json = r#"{"width":0,"height":4,"buffer":[]}"#;
        let err = serde_json::from_str::<Grid<i32>>(json).unwrap_err();
        assert!(err.to_string().contains("0x4 is not a valid grid size"));
    }

    #[test]
    fn parts_convert_both_ways() {
        let grid = Grid::filled(2, 1, 'x');
        let parts = GridParts::from(grid.clone());
        assert_eq!(parts.buffer, vec!['x', 'x']);
        assert_eq!(Grid::try_from(parts), Ok(grid));
    }
}
