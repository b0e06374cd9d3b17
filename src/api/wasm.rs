//! TileGrid - JavaScript facade over `Grid<i32>`
//!
//! Grid errors surface in JS as `RangeError`, serde failures as `Error`.

use wasm_bindgen::prelude::*;

use crate::core::error::GridError;
use crate::grid::Grid;

fn range_error(e: GridError) -> JsValue {
    console_warn!("grid-array: {}", e);
    js_sys::RangeError::new(&e.to_string()).into()
}

/// Grid of integer tile ids
#[wasm_bindgen]
pub struct TileGrid {
    inner: Grid<i32>,
}

#[wasm_bindgen]
impl TileGrid {
    /// Create a grid with every tile at 0; throws on a zero or oversized shape
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<TileGrid, JsValue> {
        let inner = Grid::try_new(width, height).map_err(range_error)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.inner.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.inner.height() }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> u32 { self.inner.len() as u32 }

    #[wasm_bindgen(js_name = computeIndex)]
    pub fn compute_index(&self, x: i32, y: i32) -> Result<u32, JsValue> {
        self.inner
            .compute_index(x, y)
            .map(|idx| idx as u32)
            .map_err(range_error)
    }

    #[wasm_bindgen(js_name = isValidIndex)]
    pub fn is_valid_index(&self, x: i32, y: i32) -> bool {
        self.inner.is_valid_index(x, y)
    }

    #[wasm_bindgen(js_name = inBounds)]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.inner.in_bounds(x, y)
    }

    pub fn get(&self, x: i32, y: i32) -> Result<i32, JsValue> {
        self.inner.get(x, y).copied().map_err(range_error)
    }

    pub fn set(&mut self, x: i32, y: i32, value: i32) -> Result<(), JsValue> {
        self.inner.set(x, y, value).map_err(range_error)
    }

    /// No validation: an index past the end traps
    #[wasm_bindgen(js_name = getFlat)]
    pub fn get_flat(&self, idx: u32) -> i32 {
        *self.inner.get_flat(idx as usize)
    }

    /// No validation: an index past the end traps
    #[wasm_bindgen(js_name = setFlat)]
    pub fn set_flat(&mut self, idx: u32, value: i32) {
        self.inner.set_flat(idx as usize, value);
    }

    /// Returns the number of tiles rewritten
    #[wasm_bindgen(js_name = floodFill)]
    pub fn flood_fill(&mut self, x: i32, y: i32, value: i32, target: i32) -> Result<u32, JsValue> {
        self.inner
            .flood_fill(x, y, value, target)
            .map(|filled| filled as u32)
            .map_err(range_error)
    }

    pub fn fill(&mut self, value: i32) {
        self.inner.fill(value);
    }

    /// Copy of the row-major buffer
    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<i32> {
        self.inner.as_slice().to_vec()
    }

    /// Pointer into WASM memory for zero-copy reads (valid until the grid is dropped)
    #[wasm_bindgen(js_name = bufferPtr)]
    pub fn buffer_ptr(&self) -> u32 {
        self.inner.as_ptr() as usize as u32
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner).map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<TileGrid, JsValue> {
        match serde_json::from_str::<Grid<i32>>(json) {
            Ok(inner) => Ok(Self { inner }),
            Err(e) => {
                console_warn!("grid-array: restore failed: {}", e);
                Err(js_sys::Error::new(&e.to_string()).into())
            }
        }
    }
}

// Rust-side access, not exported to JS
impl TileGrid {
    pub fn grid(&self) -> &Grid<i32> {
        &self.inner
    }

    pub fn grid_mut(&mut self) -> &mut Grid<i32> {
        &mut self.inner
    }
}

impl From<Grid<i32>> for TileGrid {
    fn from(inner: Grid<i32>) -> Self {
        Self { inner }
    }
}
