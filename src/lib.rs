//! Grid Array - fixed-size 2D grid backed by one flat buffer
//!
//! The host can only persist flat sequences, so every grid is stored as
//! `width`, `height` and a row-major `buffer`, while callers address it by `(x, y)`.
//!
//! Architecture:
//! - core/          - Errors, safety and logging macros
//! - spatial/       - Grid storage, indexing, accessors, flood fill
//! - api/           - WASM facade for the host

// Macros must be declared before the modules that use them
#[macro_use]
pub mod core;
pub mod spatial;
pub mod api;

// Compatibility re-exports
pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("grid-array {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::TileGrid;
pub use crate::core::error::{Access, GridError};
pub use spatial::grid::{Grid, GridParts};
