#[macro_use]
pub mod utils;
pub mod error;
