#[macro_use]
pub mod log;
#[macro_use]
pub mod safety;
