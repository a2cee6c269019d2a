//! Orca
pub mod core;
pub mod geometry;
pub mod io;
pub mod rendering;
pub mod systems;
#[cfg(test)]
mod tests;
pub mod utils;
