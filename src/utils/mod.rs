//! Shared utilities

pub mod font_store;

pub use font_store::{FontLoadError, FontStore, FontStorePlugin};
