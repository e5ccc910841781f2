//! studentpages-core — Data model, student index, and proficiency logic.
//!
//! This crate defines the record types decoded from the remote datasets, the
//! first-seen-wins student index, and the grid and bucket computations that
//! the generated pages (and the CLI previews) are built around.

pub mod error;
pub mod grid;
pub mod index;
pub mod model;
pub mod percentage;
pub mod practice;
pub mod summary;
pub mod traits;
