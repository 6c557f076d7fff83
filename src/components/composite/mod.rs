//! Composite Components
//!
//! Components assembled from primitives: the collection view pair.

pub mod data_table;
