//! Motif data model: source records, selection and radius assignment

/// Source records, selection and validation
pub mod catalog;
/// Size palette and radius drawing
pub mod palette;

pub use catalog::{Motif, MotifCatalog, MotifEntry, MotifRecord};
pub use palette::SizePalette;
