//! Catalogue data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::CatalogueReader;
pub use types::{CatalogueError, Coordinates, Result, Route, Stop};
