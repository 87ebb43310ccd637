// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod basis;
mod error;
mod vector;

pub use basis::Basis;
pub use error::{GeometryError, GeometryResult};
pub use vector::try_normalize;
