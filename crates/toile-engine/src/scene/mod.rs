//! Shape store and the live-scene data model.
//!
//! Responsibilities:
//! - own every live [`Shape`] (dense storage, value semantics)
//! - assign z-order at creation and repair it on reorder requests
//! - snapshot creation-time values for the reset operation
//! - enforce the single-selection invariant

mod params;
mod select;
mod shape;
mod store;
mod z_index;

pub use params::ShapeParams;
pub use select::{find_topmost_at, toggle_select_at};
pub use shape::{Geometry, Shape, ShapeKind, Style};
pub use store::{ShapeId, ShapeStore, MAX_SHAPES};
pub use z_index::ZIndex;
