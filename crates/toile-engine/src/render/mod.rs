//! Draw-stream recording and z-ordered traversal.
//!
//! Rasterization lives outside the engine. Each frame the scene is
//! recorded into a [`DrawList`] of kind-tagged [`DrawCmd`]s, sorted
//! back-to-front by (z, insertion order); the external renderer walks
//! the list and fills pixels.

mod cmd;
mod list;
mod traversal;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, SortKey};
pub use traversal::{for_each_in_z_order, record_scene, HALO_DIM, HALO_ENLARGE};
