//! Toile engine crate.
//!
//! Holds the live shape collection and everything an interactive editor
//! front end needs: per-frame animation, hit testing, z-ordering, and the
//! manipulation operations. Windowing and rasterization live outside; the
//! renderer consumes the [`render::DrawList`] stream this crate records.

pub mod coords;
pub mod paint;
pub mod geom;
pub mod scene;
pub mod anim;
pub mod ops;
pub mod render;
pub mod time;

pub mod logging;
mod error;
mod stage;

pub use error::SceneError;
pub use stage::{Reorder, Stage};
