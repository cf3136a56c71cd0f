//! Coordinate types shared across the engine.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are degrees, normalized to [0, 360) where a shape stores them.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
