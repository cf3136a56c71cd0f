//! Geometry kernel.
//!
//! Stateless layer under the scene: primitive payload types, point rotation,
//! and the point-in-primitive predicates used for pointer selection. Nothing
//! here touches the shape store.

mod hit;
mod primitives;
mod transform;

pub use hit::{
    arc_contains, circle_contains, ellipse_contains, line_near, polygon_contains, rect_contains,
    rounded_rect_contains, square_contains, triangle_contains,
};
pub use primitives::{Arc, Circle, Ellipse, Line, Polygon, Rect, RoundedRect, Square, Triangle};
pub use transform::{ngon_vertex, rotate_about};

/// Extra phase applied to triangle vertices so one corner points up.
pub const TRIANGLE_PHASE_DEG: f32 = 30.0;
