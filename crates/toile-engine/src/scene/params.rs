use crate::coords::Vec2;
use crate::geom::{Arc, Circle, Ellipse, Line, Polygon, Rect, RoundedRect, Square, Triangle};
use crate::SceneError;

use super::shape::{Geometry, ShapeKind};

/// Polygon side counts the engine accepts.
pub(crate) const POLYGON_SIDES: std::ops::RangeInclusive<u32> = 3..=12;
/// Arcs smaller than this render badly; the radius is floored at creation.
const ARC_MIN_RADIUS: f32 = 5.0;

/// Kind-specific creation parameters.
///
/// One variant per kind with the fixed per-kind argument order of the
/// editor's creation contract. This is the typed replacement for a
/// variadic constructor: the caller picks a variant, the store validates
/// and builds the geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeParams {
    Circle { x: f32, y: f32, radius: f32 },
    Ellipse { x: f32, y: f32, rx: f32, ry: f32 },
    /// Angles in degrees; clamped to [0, 360] and swapped when start > end.
    Arc { x: f32, y: f32, radius: f32, start_deg: f32, end_deg: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32 },
    Square { x: f32, y: f32, side: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32 },
    Polygon { cx: f32, cy: f32, radius: f32, sides: u32 },
    Triangle { cx: f32, cy: f32, radius: f32 },
    RoundedRect { x1: f32, y1: f32, x2: f32, y2: f32, corner_radius: f32 },
}

impl ShapeParams {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::Circle { .. } => ShapeKind::Circle,
            ShapeParams::Ellipse { .. } => ShapeKind::Ellipse,
            ShapeParams::Arc { .. } => ShapeKind::Arc,
            ShapeParams::Rect { .. } => ShapeKind::Rectangle,
            ShapeParams::Square { .. } => ShapeKind::Square,
            ShapeParams::Line { .. } => ShapeKind::Line,
            ShapeParams::Polygon { .. } => ShapeKind::Polygon,
            ShapeParams::Triangle { .. } => ShapeKind::Triangle,
            ShapeParams::RoundedRect { .. } => ShapeKind::RoundedRectangle,
        }
    }

    /// Validates and builds the geometry payload.
    ///
    /// Refusals (invalid polygon side count) surface as errors; degenerate
    /// numeric inputs are clamped silently instead.
    pub(crate) fn build(self) -> Result<Geometry, SceneError> {
        let geometry = match self {
            ShapeParams::Circle { x, y, radius } => Geometry::Circle(Circle {
                center: Vec2::new(x, y),
                radius,
            }),
            ShapeParams::Ellipse { x, y, rx, ry } => Geometry::Ellipse(Ellipse {
                center: Vec2::new(x, y),
                rx,
                ry,
                aspect: if ry > 0.0 { rx / ry } else { 1.0 },
            }),
            ShapeParams::Arc { x, y, radius, start_deg, end_deg } => {
                let mut start = start_deg.clamp(0.0, 360.0);
                let mut end = end_deg.clamp(0.0, 360.0);
                if start > end {
                    std::mem::swap(&mut start, &mut end);
                }
                Geometry::Arc(Arc {
                    center: Vec2::new(x, y),
                    radius: radius.max(ARC_MIN_RADIUS),
                    start_deg: start,
                    end_deg: end,
                })
            }
            ShapeParams::Rect { x, y, width, height } => Geometry::Rect(Rect {
                origin: Vec2::new(x, y),
                width,
                height,
            }),
            ShapeParams::Square { x, y, side } => Geometry::Square(Square {
                origin: Vec2::new(x, y),
                side,
            }),
            ShapeParams::Line { x1, y1, x2, y2, thickness } => Geometry::Line(Line {
                a: Vec2::new(x1, y1),
                b: Vec2::new(x2, y2),
                thickness,
            }),
            ShapeParams::Polygon { cx, cy, radius, sides } => {
                if !POLYGON_SIDES.contains(&sides) {
                    return Err(SceneError::InvalidSideCount { sides });
                }
                Geometry::Polygon(Polygon {
                    center: Vec2::new(cx, cy),
                    radius,
                    sides,
                })
            }
            ShapeParams::Triangle { cx, cy, radius } => Geometry::Triangle(Triangle {
                center: Vec2::new(cx, cy),
                radius,
            }),
            ShapeParams::RoundedRect { x1, y1, x2, y2, corner_radius } => {
                Geometry::RoundedRect(RoundedRect {
                    p1: Vec2::new(x1, y1),
                    p2: Vec2::new(x2, y2),
                    corner_radius,
                })
            }
        };
        Ok(geometry)
    }
}
