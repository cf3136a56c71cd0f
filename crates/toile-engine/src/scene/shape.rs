use std::fmt;
use std::str::FromStr;

use crate::anim::AnimState;
use crate::coords::Vec2;
use crate::geom::{
    self, Arc, Circle, Ellipse, Line, Polygon, Rect, RoundedRect, Square, Triangle,
};
use crate::paint::Rgba;
use crate::SceneError;

use super::z_index::ZIndex;

/// Geometric category of a shape, fixed for its lifetime.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    Ellipse,
    Arc,
    Rectangle,
    Square,
    Line,
    Polygon,
    Triangle,
    RoundedRectangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Arc => "arc",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Line => "line",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Triangle => "triangle",
            ShapeKind::RoundedRectangle => "roundedRectangle",
        };
        f.write_str(name)
    }
}

impl FromStr for ShapeKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "ellipse" => Ok(ShapeKind::Ellipse),
            "arc" => Ok(ShapeKind::Arc),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "square" => Ok(ShapeKind::Square),
            "line" => Ok(ShapeKind::Line),
            "polygon" => Ok(ShapeKind::Polygon),
            "triangle" => Ok(ShapeKind::Triangle),
            "roundedRectangle" | "rounded_rectangle" => Ok(ShapeKind::RoundedRectangle),
            other => Err(SceneError::UnknownKind { name: other.to_string() }),
        }
    }
}

/// Fill mode, fixed at creation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Style {
    Filled,
    Empty,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::Filled => "filled",
            Style::Empty => "empty",
        })
    }
}

impl FromStr for Style {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filled" => Ok(Style::Filled),
            "empty" => Ok(Style::Empty),
            other => Err(SceneError::UnknownStyle { name: other.to_string() }),
        }
    }
}

/// Kind-tagged geometry payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    Circle(Circle),
    Ellipse(Ellipse),
    Arc(Arc),
    Rect(Rect),
    Square(Square),
    Line(Line),
    Polygon(Polygon),
    Triangle(Triangle),
    RoundedRect(RoundedRect),
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Circle(_) => ShapeKind::Circle,
            Geometry::Ellipse(_) => ShapeKind::Ellipse,
            Geometry::Arc(_) => ShapeKind::Arc,
            Geometry::Rect(_) => ShapeKind::Rectangle,
            Geometry::Square(_) => ShapeKind::Square,
            Geometry::Line(_) => ShapeKind::Line,
            Geometry::Polygon(_) => ShapeKind::Polygon,
            Geometry::Triangle(_) => ShapeKind::Triangle,
            Geometry::RoundedRect(_) => ShapeKind::RoundedRectangle,
        }
    }

    /// Translates every position field by `d`. Sizes are untouched.
    pub fn translate(&mut self, d: Vec2) {
        match self {
            Geometry::Circle(c) => c.center = c.center + d,
            Geometry::Ellipse(e) => e.center = e.center + d,
            Geometry::Arc(a) => a.center = a.center + d,
            Geometry::Rect(r) => r.origin = r.origin + d,
            Geometry::Square(s) => s.origin = s.origin + d,
            Geometry::Line(l) => {
                l.a = l.a + d;
                l.b = l.b + d;
            }
            Geometry::Polygon(p) => p.center = p.center + d,
            Geometry::Triangle(t) => t.center = t.center + d,
            Geometry::RoundedRect(rr) => {
                rr.p1 = rr.p1 + d;
                rr.p2 = rr.p2 + d;
            }
        }
    }

    /// Geometric center (segment midpoint for lines, box center for the
    /// corner-anchored kinds).
    pub fn center(&self) -> Vec2 {
        match self {
            Geometry::Circle(c) => c.center,
            Geometry::Ellipse(e) => e.center,
            Geometry::Arc(a) => a.center,
            Geometry::Rect(r) => r.center(),
            Geometry::Square(s) => s.center(),
            Geometry::Line(l) => l.midpoint(),
            Geometry::Polygon(p) => p.center,
            Geometry::Triangle(t) => t.center,
            Geometry::RoundedRect(rr) => rr.center(),
        }
    }

    /// Point-containment dispatch. `rotation_deg` only affects lines; the
    /// box kinds select against their unrotated bounds on purpose.
    pub fn contains(&self, p: Vec2, rotation_deg: f32) -> bool {
        match self {
            Geometry::Circle(c) => geom::circle_contains(c, p),
            Geometry::Ellipse(e) => geom::ellipse_contains(e, p),
            Geometry::Arc(a) => geom::arc_contains(a, p),
            Geometry::Rect(r) => geom::rect_contains(r, p),
            Geometry::Square(s) => geom::square_contains(s, p),
            Geometry::Line(l) => geom::line_near(l, rotation_deg, p),
            Geometry::Polygon(poly) => geom::polygon_contains(poly, p),
            Geometry::Triangle(t) => geom::triangle_contains(t, p),
            Geometry::RoundedRect(rr) => geom::rounded_rect_contains(rr, p),
        }
    }

    /// The same geometry grown outward by `by` units, used for the
    /// selection halo. Lines grow in thickness instead of length.
    pub fn enlarged(&self, by: f32) -> Geometry {
        let mut g = *self;
        match &mut g {
            Geometry::Circle(c) => c.radius += by,
            Geometry::Ellipse(e) => {
                e.rx += by;
                e.ry += by;
            }
            Geometry::Arc(a) => a.radius += by,
            Geometry::Rect(r) => {
                r.origin = r.origin - Vec2::new(by, by);
                r.width += 2.0 * by;
                r.height += 2.0 * by;
            }
            Geometry::Square(s) => {
                s.origin = s.origin - Vec2::new(by, by);
                s.side += 2.0 * by;
            }
            Geometry::Line(l) => l.thickness += by,
            Geometry::Polygon(p) => p.radius += by,
            Geometry::Triangle(t) => t.radius += by,
            Geometry::RoundedRect(rr) => {
                let (min, max) = rr.normalized();
                rr.p1 = min - Vec2::new(by, by);
                rr.p2 = max + Vec2::new(by, by);
                rr.corner_radius += by;
            }
        }
        g
    }

    /// Copies the size fields (never position) from a creation-time
    /// snapshot of the same kind. Mismatched kinds are a no-op; the store
    /// never produces one.
    pub(crate) fn restore_size_from(&mut self, initial: &Geometry) {
        match (self, initial) {
            (Geometry::Circle(c), Geometry::Circle(i)) => c.radius = i.radius,
            (Geometry::Ellipse(e), Geometry::Ellipse(i)) => {
                e.rx = i.rx;
                e.ry = i.ry;
                e.aspect = i.aspect;
            }
            (Geometry::Arc(a), Geometry::Arc(i)) => {
                a.radius = i.radius;
                a.start_deg = i.start_deg;
                a.end_deg = i.end_deg;
            }
            (Geometry::Rect(r), Geometry::Rect(i)) => {
                r.width = i.width;
                r.height = i.height;
            }
            (Geometry::Square(s), Geometry::Square(i)) => s.side = i.side,
            (Geometry::Line(l), Geometry::Line(i)) => l.thickness = i.thickness,
            (Geometry::Polygon(p), Geometry::Polygon(i)) => {
                p.radius = i.radius;
                p.sides = i.sides;
            }
            (Geometry::Triangle(t), Geometry::Triangle(i)) => t.radius = i.radius,
            (Geometry::RoundedRect(rr), Geometry::RoundedRect(i)) => {
                // Re-center the initial extent on the current position.
                let center = rr.center();
                let half = Vec2::new(i.width() * 0.5, i.height() * 0.5);
                rr.p1 = center - half;
                rr.p2 = center + half;
                rr.corner_radius = i.corner_radius;
            }
            _ => {}
        }
    }
}

/// One live primitive in the scene.
///
/// Constructed only through [`super::ShapeStore::create`], which snapshots
/// the `initial_*` fields for the reset operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    pub style: Style,
    pub color: Rgba,
    /// Degrees in [0, 360).
    pub rotation: f32,
    pub selected: bool,
    pub z: ZIndex,
    pub anim: AnimState,

    pub(crate) initial_geometry: Geometry,
    pub(crate) initial_color: Rgba,
    pub(crate) initial_rotation: f32,
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Creation-time geometry snapshot (size source for reset).
    #[inline]
    pub fn initial_geometry(&self) -> &Geometry {
        &self.initial_geometry
    }

    #[inline]
    pub fn initial_color(&self) -> Rgba {
        self.initial_color
    }

    #[inline]
    pub fn initial_rotation(&self) -> f32 {
        self.initial_rotation
    }

    /// Restores color, rotation, animation transients, and kind-specific
    /// size fields to their creation-time values. Position is kept.
    pub(crate) fn reset(&mut self) {
        self.color = self.initial_color;
        self.rotation = self.initial_rotation;
        self.anim.reset_transients();
        let initial = self.initial_geometry;
        self.geometry.restore_size_from(&initial);
    }
}
