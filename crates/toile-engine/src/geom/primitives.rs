use crate::coords::Vec2;

/// Circle: center plus radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Axis-aligned ellipse. `aspect` caches `rx / ry` at creation time; the
/// manipulator's zoom recomputes `ry` from it so repeated resizing cannot
/// drift the proportions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub rx: f32,
    pub ry: f32,
    pub aspect: f32,
}

/// Circular arc (or pie when filled): angular span in degrees, measured
/// clockwise from +X in screen space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub radius: f32,
    pub start_deg: f32,
    pub end_deg: f32,
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.origin.x + self.width * 0.5, self.origin.y + self.height * 0.5)
    }
}

/// Axis-aligned square anchored at its top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Square {
    pub origin: Vec2,
    pub side: f32,
}

impl Square {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.origin.x + self.side * 0.5, self.origin.y + self.side * 0.5)
    }
}

/// Thick line segment between two endpoints.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub a: Vec2,
    pub b: Vec2,
    pub thickness: f32,
}

impl Line {
    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        self.a.midpoint(self.b)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }
}

/// Regular polygon: circumscribed radius around a center, 3..=12 sides.
/// Vertex `i` sits at angle `2πi / sides` before rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Polygon {
    pub center: Vec2,
    pub radius: f32,
    pub sides: u32,
}

/// Equilateral triangle: the 3-sided regular polygon with an extra 30° vertex
/// phase (see [`super::TRIANGLE_PHASE_DEG`]).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub center: Vec2,
    pub radius: f32,
}

/// Rectangle with rounded corners, stored as two opposite corners. The
/// corners may arrive in any order; consumers normalize.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedRect {
    pub p1: Vec2,
    pub p2: Vec2,
    pub corner_radius: f32,
}

impl RoundedRect {
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.p1.midpoint(self.p2)
    }

    /// Corner pair reordered to (top-left, bottom-right).
    #[inline]
    pub fn normalized(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.p1.x.min(self.p2.x), self.p1.y.min(self.p2.y)),
            Vec2::new(self.p1.x.max(self.p2.x), self.p1.y.max(self.p2.y)),
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        (self.p2.x - self.p1.x).abs()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        (self.p2.y - self.p1.y).abs()
    }
}
