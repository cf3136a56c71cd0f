//! Point-in-primitive predicates.
//!
//! One predicate per shape kind, all pure. Rectangle and square tests work
//! on the unrotated bounds on purpose: the interactive editor has always
//! selected against the axis-aligned box even when the shape is drawn
//! rotated. Only the line predicate compensates for rotation.

use crate::coords::Vec2;

use super::primitives::{Arc, Circle, Ellipse, Line, Polygon, Rect, RoundedRect, Square, Triangle};
use super::transform::{ngon_vertex, rotate_about};
use super::TRIANGLE_PHASE_DEG;

/// Extra slack added to a line's thickness so thin lines stay clickable.
const LINE_PICK_SLACK: f32 = 5.0;

#[inline]
pub fn circle_contains(c: &Circle, p: Vec2) -> bool {
    let dx = p.x - c.center.x;
    let dy = p.y - c.center.y;
    dx * dx + dy * dy <= c.radius * c.radius
}

pub fn ellipse_contains(e: &Ellipse, p: Vec2) -> bool {
    if e.rx <= 0.0 || e.ry <= 0.0 {
        return false;
    }
    let nx = (p.x - e.center.x) / e.rx;
    let ny = (p.y - e.center.y) / e.ry;
    nx * nx + ny * ny <= 1.0
}

/// Inside the arc's radius *and* within its angular span. The span may wrap
/// through 0° (start > end), in which case the two half-ranges are accepted.
pub fn arc_contains(a: &Arc, p: Vec2) -> bool {
    let dx = p.x - a.center.x;
    let dy = p.y - a.center.y;
    if dx * dx + dy * dy > a.radius * a.radius {
        return false;
    }

    let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
    if a.start_deg <= a.end_deg {
        angle >= a.start_deg && angle <= a.end_deg
    } else {
        angle >= a.start_deg || angle <= a.end_deg
    }
}

#[inline]
pub fn rect_contains(r: &Rect, p: Vec2) -> bool {
    p.x >= r.origin.x
        && p.x <= r.origin.x + r.width
        && p.y >= r.origin.y
        && p.y <= r.origin.y + r.height
}

#[inline]
pub fn square_contains(s: &Square, p: Vec2) -> bool {
    p.x >= s.origin.x
        && p.x <= s.origin.x + s.side
        && p.y >= s.origin.y
        && p.y <= s.origin.y + s.side
}

/// Near-segment test, compensating for the shape's rotation.
///
/// The query point is rotated about the segment midpoint by the opposite
/// angle, which reduces the problem to the unrotated segment. A hit needs
/// the perpendicular distance within `thickness + LINE_PICK_SLACK` and the
/// scalar projection within `[-thickness, length + thickness]`.
pub fn line_near(l: &Line, rotation_deg: f32, p: Vec2) -> bool {
    let tol = l.thickness.max(0.0);
    let p = if rotation_deg != 0.0 {
        rotate_about(p, l.midpoint(), -rotation_deg)
    } else {
        p
    };

    let d = l.b - l.a;
    let len = d.length();
    if len <= f32::EPSILON {
        // Degenerate segment: fall back to distance from the single point.
        return p.distance(l.a) <= tol + LINE_PICK_SLACK;
    }

    let rel = p - l.a;
    let perp = (d.x * rel.y - d.y * rel.x).abs() / len;
    let along = (rel.x * d.x + rel.y * d.y) / len;

    perp <= tol + LINE_PICK_SLACK && along >= -tol && along <= len + tol
}

#[inline]
pub fn polygon_contains(poly: &Polygon, p: Vec2) -> bool {
    if poly.sides < 3 {
        return false;
    }
    ngon_contains(poly.center, poly.radius, poly.sides, 0.0, p)
}

#[inline]
pub fn triangle_contains(t: &Triangle, p: Vec2) -> bool {
    ngon_contains(t.center, t.radius, 3, TRIANGLE_PHASE_DEG, p)
}

pub fn rounded_rect_contains(rr: &RoundedRect, p: Vec2) -> bool {
    let (min, max) = rr.normalized();
    let r = rr.corner_radius;

    // Central band minus the corner insets, then the two side bands.
    if p.x >= min.x + r && p.x <= max.x - r && p.y >= min.y && p.y <= max.y {
        return true;
    }
    if p.x >= min.x && p.x <= max.x && p.y >= min.y + r && p.y <= max.y - r {
        return true;
    }

    // Corner disks.
    let corner = |cx: f32, cy: f32| {
        circle_contains(
            &Circle {
                center: Vec2::new(cx, cy),
                radius: r,
            },
            p,
        )
    };
    corner(min.x + r, min.y + r)
        || corner(max.x - r, min.y + r)
        || corner(min.x + r, max.y - r)
        || corner(max.x - r, max.y - r)
}

/// Ray-casting parity test against the analytically generated vertices of a
/// regular polygon.
fn ngon_contains(center: Vec2, radius: f32, sides: u32, phase_deg: f32, p: Vec2) -> bool {
    let mut inside = false;
    let mut j = sides - 1;
    for i in 0..sides {
        let vi = ngon_vertex(center, radius, sides, i, phase_deg);
        let vj = ngon_vertex(center, radius, sides, j, phase_deg);
        if ((vi.y > p.y) != (vj.y > p.y))
            && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
