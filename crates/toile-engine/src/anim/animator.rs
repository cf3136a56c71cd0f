use crate::coords::{Vec2, Viewport};
use crate::scene::{Geometry, Shape, ShapeStore};

use super::slots::AnimKind;

/// Degrees added to a rotating shape each tick.
pub const ROTATE_STEP_DEG: f32 = 0.15;
/// Zoom factor delta per tick.
pub const ZOOM_STEP: f32 = 0.0005;
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 1.5;
/// Color-cycle phase delta per tick; one full hue revolution every 2500 ticks.
pub const COLOR_PHASE_STEP: f32 = 0.0004;
/// Speed assigned to both bounce axes on first run.
pub const BOUNCE_SPEED: f32 = 1.0;
/// Bouncing shapes translate only once per this many ticks, which keeps the
/// motion visually slow without fractional pixel steps.
pub const BOUNCE_TICK_INTERVAL: u32 = 7;

/// Base linear sizes the pulsing zoom scales from, per kind. Lines and
/// rounded rectangles have no entry and are exempt from the zoom animation.
const ZOOM_BASE_RECT: (f32, f32) = (200.0, 50.0);
const ZOOM_BASE_SQUARE: f32 = 100.0;
const ZOOM_BASE_CIRCLE: f32 = 60.0;
const ZOOM_BASE_ELLIPSE: (f32, f32) = (70.0, 50.0);
const ZOOM_BASE_RADIAL: f32 = 100.0; // polygon, triangle, arc

/// Advances every running shape's armed animations once per tick.
///
/// Owns the bounce cadence counter; everything else lives on the shapes.
#[derive(Debug, Default)]
pub struct Animator {
    bounce_ticks: u32,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// One frame step. Armed kinds compose freely; they execute in slot
    /// order with no other ordering dependency.
    pub fn advance(&mut self, store: &mut ShapeStore, viewport: Viewport) {
        self.bounce_ticks += 1;
        let bounce_step = self.bounce_ticks >= BOUNCE_TICK_INTERVAL;
        if bounce_step {
            self.bounce_ticks = 0;
        }

        for shape in store.shapes_mut() {
            if !shape.anim.running {
                continue;
            }
            let slots = shape.anim.slots;
            for kind in slots.iter() {
                match kind {
                    AnimKind::Rotate => step_rotate(shape),
                    AnimKind::Zoom => step_zoom(shape),
                    AnimKind::Color => step_color(shape),
                    AnimKind::Bounce => step_bounce(shape, viewport, bounce_step),
                }
            }
        }
    }
}

fn step_rotate(shape: &mut Shape) {
    shape.rotation += ROTATE_STEP_DEG;
    if shape.rotation >= 360.0 {
        shape.rotation = 0.0;
    }
}

fn step_zoom(shape: &mut Shape) {
    let anim = &mut shape.anim;
    anim.zoom += ZOOM_STEP * anim.zoom_direction;
    if anim.zoom >= ZOOM_MAX {
        anim.zoom = ZOOM_MAX;
        anim.zoom_direction = -1.0;
    } else if anim.zoom <= ZOOM_MIN {
        anim.zoom = ZOOM_MIN;
        anim.zoom_direction = 1.0;
    }

    let zoom = anim.zoom;
    match &mut shape.geometry {
        Geometry::Rect(r) => {
            r.width = ZOOM_BASE_RECT.0 * zoom;
            r.height = ZOOM_BASE_RECT.1 * zoom;
        }
        Geometry::Square(s) => s.side = ZOOM_BASE_SQUARE * zoom,
        Geometry::Circle(c) => c.radius = ZOOM_BASE_CIRCLE * zoom,
        Geometry::Ellipse(e) => {
            e.rx = ZOOM_BASE_ELLIPSE.0 * zoom;
            e.ry = ZOOM_BASE_ELLIPSE.1 * zoom;
        }
        Geometry::Polygon(p) => p.radius = ZOOM_BASE_RADIAL * zoom,
        Geometry::Triangle(t) => t.radius = ZOOM_BASE_RADIAL * zoom,
        Geometry::Arc(a) => a.radius = ZOOM_BASE_RADIAL * zoom,
        Geometry::Line(_) | Geometry::RoundedRect(_) => {}
    }
}

fn step_color(shape: &mut Shape) {
    let anim = &mut shape.anim;
    anim.color_phase += COLOR_PHASE_STEP;
    if anim.color_phase >= 1.0 {
        anim.color_phase = 0.0;
    }
    shape.color = shape.color.with_hue(anim.color_phase * 360.0);
}

fn step_bounce(shape: &mut Shape, viewport: Viewport, bounce_step: bool) {
    let anim = &mut shape.anim;

    // Lazy start: velocities rest at zero until the animation first runs.
    if anim.bounce_velocity == 0.0 && anim.bounce_direction == 0.0 {
        anim.bounce_velocity = BOUNCE_SPEED;
        anim.bounce_direction = BOUNCE_SPEED;
    }

    if bounce_step {
        let d = Vec2::new(anim.bounce_velocity, anim.bounce_direction);
        shape.geometry.translate(d);
    }

    // Edge reflection, per-kind extent. Arc, line and rounded rectangle
    // drift without reflecting, as the editor always has.
    let (w, h) = (viewport.width, viewport.height);
    let anim = &mut shape.anim;
    match &shape.geometry {
        Geometry::Circle(c) => {
            if c.center.x - c.radius <= 0.0 || c.center.x + c.radius >= w {
                anim.bounce_velocity = -anim.bounce_velocity;
            }
            if c.center.y - c.radius <= 0.0 || c.center.y + c.radius >= h {
                anim.bounce_direction = -anim.bounce_direction;
            }
        }
        Geometry::Rect(r) => {
            if r.origin.x <= 0.0 || r.origin.x + r.width >= w {
                anim.bounce_velocity = -anim.bounce_velocity;
            }
            if r.origin.y <= 0.0 || r.origin.y + r.height >= h {
                anim.bounce_direction = -anim.bounce_direction;
            }
        }
        Geometry::Square(s) => {
            if s.origin.x <= 0.0 || s.origin.x + s.side >= w {
                anim.bounce_velocity = -anim.bounce_velocity;
            }
            if s.origin.y <= 0.0 || s.origin.y + s.side >= h {
                anim.bounce_direction = -anim.bounce_direction;
            }
        }
        Geometry::Ellipse(e) => {
            if e.center.x - e.rx <= 0.0 || e.center.x + e.rx >= w {
                anim.bounce_velocity = -anim.bounce_velocity;
            }
            if e.center.y - e.ry <= 0.0 || e.center.y + e.ry >= h {
                anim.bounce_direction = -anim.bounce_direction;
            }
        }
        Geometry::Polygon(p) => reflect_radial(anim, p.center, p.radius, w, h),
        Geometry::Triangle(t) => reflect_radial(anim, t.center, t.radius, w, h),
        Geometry::Arc(_) | Geometry::Line(_) | Geometry::RoundedRect(_) => {}
    }
}

fn reflect_radial(anim: &mut crate::anim::AnimState, center: Vec2, radius: f32, w: f32, h: f32) {
    if center.x - radius <= 0.0 || center.x + radius >= w {
        anim.bounce_velocity = -anim.bounce_velocity;
    }
    if center.y - radius <= 0.0 || center.y + radius >= h {
        anim.bounce_direction = -anim.bounce_direction;
    }
}
