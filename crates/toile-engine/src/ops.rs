//! Manipulation of the selected shape: move, rotate, zoom, drag.
//!
//! Responsibilities:
//! - per-kind incremental resize with hard numeric bounds
//! - rotation normalization into [0, 360)
//! - pointer-drag recentering, including where the cursor snaps to
//!
//! Everything here is a no-op on degenerate input (nothing selected,
//! zero-length lines); refusals never surface as errors.

use crate::coords::Vec2;
use crate::scene::{Geometry, Shape, ShapeStore};

/// Linear step, in units per zoom call, for the box kinds.
const ZOOM_BOX_STEP: f32 = 10.0;
/// Linear step for the radial kinds.
const ZOOM_RADIAL_STEP: f32 = 5.0;
/// Multiplicative step for ellipses and rounded rectangles.
const ZOOM_SCALE_STEP: f32 = 0.05;

const BOX_SIZE_RANGE: std::ops::RangeInclusive<f32> = 10.0..=1500.0;
const RADIAL_RANGE: std::ops::RangeInclusive<f32> = 2.0..=1000.0;
const ELLIPSE_RX_RANGE: std::ops::RangeInclusive<f32> = 2.0..=3000.0;
const LINE_LENGTH_RANGE: std::ops::RangeInclusive<f32> = 5.0..=1500.0;
const LINE_THICKNESS_RANGE: std::ops::RangeInclusive<f32> = 1.0..=255.0;
const ARC_RADIUS_RANGE: std::ops::RangeInclusive<f32> = 50.0..=100.0;
const ROUNDED_MIN_DIMENSION: f32 = 40.0;
const ROUNDED_MIN_CORNER: f32 = 10.0;

/// One pointer-motion sample from the event loop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
    pub delta: Vec2,
}

/// Logical cursor the editor shows; drags snap it onto the dragged shape.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Cursor {
    pub pos: Vec2,
}

/// Translates every position field of `shape` by `d`.
pub fn move_shape(shape: &mut Shape, d: Vec2) {
    shape.geometry.translate(d);
}

pub fn move_selected(store: &mut ShapeStore, d: Vec2) {
    if let Some(id) = store.selected() {
        if let Some(shape) = store.get_mut(id) {
            move_shape(shape, d);
        }
    }
}

/// Adds `delta_deg` and renormalizes into [0, 360). Ignored unless the
/// shape is selected. Deltas are expected to stay well under a full
/// revolution per call.
pub fn rotate_shape(shape: &mut Shape, delta_deg: f32) {
    if !shape.selected {
        return;
    }
    shape.rotation += delta_deg;
    while shape.rotation >= 360.0 {
        shape.rotation -= 360.0;
    }
    while shape.rotation < 0.0 {
        shape.rotation += 360.0;
    }
}

pub fn rotate_selected(store: &mut ShapeStore, delta_deg: f32) {
    if let Some(id) = store.selected() {
        if let Some(shape) = store.get_mut(id) {
            rotate_shape(shape, delta_deg);
        }
    }
}

/// Multiplier for the scale-based kinds; shrinking is the exact inverse
/// of growing so zoom in / zoom out round-trip.
#[inline]
fn scale_multiplier(factor: f32) -> f32 {
    if factor >= 0.0 {
        1.0 + ZOOM_SCALE_STEP * factor
    } else {
        1.0 / (1.0 - ZOOM_SCALE_STEP * factor)
    }
}

/// Kind-specific incremental resize. `factor` is signed: positive grows,
/// negative shrinks. Distinct from the Zoom animation, which rescales
/// from fixed base sizes instead of stepping the current size.
pub fn zoom_shape(shape: &mut Shape, factor: f32) {
    match &mut shape.geometry {
        Geometry::Circle(c) => {
            c.radius = (c.radius + factor * ZOOM_RADIAL_STEP)
                .clamp(*RADIAL_RANGE.start(), *RADIAL_RANGE.end());
        }
        Geometry::Ellipse(e) => {
            e.rx = (e.rx * scale_multiplier(factor))
                .clamp(*ELLIPSE_RX_RANGE.start(), *ELLIPSE_RX_RANGE.end());
            let aspect = if e.aspect > 0.0 { e.aspect } else { 1.0 };
            e.ry = e.rx / aspect;
        }
        Geometry::Arc(a) => {
            a.radius = (a.radius + factor * ZOOM_RADIAL_STEP)
                .clamp(*ARC_RADIUS_RANGE.start(), *ARC_RADIUS_RANGE.end());
        }
        Geometry::Rect(r) => {
            // Aspect ratio at the time of the call, not at creation.
            let aspect = if r.height > 0.0 { r.width / r.height } else { 0.0 };
            r.width = (r.width + factor * ZOOM_BOX_STEP)
                .clamp(*BOX_SIZE_RANGE.start(), *BOX_SIZE_RANGE.end());
            if aspect > 0.0 {
                r.height = r.width / aspect;
            }
        }
        Geometry::Square(s) => {
            s.side = (s.side + factor * ZOOM_BOX_STEP)
                .clamp(*BOX_SIZE_RANGE.start(), *BOX_SIZE_RANGE.end());
        }
        Geometry::Line(l) => {
            let mid = l.midpoint();
            if l.length() <= 0.0 {
                return;
            }
            let scale = 1.0 + factor * 0.1;
            l.a = mid + (l.a - mid) * scale;
            l.b = mid + (l.b - mid) * scale;
            let len = l.length();
            let clamped = len.clamp(*LINE_LENGTH_RANGE.start(), *LINE_LENGTH_RANGE.end());
            if len > 0.0 && clamped != len {
                let s = clamped / len;
                l.a = mid + (l.a - mid) * s;
                l.b = mid + (l.b - mid) * s;
            }
            l.thickness = (l.thickness + factor * 2.0)
                .clamp(*LINE_THICKNESS_RANGE.start(), *LINE_THICKNESS_RANGE.end());
        }
        Geometry::Polygon(p) => {
            p.radius = (p.radius + factor * ZOOM_RADIAL_STEP)
                .clamp(*RADIAL_RANGE.start(), *RADIAL_RANGE.end());
        }
        Geometry::Triangle(t) => {
            t.radius = (t.radius + factor * ZOOM_RADIAL_STEP)
                .clamp(*RADIAL_RANGE.start(), *RADIAL_RANGE.end());
        }
        Geometry::RoundedRect(rr) => {
            let scale = scale_multiplier(factor);
            // Each dimension clamps to the minimum independently, so a very
            // flat box can keep shrinking in its long direction.
            let width = (rr.width() * scale).max(ROUNDED_MIN_DIMENSION);
            let height = (rr.height() * scale).max(ROUNDED_MIN_DIMENSION);
            let center = rr.center();
            let half = Vec2::new(width * 0.5, height * 0.5);
            rr.p1 = center - half;
            rr.p2 = center + half;
            rr.corner_radius = (0.2 * height).max(ROUNDED_MIN_CORNER);
        }
    }
}

pub fn zoom_selected(store: &mut ShapeStore, factor: f32) {
    if let Some(id) = store.selected() {
        if let Some(shape) = store.get_mut(id) {
            zoom_shape(shape, factor);
        }
    }
}

/// Drags the selected shape with the pointer.
///
/// Centered kinds recenter on the pointer and the cursor snaps to the
/// center; lines recenter their span; rounded rectangles follow the
/// pointer delta without touching the cursor.
pub fn drag_selected(store: &mut ShapeStore, pointer: Pointer, cursor: &mut Cursor) {
    let Some(id) = store.selected() else { return };
    let Some(shape) = store.get_mut(id) else { return };

    match &mut shape.geometry {
        Geometry::Circle(c) => {
            c.center = pointer.pos;
            cursor.pos = c.center;
        }
        Geometry::Ellipse(e) => {
            e.center = pointer.pos;
            cursor.pos = e.center;
        }
        Geometry::Arc(a) => {
            a.center = pointer.pos;
            cursor.pos = a.center;
        }
        Geometry::Polygon(p) => {
            p.center = pointer.pos;
            cursor.pos = p.center;
        }
        Geometry::Triangle(t) => {
            t.center = pointer.pos;
            cursor.pos = t.center;
        }
        Geometry::Rect(r) => {
            r.origin = pointer.pos - Vec2::new(r.width * 0.5, r.height * 0.5);
            cursor.pos = r.center();
        }
        Geometry::Square(s) => {
            s.origin = pointer.pos - Vec2::new(s.side * 0.5, s.side * 0.5);
            cursor.pos = s.center();
        }
        Geometry::Line(l) => {
            let half = (l.b - l.a) * 0.5;
            l.a = pointer.pos - half;
            l.b = pointer.pos + half;
            cursor.pos = pointer.pos;
        }
        Geometry::RoundedRect(rr) => {
            rr.p1 = rr.p1 + pointer.delta;
            rr.p2 = rr.p2 + pointer.delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Rgba;
    use crate::scene::{ShapeId, ShapeParams, Style};

    fn store_with(params: ShapeParams) -> (ShapeStore, ShapeId) {
        let mut store = ShapeStore::new();
        let id = store.create(params, Style::Filled, Rgba::opaque(255, 255, 255)).unwrap();
        store.select_only(id);
        (store, id)
    }

    // ── rotation ──

    #[test]
    fn rotation_normalizes_into_a_full_turn() {
        let (mut store, id) = store_with(ShapeParams::Circle { x: 0.0, y: 0.0, radius: 10.0 });
        store.get_mut(id).unwrap().rotation = 350.0;
        rotate_selected(&mut store, 20.0);
        assert!((store.get(id).unwrap().rotation - 10.0).abs() < 1e-4);

        rotate_selected(&mut store, -30.0);
        assert!((store.get(id).unwrap().rotation - 340.0).abs() < 1e-4);
    }

    #[test]
    fn rotation_ignores_unselected_shapes() {
        let (mut store, id) = store_with(ShapeParams::Circle { x: 0.0, y: 0.0, radius: 10.0 });
        store.deselect_all();
        let shape = store.get_mut(id).unwrap();
        rotate_shape(shape, 45.0);
        assert_eq!(shape.rotation, 0.0);
    }

    // ── zoom, radial kinds ──

    #[test]
    fn circle_zoom_steps_five_units_per_call() {
        let (mut store, id) = store_with(ShapeParams::Circle { x: 400.0, y: 170.0, radius: 60.0 });
        for _ in 0..10 {
            zoom_selected(&mut store, 1.0);
        }
        let Geometry::Circle(c) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(c.radius, 110.0);
        assert!(c.radius <= 1000.0);
    }

    #[test]
    fn circle_zoom_respects_its_floor() {
        let (mut store, id) = store_with(ShapeParams::Circle { x: 0.0, y: 0.0, radius: 4.0 });
        zoom_selected(&mut store, -1.0);
        let Geometry::Circle(c) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(c.radius, 2.0);
    }

    #[test]
    fn arc_zoom_clamps_to_its_narrow_band() {
        let (mut store, id) = store_with(ShapeParams::Arc {
            x: 0.0, y: 0.0, radius: 98.0, start_deg: 0.0, end_deg: 90.0,
        });
        zoom_selected(&mut store, 1.0);
        let Geometry::Arc(a) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(a.radius, 100.0);

        for _ in 0..20 {
            zoom_selected(&mut store, -1.0);
        }
        let Geometry::Arc(a) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(a.radius, 50.0);
    }

    // ── zoom, box kinds ──

    #[test]
    fn rect_zoom_preserves_aspect_at_call_time() {
        let (mut store, id) = store_with(ShapeParams::Rect {
            x: 0.0, y: 0.0, width: 200.0, height: 50.0,
        });
        zoom_selected(&mut store, 1.0);
        let Geometry::Rect(r) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(r.width, 210.0);
        assert!((r.height - 52.5).abs() < 1e-3);
    }

    #[test]
    fn square_zoom_clamps_to_the_box_range() {
        let (mut store, id) = store_with(ShapeParams::Square { x: 0.0, y: 0.0, side: 1495.0 });
        zoom_selected(&mut store, 2.0);
        let Geometry::Square(s) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(s.side, 1500.0);
    }

    // ── zoom, scale kinds ──

    #[test]
    fn ellipse_zoom_in_and_out_round_trip() {
        let (mut store, id) = store_with(ShapeParams::Ellipse {
            x: 100.0, y: 100.0, rx: 70.0, ry: 50.0,
        });
        zoom_selected(&mut store, 1.0);
        {
            let Geometry::Ellipse(e) = store.get(id).unwrap().geometry else { panic!() };
            assert!((e.rx - 73.5).abs() < 1e-3);
            assert!((e.rx / e.ry - 1.4).abs() < 1e-3);
            assert_eq!(e.center, Vec2::new(100.0, 100.0));
        }
        zoom_selected(&mut store, -1.0);
        let Geometry::Ellipse(e) = store.get(id).unwrap().geometry else { panic!() };
        assert!((e.rx - 70.0).abs() < 1e-3);
        assert!((e.ry - 50.0).abs() < 1e-3);
    }

    #[test]
    fn rounded_rect_shrink_clamps_each_dimension_to_its_minimum() {
        let (mut store, id) = store_with(ShapeParams::RoundedRect {
            x1: 0.0, y1: 0.0, x2: 41.0, y2: 200.0, corner_radius: 20.0,
        });
        zoom_selected(&mut store, -1.0);
        let Geometry::RoundedRect(rr) = store.get(id).unwrap().geometry else { panic!() };
        // Width stops at the floor; the long axis keeps shrinking.
        assert_eq!(rr.width(), 40.0);
        assert!((rr.height() - 200.0 / 1.05).abs() < 1e-3);

        // Fully clamped, further zoom-out changes nothing.
        for _ in 0..40 {
            zoom_selected(&mut store, -1.0);
        }
        let Geometry::RoundedRect(rr) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!((rr.width(), rr.height()), (40.0, 40.0));
    }

    #[test]
    fn rounded_rect_zoom_recomputes_the_corner_radius() {
        let (mut store, id) = store_with(ShapeParams::RoundedRect {
            x1: 0.0, y1: 0.0, x2: 200.0, y2: 100.0, corner_radius: 20.0,
        });
        zoom_selected(&mut store, 1.0);
        let Geometry::RoundedRect(rr) = store.get(id).unwrap().geometry else { panic!() };
        assert!((rr.width() - 210.0).abs() < 1e-3);
        assert!((rr.height() - 105.0).abs() < 1e-3);
        assert!((rr.corner_radius - 21.0).abs() < 1e-3);
        // Growing keeps the center where it was.
        assert_eq!(rr.center(), Vec2::new(100.0, 50.0));
    }

    // ── zoom, lines ──

    #[test]
    fn line_zoom_scales_about_the_midpoint() {
        let (mut store, id) = store_with(ShapeParams::Line {
            x1: 0.0, y1: 0.0, x2: 100.0, y2: 0.0, thickness: 3.0,
        });
        zoom_selected(&mut store, 1.0);
        let Geometry::Line(l) = store.get(id).unwrap().geometry else { panic!() };
        assert!((l.length() - 110.0).abs() < 1e-3);
        assert_eq!(l.midpoint(), Vec2::new(50.0, 0.0));
        assert_eq!(l.thickness, 5.0);
    }

    #[test]
    fn zero_length_line_skips_the_rescale() {
        let (mut store, id) = store_with(ShapeParams::Line {
            x1: 10.0, y1: 10.0, x2: 10.0, y2: 10.0, thickness: 3.0,
        });
        zoom_selected(&mut store, 1.0);
        let Geometry::Line(l) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(l.a, l.b);
        assert_eq!(l.thickness, 3.0);
    }

    #[test]
    fn short_line_zoom_out_clamps_to_the_minimum_length() {
        let (mut store, id) = store_with(ShapeParams::Line {
            x1: 0.0, y1: 0.0, x2: 6.0, y2: 0.0, thickness: 3.0,
        });
        for _ in 0..5 {
            zoom_selected(&mut store, -1.0);
        }
        let Geometry::Line(l) = store.get(id).unwrap().geometry else { panic!() };
        assert!((l.length() - 5.0).abs() < 1e-3);
    }

    // ── move / drag ──

    #[test]
    fn move_translates_without_resizing() {
        let (mut store, id) = store_with(ShapeParams::Rect {
            x: 10.0, y: 20.0, width: 200.0, height: 50.0,
        });
        move_selected(&mut store, Vec2::new(5.0, -5.0));
        let Geometry::Rect(r) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(r.origin, Vec2::new(15.0, 15.0));
        assert_eq!(r.width, 200.0);
    }

    #[test]
    fn dragging_a_circle_snaps_the_cursor_to_its_center() {
        let (mut store, _) = store_with(ShapeParams::Circle { x: 0.0, y: 0.0, radius: 30.0 });
        let mut cursor = Cursor::default();
        let pointer = Pointer { pos: Vec2::new(250.0, 300.0), delta: Vec2::new(4.0, 4.0) };
        drag_selected(&mut store, pointer, &mut cursor);

        assert_eq!(store.shapes()[0].geometry.center(), Vec2::new(250.0, 300.0));
        assert_eq!(cursor.pos, Vec2::new(250.0, 300.0));
    }

    #[test]
    fn dragging_a_rect_centers_its_box_on_the_pointer() {
        let (mut store, id) = store_with(ShapeParams::Rect {
            x: 0.0, y: 0.0, width: 200.0, height: 50.0,
        });
        let mut cursor = Cursor::default();
        let pointer = Pointer { pos: Vec2::new(300.0, 300.0), delta: Vec2::zero() };
        drag_selected(&mut store, pointer, &mut cursor);

        let Geometry::Rect(r) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(r.origin, Vec2::new(200.0, 275.0));
        assert_eq!(cursor.pos, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn dragging_a_rounded_rect_follows_the_delta_and_leaves_the_cursor() {
        let (mut store, id) = store_with(ShapeParams::RoundedRect {
            x1: 0.0, y1: 0.0, x2: 100.0, y2: 60.0, corner_radius: 12.0,
        });
        let mut cursor = Cursor { pos: Vec2::new(7.0, 7.0) };
        let pointer = Pointer { pos: Vec2::new(300.0, 300.0), delta: Vec2::new(10.0, -5.0) };
        drag_selected(&mut store, pointer, &mut cursor);

        let Geometry::RoundedRect(rr) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(rr.p1, Vec2::new(10.0, -5.0));
        assert_eq!(cursor.pos, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn manipulation_without_a_selection_is_a_no_op() {
        let (mut store, id) = store_with(ShapeParams::Circle { x: 0.0, y: 0.0, radius: 30.0 });
        store.deselect_all();
        zoom_selected(&mut store, 1.0);
        move_selected(&mut store, Vec2::new(10.0, 10.0));

        let Geometry::Circle(c) = store.get(id).unwrap().geometry else { panic!() };
        assert_eq!(c.radius, 30.0);
        assert_eq!(c.center, Vec2::zero());
    }
}
