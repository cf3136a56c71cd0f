use crate::coords::Vec2;

/// Rotates `p` about `center` by `deg` degrees (clockwise in screen space,
/// since +Y points down).
#[inline]
pub fn rotate_about(p: Vec2, center: Vec2, deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    let (sin, cos) = rad.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Vec2::new(
        cos * dx - sin * dy + center.x,
        sin * dx + cos * dy + center.y,
    )
}

/// Vertex `i` of a regular `sides`-gon circumscribed by `radius` around
/// `center`, with an additional phase offset in degrees.
#[inline]
pub fn ngon_vertex(center: Vec2, radius: f32, sides: u32, i: u32, phase_deg: f32) -> Vec2 {
    let angle = (2.0 * std::f32::consts::PI * i as f32) / sides as f32 + phase_deg.to_radians();
    Vec2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_about(Vec2::new(10.0, 0.0), Vec2::zero(), 90.0);
        assert!(close(p, Vec2::new(0.0, 10.0)));
    }

    #[test]
    fn rotate_about_offset_center() {
        let p = rotate_about(Vec2::new(6.0, 5.0), Vec2::new(5.0, 5.0), 180.0);
        assert!(close(p, Vec2::new(4.0, 5.0)));
    }

    #[test]
    fn rotate_zero_is_identity() {
        let p = Vec2::new(3.5, -2.25);
        assert!(close(rotate_about(p, Vec2::new(1.0, 1.0), 0.0), p));
    }

    #[test]
    fn ngon_first_vertex_on_positive_x() {
        let v = ngon_vertex(Vec2::zero(), 100.0, 6, 0, 0.0);
        assert!(close(v, Vec2::new(100.0, 0.0)));
    }
}
