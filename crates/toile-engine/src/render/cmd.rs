use crate::paint::Rgba;
use crate::scene::{Geometry, Style};

/// One primitive for the external rasterizer.
///
/// Carries everything needed to fill pixels: the kind-tagged geometry,
/// the rotation to apply about the shape's center, the fill mode, and
/// the color. Selection halos arrive as ordinary commands with enlarged
/// geometry and a dimmed color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCmd {
    pub geometry: Geometry,
    /// Degrees, counter-clockwise about the geometry's center.
    pub rotation_deg: f32,
    pub style: Style,
    pub color: Rgba,
}
