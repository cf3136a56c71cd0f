use super::slots::{AnimKind, AnimSlots};

/// Per-shape animation state.
///
/// `running` gates all slot execution; the transients below it belong to the
/// individual kinds and persist while an animation is paused.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimState {
    /// Armed slot set; see [`AnimSlots`].
    pub slots: AnimSlots,
    /// Kind currently armed for add/remove toggling by the operator.
    pub armed: Option<AnimKind>,
    /// Whether armed slots execute on tick.
    pub running: bool,

    /// Pulsing-zoom factor, held in `[ZOOM_MIN, ZOOM_MAX]`.
    pub zoom: f32,
    /// +1 growing, -1 shrinking.
    pub zoom_direction: f32,
    /// Color-cycle position in `[0, 1)`.
    pub color_phase: f32,
    /// Bounce velocity along X; zero until the bounce animation first runs.
    pub bounce_velocity: f32,
    /// Bounce velocity along Y.
    pub bounce_direction: f32,
}

impl Default for AnimState {
    fn default() -> Self {
        Self {
            slots: AnimSlots::new(),
            armed: None,
            running: false,
            zoom: 1.0,
            zoom_direction: 1.0,
            color_phase: 0.0,
            bounce_velocity: 0.0,
            bounce_direction: 0.0,
        }
    }
}

impl AnimState {
    /// Returns the transients to their creation-time values.
    ///
    /// `bounce_direction` is intentionally left alone: resetting the X
    /// velocity alone already re-triggers lazy initialization only when both
    /// components were zero, matching the long-standing editor behavior.
    pub(crate) fn reset_transients(&mut self) {
        self.running = false;
        self.zoom = 1.0;
        self.zoom_direction = 1.0;
        self.color_phase = 0.0;
        self.bounce_velocity = 0.0;
    }
}
