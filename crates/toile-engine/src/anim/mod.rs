//! Animation engine.
//!
//! Responsibilities:
//! - the per-shape animation state (armed kind, capped slot set, transients)
//! - the per-tick [`Animator`] that advances every running shape
//!
//! Rates are per-tick constants; the frame loop is expected to tick once per
//! rendered frame, as the interactive editor does.

mod animator;
mod slots;
mod state;

pub use animator::{
    Animator, BOUNCE_SPEED, BOUNCE_TICK_INTERVAL, COLOR_PHASE_STEP, ROTATE_STEP_DEG, ZOOM_MAX,
    ZOOM_MIN, ZOOM_STEP,
};
pub use slots::{AnimKind, AnimSlots};
pub use state::AnimState;
