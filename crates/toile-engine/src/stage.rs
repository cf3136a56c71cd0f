use log::debug;

use crate::anim::{AnimKind, Animator};
use crate::coords::{Vec2, Viewport};
use crate::ops::{self, Cursor, Pointer};
use crate::paint::Rgba;
use crate::render::{self, DrawList};
use crate::scene::{self, Shape, ShapeId, ShapeParams, ShapeStore, Style};
use crate::SceneError;

/// Direction for a one-step z reorder of the selected shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Reorder {
    Up,
    Down,
}

/// The engine facade the event loop talks to.
///
/// Responsibilities:
/// - own the shape store, the animator, and the viewport extent
/// - route input-driven operations to the selected shape
/// - advance animation once per frame and track elapsed time
///
/// Everything is synchronous and single-threaded; the caller drives it
/// from its own frame loop.
#[derive(Debug)]
pub struct Stage {
    store: ShapeStore,
    animator: Animator,
    viewport: Viewport,
    elapsed: f32,
}

impl Stage {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            store: ShapeStore::new(),
            animator: Animator::new(),
            viewport,
            elapsed: 0.0,
        }
    }

    #[inline]
    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    #[inline]
    pub fn store_mut(&mut self) -> &mut ShapeStore {
        &mut self.store
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates the bounce bounds after a window resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Seconds of simulated time accumulated across ticks.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn create(
        &mut self,
        params: ShapeParams,
        style: Style,
        color: Rgba,
    ) -> Result<ShapeId, SceneError> {
        self.store.create(params, style, color)
    }

    /// Advances every running animation by one tick. Animation rates are
    /// per tick; `dt` only feeds the elapsed-time counter.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
        self.animator.advance(&mut self.store, self.viewport);
    }

    /// Topmost shape under the point, if any.
    pub fn hit_test(&self, p: Vec2) -> Option<ShapeId> {
        scene::find_topmost_at(&self.store, p)
    }

    /// Click-to-select toggle; returns the id that ends up selected.
    pub fn toggle_select_at(&mut self, p: Vec2) -> Option<ShapeId> {
        scene::toggle_select_at(&mut self.store, p)
    }

    pub fn move_selected(&mut self, d: Vec2) {
        ops::move_selected(&mut self.store, d);
    }

    pub fn rotate_selected(&mut self, delta_deg: f32) {
        ops::rotate_selected(&mut self.store, delta_deg);
    }

    pub fn zoom_selected(&mut self, factor: f32) {
        ops::zoom_selected(&mut self.store, factor);
    }

    pub fn drag_selected(&mut self, pointer: Pointer, cursor: &mut Cursor) {
        ops::drag_selected(&mut self.store, pointer, cursor);
    }

    pub fn reset_selected(&mut self) {
        self.store.reset_selected();
    }

    pub fn delete(&mut self, id: ShapeId) {
        self.store.delete(id);
    }

    pub fn delete_selected(&mut self) -> bool {
        self.store.delete_selected()
    }

    pub fn reorder(&mut self, direction: Reorder) {
        match direction {
            Reorder::Up => self.store.move_up(),
            Reorder::Down => self.store.move_down(),
        }
    }

    /// Cycles the selected shape's armed animation kind forward through
    /// none, rotate, zoom, color, bounce.
    pub fn cycle_armed_forward(&mut self) {
        self.cycle_armed(AnimKind::cycle_forward);
    }

    /// Cycles the armed animation kind the other way.
    pub fn cycle_armed_backward(&mut self) {
        self.cycle_armed(AnimKind::cycle_backward);
    }

    fn cycle_armed(&mut self, step: fn(Option<AnimKind>) -> Option<AnimKind>) {
        if let Some(id) = self.store.selected() {
            if let Some(shape) = self.store.get_mut(id) {
                shape.anim.armed = step(shape.anim.armed);
                debug!("armed animation now {:?}", shape.anim.armed);
            }
        }
    }

    /// Adds or removes the armed kind in the selected shape's slot set.
    /// No-op when nothing is armed or the three slots are full.
    pub fn toggle_armed_animation(&mut self) {
        if let Some(id) = self.store.selected() {
            if let Some(shape) = self.store.get_mut(id) {
                if let Some(kind) = shape.anim.armed {
                    shape.anim.slots.toggle(kind);
                }
            }
        }
    }

    /// Play / pause the selected shape's animation. The shape is
    /// deselected afterwards so it keeps running while the user goes on
    /// to work with other shapes.
    pub fn toggle_animation(&mut self) {
        self.store.toggle_animation_selected();
    }

    pub fn stop_all(&mut self) {
        self.store.stop_all_animations();
    }

    /// Visits live shapes in paint order.
    pub fn for_each_in_z_order<F>(&self, f: F)
    where
        F: FnMut(&Shape),
    {
        render::for_each_in_z_order(&self.store, f);
    }

    /// Records the current frame's draw stream.
    pub fn record_into(&self, list: &mut DrawList) {
        render::record_scene(&self.store, list);
    }
}
