use log::{debug, warn};

use crate::anim::AnimState;
use crate::paint::Rgba;
use crate::SceneError;

use super::params::ShapeParams;
use super::shape::{Shape, Style};
use super::z_index::ZIndex;

/// Hard cap on live shapes.
pub const MAX_SHAPES: usize = 100;

/// Storage index of a live shape.
///
/// Ids are positional: deleting a shape compacts the storage and shifts
/// every id after it down by one. Callers re-resolve through hit testing
/// or [`ShapeStore::selected`] after a delete instead of holding ids.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) usize);

impl ShapeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owner of every live shape.
///
/// Responsibilities:
/// - dense, insertion-ordered storage (value semantics, no interior Rc)
/// - creation contract: capacity check, z assignment, initial snapshots
/// - the single-selection invariant: at most one `selected` flag set
/// - z-order repair for the raise / lower operations
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id.0)
    }

    /// All live shapes in storage (= insertion) order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub(crate) fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }

    /// Creates a shape and returns its id.
    ///
    /// The new shape starts unselected and unanimated, with z above every
    /// existing shape and its geometry, color, and rotation snapshotted
    /// for the reset operation.
    pub fn create(
        &mut self,
        params: ShapeParams,
        style: Style,
        color: Rgba,
    ) -> Result<ShapeId, SceneError> {
        if self.shapes.len() >= MAX_SHAPES {
            warn!("shape limit reached ({MAX_SHAPES}), refusing {}", params.kind());
            return Err(SceneError::CapacityExceeded { max: MAX_SHAPES });
        }
        let geometry = params.build()?;
        let z = ZIndex(self.shapes.len() as i32);
        let shape = Shape {
            geometry,
            style,
            color,
            rotation: 0.0,
            selected: false,
            z,
            anim: AnimState::default(),
            initial_geometry: geometry,
            initial_color: color,
            initial_rotation: 0.0,
        };
        debug!("created {} at z {}", shape.kind(), z.0);
        self.shapes.push(shape);
        Ok(ShapeId(self.shapes.len() - 1))
    }

    /// Removes a shape; out-of-range ids are a silent no-op.
    ///
    /// Storage compacts (later ids shift down by one) but z values are
    /// left as they are, so relative paint order is preserved.
    pub fn delete(&mut self, id: ShapeId) {
        if id.0 < self.shapes.len() {
            let shape = self.shapes.remove(id.0);
            debug!("deleted {} from z {}", shape.kind(), shape.z.0);
        }
    }

    /// Deletes the selected shape, if any. Returns whether one was removed.
    pub fn delete_selected(&mut self) -> bool {
        match self.selected() {
            Some(id) => {
                self.delete(id);
                true
            }
            None => false,
        }
    }

    /// Restores a shape's creation-time color, rotation, and size, and
    /// stops its animation. Position and z are kept.
    pub fn reset(&mut self, id: ShapeId) {
        if let Some(shape) = self.shapes.get_mut(id.0) {
            shape.reset();
        }
    }

    pub fn reset_selected(&mut self) {
        if let Some(id) = self.selected() {
            self.reset(id);
        }
    }

    /// The selected shape's id, if any. First match in storage order; the
    /// single-selection invariant makes further matches impossible.
    pub fn selected(&self) -> Option<ShapeId> {
        self.shapes.iter().position(|s| s.selected).map(ShapeId)
    }

    /// Selects `id` and deselects everything else, stopping the animation
    /// of each shape that loses its selection.
    ///
    /// Only a shape actually losing its selection is paused; unselected
    /// shapes left running by an earlier play toggle keep running. Pausing
    /// the whole scene is [`Self::stop_all_animations`].
    pub fn select_only(&mut self, id: ShapeId) {
        for (i, shape) in self.shapes.iter_mut().enumerate() {
            if i == id.0 {
                shape.selected = true;
            } else {
                if shape.selected {
                    shape.anim.running = false;
                }
                shape.selected = false;
            }
        }
    }

    /// Clears every selection and stops the animation of each shape that
    /// was selected. As with [`Self::select_only`], shapes that were not
    /// selected are untouched even if they are animating.
    pub fn deselect_all(&mut self) {
        for shape in &mut self.shapes {
            if shape.selected {
                shape.anim.running = false;
                shape.selected = false;
            }
        }
    }

    /// Play / pause on the selected shape. The shape keeps running after
    /// the deselection that follows, which is what lets several shapes
    /// animate at once.
    pub fn toggle_animation_selected(&mut self) {
        if let Some(id) = self.selected() {
            let shape = &mut self.shapes[id.0];
            shape.anim.running = !shape.anim.running;
            shape.selected = false;
        }
    }

    /// Pauses every running animation. State (phase, velocity, zoom) is
    /// kept so a later toggle resumes where it stopped.
    pub fn stop_all_animations(&mut self) {
        for shape in &mut self.shapes {
            shape.anim.running = false;
        }
    }

    /// Raises the selected shape one step: swaps its z with the shape
    /// holding the next higher z, if there is one.
    pub fn move_up(&mut self) {
        if let Some(id) = self.selected() {
            let z = self.shapes[id.0].z;
            if let Some(above) = self.nearest_by_z(z, true) {
                self.swap_z(id.0, above);
            }
        }
    }

    /// Lowers the selected shape one step: swaps its z with the shape
    /// holding the next lower z, if there is one.
    pub fn move_down(&mut self) {
        if let Some(id) = self.selected() {
            let z = self.shapes[id.0].z;
            if let Some(below) = self.nearest_by_z(z, false) {
                self.swap_z(id.0, below);
            }
        }
    }

    /// Storage index of the shape whose z is closest to `z` from above
    /// (`upward`) or below.
    fn nearest_by_z(&self, z: ZIndex, upward: bool) -> Option<usize> {
        let mut best: Option<(usize, ZIndex)> = None;
        for (i, shape) in self.shapes.iter().enumerate() {
            let candidate = shape.z;
            let on_side = if upward { candidate > z } else { candidate < z };
            if !on_side {
                continue;
            }
            let closer = match best {
                None => true,
                Some((_, bz)) => {
                    if upward {
                        candidate < bz
                    } else {
                        candidate > bz
                    }
                }
            };
            if closer {
                best = Some((i, candidate));
            }
        }
        best.map(|(i, _)| i)
    }

    fn swap_z(&mut self, a: usize, b: usize) {
        let za = self.shapes[a].z;
        let zb = self.shapes[b].z;
        self.shapes[a].z = zb;
        self.shapes[b].z = za;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Geometry, ShapeKind};

    fn circle(x: f32, y: f32, r: f32) -> ShapeParams {
        ShapeParams::Circle { x, y, radius: r }
    }

    fn store_with(n: usize) -> ShapeStore {
        let mut store = ShapeStore::new();
        for i in 0..n {
            store
                .create(circle(i as f32 * 10.0, 0.0, 5.0), Style::Filled, Rgba::opaque(255, 0, 0))
                .unwrap();
        }
        store
    }

    // ── creation contract ──

    #[test]
    fn create_assigns_increasing_z_and_snapshots() {
        let mut store = ShapeStore::new();
        let a = store.create(circle(0.0, 0.0, 60.0), Style::Filled, Rgba::opaque(10, 20, 30)).unwrap();
        let b = store.create(circle(50.0, 0.0, 60.0), Style::Empty, Rgba::opaque(1, 2, 3)).unwrap();

        let sa = store.get(a).unwrap();
        let sb = store.get(b).unwrap();
        assert_eq!(sa.z, ZIndex(0));
        assert_eq!(sb.z, ZIndex(1));
        assert_eq!(sa.kind(), ShapeKind::Circle);
        assert!(!sa.selected);
        assert!(!sa.anim.running);
        assert_eq!(*sa.initial_geometry(), sa.geometry);
        assert_eq!(sa.initial_color(), sa.color);
        assert_eq!(sa.initial_rotation(), 0.0);
    }

    #[test]
    fn create_refuses_past_capacity() {
        let mut store = store_with(MAX_SHAPES);
        let err = store.create(circle(0.0, 0.0, 5.0), Style::Filled, Rgba::opaque(0, 0, 0));
        assert_eq!(err, Err(SceneError::CapacityExceeded { max: MAX_SHAPES }));
        assert_eq!(store.len(), MAX_SHAPES);
    }

    // ── delete ──

    #[test]
    fn delete_compacts_storage_but_keeps_z() {
        let mut store = store_with(3);
        store.delete(ShapeId(1));

        assert_eq!(store.len(), 2);
        // The survivor that shifted down keeps its original z of 2.
        assert_eq!(store.shapes()[0].z, ZIndex(0));
        assert_eq!(store.shapes()[1].z, ZIndex(2));
    }

    #[test]
    fn delete_out_of_range_is_a_no_op() {
        let mut store = store_with(2);
        store.delete(ShapeId(7));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_selected_removes_exactly_the_selected_shape() {
        let mut store = store_with(3);
        store.select_only(ShapeId(1));
        assert!(store.delete_selected());
        assert_eq!(store.len(), 2);
        assert_eq!(store.selected(), None);
        assert!(!store.delete_selected());
    }

    // ── selection invariant ──

    #[test]
    fn select_only_keeps_a_single_selection() {
        let mut store = store_with(3);
        store.select_only(ShapeId(0));
        store.select_only(ShapeId(2));

        let selected: Vec<bool> = store.shapes().iter().map(|s| s.selected).collect();
        assert_eq!(selected, vec![false, false, true]);
        assert_eq!(store.selected(), Some(ShapeId(2)));
    }

    #[test]
    fn losing_selection_stops_the_animation() {
        let mut store = store_with(2);
        store.select_only(ShapeId(0));
        store.shapes_mut()[0].anim.running = true;

        store.select_only(ShapeId(1));
        assert!(!store.shapes()[0].anim.running);

        store.shapes_mut()[1].anim.running = true;
        store.deselect_all();
        assert!(!store.shapes()[1].anim.running);
    }

    #[test]
    fn toggle_animation_flips_running_and_releases_selection() {
        let mut store = store_with(2);
        store.select_only(ShapeId(0));
        store.toggle_animation_selected();

        assert!(store.shapes()[0].anim.running);
        assert_eq!(store.selected(), None);

        // A second shape can now run at the same time.
        store.select_only(ShapeId(1));
        store.toggle_animation_selected();
        assert!(store.shapes()[0].anim.running);
        assert!(store.shapes()[1].anim.running);
    }

    #[test]
    fn stop_all_pauses_without_clearing_state() {
        let mut store = store_with(2);
        store.shapes_mut()[0].anim.running = true;
        store.shapes_mut()[0].anim.color_phase = 0.3;
        store.stop_all_animations();

        assert!(!store.shapes()[0].anim.running);
        assert_eq!(store.shapes()[0].anim.color_phase, 0.3);
    }

    // ── z reorder ──

    #[test]
    fn move_up_swaps_with_next_higher_z() {
        let mut store = store_with(3);
        store.select_only(ShapeId(0));
        store.move_up();

        assert_eq!(store.shapes()[0].z, ZIndex(1));
        assert_eq!(store.shapes()[1].z, ZIndex(0));
        assert_eq!(store.shapes()[2].z, ZIndex(2));
    }

    #[test]
    fn move_up_at_the_top_is_a_no_op() {
        let mut store = store_with(3);
        store.select_only(ShapeId(2));
        store.move_up();
        let zs: Vec<i32> = store.shapes().iter().map(|s| s.z.0).collect();
        assert_eq!(zs, vec![0, 1, 2]);
    }

    #[test]
    fn move_down_swaps_with_next_lower_z() {
        let mut store = store_with(3);
        store.select_only(ShapeId(2));
        store.move_down();

        assert_eq!(store.shapes()[2].z, ZIndex(1));
        assert_eq!(store.shapes()[1].z, ZIndex(2));
    }

    #[test]
    fn reorder_works_across_the_gap_left_by_a_delete() {
        let mut store = store_with(3);
        store.delete(ShapeId(1));
        // Surviving z values are 0 and 2.
        store.select_only(ShapeId(0));
        store.move_up();

        assert_eq!(store.shapes()[0].z, ZIndex(2));
        assert_eq!(store.shapes()[1].z, ZIndex(0));
    }

    // ── reset ──

    #[test]
    fn reset_restores_color_rotation_and_size_but_not_position() {
        let mut store = store_with(1);
        let id = ShapeId(0);
        {
            let shape = store.get_mut(id).unwrap();
            shape.color = Rgba::opaque(9, 9, 9);
            shape.rotation = 45.0;
            shape.geometry.translate(crate::coords::Vec2::new(100.0, 100.0));
            if let Geometry::Circle(c) = &mut shape.geometry {
                c.radius = 99.0;
            }
            shape.anim.running = true;
            shape.anim.color_phase = 0.5;
        }
        store.reset(id);

        let shape = store.get(id).unwrap();
        assert_eq!(shape.color, Rgba::opaque(255, 0, 0));
        assert_eq!(shape.rotation, 0.0);
        assert!(!shape.anim.running);
        assert_eq!(shape.anim.color_phase, 0.0);
        let Geometry::Circle(c) = shape.geometry else { panic!("circle expected") };
        assert_eq!(c.radius, 5.0);
        assert_eq!(c.center, crate::coords::Vec2::new(100.0, 100.0));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut store = store_with(1);
        store.reset(ShapeId(0));
        let first = store.shapes()[0].clone();
        store.reset(ShapeId(0));
        assert_eq!(store.shapes()[0], first);
    }
}
