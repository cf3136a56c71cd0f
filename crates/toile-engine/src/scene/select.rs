use log::debug;

use crate::coords::Vec2;

use super::store::{ShapeId, ShapeStore};

/// Shape under `p`, resolved by scanning in storage order and keeping the
/// last match. With the initial z assignment that is the most recently
/// created shape under the point; explicit reorders do not change which
/// shape wins the pick.
pub fn find_topmost_at(store: &ShapeStore, p: Vec2) -> Option<ShapeId> {
    let mut hit = None;
    for (i, shape) in store.shapes().iter().enumerate() {
        if shape.geometry.contains(p, shape.rotation) {
            hit = Some(ShapeId(i));
        }
    }
    hit
}

/// Click-to-select with toggle semantics.
///
/// - clicking the already selected shape deselects it (and stops its
///   animation)
/// - clicking another shape moves the selection to it
/// - clicking empty space clears the selection
///
/// Every path that removes a selection also pauses that shape's
/// animation. Returns the id that ends up selected, if any.
pub fn toggle_select_at(store: &mut ShapeStore, p: Vec2) -> Option<ShapeId> {
    match find_topmost_at(store, p) {
        Some(id) => {
            if store.selected() == Some(id) {
                store.deselect_all();
                None
            } else {
                debug!("selected shape {}", id.index());
                store.select_only(id);
                Some(id)
            }
        }
        None => {
            store.deselect_all();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Rgba;
    use crate::scene::{ShapeParams, Style};

    fn two_overlapping_circles() -> ShapeStore {
        let mut store = ShapeStore::new();
        store
            .create(ShapeParams::Circle { x: 100.0, y: 100.0, radius: 50.0 }, Style::Filled, Rgba::opaque(255, 0, 0))
            .unwrap();
        store
            .create(ShapeParams::Circle { x: 120.0, y: 100.0, radius: 50.0 }, Style::Filled, Rgba::opaque(0, 255, 0))
            .unwrap();
        store
    }

    #[test]
    fn pick_prefers_the_later_shape_in_the_overlap() {
        let store = two_overlapping_circles();
        assert_eq!(find_topmost_at(&store, Vec2::new(110.0, 100.0)), Some(ShapeId(1)));
        // Only the first circle covers its far left edge.
        assert_eq!(find_topmost_at(&store, Vec2::new(55.0, 100.0)), Some(ShapeId(0)));
        assert_eq!(find_topmost_at(&store, Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn clicking_a_shape_selects_it_and_only_it() {
        let mut store = two_overlapping_circles();
        assert_eq!(toggle_select_at(&mut store, Vec2::new(55.0, 100.0)), Some(ShapeId(0)));
        assert_eq!(store.selected(), Some(ShapeId(0)));

        // Clicking the other circle moves the selection.
        assert_eq!(toggle_select_at(&mut store, Vec2::new(165.0, 100.0)), Some(ShapeId(1)));
        assert_eq!(store.selected(), Some(ShapeId(1)));
    }

    #[test]
    fn clicking_the_selected_shape_again_deselects_and_pauses_it() {
        let mut store = two_overlapping_circles();
        toggle_select_at(&mut store, Vec2::new(55.0, 100.0));
        store.shapes_mut()[0].anim.running = true;

        assert_eq!(toggle_select_at(&mut store, Vec2::new(55.0, 100.0)), None);
        assert_eq!(store.selected(), None);
        assert!(!store.shapes()[0].anim.running);
    }

    #[test]
    fn clicking_empty_space_clears_selection_and_pauses_its_animation() {
        let mut store = two_overlapping_circles();
        toggle_select_at(&mut store, Vec2::new(55.0, 100.0));
        store.shapes_mut()[0].anim.running = true;

        assert_eq!(toggle_select_at(&mut store, Vec2::new(500.0, 500.0)), None);
        assert_eq!(store.selected(), None);
        assert!(!store.shapes()[0].anim.running);
    }
}
