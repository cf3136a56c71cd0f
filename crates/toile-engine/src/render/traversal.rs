use crate::scene::{Shape, ShapeStore};

use super::{DrawCmd, DrawList};

/// Units the selection halo grows beyond the shape it outlines.
pub const HALO_ENLARGE: f32 = 5.0;
/// Per-channel brightness factor for the halo color.
pub const HALO_DIM: f32 = 0.8;

/// Visits every live shape in paint order: z ascending, storage order
/// breaking ties. The callback owns rasterization.
pub fn for_each_in_z_order<F>(store: &ShapeStore, mut f: F)
where
    F: FnMut(&Shape),
{
    let mut order: Vec<usize> = (0..store.len()).collect();
    let shapes = store.shapes();
    order.sort_by_key(|&i| (shapes[i].z, i));
    for i in order {
        f(&shapes[i]);
    }
}

/// Records one frame of the scene into `list`.
///
/// Each shape contributes its primary command; a selected shape also
/// contributes an enlarged, dimmed halo at the same z, pushed after the
/// primary so it paints on top of it.
pub fn record_scene(store: &ShapeStore, list: &mut DrawList) {
    for_each_in_z_order(store, |shape| {
        list.push(
            shape.z,
            DrawCmd {
                geometry: shape.geometry,
                rotation_deg: shape.rotation,
                style: shape.style,
                color: shape.color,
            },
        );
        if shape.selected {
            list.push(
                shape.z,
                DrawCmd {
                    geometry: shape.geometry.enlarged(HALO_ENLARGE),
                    rotation_deg: shape.rotation,
                    style: shape.style,
                    color: shape.color.dimmed(HALO_DIM),
                },
            );
        }
    });
}
