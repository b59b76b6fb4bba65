//! # Room layout
//!
//! Grid placement of seats and the box geometry of one chair. The layout is
//! configuration: spacing and chair proportions, with defaults that read
//! well for a typical classroom. Y is up; columns run along +X, rows recede
//! along +Z (row 0 is the front of the room).
//!
//! Chair geometry is chair-local, centered on the floor at the origin; the
//! scene arena places each chair with a translation derived from
//! [`RoomLayout::seat_center`].

use cgmath::{Vector3, Zero};

use crate::gfx::picking::Aabb;

/// Spacing and proportions used to place seat geometry.
#[derive(Debug, Clone, Copy)]
pub struct RoomLayout {
    /// Distance between adjacent columns along X.
    pub column_spacing: f32,
    /// Distance between adjacent rows along Z.
    pub row_spacing: f32,
    /// Width of one chair; the other chair dimensions derive from it.
    pub seat_width: f32,
    /// World position of the seat at column 0, row 0.
    pub origin: Vector3<f32>,
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self {
            column_spacing: 2.0,
            row_spacing: 1.6,
            seat_width: 0.9,
            origin: Vector3::zero(),
        }
    }
}

/// The three status-bearing surfaces of one chair, in chair-local space.
#[derive(Debug, Clone, Copy)]
pub struct ChairBoxes {
    pub base: Aabb,
    pub pad: Aabb,
    pub backrest: Aabb,
}

impl RoomLayout {
    /// Floor-level center of the seat at (column, row).
    pub fn seat_center(&self, column: u32, row: u32) -> Vector3<f32> {
        self.origin
            + Vector3::new(
                column as f32 * self.column_spacing,
                0.0,
                row as f32 * self.row_spacing,
            )
    }

    /// Chair-local boxes for one chair, floor-centered at the origin.
    pub fn chair_boxes(&self) -> ChairBoxes {
        let w = self.seat_width;
        let half = w / 2.0;

        // Pedestal under the pad, narrower than the pad itself.
        let base = Aabb::new(
            Vector3::new(-0.3 * w, 0.0, -0.3 * w),
            Vector3::new(0.3 * w, 0.5 * w, 0.3 * w),
        );
        // Sitting surface.
        let pad = Aabb::new(
            Vector3::new(-half, 0.5 * w, -half),
            Vector3::new(half, 0.63 * w, half),
        );
        // Upright slab along the back edge of the pad.
        let backrest = Aabb::new(
            Vector3::new(-half, 0.63 * w, half - 0.1 * w),
            Vector3::new(half, 1.3 * w, half),
        );

        ChairBoxes { base, pad, backrest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_are_spaced_on_the_grid() {
        let layout = RoomLayout::default();
        let a = layout.seat_center(0, 0);
        let b = layout.seat_center(2, 3);
        assert_eq!(b.x - a.x, 2.0 * layout.column_spacing);
        assert_eq!(b.z - a.z, 3.0 * layout.row_spacing);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn chair_surfaces_stack_without_gaps() {
        let boxes = RoomLayout::default().chair_boxes();
        assert_eq!(boxes.base.max.y, boxes.pad.min.y);
        assert_eq!(boxes.pad.max.y, boxes.backrest.min.y);
        assert!(boxes.backrest.max.y > boxes.pad.max.y);
    }

    #[test]
    fn chairs_fit_inside_the_grid_cell() {
        let layout = RoomLayout::default();
        let boxes = layout.chair_boxes();
        assert!(boxes.pad.max.x - boxes.pad.min.x < layout.column_spacing);
        assert!(boxes.pad.max.z - boxes.pad.min.z < layout.row_spacing);
    }
}
