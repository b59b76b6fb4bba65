//! # Scene arena
//!
//! Flat arena of scene nodes indexed by [`NodeId`], the built-in
//! [`RenderAdapter`]. Each seat is a small subtree: a grouping root tagged
//! with the seat identity plus three pickable leaf surfaces (base, pad,
//! backrest). The leaf → root relation is a precomputed table filled in at
//! construction, so hit resolution is a table lookup instead of a parent
//! pointer walk over live nodes.
//!
//! Decorative geometry (desks, walls, labels) can be added too; it is never
//! pickable and can never resolve to a seat.
//!
//! The arena holds no GPU state. A renderer draws it by iterating
//! [`SceneArena::node_count`] and asking for each node's world bounds and
//! resolved color.

use std::collections::HashMap;

use cgmath::{Matrix4, SquareMatrix};

use crate::attendance::Status;
use crate::gfx::adapter::{NodeId, RayHit, RenderAdapter, SeatVisual};
use crate::gfx::layout::RoomLayout;
use crate::gfx::palette::{Color, StatusPalette};
use crate::gfx::picking::{Aabb, Ray};
use crate::roster::SeatId;

struct Node {
    /// Bounds in node-local space.
    aabb: Aabb,
    transform: Matrix4<f32>,
    color: Color,
    highlighted: bool,
    /// Only seat surfaces are pickable; decoration never is.
    pickable: bool,
}

/// Arena-backed scene graph and default render adapter.
pub struct SceneArena {
    nodes: Vec<Node>,
    layout: RoomLayout,
    palette: StatusPalette,
    /// Pickable leaf surface → root of its seat subtree.
    leaf_to_root: HashMap<NodeId, NodeId>,
    /// Seat subtree root → seat identity.
    seat_tags: HashMap<NodeId, SeatId>,
}

impl SceneArena {
    pub fn new(layout: RoomLayout, palette: StatusPalette) -> Self {
        Self {
            nodes: Vec::new(),
            layout,
            palette,
            leaf_to_root: HashMap::new(),
            seat_tags: HashMap::new(),
        }
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    pub fn palette(&self) -> &StatusPalette {
        &self.palette
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add untagged, unpickable geometry (desk, wall, label quad).
    pub fn add_decoration(&mut self, aabb: Aabb, color: Color) -> NodeId {
        self.push_node(Node {
            aabb,
            transform: Matrix4::identity(),
            color,
            highlighted: false,
            pickable: false,
        })
    }

    /// World-space bounds of a node.
    pub fn world_bounds(&self, node: NodeId) -> Aabb {
        let n = &self.nodes[node.index()];
        n.aabb.transform(&n.transform)
    }

    /// The color a renderer should draw this node with right now.
    /// Hover highlighting overrides the status color.
    pub fn color_of(&self, node: NodeId) -> Color {
        let n = &self.nodes[node.index()];
        if n.highlighted {
            self.palette.highlight
        } else {
            n.color
        }
    }

    /// Seat identity tagged on a subtree root, if any.
    pub fn seat_tag(&self, root: NodeId) -> Option<&SeatId> {
        self.seat_tags.get(&root)
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl Default for SceneArena {
    fn default() -> Self {
        Self::new(RoomLayout::default(), StatusPalette::default())
    }
}

impl RenderAdapter for SceneArena {
    fn create_seat_visual(
        &mut self,
        seat: SeatId,
        column: u32,
        row: u32,
        status: Status,
    ) -> SeatVisual {
        let boxes = self.layout.chair_boxes();
        let placement = Matrix4::from_translation(self.layout.seat_center(column, row));
        let color = self.palette.color_for(status);

        let surface = |aabb| Node {
            aabb,
            transform: placement,
            color,
            highlighted: false,
            pickable: true,
        };
        let base = self.push_node(surface(boxes.base));
        let pad = self.push_node(surface(boxes.pad));
        let backrest = self.push_node(surface(boxes.backrest));

        // Grouping root: union bounds, tagged with the identity, not
        // pickable itself (its leaves are).
        let union = boxes.base.union(&boxes.pad).union(&boxes.backrest);
        let root = self.push_node(Node {
            aabb: union,
            transform: placement,
            color,
            highlighted: false,
            pickable: false,
        });

        let surfaces = vec![base, pad, backrest];
        for leaf in &surfaces {
            self.leaf_to_root.insert(*leaf, root);
        }
        self.seat_tags.insert(root, seat);

        SeatVisual {
            root,
            surfaces,
            primary: pad,
        }
    }

    fn set_status_color(&mut self, visual: &SeatVisual, status: Status) {
        let color = self.palette.color_for(status);
        for node in visual.surfaces.iter().chain(std::iter::once(&visual.root)) {
            self.nodes[node.index()].color = color;
        }
    }

    fn set_highlight(&mut self, visual: &SeatVisual, on: bool) {
        self.nodes[visual.primary.index()].highlighted = on;
    }

    fn intersect(&self, ray: &Ray) -> Vec<RayHit> {
        let mut hits = Vec::new();
        for (index, node) in self.nodes.iter().enumerate() {
            if !node.pickable {
                continue;
            }
            let world_aabb = node.aabb.transform(&node.transform);
            if let Some(distance) = world_aabb.intersect_ray(ray) {
                let leaf = NodeId(index);
                let seat = self
                    .leaf_to_root
                    .get(&leaf)
                    .and_then(|root| self.seat_tags.get(root))
                    .cloned();
                hits.push(RayHit {
                    node: leaf,
                    distance,
                    seat,
                });
            }
        }
        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector3};

    fn seat(key: &str) -> SeatId {
        SeatId::decode(key).unwrap()
    }

    /// Ray dropping straight down onto a world-space point.
    fn ray_down_onto(point: Vector3<f32>) -> Ray {
        Ray::new(
            Vector3::new(point.x, 50.0, point.z),
            Vector3::new(0.0, -1.0, 0.0),
        )
    }

    #[test]
    fn every_sub_surface_resolves_to_the_owning_seat() {
        let mut arena = SceneArena::default();
        let id = seat("0:ALPHA");
        let visual = arena.create_seat_visual(id.clone(), 2, 1, Status::Unmarked);

        let center = arena.layout().seat_center(2, 1);
        let boxes = arena.layout().chair_boxes();

        // Straight down through the pad.
        let hits = arena.intersect(&ray_down_onto(center));
        assert_eq!(hits[0].seat.as_ref(), Some(&id));

        // Through the backrest slab only (behind the pad center).
        let back_z = center.z + (boxes.backrest.min.z + boxes.backrest.max.z) / 2.0;
        let back_y = (boxes.backrest.min.y + boxes.backrest.max.y) / 2.0;
        let side_ray = Ray::new(
            Vector3::new(center.x - 50.0, back_y, back_z),
            Vector3::new(1.0, 0.0, 0.0),
        );
        let hits = arena.intersect(&side_ray);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].seat.as_ref(), Some(&id));
        assert_eq!(hits[0].node, visual.surfaces[2]);
    }

    #[test]
    fn miss_returns_no_hits() {
        let mut arena = SceneArena::default();
        arena.create_seat_visual(seat("0:ALPHA"), 0, 0, Status::Unmarked);

        let far_away = ray_down_onto(Vector3::new(500.0, 0.0, 500.0));
        assert!(arena.intersect(&far_away).is_empty());
    }

    #[test]
    fn nearest_seat_wins_along_the_ray() {
        let mut arena = SceneArena::default();
        let near = seat("0:NEAR");
        let far = seat("0:FAR");
        // Same column, rows 0 and 1: both chairs sit on the ray below.
        arena.create_seat_visual(near.clone(), 0, 0, Status::Unmarked);
        arena.create_seat_visual(far.clone(), 0, 1, Status::Unmarked);

        let boxes = arena.layout().chair_boxes();
        let pad_y = (boxes.pad.min.y + boxes.pad.max.y) / 2.0;
        let ray = Ray::new(
            Vector3::new(0.0, pad_y, -50.0),
            Vector3::new(0.0, 0.0, 1.0),
        );

        let hits = arena.intersect(&ray);
        assert!(hits.len() >= 2);
        assert_eq!(hits[0].seat.as_ref(), Some(&near));
        assert!(hits[0].distance < hits.last().unwrap().distance);
    }

    #[test]
    fn decoration_is_never_pickable() {
        let mut arena = SceneArena::default();
        // A desk slab hovering right where a ray will pass.
        arena.add_decoration(
            Aabb::new(Vector3::new(-10.0, 0.0, -10.0), Vector3::new(10.0, 2.0, 10.0)),
            [0.4, 0.3, 0.2, 1.0],
        );
        let hits = arena.intersect(&ray_down_onto(Vector3::new(0.0, 0.0, 0.0)));
        assert!(hits.is_empty());
    }

    #[test]
    fn status_color_applies_to_all_surfaces() {
        let mut arena = SceneArena::default();
        let visual = arena.create_seat_visual(seat("0:ALPHA"), 0, 0, Status::Unmarked);

        arena.set_status_color(&visual, Status::Present);
        let present = arena.palette().color_for(Status::Present);
        for node in &visual.surfaces {
            assert_eq!(arena.color_of(*node), present);
        }
    }

    #[test]
    fn highlight_overrides_the_primary_surface_color_only() {
        let mut arena = SceneArena::default();
        let visual = arena.create_seat_visual(seat("0:ALPHA"), 0, 0, Status::Present);
        let present = arena.palette().color_for(Status::Present);
        let highlight = arena.palette().highlight;

        arena.set_highlight(&visual, true);
        assert_eq!(arena.color_of(visual.primary), highlight);
        assert_eq!(arena.color_of(visual.surfaces[0]), present);

        arena.set_highlight(&visual, false);
        assert_eq!(arena.color_of(visual.primary), present);
    }

    #[test]
    fn placement_translates_the_chair_bounds() {
        let mut arena = SceneArena::default();
        let visual = arena.create_seat_visual(seat("1:BETA"), 3, 2, Status::Unmarked);
        let center = arena.layout().seat_center(3, 2);

        let bounds = arena.world_bounds(visual.root);
        let mid = (bounds.min + bounds.max) / 2.0;
        assert!((mid.x - center.x).abs() < 1e-4);
        assert!((Vector3::new(mid.x, 0.0, mid.z) - Vector3::new(center.x, 0.0, center.z))
            .magnitude()
            < 1e-3);
    }
}
