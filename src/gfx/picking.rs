//! # Seat picking
//!
//! Converts pointer positions into seat identities via mouse ray-casting.
//!
//! 1. **Pointer to ray**: unproject the pointer through the camera into a
//!    world-space ray.
//! 2. **Ray-surface intersection**: test the ray against the pickable seat
//!    surfaces exposed by the render adapter.
//! 3. **Resolution**: the nearest struck surface resolves to the seat whose
//!    subtree it belongs to; a miss is a normal `None`, never an error.

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};

use crate::gfx::adapter::RenderAdapter;
use crate::gfx::camera::OrbitCamera;
use crate::roster::SeatId;

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Create a new Aabb
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create an Aabb enclosing a set of points
    pub fn from_points(points: &[Vector3<f32>]) -> Self {
        if points.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = points[0];
        let mut max = points[0];
        for p in points.iter().skip(1) {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Self::new(min, max)
    }

    /// Union of two boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::from_points(&[self.min, self.max, other.min, other.max])
    }

    /// Test ray-box intersection (slab method).
    /// Returns the distance to the intersection point, or None on a miss.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// Apply a transformation matrix to the box.
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        // Transform all 8 corners and re-fit the bounds.
        let corners = [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ];

        let transformed: Vec<Vector3<f32>> = corners
            .iter()
            .map(|corner| {
                let homogeneous = Vector4::new(corner.x, corner.y, corner.z, 1.0);
                let t = matrix * homogeneous;
                Vector3::new(t.x / t.w, t.y / t.w, t.z / t.w)
            })
            .collect();

        Self::from_points(&transformed)
    }
}

/// Convert a pointer position on the render surface to a world-space ray.
pub fn screen_to_ray(
    pointer: (f32, f32),
    surface: (f32, f32),
    camera: &OrbitCamera,
) -> Ray {
    let (pointer_x, pointer_y) = pointer;
    let (surface_width, surface_height) = surface;

    // Normalized device coordinates (-1 to 1), Y flipped.
    let ndc_x = (2.0 * pointer_x) / surface_width - 1.0;
    let ndc_y = 1.0 - (2.0 * pointer_y) / surface_height;

    let view_proj = camera.view_projection_matrix();
    let inv_view_proj = view_proj.invert().unwrap_or(Matrix4::from_scale(1.0));

    // Unproject the near and far plane points for this NDC position.
    let near_point = Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
    let far_point = Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

    let world_near = inv_view_proj * near_point;
    let world_far = inv_view_proj * far_point;

    let near_3d = Vector3::new(
        world_near.x / world_near.w,
        world_near.y / world_near.w,
        world_near.z / world_near.w,
    );
    let far_3d = Vector3::new(
        world_far.x / world_far.w,
        world_far.y / world_far.w,
        world_far.z / world_far.w,
    );

    Ray::new(near_3d, far_3d - near_3d)
}

/// Resolve a pointer position to the seat under it, if any.
///
/// The nearest intersected surface wins; whichever sub-surface was struck
/// (pad, backrest or base), the hit resolves to the owning seat's identity.
pub fn resolve_seat<A: RenderAdapter>(
    adapter: &A,
    pointer: (f32, f32),
    surface: (f32, f32),
    camera: &OrbitCamera,
) -> Option<SeatId> {
    let ray = screen_to_ray(pointer, surface, camera);
    adapter.intersect(&ray).into_iter().find_map(|hit| hit.seat)
}
