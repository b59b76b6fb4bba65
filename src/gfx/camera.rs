//! Orbit camera providing the projection context for picking.
//!
//! Camera *controls* (drag-to-orbit, zoom, pan) live outside the core with
//! the rest of the render loop; the core only needs a view-projection
//! matrix to unproject pointer positions into world-space rays.

use cgmath::{EuclideanSpace, Matrix4, Point3, Rad, Vector3, Zero};

/// Camera orbiting a target point at a fixed distance.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    eye: Vector3<f32>,
    target: Vector3<f32>,
    up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            distance,
            pitch,
            yaw,
            eye: Vector3::zero(), // Recomputed in `update()`.
            target,
            up: Vector3::unit_y(),
            aspect,
            fovy: Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1000.0,
        };
        camera.update();
        camera
    }

    pub fn eye(&self) -> Vector3<f32> {
        self.eye
    }

    pub fn target(&self) -> Vector3<f32> {
        self.target
    }

    pub fn set_target(&mut self, target: Vector3<f32>) {
        self.target = target;
        self.update();
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.max(f32::EPSILON);
        self.update();
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        // Keep strictly inside ±π/2 so the view matrix stays invertible.
        let limit = std::f32::consts::FRAC_PI_2 - 1e-4;
        self.pitch = pitch.clamp(-limit, limit);
        self.update();
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.update();
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// Combined view-projection matrix for this camera.
    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj = cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// Updates the eye position after changing `distance`, `pitch` or `yaw`.
    fn update(&mut self) {
        self.eye = calculate_cartesian_eye_position(
            self.pitch,
            self.yaw,
            self.distance,
            self.target,
        );
    }
}

fn calculate_cartesian_eye_position(
    pitch: f32,
    yaw: f32,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}
