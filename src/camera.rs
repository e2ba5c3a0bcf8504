//! Orbit camera.
//!
//! A minimal stand-in for a full orbit-controls library: pointer drags
//! add angular velocity, the render loop advances and damps it each
//! tick, and resize events recompute the projection aspect.

use glam::{Mat4, Vec3};

use crate::params::RenderConfig;

const DRAG_SENSITIVITY: f32 = 0.25; // radians per second per pixel of drag
const DAMPING_PER_S: f32 = 6.0;
const PITCH_LIMIT_RAD: f32 = 1.5;

pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw_rad: f32,
    pub pitch_rad: f32,
    aspect: f32,
    yaw_vel: f32,
    pitch_vel: f32,
}

impl OrbitCamera {
    /// Camera orbiting the origin, starting at eye (20, 20, -20).
    pub fn new(config: &RenderConfig) -> Self {
        let eye = Vec3::new(20.0, 20.0, -20.0);
        let radius = eye.length();
        Self {
            target: Vec3::ZERO,
            radius,
            yaw_rad: eye.x.atan2(eye.z),
            pitch_rad: (eye.y / radius).asin(),
            aspect: config.aspect_ratio(),
            yaw_vel: 0.0,
            pitch_vel: 0.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let cos_pitch = self.pitch_rad.cos();
        self.target
            + self.radius
                * Vec3::new(
                    cos_pitch * self.yaw_rad.sin(),
                    self.pitch_rad.sin(),
                    cos_pitch * self.yaw_rad.cos(),
                )
    }

    /// Pointer drag input (pixels since the last event).
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw_vel = -dx * DRAG_SENSITIVITY;
        self.pitch_vel = dy * DRAG_SENSITIVITY;
    }

    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius - delta).clamp(5.0, 200.0);
    }

    /// Advance the orbit with damped inertia. Called once per tick.
    pub fn update(&mut self, dt_s: f32) {
        self.yaw_rad += self.yaw_vel * dt_s;
        self.pitch_rad =
            (self.pitch_rad + self.pitch_vel * dt_s).clamp(-PITCH_LIMIT_RAD, PITCH_LIMIT_RAD);
        let damp = (-dt_s * DAMPING_PER_S).exp();
        self.yaw_vel *= damp;
        self.pitch_vel *= damp;
    }

    /// Resize recomputes the projection aspect.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view_proj(&self, config: &RenderConfig) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            config.fov_degrees.to_radians(),
            self.aspect,
            config.near_plane,
            config.far_plane,
        );
        proj * view
    }
}
