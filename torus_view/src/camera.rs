// camera.rs - Orbit camera around the origin

use glam::{Mat4, Vec3};

pub const MIN_RADIUS: f32 = 5.0;
pub const MAX_RADIUS: f32 = 50.0;
pub const MAX_PITCH: f32 = 89.0;
/// Degrees of rotation per pixel dragged.
pub const DRAG_SPEED: f32 = 0.5;
/// Radius change per wheel notch.
pub const ZOOM_SPEED: f32 = 1.0;

/// Camera orbiting the origin at `radius`, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub radius: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub fov_y: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 18.0,
            pitch: 45.0,
            yaw: 45.0,
            fov_y: 45.0,
        }
    }
}

impl OrbitCamera {
    /// Rotate by a mouse drag in pixels. Pitch stops short of the poles.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * DRAG_SPEED;
        self.pitch = (self.pitch + dy * DRAG_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Zoom by wheel notches; positive moves closer.
    pub fn zoom(&mut self, notches: f32) {
        self.radius = (self.radius - notches * ZOOM_SPEED).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    pub fn position(&self) -> Vec3 {
        let (pitch, yaw) = (self.pitch.to_radians(), self.yaw.to_radians());
        Vec3::new(
            self.radius * pitch.cos() * yaw.sin(),
            self.radius * pitch.sin(),
            self.radius * pitch.cos() * yaw.cos(),
        )
    }

    /// View-projection for the current position and a viewport `aspect`
    /// (width over height).
    pub fn view(&self, aspect: f32) -> View {
        let eye = self.position();
        let look = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective_rh(self.fov_y.to_radians(), aspect, NEAR, FAR);
        View {
            eye,
            view_proj: projection * look,
        }
    }
}

pub const NEAR: f32 = 0.1;
/// Beyond the farthest zoom plus the torus extent.
pub const FAR: f32 = 100.0;

/// Camera frame used to project world points.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub eye: Vec3,
    view_proj: Mat4,
}

impl View {
    /// Project to normalized device coordinates (`y` up, `[-1, 1]` on both
    /// axes) plus view depth. `None` behind the near plane.
    pub fn project(&self, p: Vec3) -> Option<(f32, f32, f32)> {
        let clip = self.view_proj * p.extend(1.0);
        // Right-handed perspective puts the view distance in w
        if clip.w < NEAR {
            return None;
        }
        Some((clip.x / clip.w, clip.y / clip.w, clip.w))
    }
}
