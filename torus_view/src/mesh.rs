// mesh.rs - Torus geometry and its projection into an egui mesh
//
// egui has no depth buffer, so triangles facing away from the camera are
// dropped and the rest are painted far to near.

use std::f32::consts::TAU;

use egui::epaint::{Mesh, Vertex};
use egui::{Color32, Pos2, Rect, TextureId, pos2};
use glam::Vec3;

use crate::camera::View;

pub const MAJOR_RADIUS: f32 = 3.0;
pub const MINOR_RADIUS: f32 = 1.2;
pub const RINGS: usize = 72;
pub const SIDES: usize = 72;

/// Fixed light direction, world space.
const LIGHT: Vec3 = Vec3::new(0.4, 0.8, 0.45);
const AMBIENT: f32 = 0.35;

/// Torus around the Y axis. `u` runs around the ring and `v` around the tube,
/// each covering the texture exactly once.
pub struct Torus {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<(f32, f32)>,
    triangles: Vec<[usize; 3]>,
}

struct Projected {
    depth: f32,
    corners: [(Pos2, usize); 3],
    shade: u8,
}

impl Torus {
    pub fn new(major: f32, minor: f32, rings: usize, sides: usize) -> Self {
        let stride = sides + 1;
        let mut positions = Vec::with_capacity((rings + 1) * stride);
        let mut normals = Vec::with_capacity(positions.capacity());
        let mut uvs = Vec::with_capacity(positions.capacity());

        // One extra ring and side so the seam gets its own u = 1 / v = 1 vertices
        for i in 0..=rings {
            let u = i as f32 / rings as f32;
            let (sin_t, cos_t) = (u * TAU).sin_cos();
            for j in 0..=sides {
                let v = j as f32 / sides as f32;
                let (sin_p, cos_p) = (v * TAU).sin_cos();

                let normal = Vec3::new(cos_p * cos_t, sin_p, cos_p * sin_t);
                let center = Vec3::new(major * cos_t, 0.0, major * sin_t);
                positions.push(center + normal * minor);
                normals.push(normal);
                uvs.push((u, v));
            }
        }

        let mut triangles = Vec::with_capacity(rings * sides * 2);
        for i in 0..rings {
            for j in 0..sides {
                let a = i * stride + j;
                let b = a + stride;
                triangles.push([a, b, b + 1]);
                triangles.push([a, b + 1, a + 1]);
            }
        }

        Self {
            positions,
            normals,
            uvs,
            triangles,
        }
    }

    /// Front-facing triangles in screen space, far to near.
    fn visible(&self, view: &View, rect: Rect) -> Vec<Projected> {
        let center = rect.center();
        let light = LIGHT.normalize();

        let to_screen = |x: f32, y: f32| {
            pos2(
                center.x + x * rect.width() * 0.5,
                center.y - y * rect.height() * 0.5,
            )
        };

        let mut visible: Vec<Projected> = Vec::with_capacity(self.triangles.len() / 2);
        'triangles: for tri in &self.triangles {
            let normal = (self.normals[tri[0]] + self.normals[tri[1]] + self.normals[tri[2]]).normalize_or_zero();
            let centroid = (self.positions[tri[0]] + self.positions[tri[1]] + self.positions[tri[2]]) / 3.0;
            if normal.dot(view.eye - centroid) <= 0.0 {
                continue;
            }

            let mut corners = [(Pos2::ZERO, 0); 3];
            let mut depth = 0.0;
            for (corner, &idx) in corners.iter_mut().zip(tri) {
                let Some((x, y, z)) = view.project(self.positions[idx]) else {
                    continue 'triangles;
                };
                *corner = (to_screen(x, y), idx);
                depth += z;
            }

            let lambert = normal.dot(light).max(0.0);
            let shade = ((AMBIENT + (1.0 - AMBIENT) * lambert) * 255.0) as u8;
            visible.push(Projected { depth, corners, shade });
        }

        visible.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        visible
    }

    /// Textured mesh of the visible triangles, sorted back to front, fitted
    /// into `rect`.
    pub fn project(&self, view: &View, rect: Rect, texture: TextureId) -> Mesh {
        let visible = self.visible(view, rect);

        let mut mesh = Mesh::with_texture(texture);
        mesh.vertices.reserve(visible.len() * 3);
        mesh.indices.reserve(visible.len() * 3);
        for tri in &visible {
            let color = Color32::from_gray(tri.shade);
            for &(pos, idx) in &tri.corners {
                let (u, v) = self.uvs[idx];
                mesh.indices.push(mesh.vertices.len() as u32);
                mesh.vertices.push(Vertex {
                    pos,
                    uv: pos2(u, v),
                    color,
                });
            }
        }
        mesh
    }
}

impl Default for Torus {
    fn default() -> Self {
        Self::new(MAJOR_RADIUS, MINOR_RADIUS, RINGS, SIDES)
    }
}
