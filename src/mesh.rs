//! Procedural mesh generation for the scene geometry.

use bytemuck::{Pod, Zeroable};

/// Vertex data (position + normal).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Geometry kinds used by the scene builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Thin tall cylinder, base at the local origin so that scaling the
    /// object stretches it up from the floor instead of through it.
    Tile,
    Cone,
    Sphere,
    Octahedron,
    Plane,
}

pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn build(kind: MeshKind) -> Mesh {
        match kind {
            MeshKind::Tile => Self::cylinder(0.4, 0.4, 10.0, 24),
            MeshKind::Cone => Self::cylinder(0.0, 1.0, 3.0, 24),
            MeshKind::Sphere => Self::sphere(1.0, 12, 18),
            MeshKind::Octahedron => Self::octahedron(3.0),
            MeshKind::Plane => Self::plane(250.0),
        }
    }

    /// Cylinder (or cone, with `radius_top` 0) spanning y in [0, height].
    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: usize) -> Mesh {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        // Outward slant normal from the 2D profile (bottom -> top).
        let slant = (height * height + (radius_bottom - radius_top).powi(2)).sqrt();
        let nx = height / slant;
        let ny = (radius_bottom - radius_top) / slant;

        // Side wall
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
            let (sin, cos) = theta.sin_cos();
            let normal = [nx * cos, ny, nx * sin];
            vertices.push(Vertex {
                position: [radius_bottom * cos, 0.0, radius_bottom * sin],
                normal,
            });
            vertices.push(Vertex {
                position: [radius_top * cos, height, radius_top * sin],
                normal,
            });
        }
        for i in 0..segments as u32 {
            let b0 = i * 2;
            let t0 = b0 + 1;
            let b1 = b0 + 2;
            let t1 = b0 + 3;
            indices.extend_from_slice(&[b0, t0, t1, b0, t1, b1]);
        }

        // Bottom cap
        let center = vertices.len() as u32;
        vertices.push(Vertex {
            position: [0.0, 0.0, 0.0],
            normal: [0.0, -1.0, 0.0],
        });
        let ring = vertices.len() as u32;
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
            let (sin, cos) = theta.sin_cos();
            vertices.push(Vertex {
                position: [radius_bottom * cos, 0.0, radius_bottom * sin],
                normal: [0.0, -1.0, 0.0],
            });
        }
        for i in 0..segments as u32 {
            indices.extend_from_slice(&[center, ring + i, ring + i + 1]);
        }

        // Top cap (skipped for cones)
        if radius_top > 0.0 {
            let center = vertices.len() as u32;
            vertices.push(Vertex {
                position: [0.0, height, 0.0],
                normal: [0.0, 1.0, 0.0],
            });
            let ring = vertices.len() as u32;
            for i in 0..=segments {
                let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
                let (sin, cos) = theta.sin_cos();
                vertices.push(Vertex {
                    position: [radius_top * cos, height, radius_top * sin],
                    normal: [0.0, 1.0, 0.0],
                });
            }
            for i in 0..segments as u32 {
                indices.extend_from_slice(&[center, ring + i + 1, ring + i]);
            }
        }

        Mesh { vertices, indices }
    }

    /// UV sphere centered at the local origin.
    pub fn sphere(radius: f32, lat_segments: usize, lon_segments: usize) -> Mesh {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for i in 0..=lat_segments {
            let phi = i as f32 / lat_segments as f32 * std::f32::consts::PI;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for j in 0..=lon_segments {
                let theta = j as f32 / lon_segments as f32 * std::f32::consts::TAU;
                let (sin_theta, cos_theta) = theta.sin_cos();
                let normal = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
                vertices.push(Vertex {
                    position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                    normal,
                });
            }
        }

        let stride = lon_segments as u32 + 1;
        for i in 0..lat_segments as u32 {
            for j in 0..lon_segments as u32 {
                let a = i * stride + j;
                let b = a + stride;
                indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
            }
        }

        Mesh { vertices, indices }
    }

    /// Flat-shaded octahedron centered at the local origin.
    pub fn octahedron(radius: f32) -> Mesh {
        let r = radius;
        let top = [0.0, r, 0.0];
        let bottom = [0.0, -r, 0.0];
        let px = [r, 0.0, 0.0];
        let nx = [-r, 0.0, 0.0];
        let pz = [0.0, 0.0, r];
        let nz = [0.0, 0.0, -r];

        let faces: [[[f32; 3]; 3]; 8] = [
            [top, pz, px],
            [top, px, nz],
            [top, nz, nx],
            [top, nx, pz],
            [bottom, px, pz],
            [bottom, nz, px],
            [bottom, nx, nz],
            [bottom, pz, nx],
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(24);
        for face in faces {
            let normal = face_normal(face[0], face[1], face[2]);
            for position in face {
                indices.push(vertices.len() as u32);
                vertices.push(Vertex { position, normal });
            }
        }

        Mesh { vertices, indices }
    }

    /// Square plane at y = 0, normal up.
    pub fn plane(size: f32) -> Mesh {
        let h = size / 2.0;
        let normal = [0.0, 1.0, 0.0];
        let vertices = vec![
            Vertex { position: [-h, 0.0, -h], normal },
            Vertex { position: [-h, 0.0, h], normal },
            Vertex { position: [h, 0.0, h], normal },
            Vertex { position: [h, 0.0, -h], normal },
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        Mesh { vertices, indices }
    }
}

fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let n = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    [n[0] / len, n[1] / len, n[2] / len]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unit_normals(mesh: &Mesh) {
        for v in &mesh.vertices {
            let len =
                (v.normal[0].powi(2) + v.normal[1].powi(2) + v.normal[2].powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-4, "non-unit normal {:?}", v.normal);
        }
    }

    #[test]
    fn test_cylinder_counts_and_extent() {
        let mesh = Mesh::cylinder(0.4, 0.4, 10.0, 24);
        assert_unit_normals(&mesh);
        assert!(mesh.indices.len() % 3 == 0);
        // Base at y = 0 so scaling stretches from the floor.
        let min_y = mesh.vertices.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        let max_y = mesh.vertices.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(min_y, 0.0);
        assert_eq!(max_y, 10.0);
    }

    #[test]
    fn test_cone_has_no_top_cap() {
        let cone = Mesh::cylinder(0.0, 1.0, 3.0, 24);
        let cyl = Mesh::cylinder(1.0, 1.0, 3.0, 24);
        assert!(cone.indices.len() < cyl.indices.len());
    }

    #[test]
    fn test_sphere_counts() {
        let mesh = Mesh::sphere(1.0, 12, 18);
        assert_eq!(mesh.vertices.len(), 13 * 19);
        assert_eq!(mesh.indices.len(), 12 * 18 * 6);
        assert_unit_normals(&mesh);
    }

    #[test]
    fn test_octahedron_is_flat_shaded() {
        let mesh = Mesh::octahedron(3.0);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 24);
        assert_unit_normals(&mesh);
    }

    #[test]
    fn test_plane_is_two_triangles() {
        let mesh = Mesh::plane(250.0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }
}
