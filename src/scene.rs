//! Scene graph: tracked visual objects and the per-variant builders.
//!
//! The five variants share almost all of their structure, so they are
//! a single configurable scene parameterized by a building strategy.
//! The set of tracked objects is fixed at construction time, and bin
//! `i` of the spectrum drives object `i`.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::gravity::GravityState;
use crate::mesh::MeshKind;
use crate::params::SceneConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// Per-object behavior, carried alongside the transform rather than
/// bolted onto the graphics node.
#[derive(Clone, Copy, Debug)]
pub enum Behavior {
    /// Spectrum drives the y scale through a tween.
    Static,
    /// Spectrum triggers a gravity fall; the integrator drives y position.
    Falling(GravityState),
}

pub struct Tile {
    pub transform: Transform,
    pub behavior: Behavior,
    pub mesh: MeshKind,
    pub color: [f32; 3],
}

/// Rotating centerpiece for the reflector variant.
pub struct Reflector {
    pub transform: Transform,
    pub spin_rad_per_s: f32,
}

/// Scene building strategy, one per visual variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneVariant {
    TileGrid,
    GravityGrid,
    ConeRing,
    SphereRing,
    Reflector,
}

pub struct Scene {
    pub variant: SceneVariant,
    pub tiles: Vec<Tile>,
    pub reflector: Option<Reflector>,
    pub background_color: [f32; 3],
}

impl Scene {
    pub fn build(variant: SceneVariant, config: &SceneConfig) -> Scene {
        let tiles = match variant {
            SceneVariant::TileGrid | SceneVariant::Reflector => {
                grid_tiles(config, || Behavior::Static)
            }
            SceneVariant::GravityGrid => {
                grid_tiles(config, || Behavior::Falling(GravityState::new()))
            }
            SceneVariant::ConeRing => ring_tiles(config, MeshKind::Cone),
            SceneVariant::SphereRing => ring_tiles(config, MeshKind::Sphere),
        };

        let reflector = (variant == SceneVariant::Reflector).then(|| Reflector {
            transform: Transform::at(Vec3::new(0.0, 8.0, 0.0)),
            spin_rad_per_s: config.reflector_spin_rad_per_s,
        });

        Scene {
            variant,
            tiles,
            reflector,
            background_color: config.background_color,
        }
    }

    /// Number of tracked objects, fixed after construction.
    pub fn object_count(&self) -> usize {
        self.tiles.len()
    }
}

/// Four grid groups of `cols` x `rows` tiles: spacing `gutter` inside
/// each group, groups offset so they surround the origin.
fn grid_tiles(config: &SceneConfig, mut behavior: impl FnMut() -> Behavior) -> Vec<Tile> {
    let group_offsets = [
        Vec3::new(-9.0, 0.0, 9.0),
        Vec3::new(-27.0, 0.0, -9.0),
        Vec3::new(9.0, 0.0, -9.0),
        Vec3::new(-9.0, 0.0, -27.0),
    ];

    let mut tiles = Vec::with_capacity(group_offsets.len() * config.cols * config.rows);
    for offset in group_offsets {
        for col in 0..config.cols {
            for row in 0..config.rows {
                let position = offset
                    + Vec3::new(col as f32 * config.gutter, 0.0, row as f32 * config.gutter);
                let mut transform = Transform::at(position);
                // Tiles start flattened and stretch up with the music.
                transform.scale = Vec3::new(1.0, 0.001, 1.0);
                tiles.push(Tile {
                    transform,
                    behavior: behavior(),
                    mesh: MeshKind::Tile,
                    color: config.object_color,
                });
            }
        }
    }
    tiles
}

/// A ring of objects around the origin, facing outward.
fn ring_tiles(config: &SceneConfig, mesh: MeshKind) -> Vec<Tile> {
    (0..config.ring_count)
        .map(|i| {
            let theta = i as f32 / config.ring_count as f32 * std::f32::consts::TAU;
            let position = Vec3::new(
                config.ring_radius * theta.cos(),
                0.0,
                config.ring_radius * theta.sin(),
            );
            let mut transform = Transform::at(position);
            transform.scale = Vec3::new(1.0, 0.001, 1.0);
            transform.rotation.y = -theta;
            Tile {
                transform,
                behavior: Behavior::Static,
                mesh,
                color: config.object_color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_grid_object_count() {
        let scene = Scene::build(SceneVariant::TileGrid, &SceneConfig::default());
        // Four groups of 10x10.
        assert_eq!(scene.object_count(), 400);
        assert!(scene.reflector.is_none());
        assert!(scene
            .tiles
            .iter()
            .all(|t| matches!(t.behavior, Behavior::Static)));
    }

    #[test]
    fn test_tiles_start_flattened() {
        let scene = Scene::build(SceneVariant::TileGrid, &SceneConfig::default());
        for tile in &scene.tiles {
            assert_eq!(tile.transform.scale, Vec3::new(1.0, 0.001, 1.0));
        }
    }

    #[test]
    fn test_gravity_grid_carries_falling_behavior() {
        let scene = Scene::build(SceneVariant::GravityGrid, &SceneConfig::default());
        assert_eq!(scene.object_count(), 400);
        for tile in &scene.tiles {
            match tile.behavior {
                Behavior::Falling(state) => assert!(!state.falling),
                Behavior::Static => panic!("gravity grid tile without gravity state"),
            }
        }
    }

    #[test]
    fn test_ring_variants() {
        let config = SceneConfig::default();
        let cones = Scene::build(SceneVariant::ConeRing, &config);
        assert_eq!(cones.object_count(), config.ring_count);
        assert!(cones.tiles.iter().all(|t| t.mesh == MeshKind::Cone));

        let spheres = Scene::build(SceneVariant::SphereRing, &config);
        assert!(spheres.tiles.iter().all(|t| t.mesh == MeshKind::Sphere));

        // All ring objects sit on the circle.
        for tile in &cones.tiles {
            let r = (tile.transform.position.x.powi(2) + tile.transform.position.z.powi(2)).sqrt();
            assert!((r - config.ring_radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_reflector_variant_has_centerpiece() {
        let scene = Scene::build(SceneVariant::Reflector, &SceneConfig::default());
        let reflector = scene.reflector.as_ref().expect("reflector missing");
        assert_eq!(reflector.transform.position, Vec3::new(0.0, 8.0, 0.0));
        assert_eq!(scene.object_count(), 400);
    }

    #[test]
    fn test_transform_matrix_applies_scale() {
        let mut transform = Transform::at(Vec3::new(1.0, 2.0, 3.0));
        transform.scale = Vec3::new(1.0, 0.5, 1.0);
        let m = transform.matrix();
        let p = m.transform_point3(Vec3::new(0.0, 10.0, 0.0));
        assert!((p - Vec3::new(1.0, 7.0, 3.0)).length() < 1e-5);
    }
}
