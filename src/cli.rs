//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::scene::SceneVariant;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Tilewave")]
#[command(about = "Audio-reactive 3D tile visualizer", long_about = None)]
pub struct Args {
    /// Audio file to visualize (WAV)
    #[arg(value_name = "FILE")]
    pub audio: PathBuf,

    /// Scene variant: tiles (default), gravity, cones, spheres, reflector
    #[arg(long, value_name = "VARIANT", default_value = "tiles")]
    pub scene: String,

    /// Playback volume (0.0 - 1.0)
    #[arg(long, default_value = "1.0")]
    pub volume: f32,

    /// Directory with cubemap faces (posx/negx/posy/negy/posz/negz)
    #[arg(long, value_name = "DIR")]
    pub cubemap: Option<PathBuf>,

    /// Spectrum smoothing constant (0.0 - 1.0)
    #[arg(long, default_value = "0.3")]
    pub smoothing: f32,

    /// FFT window size (power of two)
    #[arg(long, default_value = "2048")]
    pub fft_size: usize,
}

impl Args {
    /// Resolve the scene-building strategy from the command line.
    pub fn parse_scene_variant(&self) -> SceneVariant {
        match self.scene.to_lowercase().as_str() {
            "tiles" => SceneVariant::TileGrid,
            "gravity" => SceneVariant::GravityGrid,
            "cones" => SceneVariant::ConeRing,
            "spheres" => SceneVariant::SphereRing,
            "reflector" => SceneVariant::Reflector,
            other => {
                log::warn!("unknown scene variant '{other}', using tiles");
                SceneVariant::TileGrid
            }
        }
    }
}
