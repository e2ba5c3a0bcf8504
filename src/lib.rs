//! Tilewave library - audio-reactive 3D tile visualizer

pub mod analyzer;
pub mod audio;
pub mod camera;
pub mod cli;
pub mod driver;
pub mod error;
pub mod events;
pub mod gravity;
pub mod loader;
pub mod mapper;
pub mod mesh;
pub mod params;
pub mod rendering;
pub mod scene;
pub mod tween;
