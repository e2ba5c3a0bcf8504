//! Error types for the visualizer.
//!
//! Failures here are fatal to the visualization: there is no retry or
//! recovery path, the binary reports the error and exits.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("audio device unavailable: {0}")]
    Device(String),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("failed to load cubemap face {path}")]
    Cubemap {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("graphics init failed: {0}")]
    Graphics(String),
}
