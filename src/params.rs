//! Parameter definitions with documented defaults.
//!
//! All tuning constants live here with documented ranges and meanings
//! instead of being scattered through the systems that use them.

use crate::error::VizError;

/// Spectrum analyzer configuration.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Audio sample rate (Hz). Overwritten with the decoded clip's rate.
    pub sample_rate_hz: u32,

    /// FFT window size (must be a power of 2).
    /// Default: 2048 (AnalyserNode default)
    pub fft_size: usize,

    /// Exponential smoothing constant between frames (0.0 - 1.0).
    /// 0 = no smoothing, 1 = frozen. Default: 0.3
    pub smoothing: f32,

    /// Spectrum refresh interval (milliseconds).
    pub update_interval_ms: u64,

    /// Magnitudes at or below this level map to byte 0.
    /// AnalyserNode default: -100 dB
    pub min_decibels: f32,

    /// Magnitudes at or above this level map to byte 255.
    /// AnalyserNode default: -30 dB
    pub max_decibels: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44100,
            fft_size: 2048,
            smoothing: 0.3,
            update_interval_ms: 16,
            min_decibels: -100.0,
            max_decibels: -30.0,
        }
    }
}

impl AnalyzerConfig {
    /// Number of frequency bins exposed to consumers.
    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Validate configuration (FFT size must be a power of 2, etc.)
    pub fn validate(&self) -> Result<(), VizError> {
        if !self.fft_size.is_power_of_two() || self.fft_size < 32 {
            return Err(VizError::Config(format!(
                "FFT size must be a power of 2 (>= 32), got {}",
                self.fft_size
            )));
        }
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(VizError::Config(format!(
                "smoothing must be in 0..=1, got {}",
                self.smoothing
            )));
        }
        if self.sample_rate_hz == 0 {
            return Err(VizError::Config("sample rate must be > 0".to_string()));
        }
        if self.max_decibels <= self.min_decibels {
            return Err(VizError::Config(format!(
                "max_decibels ({}) must exceed min_decibels ({})",
                self.max_decibels, self.min_decibels
            )));
        }
        Ok(())
    }
}

/// Tween timing for scale transitions.
#[derive(Debug, Clone)]
pub struct TweenConfig {
    /// Transition duration (seconds). Default: 0.3
    pub duration_s: f32,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self { duration_s: 0.3 }
    }
}

/// Gravity integrator parameters for the falling-tile variant.
#[derive(Debug, Clone)]
pub struct GravityConfig {
    /// Constant vertical acceleration (units per second squared).
    pub acceleration: f32,

    /// Floor the vertical value is clamped to. Default: -10
    pub floor_y: f32,

    /// Output range for the magnitude-to-velocity mapping.
    /// Default: (-50, 80)
    pub velocity_range: (f32, f32),
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            acceleration: -30.0,
            floor_y: -10.0,
            velocity_range: (-50.0, 80.0),
        }
    }
}

/// Scene construction parameters shared by the variant builders.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Tiles per grid column. Default: 10
    pub cols: usize,

    /// Tiles per grid row. Default: 10
    pub rows: usize,

    /// Spacing between neighboring tiles (world units). Default: 2
    pub gutter: f32,

    /// Number of objects in the ring variants.
    pub ring_count: usize,

    /// Ring radius (world units).
    pub ring_radius: f32,

    /// Object color. Default: 0xfff700
    pub object_color: [f32; 3],

    /// Scene background color. Default: 0x1878de
    pub background_color: [f32; 3],

    /// Reflector spin rate (radians per second).
    /// Default: 3.0 (0.05 rad per frame at 60 fps)
    pub reflector_spin_rad_per_s: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cols: 10,
            rows: 10,
            gutter: 2.0,
            ring_count: 36,
            ring_radius: 12.0,
            object_color: [1.0, 0.969, 0.0],
            background_color: [0.094, 0.471, 0.871],
            reflector_spin_rad_per_s: 3.0,
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Field of view (degrees). Default: 45
    pub fov_degrees: f32,

    /// Near clipping plane. Default: 1
    pub near_plane: f32,

    /// Far clipping plane. Default: 1000
    pub far_plane: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 45.0,
            near_plane: 1.0,
            far_plane: 1000.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}
