//! Byte-magnitude spectrum analysis.
//!
//! Produces a fixed-length ordered sequence of byte magnitudes (0-255),
//! one per frequency bin, from time-domain samples. Smoothing and the
//! dB-to-byte conversion follow Web Audio AnalyserNode semantics:
//! exponential decay is applied to linear magnitudes between refreshes,
//! then magnitudes are scaled from [min_decibels, max_decibels] into
//! [0, 255] with clamping.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::f32::consts::PI;
use std::sync::Arc;

use crate::error::VizError;
use crate::params::AnalyzerConfig;

pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    scratch: Vec<Complex<f32>>,
    /// Linear magnitudes after exponential smoothing.
    smoothed: Vec<f32>,
    /// Byte spectrum handed to consumers.
    bytes: Vec<u8>,
}

impl SpectrumAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, VizError> {
        config.validate()?;

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(config.fft_size);
        let window = (0..config.fft_size)
            .map(|i| hann_window(i, config.fft_size))
            .collect();
        let bins = config.bin_count();

        Ok(Self {
            fft,
            window,
            scratch: vec![Complex::new(0.0, 0.0); config.fft_size],
            smoothed: vec![0.0; bins],
            bytes: vec![0; bins],
            config,
        })
    }

    /// Number of frequency bins exposed to consumers (fft_size / 2).
    pub fn bin_count(&self) -> usize {
        self.config.bin_count()
    }

    /// Feed one window of time-domain samples and refresh the byte
    /// spectrum. `samples` must hold at least `fft_size` values; extra
    /// samples are ignored.
    pub fn process(&mut self, samples: &[f32]) {
        let n = self.config.fft_size;
        debug_assert!(samples.len() >= n);

        for i in 0..n {
            self.scratch[i] = Complex::new(samples[i] * self.window[i], 0.0);
        }
        self.fft.process(&mut self.scratch);

        let k = self.config.smoothing;
        for i in 0..self.smoothed.len() {
            let magnitude = self.scratch[i].norm() / n as f32;
            self.smoothed[i] = k * self.smoothed[i] + (1.0 - k) * magnitude;
            self.bytes[i] = magnitude_to_byte(
                self.smoothed[i],
                self.config.min_decibels,
                self.config.max_decibels,
            );
        }
    }

    /// Current byte spectrum, ordered by frequency bin.
    pub fn frequency_data(&self) -> &[u8] {
        &self.bytes
    }
}

/// Hann window function for FFT analysis
fn hann_window(index: usize, size: usize) -> f32 {
    0.5 * (1.0 - ((2.0 * PI * index as f32) / (size as f32 - 1.0)).cos())
}

/// Scale a linear magnitude into a byte via dB, AnalyserNode-style.
fn magnitude_to_byte(magnitude: f32, min_db: f32, max_db: f32) -> u8 {
    if magnitude <= 0.0 {
        return 0;
    }
    let db = 20.0 * magnitude.log10();
    let scaled = 255.0 * (db - min_db) / (max_db - min_db);
    scaled.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_smoothing() -> AnalyzerConfig {
        AnalyzerConfig {
            smoothing: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_hann_window() {
        let size = 1024;

        // Hann window is 0 at the edges, 1 at the center.
        assert!((hann_window(0, size) - 0.0).abs() < 0.01);
        assert!((hann_window(size - 1, size) - 0.0).abs() < 0.01);
        assert!((hann_window(size / 2, size) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_magnitude_to_byte_range() {
        // Silence and huge peaks clamp to the byte range.
        assert_eq!(magnitude_to_byte(0.0, -100.0, -30.0), 0);
        assert_eq!(magnitude_to_byte(1e-9, -100.0, -30.0), 0);
        assert_eq!(magnitude_to_byte(10.0, -100.0, -30.0), 255);

        // -65 dB sits halfway between -100 and -30.
        let mid = magnitude_to_byte(10f32.powf(-65.0 / 20.0), -100.0, -30.0);
        assert!((mid as i32 - 127).abs() <= 1, "got {mid}");
    }

    #[test]
    fn test_silence_produces_zero_bytes() {
        let config = config_without_smoothing();
        let n = config.fft_size;
        let mut analyzer = SpectrumAnalyzer::new(config).unwrap();
        analyzer.process(&vec![0.0; n]);
        assert!(analyzer.frequency_data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_sine_peaks_at_its_bin() {
        let config = config_without_smoothing();
        let n = config.fft_size;
        let sr = config.sample_rate_hz as f32;
        let bin = 64usize;
        let freq = bin as f32 * sr / n as f32;

        let samples: Vec<f32> = (0..n)
            .map(|i| (2.0 * PI * freq * i as f32 / sr).sin())
            .collect();

        let mut analyzer = SpectrumAnalyzer::new(config).unwrap();
        analyzer.process(&samples);

        let data = analyzer.frequency_data();
        assert_eq!(data.len(), n / 2);
        assert!(data[bin] > 200, "bin magnitude {}", data[bin]);
        // Far-away bins stay quiet.
        assert!(data[bin] > data[bin + 200]);
    }

    #[test]
    fn test_smoothing_decays_instead_of_dropping() {
        let mut config = AnalyzerConfig::default();
        config.smoothing = 0.8;
        let n = config.fft_size;
        let sr = config.sample_rate_hz as f32;
        let freq = 64.0 * sr / n as f32;
        let tone: Vec<f32> = (0..n)
            .map(|i| (2.0 * PI * freq * i as f32 / sr).sin())
            .collect();
        let silence = vec![0.0; n];

        let mut analyzer = SpectrumAnalyzer::new(config).unwrap();
        analyzer.process(&tone);
        let loud = analyzer.frequency_data()[64];
        analyzer.process(&silence);
        let after = analyzer.frequency_data()[64];

        assert!(loud > 0);
        assert!(after > 0, "smoothed magnitude dropped straight to zero");
        assert!(after <= loud);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AnalyzerConfig::default();
        config.fft_size = 1000;
        assert!(SpectrumAnalyzer::new(config).is_err());
    }
}
