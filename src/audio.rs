//! Audio playback and real-time spectrum analysis.
//!
//! A cpal output stream plays the decoded clip while feeding a shared
//! sample buffer; an analysis thread turns that buffer into the byte
//! spectrum the render loop polls once per frame. Transport events
//! (play/pause/ended) flip shared flags rather than being polled.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::analyzer::SpectrumAnalyzer;
use crate::error::VizError;
use crate::params::AnalyzerConfig;

/// Decoded audio clip (interleaved f32 samples).
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub channels: u16,
    pub sample_rate: u32,
}

impl AudioClip {
    /// Decode a WAV file from memory.
    pub fn from_wav_bytes(bytes: &[u8]) -> Result<Self, hound::Error> {
        let mut reader = hound::WavReader::new(Cursor::new(bytes))?;
        let spec = reader.spec();

        let samples = match spec.sample_format {
            hound::SampleFormat::Float => {
                reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?
            }
            hound::SampleFormat::Int => {
                let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / scale))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(Self {
            samples,
            channels: spec.channels,
            sample_rate: spec.sample_rate,
        })
    }

    /// Number of per-channel frames in the clip.
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    pub fn duration_s(&self) -> f32 {
        self.frame_count() as f32 / self.sample_rate as f32
    }
}

/// Shared transport state, mutated by the output callback and the UI.
#[derive(Debug)]
pub(crate) struct Transport {
    pub(crate) playing: bool,
    pub(crate) volume: f32,
    pub(crate) cursor: usize,
    pub(crate) ended: bool,
}

/// Fill one output buffer from the clip, advancing the transport.
///
/// Paused transports emit silence without advancing the cursor. When
/// the cursor runs off the end of the clip, `playing` drops and `ended`
/// is raised. A mono mix of every played frame is pushed into `ring`
/// for the analysis thread.
pub(crate) fn fill_output(
    clip: &AudioClip,
    transport: &mut Transport,
    ring: &mut Vec<f32>,
    data: &mut [f32],
    out_channels: usize,
) {
    if !transport.playing {
        data.fill(0.0);
        return;
    }

    let frames = clip.frame_count();
    let in_channels = clip.channels.max(1) as usize;

    for frame in data.chunks_mut(out_channels) {
        if transport.cursor >= frames {
            transport.playing = false;
            transport.ended = true;
            frame.fill(0.0);
            continue;
        }

        let base = transport.cursor * in_channels;
        let left = clip.samples[base] * transport.volume;
        let right = if in_channels > 1 {
            clip.samples[base + 1] * transport.volume
        } else {
            left
        };

        frame[0] = left;
        if out_channels > 1 {
            frame[1] = right;
        }
        for sample in frame.iter_mut().skip(2) {
            *sample = 0.0;
        }

        ring.push(0.5 * (left + right));
        transport.cursor += 1;
    }
}

/// Audio system managing playback and spectrum analysis.
pub struct AudioSystem {
    transport: Arc<Mutex<Transport>>,
    spectrum: Arc<Mutex<Vec<u8>>>,
    bin_count: usize,

    /// Audio output stream (kept alive)
    _stream: cpal::Stream,

    /// Analysis thread handle (free-runs for the process lifetime)
    _analysis_thread: Option<thread::JoinHandle<()>>,
}

impl AudioSystem {
    /// Create the audio system for a decoded clip. Playback starts
    /// paused; call [`AudioSystem::play`] to begin.
    pub fn new(clip: AudioClip, config: AnalyzerConfig, volume: f32) -> Result<Self, VizError> {
        let analyzer = SpectrumAnalyzer::new(config.clone())?;
        let bin_count = analyzer.bin_count();

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| VizError::Device("no audio output device found".to_string()))?;
        let out_config = device
            .default_output_config()
            .map_err(|e| VizError::Device(format!("failed to get audio config: {e}")))?;

        let out_channels = out_config.channels() as usize;
        let out_rate = out_config.sample_rate().0;
        log::info!(
            "audio output: {} @ {} Hz, {} channels",
            device.name().unwrap_or_else(|_| "unknown".to_string()),
            out_rate,
            out_channels
        );
        if out_rate != clip.sample_rate {
            // No resampling; the clip plays at the device rate.
            log::warn!(
                "clip rate {} Hz differs from device rate {} Hz, playback will be pitch-shifted",
                clip.sample_rate,
                out_rate
            );
        }

        let transport = Arc::new(Mutex::new(Transport {
            playing: false,
            volume: volume.clamp(0.0, 1.0),
            cursor: 0,
            ended: false,
        }));
        let ring = Arc::new(Mutex::new(Vec::<f32>::new()));
        let spectrum = Arc::new(Mutex::new(vec![0u8; bin_count]));

        let clip = Arc::new(clip);
        let transport_cb = Arc::clone(&transport);
        let ring_cb = Arc::clone(&ring);

        let stream = device
            .build_output_stream(
                &out_config.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let mut transport = transport_cb.lock().unwrap();
                    let mut ring = ring_cb.lock().unwrap();
                    fill_output(&clip, &mut transport, &mut ring, data, out_channels);
                },
                |err| log::error!("audio stream error: {err}"),
                None,
            )
            .map_err(|e| VizError::Device(format!("failed to build audio stream: {e}")))?;

        stream
            .play()
            .map_err(|e| VizError::Device(format!("failed to start audio stream: {e}")))?;

        let analysis_thread =
            spawn_analysis_thread(config, analyzer, Arc::clone(&ring), Arc::clone(&spectrum));

        Ok(Self {
            transport,
            spectrum,
            bin_count,
            _stream: stream,
            _analysis_thread: Some(analysis_thread),
        })
    }

    /// Start or resume playback. A clip that finished rewinds first.
    pub fn play(&self) {
        let mut transport = self.transport.lock().unwrap();
        if transport.ended {
            transport.cursor = 0;
            transport.ended = false;
        }
        transport.playing = true;
    }

    pub fn pause(&self) {
        self.transport.lock().unwrap().playing = false;
    }

    /// Toggle play/pause, returning the new playing state.
    pub fn toggle(&self) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play();
            true
        }
    }

    pub fn is_playing(&self) -> bool {
        self.transport.lock().unwrap().playing
    }

    pub fn set_volume(&self, volume: f32) {
        self.transport.lock().unwrap().volume = volume.clamp(0.0, 1.0);
    }

    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Copy the current byte spectrum into `out` (up to `out.len()`).
    pub fn fill_spectrum(&self, out: &mut [u8]) {
        let spectrum = self.spectrum.lock().unwrap();
        let n = out.len().min(spectrum.len());
        out[..n].copy_from_slice(&spectrum[..n]);
    }
}

/// Spawn the spectrum analysis thread.
fn spawn_analysis_thread(
    config: AnalyzerConfig,
    mut analyzer: SpectrumAnalyzer,
    ring: Arc<Mutex<Vec<f32>>>,
    spectrum: Arc<Mutex<Vec<u8>>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        thread::sleep(Duration::from_millis(config.update_interval_ms));

        let mut buf = ring.lock().unwrap();
        if buf.len() >= config.fft_size {
            analyzer.process(&buf[..config.fft_size]);
            spectrum
                .lock()
                .unwrap()
                .copy_from_slice(analyzer.frequency_data());

            // 50% overlap between windows
            buf.drain(0..config.fft_size / 2);
        }

        // Keep latency bounded if analysis falls behind playback.
        let cap = config.fft_size * 8;
        if buf.len() > cap {
            let excess = buf.len() - cap;
            buf.drain(0..excess);
        }
    })
}
