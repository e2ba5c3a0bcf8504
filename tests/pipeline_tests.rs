//! End-to-end pipeline tests: synthesized audio through the spectrum
//! analyzer and into scene transforms. No audio device or GPU needed.

use tilewave::analyzer::SpectrumAnalyzer;
use tilewave::driver::{AnimationDriver, DriverState};
use tilewave::params::{AnalyzerConfig, GravityConfig, SceneConfig, TweenConfig};
use tilewave::scene::{Behavior, Scene, SceneVariant};

const DT: f32 = 1.0 / 60.0;

fn sine(freq_hz: f32, sample_rate: u32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| (std::f32::consts::TAU * freq_hz * i as f32 / sample_rate as f32).sin())
        .collect()
}

fn tone_spectrum(config: &AnalyzerConfig, bin: usize) -> Vec<u8> {
    let mut analyzer = SpectrumAnalyzer::new(config.clone()).unwrap();
    let freq = bin as f32 * config.sample_rate_hz as f32 / config.fft_size as f32;
    let samples = sine(freq, config.sample_rate_hz, config.fft_size);
    // Several windows so the exponential smoothing converges.
    for _ in 0..8 {
        analyzer.process(&samples);
    }
    analyzer.frequency_data().to_vec()
}

#[test]
fn test_tone_raises_matching_tile_from_silence() {
    let config = AnalyzerConfig::default();
    let spectrum = tone_spectrum(&config, 64);
    assert!(spectrum[64] > 100, "tone bin byte {}", spectrum[64]);

    let mut scene = Scene::build(SceneVariant::TileGrid, &SceneConfig::default());
    let mut driver =
        AnimationDriver::new(&scene, &TweenConfig::default(), GravityConfig::default());

    for _ in 0..60 {
        driver.tick(&mut scene, &spectrum, true, DT);
    }

    assert!(
        scene.tiles[64].transform.scale.y > 0.2,
        "tile at the tone bin should have stretched, got {}",
        scene.tiles[64].transform.scale.y
    );
    // A bin far from the tone stays near flat.
    assert!(scene.tiles[300].transform.scale.y < 0.1);
}

#[test]
fn test_silence_keeps_grid_flat() {
    let config = AnalyzerConfig::default();
    let mut analyzer = SpectrumAnalyzer::new(config.clone()).unwrap();
    analyzer.process(&vec![0.0; config.fft_size]);
    let spectrum = analyzer.frequency_data().to_vec();
    assert!(spectrum.iter().all(|&b| b == 0));

    let mut scene = Scene::build(SceneVariant::TileGrid, &SceneConfig::default());
    let mut driver =
        AnimationDriver::new(&scene, &TweenConfig::default(), GravityConfig::default());
    for _ in 0..30 {
        driver.tick(&mut scene, &spectrum, true, DT);
    }
    for tile in &scene.tiles {
        assert!((tile.transform.scale.y - 0.001).abs() < 1e-3);
    }
}

#[test]
fn test_spectrum_decays_after_tone_stops() {
    let config = AnalyzerConfig::default();
    let mut analyzer = SpectrumAnalyzer::new(config.clone()).unwrap();
    let freq = 64.0 * config.sample_rate_hz as f32 / config.fft_size as f32;
    // Quiet tone so the byte value sits below the 255 clamp.
    let tone: Vec<f32> = sine(freq, config.sample_rate_hz, config.fft_size)
        .iter()
        .map(|s| s * 0.01)
        .collect();
    for _ in 0..8 {
        analyzer.process(&tone);
    }
    let during = analyzer.frequency_data()[64];

    let silence = vec![0.0; config.fft_size];
    analyzer.process(&silence);
    let after_one = analyzer.frequency_data()[64];
    for _ in 0..20 {
        analyzer.process(&silence);
    }
    let after_many = analyzer.frequency_data()[64];

    assert!(after_one < during);
    assert!(after_many < after_one || after_many == 0);
}

#[test]
fn test_gravity_grid_falls_lands_and_relaunches() {
    let gravity = GravityConfig::default();
    let mut scene = Scene::build(SceneVariant::GravityGrid, &SceneConfig::default());
    let mut driver = AnimationDriver::new(&scene, &TweenConfig::default(), gravity.clone());

    // A loud frame sends every column downward.
    let loud = vec![255u8; 1024];
    driver.tick(&mut scene, &loud, true, DT);
    assert!(scene.tiles.iter().all(|t| t.transform.position.y < 0.0));

    // Integrate with no further spectrum updates until everything lands.
    for _ in 0..600 {
        driver.tick(&mut scene, &[], true, DT);
    }
    for tile in &scene.tiles {
        assert_eq!(tile.transform.position.y, gravity.floor_y);
        match tile.behavior {
            Behavior::Falling(state) => assert!(!state.falling),
            Behavior::Static => panic!("expected falling behavior"),
        }
    }

    // Landed columns accept a fresh trigger; a quiet frame maps to the
    // negative end of the velocity range, which launches them upward.
    let quiet = vec![0u8; 1024];
    driver.tick(&mut scene, &quiet, true, DT);
    for tile in &scene.tiles {
        assert!(tile.transform.position.y > gravity.floor_y);
        assert!(matches!(tile.behavior, Behavior::Falling(state) if state.falling));
    }
}

#[test]
fn test_pause_freezes_and_resume_continues() {
    let config = AnalyzerConfig::default();
    let spectrum = tone_spectrum(&config, 10);

    let mut scene = Scene::build(SceneVariant::TileGrid, &SceneConfig::default());
    let mut driver =
        AnimationDriver::new(&scene, &TweenConfig::default(), GravityConfig::default());

    driver.tick(&mut scene, &spectrum, true, DT);
    assert_eq!(driver.state(), DriverState::Running);
    let mid_flight = scene.tiles[10].transform.scale.y;

    for _ in 0..20 {
        driver.tick(&mut scene, &spectrum, false, DT);
    }
    assert_eq!(scene.tiles[10].transform.scale.y, mid_flight);
    assert_eq!(driver.state(), DriverState::Running);

    for _ in 0..60 {
        driver.tick(&mut scene, &spectrum, true, DT);
    }
    assert!(scene.tiles[10].transform.scale.y > mid_flight);
}

#[test]
fn test_reflector_scene_animates_tiles_and_centerpiece() {
    let config = AnalyzerConfig::default();
    let spectrum = tone_spectrum(&config, 5);

    let mut scene = Scene::build(SceneVariant::Reflector, &SceneConfig::default());
    let mut driver =
        AnimationDriver::new(&scene, &TweenConfig::default(), GravityConfig::default());

    for _ in 0..60 {
        driver.tick(&mut scene, &spectrum, true, DT);
    }

    assert!(scene.tiles[5].transform.scale.y > 0.2);
    let spin = scene.reflector.as_ref().unwrap().transform.rotation.y;
    assert!((spin - 3.0).abs() < 0.1, "spin after 1 s was {spin}");
}
