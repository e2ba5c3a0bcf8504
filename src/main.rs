//! Tilewave - audio-reactive 3D tile visualizer
//!
//! Plays a WAV file and drives a field of 3D objects from its live
//! frequency spectrum: grids of stretching tiles, rings of cones or
//! spheres, falling columns, and a spinning reflective centerpiece.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use tilewave::audio::AudioSystem;
use tilewave::camera::OrbitCamera;
use tilewave::cli::Args;
use tilewave::driver::AnimationDriver;
use tilewave::events::{Action, KeyBindings};
use tilewave::loader;
use tilewave::params::{AnalyzerConfig, GravityConfig, RenderConfig, SceneConfig, TweenConfig};
use tilewave::rendering::{self, CubemapFaces, RenderSystem, Uniforms};
use tilewave::scene::Scene;

/// Main application state
struct App {
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    /// Decoded cubemap, consumed when the render system comes up.
    cubemap: Option<CubemapFaces>,

    audio: AudioSystem,
    scene: Scene,
    driver: AnimationDriver,
    camera: OrbitCamera,
    bindings: KeyBindings,

    render_config: RenderConfig,
    spectrum: Vec<u8>,

    last_frame: Instant,
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Tilewave")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let cubemap = self
            .cubemap
            .take()
            .unwrap_or_else(|| CubemapFaces::solid(self.scene.background_color));
        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.scene,
            cubemap,
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("failed to initialize rendering: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.camera.set_aspect(size.width, size.height);

        println!("\nTilewave is running!");
        println!("Space: play/pause, drag: orbit, scroll: zoom, ESC: quit\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => match self.bindings.lookup(code) {
                Some(Action::TogglePlayback) => {
                    let playing = self.audio.toggle();
                    log::info!("playback {}", if playing { "started" } else { "paused" });
                }
                Some(Action::Quit) => event_loop.exit(),
                None => {}
            },
            WindowEvent::Resized(size) => {
                self.camera.set_aspect(size.width, size.height);
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = state == ElementState::Pressed;
                if !self.dragging {
                    self.last_cursor = None;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.dragging {
                    if let Some((last_x, last_y)) = self.last_cursor {
                        let dx = (position.x - last_x) as f32;
                        let dy = (position.y - last_y) as f32;
                        self.camera.orbit(dx, dy);
                    }
                }
                self.last_cursor = Some((position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * 2.0,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 * 0.05,
                };
                self.camera.zoom(amount);
            }
            WindowEvent::RedrawRequested => {
                self.frame();
            }
            _ => {}
        }
    }
}

impl App {
    /// Advance and render a single frame.
    fn frame(&mut self) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        let now = Instant::now();
        // Cap dt so a stalled frame does not teleport the animation.
        let dt_s = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;

        self.camera.update(dt_s);
        self.audio.fill_spectrum(&mut self.spectrum);
        self.driver
            .tick(&mut self.scene, &self.spectrum, self.audio.is_playing(), dt_s);

        let view_proj = self.camera.view_proj(&self.render_config);
        let eye = self.camera.eye();
        render_system.update_uniforms(&Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
            light_dir: [-0.3, -1.0, -0.2, 0.0],
        });
        render_system.update_instances(&self.scene);

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_system.size();
                render_system.resize(width, height);
            }
            Err(e) => log::error!("render error: {e}"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let clip = loader::load_audio(&args.audio, |percent| {
        log::debug!("loading audio: {percent}%");
    })
    .with_context(|| format!("failed to load {}", args.audio.display()))?;
    log::info!(
        "loaded {} ({:.1} s, {} Hz, {} channel(s))",
        args.audio.display(),
        clip.duration_s(),
        clip.sample_rate,
        clip.channels
    );

    let analyzer_config = AnalyzerConfig {
        sample_rate_hz: clip.sample_rate,
        fft_size: args.fft_size,
        smoothing: args.smoothing,
        ..Default::default()
    };
    analyzer_config.validate()?;

    let scene_config = SceneConfig::default();
    let render_config = RenderConfig::default();

    let cubemap = match &args.cubemap {
        Some(dir) => Some(
            rendering::load_cubemap_faces(dir)
                .with_context(|| format!("failed to load cubemap from {}", dir.display()))?,
        ),
        None => None,
    };

    let scene = Scene::build(args.parse_scene_variant(), &scene_config);
    let driver = AnimationDriver::new(&scene, &TweenConfig::default(), GravityConfig::default());
    let camera = OrbitCamera::new(&render_config);

    let audio = AudioSystem::new(clip, analyzer_config, args.volume)
        .context("failed to initialize audio")?;
    let spectrum = vec![0u8; audio.bin_count()];

    let mut app = App {
        window: None,
        render_system: None,
        cubemap,
        audio,
        scene,
        driver,
        camera,
        bindings: KeyBindings::new(),
        render_config,
        spectrum,
        last_frame: Instant::now(),
        dragging: false,
        last_cursor: None,
    };

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
