//! Per-frame animation driver: spectrum in, transform updates out.
//!
//! Two states: `Idle` before the first playback start, `Running` for
//! the rest of the page's life. The loop itself never stops; each tick
//! checks the playing flag and leaves every object transform untouched
//! while paused.

use crate::mapper::map;
use crate::params::{GravityConfig, TweenConfig};
use crate::scene::{Behavior, Scene};
use crate::tween::Tween;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

pub struct AnimationDriver {
    state: DriverState,
    gravity_config: GravityConfig,
    /// One scale tween per tracked object (unused for falling objects).
    tweens: Vec<Tween>,
}

impl AnimationDriver {
    pub fn new(scene: &Scene, tween_config: &TweenConfig, gravity_config: GravityConfig) -> Self {
        let tweens = scene
            .tiles
            .iter()
            .map(|tile| Tween::settled(tile.transform.scale.y, tween_config.duration_s))
            .collect();
        Self {
            state: DriverState::Idle,
            gravity_config,
            tweens,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Advance one frame.
    ///
    /// Object `i` is driven by spectrum bin `i`; objects beyond the
    /// buffer length receive no update. Paused ticks return without
    /// touching any transform.
    pub fn tick(&mut self, scene: &mut Scene, spectrum: &[u8], playing: bool, dt_s: f32) {
        if playing && self.state == DriverState::Idle {
            self.state = DriverState::Running;
        }
        if !playing {
            return;
        }

        let (vel_min, vel_max) = self.gravity_config.velocity_range;
        for (i, tile) in scene.tiles.iter_mut().enumerate() {
            let Some(&magnitude) = spectrum.get(i) else {
                break;
            };
            match &mut tile.behavior {
                Behavior::Static => {
                    let target = map(magnitude as f32, 0.0, 255.0, 0.001, 1.0);
                    self.tweens[i].retarget(target);
                }
                Behavior::Falling(state) => {
                    let velocity = map(magnitude as f32, 0.0, 255.0, vel_min, vel_max);
                    state.trigger(velocity);
                }
            }
        }

        for (tween, tile) in self.tweens.iter_mut().zip(scene.tiles.iter_mut()) {
            match &mut tile.behavior {
                Behavior::Static => {
                    tween.advance(dt_s);
                    tile.transform.scale.y = tween.value();
                }
                Behavior::Falling(state) => {
                    state.advance(dt_s, &self.gravity_config);
                    tile.transform.position.y = state.y;
                }
            }
        }

        if let Some(reflector) = &mut scene.reflector {
            reflector.transform.rotation.y += reflector.spin_rad_per_s * dt_s;
        }
    }
}
