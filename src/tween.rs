//! Scalar tweening with ease-out easing.
//!
//! Issuing a new tween on an active property re-bases from the current
//! interpolated value instead of queueing behind the running transition.

/// Time-bounded interpolation of a scalar toward a target value.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    start: f32,
    target: f32,
    duration_s: f32,
    elapsed_s: f32,
}

impl Tween {
    /// Create a settled tween holding `value`.
    pub fn settled(value: f32, duration_s: f32) -> Self {
        Self {
            start: value,
            target: value,
            duration_s,
            elapsed_s: duration_s,
        }
    }

    /// Point the tween at a new target, re-basing from the current value.
    pub fn retarget(&mut self, target: f32) {
        self.start = self.value();
        self.target = target;
        self.elapsed_s = 0.0;
    }

    /// Advance the tween clock.
    pub fn advance(&mut self, dt_s: f32) {
        self.elapsed_s = (self.elapsed_s + dt_s).min(self.duration_s);
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.duration_s <= 0.0 {
            return self.target;
        }
        let t = (self.elapsed_s / self.duration_s).clamp(0.0, 1.0);
        self.start + (self.target - self.start) * ease_out_quad(t)
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn settled_at_target(&self) -> bool {
        self.elapsed_s >= self.duration_s
    }
}

/// Quadratic ease-out: fast start, gentle settle.
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        // Ease-out front-loads progress.
        assert!(ease_out_quad(0.5) > 0.5);
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::settled(0.0, 0.3);
        tween.retarget(1.0);
        tween.advance(0.3);
        assert!((tween.value() - 1.0).abs() < 1e-6);
        assert!(tween.settled_at_target());
    }

    #[test]
    fn test_tween_retarget_rebases_from_current_value() {
        let mut tween = Tween::settled(0.0, 0.3);
        tween.retarget(1.0);
        tween.advance(0.15);
        let midway = tween.value();
        assert!(midway > 0.0 && midway < 1.0);

        // Retargeting mid-flight starts from the interpolated value,
        // it does not queue or snap back to the earlier start.
        tween.retarget(0.0);
        assert!((tween.value() - midway).abs() < 1e-6);
        tween.advance(0.3);
        assert!(tween.value().abs() < 1e-6);
    }

    #[test]
    fn test_tween_monotonic_toward_target() {
        let mut tween = Tween::settled(0.2, 0.3);
        tween.retarget(0.9);
        let mut prev = tween.value();
        for _ in 0..30 {
            tween.advance(0.01);
            let v = tween.value();
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_settled_tween_holds_value() {
        let mut tween = Tween::settled(0.42, 0.3);
        tween.advance(1.0);
        assert_eq!(tween.value(), 0.42);
    }
}
