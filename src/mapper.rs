//! Linear range mapping, reused for every audio-to-visual parameter.

/// Map `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Intentionally unclamped: spectrum peaks overshoot the visual range
/// rather than clip. Callers that need a hard bound clamp themselves.
pub fn map(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_endpoints_exact() {
        assert_eq!(map(0.0, 0.0, 255.0, 0.001, 1.0), 0.001);
        assert_eq!(map(255.0, 0.0, 255.0, 0.001, 1.0), 1.0);
        assert_eq!(map(-3.0, -3.0, 7.0, 10.0, 20.0), 10.0);
        assert_eq!(map(7.0, -3.0, 7.0, 10.0, 20.0), 20.0);
    }

    #[test]
    fn test_map_midpoint_scenario() {
        // map(128, 0, 255, 0.001, 1) ≈ 0.502
        let v = map(128.0, 0.0, 255.0, 0.001, 1.0);
        assert!((v - 0.502).abs() < 1e-3, "got {v}");
    }

    #[test]
    fn test_map_is_affine_in_value() {
        // f(a*x + b*y) == a*f(x) + b*f(y) when a + b == 1
        let f = |v: f32| map(v, 0.0, 255.0, -50.0, 80.0);
        for (a, x, y) in [(0.25f32, 10.0f32, 200.0f32), (0.7, 0.0, 255.0), (0.5, 64.0, 192.0)] {
            let b = 1.0 - a;
            let lhs = f(a * x + b * y);
            let rhs = a * f(x) + b * f(y);
            assert!((lhs - rhs).abs() < 1e-3, "affine check failed: {lhs} vs {rhs}");
        }
    }

    #[test]
    fn test_map_does_not_clamp() {
        // Values outside the input range overshoot the output range.
        assert!(map(510.0, 0.0, 255.0, 0.0, 1.0) > 1.0);
        assert!(map(-255.0, 0.0, 255.0, 0.0, 1.0) < 0.0);
    }

    #[test]
    fn test_map_velocity_range() {
        // Gravity variant maps byte magnitudes into a signed velocity range.
        assert_eq!(map(255.0, 0.0, 255.0, -50.0, 80.0), 80.0);
        assert_eq!(map(0.0, 0.0, 255.0, -50.0, 80.0), -50.0);
    }
}
