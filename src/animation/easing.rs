/// Named easing curve applied to normalized animation time.
///
/// Every curve is a pure function mapping `t ∈ [0, 1]` to an eased value
/// in `[0, 1]` with `f(0) == 0`, `f(1) == 1`, monotonic non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Identity: constant velocity.
    #[default]
    Linear,
    /// Quadratic acceleration in, deceleration out.
    QuadInOut,
    /// Cubic acceleration in, deceleration out (steeper than quadratic).
    CubicInOut,
}

impl Easing {
    /// Remaps a normalized time value through this curve.
    ///
    /// Input is clamped to `[0, 1]` first, so callers never observe
    /// overshoot from out-of-range time samples.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => power_in_out(t, 2),
            Self::CubicInOut => power_in_out(t, 3),
        }
    }
}

/// Symmetric power curve: `t^n` scaled into the first half, mirrored into
/// the second half.
fn power_in_out(t: f32, n: i32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(n)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powi(n)
    }
}
