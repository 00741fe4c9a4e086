//! Easing Function Tests
//!
//! Tests for:
//! - Linear identity
//! - Endpoint anchoring (f(0) == 0, f(1) == 1) for every curve
//! - Monotonicity over [0, 1]
//! - Input clamping for out-of-range time samples

use orrery::Easing;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

const ALL: [Easing; 3] = [Easing::Linear, Easing::QuadInOut, Easing::CubicInOut];

// ============================================================================
// Linear
// ============================================================================

#[test]
fn linear_is_identity() {
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        assert!(approx(Easing::Linear.apply(t), t), "linear({t}) != {t}");
    }
}

// ============================================================================
// Endpoints
// ============================================================================

#[test]
fn all_curves_anchor_endpoints() {
    for easing in ALL {
        assert!(approx(easing.apply(0.0), 0.0), "{easing:?}(0) != 0");
        assert!(approx(easing.apply(1.0), 1.0), "{easing:?}(1) != 1");
    }
}

// ============================================================================
// Monotonicity
// ============================================================================

#[test]
fn all_curves_monotonic_non_decreasing() {
    for easing in ALL {
        let mut prev = easing.apply(0.0);
        for i in 1..=1000 {
            let t = i as f32 / 1000.0;
            let v = easing.apply(t);
            assert!(
                v >= prev - EPSILON,
                "{easing:?} decreased at t={t}: {v} < {prev}"
            );
            prev = v;
        }
    }
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn in_out_curves_pass_through_midpoint() {
    // Symmetric power curves cross (0.5, 0.5) exactly.
    assert!(approx(Easing::QuadInOut.apply(0.5), 0.5));
    assert!(approx(Easing::CubicInOut.apply(0.5), 0.5));
}

#[test]
fn in_out_curves_start_slower_than_linear() {
    let t = 0.1;
    assert!(Easing::QuadInOut.apply(t) < t);
    assert!(Easing::CubicInOut.apply(t) < Easing::QuadInOut.apply(t));
}

#[test]
fn out_of_range_input_is_clamped() {
    for easing in ALL {
        assert!(approx(easing.apply(-3.0), 0.0));
        assert!(approx(easing.apply(7.5), 1.0));
    }
}
