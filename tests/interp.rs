use tracesync::{InterpMethod, SyncError};

fn trapz(xs: &[f64], ys: &[f64]) -> f64 {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| 0.5 * (y[0] + y[1]) * (x[1] - x[0]))
        .sum()
}

#[test]
fn linear_midpoint_and_boundary_clamp() {
    let out = InterpMethod::Linear
        .resample(&[0.5, 2.0], &[0.0, 1.0], &[0.0, 10.0])
        .unwrap();
    assert_eq!(out[0], 5.0, "midpoint of a two-point segment");
    assert_eq!(out[1], 10.0, "outside the span must clamp, not extrapolate");
}

#[test]
fn slinear_is_linear() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 10.0, 0.0];
    let q = [0.25, 1.75];
    assert_eq!(
        InterpMethod::SLinear.resample(&q, &xs, &ys).unwrap(),
        InterpMethod::Linear.resample(&q, &xs, &ys).unwrap()
    );
}

#[test]
fn nearest_picks_closest_knot() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 10.0, 20.0];
    let out = InterpMethod::Nearest
        .resample(&[0.4, 0.6, 2.5], &xs, &ys)
        .unwrap();
    assert_eq!(out, vec![0.0, 10.0, 20.0]);
}

#[test]
fn zero_holds_previous_knot() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 10.0, 20.0];
    let out = InterpMethod::Zero
        .resample(&[0.9, 1.0, 1.7, -1.0, 5.0], &xs, &ys)
        .unwrap();
    assert_eq!(out, vec![0.0, 10.0, 10.0, 0.0, 20.0]);
}

#[test]
fn quadratic_reproduces_parabola() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let ys = [0.0, 1.0, 4.0, 9.0];
    let out = InterpMethod::Quadratic
        .resample(&[0.5, 1.5, 2.5], &xs, &ys)
        .unwrap();
    for (v, q) in out.iter().zip([0.5f64, 1.5, 2.5]) {
        assert!((v - q * q).abs() < 1e-12);
    }
}

#[test]
fn cubic_reproduces_cubic() {
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let ys = [0.0, 1.0, 8.0, 27.0, 64.0];
    let out = InterpMethod::Cubic
        .resample(&[0.5, 1.5, 3.5], &xs, &ys)
        .unwrap();
    for (v, q) in out.iter().zip([0.5f64, 1.5, 3.5]) {
        assert!((v - q * q * q).abs() < 1e-10);
    }
}

#[test]
fn cubic_needs_four_points() {
    let err = InterpMethod::Cubic
        .resample(&[0.5], &[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])
        .unwrap_err();
    assert_eq!(
        err,
        SyncError::NotEnoughPoints {
            method: "cubic",
            required: 4,
            actual: 3
        }
    );
}

#[test]
fn pchip_preserves_monotonicity() {
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let ys = [0.0, 0.2, 0.5, 0.8, 1.0];
    let query: Vec<f64> = (0..=40).map(|i| i as f64 * 0.1).collect();
    let out = InterpMethod::Pchip.resample(&query, &xs, &ys).unwrap();
    for w in out.windows(2) {
        assert!(
            w[1] >= w[0] - 1e-10,
            "monotonicity violated: {} then {}",
            w[0],
            w[1]
        );
    }
}

#[test]
fn pchip_does_not_overshoot_steps() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let ys = [0.0, 0.0, 1.0, 1.0];
    let query: Vec<f64> = (0..=30).map(|i| i as f64 * 0.1).collect();
    let out = InterpMethod::Pchip.resample(&query, &xs, &ys).unwrap();
    for v in out {
        assert!((-1e-10..=1.0 + 1e-10).contains(&v), "overshoot: {v}");
    }
}

#[test]
fn akima_passes_through_knots() {
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let ys = [1.0, 3.0, 2.0, 5.0, 4.0];
    let out = InterpMethod::Akima.resample(&xs, &xs, &ys).unwrap();
    for (v, y) in out.iter().zip(&ys) {
        assert!((v - y).abs() < 1e-12);
    }
}

#[test]
fn akima_is_exact_on_lines() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let ys = [1.0, 3.0, 5.0, 7.0];
    let out = InterpMethod::Akima
        .resample(&[0.5, 1.5, 2.5], &xs, &ys)
        .unwrap();
    assert!((out[0] - 2.0).abs() < 1e-12);
    assert!((out[1] - 4.0).abs() < 1e-12);
    assert!((out[2] - 6.0).abs() < 1e-12);
}

#[test]
fn polynomial_fit_extrapolates() {
    // 2x^2 - 3x + 1 sampled exactly; the fit must reproduce it everywhere,
    // including well outside the known span (no clamping for this family).
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let ys = [1.0, 0.0, 3.0, 10.0, 21.0];
    let out = InterpMethod::Polynomial(2)
        .resample(&[1.5, 6.0], &xs, &ys)
        .unwrap();
    assert!((out[0] - 1.0).abs() < 1e-6);
    assert!((out[1] - 55.0).abs() < 1e-6);
}

#[test]
fn polynomial_zero_is_the_mean() {
    let out = InterpMethod::Polynomial(0)
        .resample(&[-5.0, 100.0], &[0.0, 1.0, 2.0], &[1.0, 2.0, 6.0])
        .unwrap();
    assert!((out[0] - 3.0).abs() < 1e-12);
    assert!((out[1] - 3.0).abs() < 1e-12);
}

#[test]
fn spline5_reproduces_low_order_data() {
    let xs: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x * x * x).collect();
    let out = InterpMethod::Spline(5)
        .resample(&[2.5, 5.5, 10.0], &xs, &ys)
        .unwrap();
    assert!((out[0] - 15.625).abs() < 1e-9);
    assert!((out[1] - 166.375).abs() < 1e-9);
    assert_eq!(out[2], 343.0, "beyond the span clamps to the last knot");
}

#[test]
fn integral_preserves_total_integral() {
    let xs: Vec<f64> = (0..=10).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
    let query: Vec<f64> = (0..=20).map(|i| i as f64 * 0.5).collect();
    let out = InterpMethod::Integral.resample(&query, &xs, &ys).unwrap();

    let expected = trapz(&xs, &ys);
    let actual = trapz(&query, &out);
    assert!(
        ((actual - expected) / expected).abs() < 1e-6,
        "integral drifted: {actual} vs {expected}"
    );
}

#[test]
fn integral_keeps_constant_signals_flat() {
    let out = InterpMethod::Integral
        .resample(&[0.0, 2.0, 4.0, 6.0, 8.0, 10.0], &[0.0, 10.0], &[5.0, 5.0])
        .unwrap();
    for v in out {
        assert!((v - 5.0).abs() < 1e-9);
    }
}

#[test]
fn singular_system_is_coerced_to_zero() {
    // A single query point makes the tridiagonal system singular; the
    // documented degeneracy policy substitutes 0 instead of failing.
    let xs: Vec<f64> = (0..=10).map(|i| i as f64).collect();
    let ys = vec![1.0; 11];
    let out = InterpMethod::Integral.resample(&[5.0], &xs, &ys).unwrap();
    assert_eq!(out, vec![0.0]);
}

#[test]
fn non_finite_known_pairs_are_filtered() {
    let xs = [0.0, 1.0, f64::NAN, 3.0];
    let ys = [0.0, 10.0, 5.0, 30.0];
    let out = InterpMethod::Linear.resample(&[2.0], &xs, &ys).unwrap();
    assert_eq!(out, vec![20.0]);
}

#[test]
fn registry_names_round_trip() {
    for method in InterpMethod::ALL {
        assert_eq!(InterpMethod::from_name(method.name()), Some(*method));
    }
    assert_eq!(InterpMethod::from_name("bogus"), None);
}
