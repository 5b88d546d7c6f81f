//! Shape-preserving cubic Hermite interpolants: the `pchip` and `akima`
//! kernels. Both compute per-knot slopes and share the Hermite evaluation;
//! they differ only in how the slopes are chosen.

use super::local::find_interval;

pub(super) fn pchip(query: &[f64], xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let slopes = pchip_slopes(xs, ys);
    eval_hermite(query, xs, ys, &slopes)
}

pub(super) fn akima(query: &[f64], xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let slopes = akima_slopes(xs, ys);
    eval_hermite(query, xs, ys, &slopes)
}

/// Cubic Hermite evaluation with boundary clamping outside the known span.
fn eval_hermite(query: &[f64], xs: &[f64], ys: &[f64], slopes: &[f64]) -> Vec<f64> {
    let n = xs.len();
    query
        .iter()
        .map(|&q| {
            if q <= xs[0] {
                ys[0]
            } else if q >= xs[n - 1] {
                ys[n - 1]
            } else {
                let i = find_interval(xs, q);
                let h = xs[i + 1] - xs[i];
                let t = (q - xs[i]) / h;
                let t2 = t * t;
                let t3 = t2 * t;
                let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
                let h10 = t3 - 2.0 * t2 + t;
                let h01 = -2.0 * t3 + 3.0 * t2;
                let h11 = t3 - t2;
                h00 * ys[i] + h10 * h * slopes[i] + h01 * ys[i + 1] + h11 * h * slopes[i + 1]
            }
        })
        .collect()
}

/// Fritsch–Carlson slopes: harmonic-mean weighting where adjacent secants
/// agree in sign, zero where they do not. Guarantees monotonicity and no
/// overshoot between knots.
fn pchip_slopes(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut slopes = vec![0.0; n];

    if n == 2 {
        let secant = (ys[1] - ys[0]) / (xs[1] - xs[0]);
        slopes[0] = secant;
        slopes[1] = secant;
        return slopes;
    }

    let mut secants = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        secants.push((ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]));
    }

    for i in 1..n - 1 {
        let s0 = secants[i - 1];
        let s1 = secants[i];
        if s0 * s1 <= 0.0 {
            slopes[i] = 0.0;
        } else {
            let h0 = xs[i] - xs[i - 1];
            let h1 = xs[i + 1] - xs[i];
            let w1 = 2.0 * h1 + h0;
            let w2 = h1 + 2.0 * h0;
            slopes[i] = (w1 + w2) / (w1 / s0 + w2 / s1);
        }
    }

    slopes[0] = endpoint_slope(secants[0], secants[1], xs[1] - xs[0], xs[2] - xs[1]);
    slopes[n - 1] = endpoint_slope(
        secants[n - 2],
        secants[n - 3],
        xs[n - 1] - xs[n - 2],
        xs[n - 2] - xs[n - 3],
    );

    slopes
}

/// One-sided endpoint slope with the Fritsch–Carlson shape constraints.
fn endpoint_slope(s1: f64, s2: f64, h1: f64, h2: f64) -> f64 {
    let d = ((2.0 * h1 + h2) * s1 - h1 * s2) / (h1 + h2);
    if d.signum() != s1.signum() {
        0.0
    } else if s1.signum() != s2.signum() && d.abs() > 3.0 * s1.abs() {
        3.0 * s1
    } else {
        d
    }
}

/// Akima slopes: secants extended past both boundaries by parabolic
/// continuation, then blended with weights proportional to the adjacent
/// secant differences. Equal secants (the weight-degenerate case) fall back
/// to the plain average.
fn akima_slopes(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    if n == 2 {
        let secant = (ys[1] - ys[0]) / (xs[1] - xs[0]);
        return vec![secant; 2];
    }

    // ext[i + 2] holds secant i; two synthetic secants on each side.
    let mut ext = vec![0.0; n + 3];
    for i in 0..n - 1 {
        ext[i + 2] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]);
    }
    ext[1] = 2.0 * ext[2] - ext[3];
    ext[0] = 3.0 * ext[2] - 2.0 * ext[3];
    ext[n + 1] = 2.0 * ext[n] - ext[n - 1];
    ext[n + 2] = 3.0 * ext[n] - 2.0 * ext[n - 1];

    (0..n)
        .map(|i| {
            let w1 = (ext[i + 3] - ext[i + 2]).abs();
            let w2 = (ext[i + 1] - ext[i]).abs();
            if w1 + w2 > 0.0 {
                (w1 * ext[i + 1] + w2 * ext[i + 2]) / (w1 + w2)
            } else {
                0.5 * (ext[i + 1] + ext[i + 2])
            }
        })
        .collect()
}
