//! Integral-preserving resampling: the `integral` kernel.
//!
//! The query points are bracketed by a midpoint grid; the known signal's
//! cumulative trapezoidal integral is measured over each midpoint interval,
//! and a symmetric tridiagonal system recovers the query values whose
//! piecewise-linear reconstruction reproduces exactly those per-interval
//! integrals. Query points are assumed ascending (they come from the
//! reference time axis).

/// Diagonal entries are `3(hᵢ + hᵢ₊₁)/8`, off-diagonals `h/8`: the integral
/// of a piecewise-linear hat over its two half-intervals.
pub(super) fn resample(query: &[f64], xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = query.len();
    if n == 0 {
        return Vec::new();
    }

    // Midpoint grid: interval edges halfway between query points, pinned to
    // the first and last query point at the boundaries.
    let mut h = vec![0.0; n + 1];
    for i in 1..n {
        h[i] = query[i] - query[i - 1];
    }
    let mut edges = vec![0.0; n + 1];
    edges[0] = query[0];
    edges[n] = query[n - 1];
    for i in 1..n {
        edges[i] = query[i - 1] + h[i] / 2.0;
    }

    let cum = cum_integral(&edges, xs, ys);
    let rhs: Vec<f64> = (0..n).map(|i| cum[i + 1] - cum[i]).collect();

    let diag: Vec<f64> = (0..n).map(|i| 3.0 * (h[i] + h[i + 1]) / 8.0).collect();
    let off: Vec<f64> = (1..n).map(|i| h[i] / 8.0).collect();

    thomas(&diag, &off, &rhs)
}

/// Cumulative trapezoidal integral of the known signal, sampled at `at`.
/// The signal is linearly interpolated onto the union grid of `at` and
/// `xs`, taken as zero outside the known span.
fn cum_integral(at: &[f64], xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let mut union: Vec<f64> = at.iter().chain(xs).copied().collect();
    union.sort_unstable_by(f64::total_cmp);
    union.dedup();

    let values: Vec<f64> = union.iter().map(|&u| interp_zero_outside(u, xs, ys)).collect();

    let mut cum = vec![0.0; union.len()];
    for i in 1..union.len() {
        cum[i] = cum[i - 1] + 0.5 * (values[i] + values[i - 1]) * (union[i] - union[i - 1]);
    }

    // Every entry of `at` is a member of the union grid by construction.
    at.iter()
        .map(|q| {
            let idx = union.partition_point(|u| u < q);
            cum[idx]
        })
        .collect()
}

fn interp_zero_outside(q: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if q < xs[0] || q > xs[n - 1] {
        return 0.0;
    }
    let i = super::local::find_interval(xs, q);
    let t = (q - xs[i]) / (xs[i + 1] - xs[i]);
    ys[i] + t * (ys[i + 1] - ys[i])
}

/// Thomas algorithm for a symmetric tridiagonal system. Singular systems
/// produce non-finite values, resolved to 0 by the caller's sanitize pass.
fn thomas(diag: &[f64], off: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];
    c[0] = if n > 1 { off[0] / diag[0] } else { 0.0 };
    d[0] = rhs[0] / diag[0];
    for i in 1..n {
        let denom = diag[i] - off[i - 1] * c[i - 1];
        if i < n - 1 {
            c[i] = off[i] / denom;
        }
        d[i] = (rhs[i] - off[i - 1] * d[i - 1]) / denom;
    }
    let mut out = vec![0.0; n];
    out[n - 1] = d[n - 1];
    for i in (0..n - 1).rev() {
        out[i] = d[i] - c[i] * out[i + 1];
    }
    out
}
