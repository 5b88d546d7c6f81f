//! FFT cross-correlation shift estimation between data-sets.
//!
//! For each non-reference data-set, both alignment signals are linearly
//! re-sampled onto a uniform grid spanning their union of x ranges at one
//! tenth of the reference's median sample spacing. The cross-correlation is
//! taken in the frequency domain; the peak's offset from the centre bin is
//! the shift in grid steps.
//!
//! Sign convention: a positive shift means the data-set lags the reference
//! by that many x-units, so the resampler queries it at `x_ref + shift`.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::data::{DataMap, ShiftMap};
use crate::error::{Result, SyncError};
use crate::labels::LabelMap;

/// Estimate the shift of every non-reference data-set. With `no_sync` the
/// estimation is skipped entirely and every shift is exactly 0.
pub fn compute_shifts(
    labels: &LabelMap,
    reference_name: &str,
    data: &DataMap,
    no_sync: bool,
) -> Result<ShiftMap> {
    if !data.contains_key(reference_name) {
        return Err(SyncError::MissingReference(reference_name.to_string()));
    }

    let mut shifts = ShiftMap::new();
    if no_sync {
        for name in data.keys().filter(|name| *name != reference_name) {
            shifts.insert(name.clone(), 0.0);
        }
        return Ok(shifts);
    }

    let (ref_x, ref_y) = signal(labels, reference_name, data)?;
    for name in data.keys().filter(|name| *name != reference_name) {
        let (x, y) = signal(labels, name, data)?;
        let shift = estimate_shift(&ref_x, &ref_y, &x, &y);
        log::debug!("estimated shift for '{name}': {shift}");
        shifts.insert(name.clone(), shift);
    }
    Ok(shifts)
}

/// Extract a set's (x, y) alignment signal: resolve labels, validate
/// lengths, drop non-finite pairs, sort by x.
fn signal(labels: &LabelMap, name: &str, data: &DataMap) -> Result<(Vec<f64>, Vec<f64>)> {
    let set = &data[name];
    let pair = labels.resolve(name);
    let xs = set.require(name, &pair.x)?;
    let ys = set.require(name, &pair.y)?;
    if xs.len() != ys.len() {
        return Err(SyncError::LengthMismatch {
            set: name.to_string(),
            var: pair.y.clone(),
            expected: xs.len(),
            actual: ys.len(),
        });
    }
    let mut pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect();
    if pairs.is_empty() {
        return Err(SyncError::EmptySignal {
            set: name.to_string(),
            var: pair.y.clone(),
        });
    }
    pairs.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
    Ok(pairs.into_iter().unzip())
}

fn estimate_shift(ref_x: &[f64], ref_y: &[f64], x: &[f64], y: &[f64]) -> f64 {
    let low = ref_x[0].min(x[0]);
    let high = ref_x[ref_x.len() - 1].max(x[x.len() - 1]);
    let dx = median_diff(ref_x) / 10.0;
    if !(dx > 0.0) {
        log::warn!("degenerate reference spacing, skipping shift estimation");
        return 0.0;
    }

    // Uniform grid over the union span, arange-style: low, low + dx, ...
    // strictly below high + dx.
    let n = (((high + dx) - low) / dx).ceil() as usize;
    if n < 2 {
        return 0.0;
    }
    let grid: Vec<f64> = (0..n).map(|k| low + k as f64 * dx).collect();

    let y_ref = lerp_clamped(&grid, ref_x, ref_y);
    let mut y_other = lerp_clamped(&grid, x, y);
    y_other.reverse();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut spec_ref: Vec<Complex<f64>> =
        y_ref.iter().map(|&v| Complex { re: v, im: 0.0 }).collect();
    let mut spec_other: Vec<Complex<f64>> =
        y_other.iter().map(|&v| Complex { re: v, im: 0.0 }).collect();
    fft.process(&mut spec_ref);
    fft.process(&mut spec_other);

    let mut product: Vec<Complex<f64>> = spec_ref
        .iter()
        .zip(&spec_other)
        .map(|(a, b)| a * b)
        .collect();
    ifft.process(&mut product);

    // rustfft leaves transforms unnormalized; the 1/n factor keeps the
    // correlation values honest even though argmax would not care.
    let scale = 1.0 / n as f64;
    let correlation: Vec<f64> = product.iter().map(|c| c.re * scale).collect();
    let centred = fftshift(&correlation);

    let zero_index = (n / 2) as isize - 1;
    let peak = argmax(&centred) as isize;
    (zero_index - peak) as f64 * dx
}

/// Median of successive differences.
fn median_diff(xs: &[f64]) -> f64 {
    let mut diffs: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    diffs.sort_unstable_by(f64::total_cmp);
    let n = diffs.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        diffs[n / 2]
    } else {
        0.5 * (diffs[n / 2 - 1] + diffs[n / 2])
    }
}

/// Linear interpolation with boundary clamping; `query` and `xs` ascending.
fn lerp_clamped(query: &[f64], xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut j = 0usize;
    query
        .iter()
        .map(|&q| {
            if q <= xs[0] {
                ys[0]
            } else if q >= xs[n - 1] {
                ys[n - 1]
            } else {
                while xs[j + 1] < q {
                    j += 1;
                }
                let t = (q - xs[j]) / (xs[j + 1] - xs[j]);
                ys[j] + t * (ys[j + 1] - ys[j])
            }
        })
        .collect()
}

/// Swap the halves of a sequence so the zero-lag bin lands in the centre.
fn fftshift(values: &[f64]) -> Vec<f64> {
    let split = values.len() - values.len() / 2;
    let mut out = Vec::with_capacity(values.len());
    out.extend_from_slice(&values[split..]);
    out.extend_from_slice(&values[..split]);
    out
}

/// Index of the first maximal element.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}
