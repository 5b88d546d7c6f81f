//! 1-D interpolation kernels used to re-sample data-set variables.
//!
//! Each kernel maps `(query_x, known_x, known_y) -> query_y`. Known samples
//! are filtered of non-finite pairs and sorted by x before any kernel runs;
//! query points may come in any order unless a kernel documents otherwise.
//! Non-finite outputs are coerced to 0 — the single lossy policy of the
//! pipeline, covering degenerate fits and singular solves.

mod hermite;
mod integral;
mod local;
mod polyfit;

use crate::error::{Result, SyncError};

/// Identifier of a 1-D interpolation/resampling kernel.
///
/// The registry is a closed enum rather than a name→function table, so an
/// unknown method can only exist as an unparsed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpMethod {
    /// Piecewise linear interpolation.
    Linear,
    /// Value of the closest known sample.
    Nearest,
    /// Previous-knot step function (zero-order hold).
    Zero,
    /// First-order spline; identical to `Linear`.
    SLinear,
    /// Piecewise quadratic on a 3-point window.
    Quadratic,
    /// Piecewise cubic on a 4-point window.
    Cubic,
    /// Shape-preserving cubic Hermite (Fritsch–Carlson slopes).
    Pchip,
    /// Akima cubic, robust to outliers.
    Akima,
    /// Re-sampling that preserves the cumulative trapezoidal integral.
    Integral,
    /// Global least-squares polynomial of the given degree (0..=4).
    Polynomial(u8),
    /// Piecewise polynomial on an (order+1)-point window (orders 5, 7, 9).
    Spline(u8),
}

impl InterpMethod {
    /// Every registered kernel, in registry order.
    pub const ALL: &'static [InterpMethod] = &[
        InterpMethod::Linear,
        InterpMethod::Nearest,
        InterpMethod::Zero,
        InterpMethod::SLinear,
        InterpMethod::Quadratic,
        InterpMethod::Cubic,
        InterpMethod::Pchip,
        InterpMethod::Akima,
        InterpMethod::Integral,
        InterpMethod::Polynomial(0),
        InterpMethod::Polynomial(1),
        InterpMethod::Polynomial(2),
        InterpMethod::Polynomial(3),
        InterpMethod::Polynomial(4),
        InterpMethod::Spline(5),
        InterpMethod::Spline(7),
        InterpMethod::Spline(9),
    ];

    /// Parse a registry name (e.g. `"linear"`, `"polynomial2"`, `"spline7"`).
    pub fn from_name(name: &str) -> Option<InterpMethod> {
        let method = match name {
            "linear" => InterpMethod::Linear,
            "nearest" => InterpMethod::Nearest,
            "zero" => InterpMethod::Zero,
            "slinear" => InterpMethod::SLinear,
            "quadratic" => InterpMethod::Quadratic,
            "cubic" => InterpMethod::Cubic,
            "pchip" => InterpMethod::Pchip,
            "akima" => InterpMethod::Akima,
            "integral" => InterpMethod::Integral,
            "polynomial0" => InterpMethod::Polynomial(0),
            "polynomial1" => InterpMethod::Polynomial(1),
            "polynomial2" => InterpMethod::Polynomial(2),
            "polynomial3" => InterpMethod::Polynomial(3),
            "polynomial4" => InterpMethod::Polynomial(4),
            "spline5" => InterpMethod::Spline(5),
            "spline7" => InterpMethod::Spline(7),
            "spline9" => InterpMethod::Spline(9),
            _ => return None,
        };
        Some(method)
    }

    /// Registry name of this kernel.
    pub fn name(&self) -> &'static str {
        match self {
            InterpMethod::Linear => "linear",
            InterpMethod::Nearest => "nearest",
            InterpMethod::Zero => "zero",
            InterpMethod::SLinear => "slinear",
            InterpMethod::Quadratic => "quadratic",
            InterpMethod::Cubic => "cubic",
            InterpMethod::Pchip => "pchip",
            InterpMethod::Akima => "akima",
            InterpMethod::Integral => "integral",
            InterpMethod::Polynomial(0) => "polynomial0",
            InterpMethod::Polynomial(1) => "polynomial1",
            InterpMethod::Polynomial(2) => "polynomial2",
            InterpMethod::Polynomial(3) => "polynomial3",
            InterpMethod::Polynomial(4) => "polynomial4",
            InterpMethod::Polynomial(_) => "polynomial",
            InterpMethod::Spline(5) => "spline5",
            InterpMethod::Spline(7) => "spline7",
            InterpMethod::Spline(9) => "spline9",
            InterpMethod::Spline(_) => "spline",
        }
    }

    /// Minimum number of known points the kernel needs after filtering.
    pub fn min_points(&self) -> usize {
        match self {
            InterpMethod::Linear
            | InterpMethod::Nearest
            | InterpMethod::Zero
            | InterpMethod::SLinear
            | InterpMethod::Pchip
            | InterpMethod::Akima
            | InterpMethod::Integral => 2,
            InterpMethod::Quadratic => 3,
            InterpMethod::Cubic => 4,
            InterpMethod::Polynomial(k) => *k as usize + 1,
            InterpMethod::Spline(k) => *k as usize + 1,
        }
    }

    /// Re-sample `known_y` (sampled at `known_x`) at the `query` positions.
    ///
    /// Non-finite `(known_x, known_y)` pairs are dropped and the remainder
    /// sorted by x before evaluation. Fails with `NotEnoughPoints` when the
    /// surviving sample count is below the kernel's order requirement.
    pub fn resample(&self, query: &[f64], known_x: &[f64], known_y: &[f64]) -> Result<Vec<f64>> {
        let (xs, ys) = prepare_known(known_x, known_y);
        if xs.len() < self.min_points() {
            return Err(SyncError::NotEnoughPoints {
                method: self.name(),
                required: self.min_points(),
                actual: xs.len(),
            });
        }
        let mut out = match self {
            InterpMethod::Nearest => local::nearest(query, &xs, &ys),
            InterpMethod::Zero => local::previous(query, &xs, &ys),
            InterpMethod::Linear | InterpMethod::SLinear => local::piecewise(query, &xs, &ys, 1),
            InterpMethod::Quadratic => local::piecewise(query, &xs, &ys, 2),
            InterpMethod::Cubic => local::piecewise(query, &xs, &ys, 3),
            InterpMethod::Spline(k) => local::piecewise(query, &xs, &ys, *k as usize),
            InterpMethod::Pchip => hermite::pchip(query, &xs, &ys),
            InterpMethod::Akima => hermite::akima(query, &xs, &ys),
            InterpMethod::Polynomial(k) => polyfit::eval(query, &xs, &ys, *k as usize),
            InterpMethod::Integral => integral::resample(query, &xs, &ys),
        };
        sanitize(&mut out);
        Ok(out)
    }
}

/// Drop non-finite sample pairs and sort the survivors by x.
fn prepare_known(known_x: &[f64], known_y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    debug_assert_eq!(known_x.len(), known_y.len());
    let mut pairs: Vec<(f64, f64)> = known_x
        .iter()
        .zip(known_y)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect();
    pairs.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
    pairs.into_iter().unzip()
}

/// Coerce non-finite outputs to 0 (documented lossy degeneracy policy).
fn sanitize(values: &mut [f64]) {
    let mut coerced = 0usize;
    for v in values.iter_mut() {
        if !v.is_finite() {
            *v = 0.0;
            coerced += 1;
        }
    }
    if coerced > 0 {
        log::debug!("coerced {coerced} non-finite interpolation results to 0");
    }
}
