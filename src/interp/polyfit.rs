//! Global least-squares polynomial fits: the `polynomial0`..`polynomial4`
//! kernels. Unlike the piecewise family these extrapolate freely beyond the
//! known span — the fitted polynomial is simply evaluated wherever asked.

pub(super) fn eval(query: &[f64], xs: &[f64], ys: &[f64], order: usize) -> Vec<f64> {
    // Centre x around its mean before fitting; the normal equations stay
    // well-conditioned for axes far from the origin.
    let center = xs.iter().sum::<f64>() / xs.len() as f64;
    let coeffs = fit(xs, ys, order, center);
    query.iter().map(|&q| horner(&coeffs, q - center)).collect()
}

/// Solve the normal equations of the least-squares fit. A singular system
/// yields NaN coefficients, which the caller's sanitize pass turns into 0.
fn fit(xs: &[f64], ys: &[f64], order: usize, center: f64) -> Vec<f64> {
    let m = order + 1;

    // moments[p] = sum((x - c)^p), rhs[i] = sum(y * (x - c)^i)
    let mut moments = vec![0.0; 2 * order + 1];
    let mut rhs = vec![0.0; m];
    for (&x, &y) in xs.iter().zip(ys) {
        let t = x - center;
        let mut power = 1.0;
        for p in 0..moments.len() {
            moments[p] += power;
            if p < m {
                rhs[p] += y * power;
            }
            power *= t;
        }
    }

    let mut matrix = vec![vec![0.0; m]; m];
    for i in 0..m {
        for j in 0..m {
            matrix[i][j] = moments[i + j];
        }
    }

    solve_dense(&mut matrix, &mut rhs)
}

/// Gaussian elimination with partial pivoting on a small dense system.
fn solve_dense(matrix: &mut [Vec<f64>], rhs: &mut [f64]) -> Vec<f64> {
    let m = rhs.len();
    for col in 0..m {
        let pivot = (col..m)
            .max_by(|&a, &b| matrix[a][col].abs().total_cmp(&matrix[b][col].abs()))
            .unwrap_or(col);
        if matrix[pivot][col] == 0.0 {
            return vec![f64::NAN; m];
        }
        matrix.swap(col, pivot);
        rhs.swap(col, pivot);
        for row in col + 1..m {
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..m {
                matrix[row][k] -= factor * matrix[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }
    let mut coeffs = vec![0.0; m];
    for row in (0..m).rev() {
        let mut acc = rhs[row];
        for k in row + 1..m {
            acc -= matrix[row][k] * coeffs[k];
        }
        coeffs[row] = acc / matrix[row][row];
    }
    coeffs
}

/// Evaluate coefficients in ascending-power order at `t`.
fn horner(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_line_fit() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0]; // 2x + 1
        let out = eval(&[0.5, 10.0], &xs, &ys, 1);
        assert!((out[0] - 2.0).abs() < 1e-9);
        assert!((out[1] - 21.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_fit_yields_nan() {
        // Two coincident x values cannot determine a line.
        let xs = [1.0, 1.0];
        let ys = [0.0, 2.0];
        let out = eval(&[1.0], &xs, &ys, 1);
        assert!(out[0].is_nan());
    }
}
