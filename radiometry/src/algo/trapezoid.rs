//! Trapezoidal integration over sampled axes.

/// Integrate samples `y` over the abscissa `x` with the trapezoidal rule.
///
/// The abscissa need not be uniform. Samples are paired by index and the
/// integration stops at the end of the shorter slice; fewer than two pairs
/// integrate to zero. A descending abscissa yields a negated integral.
///
/// # Arguments
/// * `x` - Sample positions
/// * `y` - Sample values at each position
///
/// # Returns
/// Sum over intervals of `(x[i+1] - x[i]) * (y[i] + y[i+1]) / 2`
pub fn trap_integrate(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) * 0.5)
        .sum()
}

/// Integrate the pointwise product `a * b` over `x` with the trapezoidal rule.
///
/// Equivalent to `trap_integrate(x, &product)` without allocating the product.
pub fn trap_integrate_product(x: &[f64], a: &[f64], b: &[f64]) -> f64 {
    let n = x.len().min(a.len()).min(b.len());
    (1..n)
        .map(|i| (x[i] - x[i - 1]) * (a[i - 1] * b[i - 1] + a[i] * b[i]) * 0.5)
        .sum()
}
