use ndarray::{ArrayBase, Data, Ix1};

use crate::error::{ensure_same_len, Result};

/// Pearson product-moment correlation coefficient of paired samples.
///
/// Computed from the five raw sums in a single pass. Empty input or a
/// constant sequence yields NaN (or an infinity) in `Ok`; callers must check
/// `is_finite()` on the result.
pub fn correlation<S1, S2>(x: &ArrayBase<S1, Ix1>, y: &ArrayBase<S2, Ix1>) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    ensure_same_len(x.len(), y.len())?;

    let mut sum_xy = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum_xy += xi * yi;
        sum_x += xi;
        sum_y += yi;
        sum_x2 += xi * xi;
        sum_y2 += yi * yi;
    }

    let n = x.len() as f64;
    let sqrt_x = (sum_x2 - sum_x * sum_x / n).sqrt();
    let sqrt_y = (sum_y2 - sum_y * sum_y / n).sqrt();

    let dividend = sum_xy - sum_x * sum_y / n;
    let divisor = sqrt_x * sqrt_y;
    let r = dividend / divisor;

    if !r.is_finite() {
        tracing::debug!(n = x.len(), r, "degenerate Pearson correlation");
    }
    Ok(r)
}
