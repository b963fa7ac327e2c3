use ndarray::{ArrayBase, Data, Ix1};

use crate::error::{ensure_same_len, Error, Result};
use crate::{pearson, rank::rank_data};

/// Smallest number of pairs accepted by [`correlation`].
pub const MIN_SAMPLES: usize = 3;

/// Spearman's rank correlation: Pearson on the fractional ranks of each side.
///
/// `x` and `y` are ranked independently. Fails with an invalid-input error
/// when the lengths differ or there are fewer than [`MIN_SAMPLES`] pairs.
pub fn correlation<S1, S2>(x: &ArrayBase<S1, Ix1>, y: &ArrayBase<S2, Ix1>) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    ensure_same_len(x.len(), y.len())?;
    if x.len() < MIN_SAMPLES {
        return Err(Error::InsufficientData {
            required: MIN_SAMPLES,
            actual: x.len(),
        });
    }

    let rank_x = rank_data(x);
    let rank_y = rank_data(y);
    pearson::correlation(&rank_x, &rank_y)
}
