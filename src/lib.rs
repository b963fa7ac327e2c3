//! Pearson and Spearman correlation between two paired numeric sequences.
//!
//! ```
//! use ndarray::array;
//!
//! let x = array![3.2, 2.6, 3.8];
//! let y = array![6.4, 5.2, 9.6];
//!
//! let r = rankcorr::pearson::correlation(&x, &y).unwrap();
//! assert!(r > 0.0 && r < 1.0);
//!
//! let rho = rankcorr::spearman::correlation(&x, &y).unwrap();
//! assert!((rho - 1.0).abs() < 1e-12);
//! ```
//!
//! Degenerate inputs (no pairs, a constant sequence) are not errors: the
//! coefficient comes back as NaN, so check `is_finite()` before using it.

pub mod error;
pub mod method;
pub mod pearson;
pub mod rank;
pub mod spearman;

pub use error::{Error, Result};
pub use method::{Correlator, Method, Pearson, Spearman};
pub use rank::rank_data;
