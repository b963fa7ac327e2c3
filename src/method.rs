//! Correlation measures behind a common interface.

use ndarray::ArrayView1;
use strum_macros::{Display, EnumString};

use crate::error::Result;
use crate::{pearson, spearman};

/// A correlation measure between two paired samples.
pub trait Correlator {
    /// Canonical name of the measure.
    fn name(&self) -> &'static str;

    /// Correlation of the paired samples `x` and `y`.
    fn correlate(&self, x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Result<f64>;

    /// Like [`Correlator::correlate`], with NaN standing in for an error.
    fn correlate_or_nan(&self, x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> f64 {
        self.correlate(x, y).unwrap_or(f64::NAN)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pearson;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spearman;

impl Correlator for Pearson {
    fn name(&self) -> &'static str {
        "Pearson"
    }

    fn correlate(&self, x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Result<f64> {
        pearson::correlation(&x, &y)
    }
}

impl Correlator for Spearman {
    fn name(&self) -> &'static str {
        "Spearman"
    }

    fn correlate(&self, x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Result<f64> {
        spearman::correlation(&x, &y)
    }
}

/// Selectable correlation measure, parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Method {
    #[strum(serialize = "r", to_string = "Pearson")]
    Pearson,
    #[strum(serialize = "rho", to_string = "Spearman")]
    Spearman,
}

impl Method {
    fn correlator(self) -> &'static dyn Correlator {
        match self {
            Method::Pearson => &Pearson,
            Method::Spearman => &Spearman,
        }
    }
}

impl Correlator for Method {
    fn name(&self) -> &'static str {
        self.correlator().name()
    }

    fn correlate(&self, x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Result<f64> {
        self.correlator().correlate(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use ndarray::array;

    #[test]
    fn parse_method_names() {
        assert_eq!("pearson".parse::<Method>().unwrap(), Method::Pearson);
        assert_eq!("PEARSON".parse::<Method>().unwrap(), Method::Pearson);
        assert_eq!("r".parse::<Method>().unwrap(), Method::Pearson);
        assert_eq!("Spearman".parse::<Method>().unwrap(), Method::Spearman);
        assert_eq!("RHO".parse::<Method>().unwrap(), Method::Spearman);
        assert!("kendall".parse::<Method>().is_err());
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(Method::Pearson.to_string(), "Pearson");
        assert_eq!(Method::Spearman.to_string(), "Spearman");
        assert_eq!(Method::Spearman.name(), "Spearman");
    }

    #[test]
    fn method_dispatches_to_measure() {
        let x = array![1.0, 2.0, 3.0, 4.0];
        let y = array![1.0, 4.0, 9.0, 16.0];
        let via_method = Method::Pearson.correlate(x.view(), y.view()).unwrap();
        assert_eq!(via_method, pearson::correlation(&x, &y).unwrap());
        let via_method = Method::Spearman.correlate(x.view(), y.view()).unwrap();
        assert_eq!(via_method, spearman::correlation(&x, &y).unwrap());
    }

    #[test]
    fn correlate_or_nan_hides_errors() {
        let x = array![1.0, 2.0];
        let y = array![3.0, 4.0];
        assert_eq!(
            Spearman.correlate(x.view(), y.view()),
            Err(Error::InsufficientData {
                required: 3,
                actual: 2
            })
        );
        assert!(Spearman.correlate_or_nan(x.view(), y.view()).is_nan());
        assert!(Pearson.correlate_or_nan(x.view(), y.view()).is_finite());
    }

    #[test]
    fn correlators_are_object_safe() {
        let measures: Vec<Box<dyn Correlator>> = vec![Box::new(Pearson), Box::new(Spearman)];
        let x = array![1.0, 2.0, 3.0];
        let y = array![2.0, 4.0, 6.0];
        for measure in &measures {
            let r = measure.correlate(x.view(), y.view()).unwrap();
            assert!((r - 1.0).abs() < 1e-12, "{}: {r}", measure.name());
        }
    }
}
