//! Fisher's F distribution
//!
//! The backend exposes no entropy accessor for this family; the entropy slot
//! stays statically unsupported.

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{Capabilities, ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::Distribution;

use crate::invert;

/// Fisher's F distribution with `df1` numerator and `df2` denominator
/// degrees of freedom
#[derive(Debug, Clone)]
pub struct FisherF {
    df1: f64,
    df2: f64,
    inner: statrs::distribution::FisherSnedecor,
}

impl FisherF {
    pub const NAMES: &'static [&'static str] =
        &["fisherf", "fisher_f", "f", "fisher_f_distribution"];

    const DF1: ParamSpec = ParamSpec::required("df1", &["d1", "m", "degreesoffreedom1"]);
    const DF2: ParamSpec = ParamSpec::required("df2", &["d2", "n", "degreesoffreedom2"]);

    pub fn new(df1: f64, df2: f64) -> Result<Self> {
        if !df1.is_finite() || df1 <= 0.0 {
            return Err(Error::non_positive("fisherf", "df1", df1));
        }
        if !df2.is_finite() || df2 <= 0.0 {
            return Err(Error::non_positive("fisherf", "df2", df2));
        }
        let inner =
            statrs::distribution::FisherSnedecor::new(df1, df2).map_err(Error::construction)?;
        Ok(Self { df1, df2, inner })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let df1 = Self::DF1.resolve("fisherf", params)?;
        let df2 = Self::DF2.resolve("fisherf", params)?;
        Self::new(df1, df2)
    }

    pub fn df1(&self) -> f64 {
        self.df1
    }

    pub fn df2(&self) -> f64 {
        self.df2
    }
}

impl ContinuousDistribution for FisherF {
    fn name(&self) -> &'static str {
        "fisherf"
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        quantile_guard(p, |p| {
            invert::refine(
                |x| self.inner.cdf(x),
                |x| self.inner.pdf(x),
                p,
                self.inner.inverse_cdf(p),
                self.range(),
            )
        })
    }

    fn range(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::without_entropy()
    }

    fn mean(&self) -> Option<f64> {
        self.inner.mean()
    }

    fn variance(&self) -> Option<f64> {
        self.inner.variance()
    }

    fn skewness(&self) -> Option<f64> {
        self.inner.skewness()
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        // Defined for df2 > 8
        if self.df2 <= 8.0 {
            return None;
        }
        let (d1, d2) = (self.df1, self.df2);
        let num = 12.0 * (d1 * (5.0 * d2 - 22.0) * (d1 + d2 - 2.0) + (d2 - 4.0) * (d2 - 2.0).powi(2));
        let den = d1 * (d2 - 6.0) * (d2 - 8.0) * (d1 + d2 - 2.0);
        Some(num / den)
    }

    fn mode(&self) -> Option<f64> {
        // Interior mode exists only for df1 > 2
        (self.df1 > 2.0).then(|| ((self.df1 - 2.0) / self.df1) * (self.df2 / (self.df2 + 2.0)))
    }

    fn entropy(&self) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        // df2 / (df2 - 2) for df2 > 2
        let d = FisherF::new(4.0, 10.0).unwrap();
        assert_relative_eq!(d.mean().unwrap(), 1.25, epsilon = 1e-10);
    }

    #[test]
    fn test_mean_undefined_for_small_df2() {
        let d = FisherF::new(4.0, 2.0).unwrap();
        assert_eq!(d.mean(), None);
    }

    #[test]
    fn test_entropy_statically_unsupported() {
        let d = FisherF::new(4.0, 10.0).unwrap();
        assert_eq!(d.entropy(), None);
        assert!(!d.capabilities().entropy);
        assert!(d.capabilities().mean);
    }

    #[test]
    fn test_mode() {
        let d = FisherF::new(4.0, 10.0).unwrap();
        assert_relative_eq!(d.mode().unwrap(), 0.5 * (10.0 / 12.0), epsilon = 1e-12);
        let d = FisherF::new(2.0, 10.0).unwrap();
        assert_eq!(d.mode(), None);
    }

    #[test]
    fn test_kurtosis_excess_boundary() {
        assert_eq!(FisherF::new(4.0, 8.0).unwrap().kurtosis_excess(), None);
        assert!(FisherF::new(4.0, 9.0).unwrap().kurtosis_excess().is_some());
    }

    #[test]
    fn test_quantile_round_trip() {
        let d = FisherF::new(3.0, 7.0).unwrap();
        for &p in &[0.05, 0.5, 0.95] {
            let x = d.quantile(p);
            assert_relative_eq!(d.cdf(x), p, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_both_dfs_required() {
        assert!(FisherF::from_params(&[]).is_err());
        assert!(FisherF::from_params(&[Param::new("df1", 3.0)]).is_err());
        let d = FisherF::from_params(&[Param::new("M", 3.0), Param::new("N", 7.0)]).unwrap();
        assert_eq!((d.df1(), d.df2()), (3.0, 7.0));
    }
}
