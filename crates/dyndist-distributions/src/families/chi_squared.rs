//! Chi-squared distribution

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::Distribution;

use crate::invert;

/// Chi-squared distribution with `df` degrees of freedom
#[derive(Debug, Clone)]
pub struct ChiSquared {
    df: f64,
    inner: statrs::distribution::ChiSquared,
}

impl ChiSquared {
    pub const NAMES: &'static [&'static str] =
        &["chisquared", "chi_squared", "chisq", "chi_squared_distribution"];

    const DF: ParamSpec = ParamSpec::required("df", &["nu", "k", "degreesoffreedom"]);

    pub fn new(df: f64) -> Result<Self> {
        if !df.is_finite() || df <= 0.0 {
            return Err(Error::non_positive("chisquared", "df", df));
        }
        let inner = statrs::distribution::ChiSquared::new(df).map_err(Error::construction)?;
        Ok(Self { df, inner })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        Self::new(Self::DF.resolve("chisquared", params)?)
    }

    pub fn df(&self) -> f64 {
        self.df
    }
}

impl ContinuousDistribution for ChiSquared {
    fn name(&self) -> &'static str {
        "chisquared"
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
        Some(12.0 / self.df)
    }

    fn mode(&self) -> Option<f64> {
        (self.df >= 2.0).then(|| self.df - 2.0)
    }

    fn entropy(&self) -> Option<f64> {
        self.inner.entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_density() {
        // df = 4: pdf(x) = x e^{-x/2} / 4
        let d = ChiSquared::new(4.0).unwrap();
        assert_relative_eq!(d.pdf(2.0), 0.5 * (-1.0_f64).exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_moments() {
        let d = ChiSquared::new(4.0).unwrap();
        assert_relative_eq!(d.mean().unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(d.variance().unwrap(), 8.0, epsilon = 1e-12);
        assert_eq!(d.mode(), Some(2.0));
        assert_relative_eq!(d.kurtosis_excess().unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mode_below_two_df() {
        assert_eq!(ChiSquared::new(1.0).unwrap().mode(), None);
    }

    #[test]
    fn test_quantile_round_trip() {
        let d = ChiSquared::new(4.0).unwrap();
        for &p in &[0.05, 0.5, 0.95] {
            assert_relative_eq!(d.cdf(d.quantile(p)), p, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_aliases_and_validation() {
        assert!(ChiSquared::from_params(&[Param::new("K", 3.0)]).is_ok());
        assert!(ChiSquared::from_params(&[]).is_err());
        assert!(ChiSquared::new(-1.0).is_err());
    }
}
