//! Normal distribution

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::Distribution;

/// Normal distribution with mean `μ` and standard deviation `σ`
#[derive(Debug, Clone)]
pub struct Normal {
    mean: f64,
    sd: f64,
    inner: statrs::distribution::Normal,
}

impl Normal {
    pub const NAMES: &'static [&'static str] = &["normal", "gaussian", "normal_distribution"];

    const MEAN: ParamSpec = ParamSpec::optional("mean", &["mu", "location"], 0.0);
    const SD: ParamSpec = ParamSpec::optional("sd", &["sigma", "standarddeviation"], 1.0);

    pub fn new(mean: f64, sd: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "normal: mean must be finite, got {mean}"
            )));
        }
        if !sd.is_finite() || sd <= 0.0 {
            return Err(Error::non_positive("normal", "sd", sd));
        }
        let inner = statrs::distribution::Normal::new(mean, sd).map_err(Error::construction)?;
        Ok(Self { mean, sd, inner })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let mean = Self::MEAN.resolve("normal", params)?;
        let sd = Self::SD.resolve("normal", params)?;
        Self::new(mean, sd)
    }
}

impl ContinuousDistribution for Normal {
    fn name(&self) -> &'static str {
        "normal"
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        quantile_guard(p, |p| self.inner.inverse_cdf(p))
    }

    fn range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn mean(&self) -> Option<f64> {
        Some(self.mean)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.sd * self.sd)
    }

    fn skewness(&self) -> Option<f64> {
        Some(0.0)
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        Some(0.0)
    }

    fn mode(&self) -> Option<f64> {
        Some(self.mean)
    }

    fn median(&self) -> f64 {
        self.mean
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
    fn test_standard_normal() {
        let d = Normal::new(0.0, 1.0).unwrap();
        assert_relative_eq!(d.pdf(0.0), 0.398_942_280_4, epsilon = 1e-9);
        assert_relative_eq!(d.cdf(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(d.quantile(0.975), 1.959_963_985, epsilon = 1e-6);
    }

    #[test]
    fn test_defaults_to_standard() {
        let d = Normal::from_params(&[]).unwrap();
        assert_eq!(d.mean(), Some(0.0));
        assert_eq!(d.variance(), Some(1.0));
    }

    #[test]
    fn test_location_scale() {
        let d = Normal::from_params(&[Param::new("MU", 3.0), Param::new("Sigma", 2.0)]).unwrap();
        assert_eq!(d.median(), 3.0);
        assert_eq!(d.mode(), Some(3.0));
        assert_eq!(d.variance(), Some(4.0));
        assert_relative_eq!(d.cdf(3.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_entropy() {
        // 0.5 ln(2πeσ²) for σ = 1
        let d = Normal::new(0.0, 1.0).unwrap();
        let expected = 0.5 * (2.0 * std::f64::consts::PI * std::f64::consts::E).ln();
        assert_relative_eq!(d.entropy().unwrap(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Normal::new(f64::INFINITY, 1.0).is_err());
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
    }
}
