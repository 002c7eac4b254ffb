//! Log-normal distribution
//!
//! Parameterized by the mean `μ` and standard deviation `σ` of the
//! underlying normal.

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::function::erf;
use statrs::statistics::Distribution;

/// Log-normal distribution with log-scale location `μ` and shape `σ`
#[derive(Debug, Clone)]
pub struct LogNormal {
    location: f64,
    scale: f64,
    inner: statrs::distribution::LogNormal,
}

impl LogNormal {
    pub const NAMES: &'static [&'static str] =
        &["lognormal", "log_normal", "lognormal_distribution"];

    const LOCATION: ParamSpec = ParamSpec::optional("location", &["mu", "meanlog"], 0.0);
    const SCALE: ParamSpec = ParamSpec::optional("scale", &["sigma", "sdlog"], 1.0);

    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "lognormal: location must be finite, got {location}"
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::non_positive("lognormal", "scale", scale));
        }
        let inner =
            statrs::distribution::LogNormal::new(location, scale).map_err(Error::construction)?;
        Ok(Self {
            location,
            scale,
            inner,
        })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let location = Self::LOCATION.resolve("lognormal", params)?;
        let scale = Self::SCALE.resolve("lognormal", params)?;
        Self::new(location, scale)
    }
}

impl ContinuousDistribution for LogNormal {
    fn name(&self) -> &'static str {
        "lognormal"
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        // exp of the underlying normal quantile
        quantile_guard(p, |p| {
            let z = std::f64::consts::SQRT_2 * erf::erf_inv(2.0 * p - 1.0);
            (self.location + self.scale * z).exp()
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
        let s2 = self.scale * self.scale;
        Some((4.0 * s2).exp() + 2.0 * (3.0 * s2).exp() + 3.0 * (2.0 * s2).exp() - 6.0)
    }

    fn mode(&self) -> Option<f64> {
        Some((self.location - self.scale * self.scale).exp())
    }

    fn median(&self) -> f64 {
        self.location.exp()
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
    fn test_standard_log_normal() {
        let d = LogNormal::new(0.0, 1.0).unwrap();
        // pdf(1) = 1/√(2π)
        assert_relative_eq!(d.pdf(1.0), 0.398_942_280_4, epsilon = 1e-9);
        assert_relative_eq!(d.cdf(1.0), 0.5, epsilon = 1e-12);
        assert_eq!(d.pdf(-1.0), 0.0);
    }

    #[test]
    fn test_center_statistics() {
        let d = LogNormal::new(0.0, 1.0).unwrap();
        assert_relative_eq!(d.median(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.mode().unwrap(), (-1.0_f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(d.mean().unwrap(), 0.5_f64.exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_round_trip() {
        let d = LogNormal::new(0.5, 0.8).unwrap();
        for &p in &[0.1, 0.5, 0.9] {
            assert_relative_eq!(d.cdf(d.quantile(p)), p, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_validation() {
        assert!(LogNormal::new(0.0, 0.0).is_err());
        assert!(LogNormal::new(f64::NAN, 1.0).is_err());
        assert!(LogNormal::from_params(&[Param::new("SdLog", 2.0)]).is_ok());
    }
}
