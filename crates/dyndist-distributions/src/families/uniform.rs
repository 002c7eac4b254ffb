//! Continuous uniform distribution
//!
//! The density is flat, so no single mode exists; the mode slot is
//! statically unsupported.

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{Capabilities, ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};

/// Uniform distribution on `[lower, upper]`
#[derive(Debug, Clone)]
pub struct Uniform {
    lower: f64,
    upper: f64,
    inner: statrs::distribution::Uniform,
}

impl Uniform {
    pub const NAMES: &'static [&'static str] = &["uniform", "rectangular", "uniform_distribution"];

    const LOWER: ParamSpec = ParamSpec::optional("lower", &["min", "a"], 0.0);
    const UPPER: ParamSpec = ParamSpec::optional("upper", &["max", "b"], 1.0);

    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(Error::bad_interval("uniform", lower, upper));
        }
        let inner =
            statrs::distribution::Uniform::new(lower, upper).map_err(Error::construction)?;
        Ok(Self {
            lower,
            upper,
            inner,
        })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let lower = Self::LOWER.resolve("uniform", params)?;
        let upper = Self::UPPER.resolve("uniform", params)?;
        Self::new(lower, upper)
    }

    fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl ContinuousDistribution for Uniform {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        quantile_guard(p, |p| self.lower + p * self.width())
    }

    fn range(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            mode: false,
            ..Capabilities::ALL
        }
    }

    fn mean(&self) -> Option<f64> {
        Some(0.5 * (self.lower + self.upper))
    }

    fn variance(&self) -> Option<f64> {
        Some(self.width() * self.width() / 12.0)
    }

    fn skewness(&self) -> Option<f64> {
        Some(0.0)
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        Some(-1.2)
    }

    fn median(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    fn entropy(&self) -> Option<f64> {
        Some(self.width().ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_uniform() {
        let d = Uniform::new(0.0, 1.0).unwrap();
        assert_relative_eq!(d.pdf(0.5), 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.cdf(0.3), 0.3, epsilon = 1e-12);
        assert_relative_eq!(d.quantile(0.7), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_moments() {
        let d = Uniform::new(2.0, 6.0).unwrap();
        assert_eq!(d.mean(), Some(4.0));
        assert_relative_eq!(d.variance().unwrap(), 16.0 / 12.0, epsilon = 1e-12);
        assert_eq!(d.median(), 4.0);
        assert_eq!(d.mode(), None);
        assert!(!d.capabilities().mode);
        assert_relative_eq!(d.entropy().unwrap(), 4.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_defaults_to_unit_interval() {
        let d = Uniform::from_params(&[]).unwrap();
        assert_eq!(d.range(), (0.0, 1.0));
    }

    #[test]
    fn test_interval_validation() {
        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(2.0, 1.0).is_err());
        assert!(Uniform::new(0.0, f64::INFINITY).is_err());
    }
}
