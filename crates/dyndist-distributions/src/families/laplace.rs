//! Laplace (double exponential) distribution

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};

/// Laplace distribution with location `μ` and scale `b`
#[derive(Debug, Clone)]
pub struct Laplace {
    location: f64,
    scale: f64,
    inner: statrs::distribution::Laplace,
}

impl Laplace {
    pub const NAMES: &'static [&'static str] =
        &["laplace", "laplace_distribution", "doubleexponential"];

    const LOCATION: ParamSpec = ParamSpec::optional("location", &["mu"], 0.0);
    const SCALE: ParamSpec = ParamSpec::optional("scale", &["b"], 1.0);

    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "laplace: location must be finite, got {location}"
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::non_positive("laplace", "scale", scale));
        }
        let inner =
            statrs::distribution::Laplace::new(location, scale).map_err(Error::construction)?;
        Ok(Self {
            location,
            scale,
            inner,
        })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let location = Self::LOCATION.resolve("laplace", params)?;
        let scale = Self::SCALE.resolve("laplace", params)?;
        Self::new(location, scale)
    }
}

impl ContinuousDistribution for Laplace {
    fn name(&self) -> &'static str {
        "laplace"
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        quantile_guard(p, |p| {
            if p < 0.5 {
                self.location + self.scale * (2.0 * p).ln()
            } else {
                self.location - self.scale * (2.0 * (1.0 - p)).ln()
            }
        })
    }

    fn range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn mean(&self) -> Option<f64> {
        Some(self.location)
    }

    fn variance(&self) -> Option<f64> {
        Some(2.0 * self.scale * self.scale)
    }

    fn skewness(&self) -> Option<f64> {
        Some(0.0)
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        Some(3.0)
    }

    fn mode(&self) -> Option<f64> {
        Some(self.location)
    }

    fn median(&self) -> f64 {
        self.location
    }

    fn entropy(&self) -> Option<f64> {
        // ln(2be)
        Some((2.0 * self.scale * std::f64::consts::E).ln())
    }
}
