//! Cauchy distribution
//!
//! No moment of any order exists; mean, variance, skewness, and kurtosis are
//! statically unsupported. Location and scale still give a mode, median, and
//! entropy.

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{Capabilities, ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::Distribution;

/// Cauchy distribution with location `x₀` and scale `γ`
#[derive(Debug, Clone)]
pub struct Cauchy {
    location: f64,
    scale: f64,
    inner: statrs::distribution::Cauchy,
}

impl Cauchy {
    pub const NAMES: &'static [&'static str] = &["cauchy", "cauchy_distribution"];

    const LOCATION: ParamSpec = ParamSpec::optional("location", &["x0"], 0.0);
    const SCALE: ParamSpec = ParamSpec::optional("scale", &["gamma"], 1.0);

    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "cauchy: location must be finite, got {location}"
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::non_positive("cauchy", "scale", scale));
        }
        let inner =
            statrs::distribution::Cauchy::new(location, scale).map_err(Error::construction)?;
        Ok(Self {
            location,
            scale,
            inner,
        })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let location = Self::LOCATION.resolve("cauchy", params)?;
        let scale = Self::SCALE.resolve("cauchy", params)?;
        Self::new(location, scale)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousDistribution for Cauchy {
    fn name(&self) -> &'static str {
        "cauchy"
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        quantile_guard(p, |p| {
            if p == 0.0 {
                f64::NEG_INFINITY
            } else if p == 1.0 {
                f64::INFINITY
            } else {
                self.location + self.scale * (std::f64::consts::PI * (p - 0.5)).tan()
            }
        })
    }

    fn range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            mean: false,
            variance: false,
            skewness: false,
            kurtosis: false,
            mode: true,
            entropy: true,
        }
    }

    fn mode(&self) -> Option<f64> {
        Some(self.location)
    }

    fn median(&self) -> f64 {
        self.location
    }

    fn entropy(&self) -> Option<f64> {
        self.inner.entropy()
    }
}
