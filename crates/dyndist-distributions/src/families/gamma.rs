//! Gamma distribution
//!
//! Surface parameterization is shape/scale; the statrs backend is shape/rate,
//! converted at construction. Scale defaults to 1 when no accepted spelling
//! is present.

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::Distribution;

use crate::invert;

/// Gamma distribution with shape `k` and scale `θ`
#[derive(Debug, Clone)]
pub struct Gamma {
    shape: f64,
    scale: f64,
    inner: statrs::distribution::Gamma,
}

impl Gamma {
    /// Accepted distribution-name spellings
    pub const NAMES: &'static [&'static str] = &["gamma", "gamma_distribution"];

    const SHAPE: ParamSpec = ParamSpec::required("shape", &["k"]);
    const SCALE: ParamSpec = ParamSpec::optional("scale", &["theta"], 1.0);

    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(Error::non_positive("gamma", "shape", shape));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::non_positive("gamma", "scale", scale));
        }
        let inner =
            statrs::distribution::Gamma::new(shape, 1.0 / scale).map_err(Error::construction)?;
        Ok(Self {
            shape,
            scale,
            inner,
        })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let shape = Self::SHAPE.resolve("gamma", params)?;
        let scale = Self::SCALE.resolve("gamma", params)?;
        Self::new(shape, scale)
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousDistribution for Gamma {
    fn name(&self) -> &'static str {
        "gamma"
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
        // No backend accessor; closed form 6/k
        Some(6.0 / self.shape)
    }

    fn mode(&self) -> Option<f64> {
        // Interior mode exists only for k >= 1
        (self.shape >= 1.0).then(|| (self.shape - 1.0) * self.scale)
    }

    fn entropy(&self) -> Option<f64> {
        self.inner.entropy()
    }
}
