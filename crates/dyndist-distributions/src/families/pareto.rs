//! Pareto (type I) distribution

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::Distribution;

/// Pareto distribution with scale `x_m` (left support edge) and shape `α`
#[derive(Debug, Clone)]
pub struct Pareto {
    scale: f64,
    shape: f64,
    inner: statrs::distribution::Pareto,
}

impl Pareto {
    pub const NAMES: &'static [&'static str] = &["pareto", "pareto_distribution"];

    const SCALE: ParamSpec = ParamSpec::required("scale", &["xm", "minimum"]);
    const SHAPE: ParamSpec = ParamSpec::required("shape", &["alpha"]);

    pub fn new(scale: f64, shape: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::non_positive("pareto", "scale", scale));
        }
        if !shape.is_finite() || shape <= 0.0 {
            return Err(Error::non_positive("pareto", "shape", shape));
        }
        let inner = statrs::distribution::Pareto::new(scale, shape).map_err(Error::construction)?;
        Ok(Self {
            scale,
            shape,
            inner,
        })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let scale = Self::SCALE.resolve("pareto", params)?;
        let shape = Self::SHAPE.resolve("pareto", params)?;
        Self::new(scale, shape)
    }
}

impl ContinuousDistribution for Pareto {
    fn name(&self) -> &'static str {
        "pareto"
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        // Closed form x_m (1-p)^{-1/α}
        quantile_guard(p, |p| self.scale * (1.0 - p).powf(-1.0 / self.shape))
    }

    fn range(&self) -> (f64, f64) {
        (self.scale, f64::INFINITY)
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
        // Defined for α > 4
        if self.shape <= 4.0 {
            return None;
        }
        let a = self.shape;
        Some(6.0 * (a.powi(3) + a.powi(2) - 6.0 * a - 2.0) / (a * (a - 3.0) * (a - 4.0)))
    }

    fn mode(&self) -> Option<f64> {
        Some(self.scale)
    }

    fn median(&self) -> f64 {
        self.scale * 2.0_f64.powf(1.0 / self.shape)
    }

    fn entropy(&self) -> Option<f64> {
        self.inner.entropy()
    }
}
