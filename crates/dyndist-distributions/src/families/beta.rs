//! Beta distribution

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::Distribution;

use crate::invert;

/// Beta distribution with shape parameters `α` and `β`
#[derive(Debug, Clone)]
pub struct Beta {
    alpha: f64,
    beta: f64,
    inner: statrs::distribution::Beta,
}

impl Beta {
    pub const NAMES: &'static [&'static str] = &["beta", "beta_distribution"];

    const ALPHA: ParamSpec = ParamSpec::required("alpha", &["a"]);
    const BETA: ParamSpec = ParamSpec::required("beta", &["b"]);

    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(Error::non_positive("beta", "alpha", alpha));
        }
        if !beta.is_finite() || beta <= 0.0 {
            return Err(Error::non_positive("beta", "beta", beta));
        }
        let inner = statrs::distribution::Beta::new(alpha, beta).map_err(Error::construction)?;
        Ok(Self { alpha, beta, inner })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let alpha = Self::ALPHA.resolve("beta", params)?;
        let beta = Self::BETA.resolve("beta", params)?;
        Self::new(alpha, beta)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl ContinuousDistribution for Beta {
    fn name(&self) -> &'static str {
        "beta"
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
        (0.0, 1.0)
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
        let (a, b) = (self.alpha, self.beta);
        let num = 6.0 * ((a - b).powi(2) * (a + b + 1.0) - a * b * (a + b + 2.0));
        let den = a * b * (a + b + 2.0) * (a + b + 3.0);
        Some(num / den)
    }

    fn mode(&self) -> Option<f64> {
        // Interior mode requires both shapes above 1
        (self.alpha > 1.0 && self.beta > 1.0)
            .then(|| (self.alpha - 1.0) / (self.alpha + self.beta - 2.0))
    }

    fn entropy(&self) -> Option<f64> {
        self.inner.entropy()
    }
}
