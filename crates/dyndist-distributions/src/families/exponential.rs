//! Exponential distribution

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::Distribution;

/// Exponential distribution with rate `λ`
#[derive(Debug, Clone)]
pub struct Exponential {
    rate: f64,
    inner: statrs::distribution::Exp,
}

impl Exponential {
    pub const NAMES: &'static [&'static str] = &["exponential", "exp", "exponential_distribution"];

    const RATE: ParamSpec = ParamSpec::optional("lambda", &["rate"], 1.0);

    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::non_positive("exponential", "lambda", rate));
        }
        let inner = statrs::distribution::Exp::new(rate).map_err(Error::construction)?;
        Ok(Self { rate, inner })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        Self::new(Self::RATE.resolve("exponential", params)?)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl ContinuousDistribution for Exponential {
    fn name(&self) -> &'static str {
        "exponential"
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        // Closed form -ln(1-p)/λ
        quantile_guard(p, |p| -(-p).ln_1p() / self.rate)
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
        Some(6.0)
    }

    fn mode(&self) -> Option<f64> {
        Some(0.0)
    }

    fn entropy(&self) -> Option<f64> {
        self.inner.entropy()
    }
}
