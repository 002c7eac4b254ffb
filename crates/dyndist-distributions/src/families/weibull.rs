//! Weibull distribution

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::function::gamma::gamma;
use statrs::statistics::Distribution;

/// Weibull distribution with shape `k` and scale `λ`
#[derive(Debug, Clone)]
pub struct Weibull {
    shape: f64,
    scale: f64,
    inner: statrs::distribution::Weibull,
}

impl Weibull {
    pub const NAMES: &'static [&'static str] = &["weibull", "weibull_distribution"];

    const SHAPE: ParamSpec = ParamSpec::required("shape", &["k"]);
    const SCALE: ParamSpec = ParamSpec::optional("scale", &["lambda"], 1.0);

    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(Error::non_positive("weibull", "shape", shape));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::non_positive("weibull", "scale", scale));
        }
        let inner =
            statrs::distribution::Weibull::new(shape, scale).map_err(Error::construction)?;
        Ok(Self {
            shape,
            scale,
            inner,
        })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let shape = Self::SHAPE.resolve("weibull", params)?;
        let scale = Self::SCALE.resolve("weibull", params)?;
        Self::new(shape, scale)
    }

    /// Γ(1 + i/k), the building block of the raw moments
    fn gamma_moment(&self, i: f64) -> f64 {
        gamma(1.0 + i / self.shape)
    }
}

impl ContinuousDistribution for Weibull {
    fn name(&self) -> &'static str {
        "weibull"
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        // Closed form λ(-ln(1-p))^{1/k}
        quantile_guard(p, |p| self.scale * (-(-p).ln_1p()).powf(1.0 / self.shape))
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
        let g1 = self.gamma_moment(1.0);
        let g2 = self.gamma_moment(2.0);
        let g3 = self.gamma_moment(3.0);
        let g4 = self.gamma_moment(4.0);
        let var = g2 - g1 * g1;
        let num = -6.0 * g1.powi(4) + 12.0 * g1 * g1 * g2 - 3.0 * g2 * g2 - 4.0 * g1 * g3 + g4;
        Some(num / (var * var))
    }

    fn mode(&self) -> Option<f64> {
        if self.shape < 1.0 {
            // Density pole at zero, no interior maximum
            return None;
        }
        if self.shape == 1.0 {
            return Some(0.0);
        }
        Some(self.scale * ((self.shape - 1.0) / self.shape).powf(1.0 / self.shape))
    }

    fn entropy(&self) -> Option<f64> {
        self.inner.entropy()
    }
}
