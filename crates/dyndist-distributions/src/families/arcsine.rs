//! Arcsine distribution on a bounded support
//!
//! No statrs backend exists for this family, and its pdf/cdf/quantile are
//! elementary closed forms, so it is implemented directly. Both support
//! bounds are required parameters. The density is bimodal with poles at the
//! endpoints, so the mode slot is statically unsupported, as is entropy.

use std::f64::consts::{FRAC_PI_2, PI};

use dyndist_core::{Capabilities, ContinuousDistribution, Error, Param, ParamSpec, Result};

/// Arcsine distribution on `[min_x, max_x]`
#[derive(Debug, Clone)]
pub struct Arcsine {
    min_x: f64,
    max_x: f64,
}

impl Arcsine {
    pub const NAMES: &'static [&'static str] = &["arcsine", "arcsine_distribution"];

    const MIN: ParamSpec = ParamSpec::required("minx", &["min", "a", "lower"]);
    const MAX: ParamSpec = ParamSpec::required("maxx", &["max", "b", "upper"]);

    pub fn new(min_x: f64, max_x: f64) -> Result<Self> {
        if !min_x.is_finite() || !max_x.is_finite() || min_x >= max_x {
            return Err(Error::bad_interval("arcsine", min_x, max_x));
        }
        Ok(Self { min_x, max_x })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        let min_x = Self::MIN.resolve("arcsine", params)?;
        let max_x = Self::MAX.resolve("arcsine", params)?;
        Self::new(min_x, max_x)
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
}

impl ContinuousDistribution for Arcsine {
    fn name(&self) -> &'static str {
        "arcsine"
    }

    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < self.min_x || x > self.max_x {
            return 0.0;
        }
        // Poles at the endpoints: 1/0 overflows to +inf, per the sentinel
        // policy for overflow
        1.0 / (PI * ((x - self.min_x) * (self.max_x - x)).sqrt())
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= self.min_x {
            return 0.0;
        }
        if x >= self.max_x {
            return 1.0;
        }
        (2.0 / PI) * ((x - self.min_x) / self.width()).sqrt().asin()
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        let s = (FRAC_PI_2 * p).sin();
        self.min_x + self.width() * s * s
    }

    fn range(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            mode: false,
            entropy: false,
            ..Capabilities::ALL
        }
    }

    fn mean(&self) -> Option<f64> {
        Some(0.5 * (self.min_x + self.max_x))
    }

    fn variance(&self) -> Option<f64> {
        Some(self.width() * self.width() / 8.0)
    }

    fn skewness(&self) -> Option<f64> {
        Some(0.0)
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        Some(-1.5)
    }

    fn median(&self) -> f64 {
        0.5 * (self.min_x + self.max_x)
    }
}
