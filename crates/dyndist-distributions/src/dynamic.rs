//! Caller-facing wrapper over the factory
//!
//! [`DynamicDistribution`] owns the constructed instance for its whole
//! lifetime; release is automatic and happens exactly once on every exit
//! path, including construction failures (nothing to release — failure never
//! yields a partial instance).
//!
//! The surface is deliberately asymmetric. Pointwise functions return raw
//! floats: NaN at a given `x` is meaningful information about that point.
//! Descriptive statistics return `Option<f64>` and additionally fold
//! non-finite values into `None`: an undefined mean is better modeled as "no
//! mean" than as a NaN the caller must probe for.

use dyndist_core::sentinel::finite;
use dyndist_core::{Capabilities, ContinuousDistribution, Param, Result};

use crate::factory::make_distribution;

/// A distribution constructed by name at runtime
#[derive(Debug)]
pub struct DynamicDistribution {
    inner: Box<dyn ContinuousDistribution>,
}

impl DynamicDistribution {
    /// Construct from a name and caller-ordered `(key, value)` pairs.
    ///
    /// Duplicate aliases of one logical parameter are resolved by the
    /// first-match rule, so the pair order is significant.
    pub fn new(name: &str, params: &[(&str, f64)]) -> Result<Self> {
        let flat: Vec<Param<'_>> = params.iter().map(|&(k, v)| Param::new(k, v)).collect();
        Ok(Self {
            inner: make_distribution(name, &flat)?,
        })
    }

    /// Wrap an already-constructed instance
    pub fn from_boxed(inner: Box<dyn ContinuousDistribution>) -> Self {
        Self { inner }
    }

    /// Canonical family name
    pub fn family(&self) -> &'static str {
        self.inner.name()
    }

    /// Static capability flags of the underlying family
    pub fn capabilities(&self) -> Capabilities {
        self.inner.capabilities()
    }

    // Pointwise functions: raw values, NaN/inf preserved

    pub fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    pub fn ln_pdf(&self, x: f64) -> f64 {
        self.inner.ln_pdf(x)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    pub fn sf(&self, x: f64) -> f64 {
        self.inner.sf(x)
    }

    pub fn hazard(&self, x: f64) -> f64 {
        self.inner.hazard(x)
    }

    pub fn chf(&self, x: f64) -> f64 {
        self.inner.chf(x)
    }

    pub fn quantile(&self, p: f64) -> f64 {
        self.inner.quantile(p)
    }

    pub fn quantile_complement(&self, q: f64) -> f64 {
        self.inner.quantile_complement(q)
    }

    // Always-available descriptors

    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }

    pub fn median(&self) -> f64 {
        self.inner.median()
    }

    // Descriptive statistics: absent when unsupported, undefined, or non-finite

    pub fn mean(&self) -> Option<f64> {
        self.inner.mean().and_then(finite)
    }

    pub fn variance(&self) -> Option<f64> {
        self.inner.variance().and_then(finite)
    }

    pub fn std_dev(&self) -> Option<f64> {
        self.inner.std_dev().and_then(finite)
    }

    pub fn skewness(&self) -> Option<f64> {
        self.inner.skewness().and_then(finite)
    }

    pub fn kurtosis(&self) -> Option<f64> {
        self.inner.kurtosis().and_then(finite)
    }

    pub fn kurtosis_excess(&self) -> Option<f64> {
        self.inner.kurtosis_excess().and_then(finite)
    }

    pub fn mode(&self) -> Option<f64> {
        self.inner.mode().and_then(finite)
    }

    pub fn entropy(&self) -> Option<f64> {
        self.inner.entropy().and_then(finite)
    }
}
