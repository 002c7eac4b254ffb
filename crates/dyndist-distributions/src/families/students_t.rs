//! Student's t distribution
//!
//! Standard form only (location 0, scale 1), matching the single-parameter
//! surface: degrees of freedom.

use dyndist_core::sentinel::quantile_guard;
use dyndist_core::{ContinuousDistribution, Error, Param, ParamSpec, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::Distribution;

use crate::invert;

/// Student's t distribution with `df` degrees of freedom
#[derive(Debug, Clone)]
pub struct StudentsT {
    df: f64,
    inner: statrs::distribution::StudentsT,
}

impl StudentsT {
    pub const NAMES: &'static [&'static str] = &[
        "studentt",
        "studentst",
        "students_t",
        "t",
        "students_t_distribution",
    ];

    const DF: ParamSpec = ParamSpec::required("df", &["nu", "degreesoffreedom"]);

    pub fn new(df: f64) -> Result<Self> {
        if !df.is_finite() || df <= 0.0 {
            return Err(Error::non_positive("studentt", "df", df));
        }
        let inner =
            statrs::distribution::StudentsT::new(0.0, 1.0, df).map_err(Error::construction)?;
        Ok(Self { df, inner })
    }

    pub(crate) fn from_params(params: &[Param<'_>]) -> Result<Self> {
        Self::new(Self::DF.resolve("studentt", params)?)
    }

    pub fn df(&self) -> f64 {
        self.df
    }
}

impl ContinuousDistribution for StudentsT {
    fn name(&self) -> &'static str {
        "studentt"
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
        (f64::NEG_INFINITY, f64::INFINITY)
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
        // Defined for df > 4
        (self.df > 4.0).then(|| 6.0 / (self.df - 4.0))
    }

    fn mode(&self) -> Option<f64> {
        Some(0.0)
    }

    fn median(&self) -> f64 {
        // Exact by symmetry
        0.0
    }

    fn entropy(&self) -> Option<f64> {
        self.inner.entropy()
    }
}
