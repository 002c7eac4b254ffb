//! Runtime-constructed probability distributions with a uniform evaluation
//! surface
//!
//! Construct a distribution family by name and a string-keyed parameter list
//! at runtime, then evaluate a fixed capability set through one interface:
//! pointwise functions (pdf, cdf, survival, hazard, quantiles) and
//! descriptive statistics (moments, mode, median, entropy).
//!
//! The workspace is organized by concern:
//!
//! - `dyndist-core`: the evaluation contract, parameter alias resolution,
//!   and the sentinel error policy
//! - `dyndist-distributions`: the families, the construct-by-name factory,
//!   and the caller-facing [`DynamicDistribution`] wrapper
//! - `dyndist-ffi`: a C ABI vtable bridge over the same factory
//!
//! # Example
//!
//! ```rust
//! use dyndist::DynamicDistribution;
//!
//! let d = DynamicDistribution::new("gamma", &[("shape", 2.5), ("scale", 1.2)]).unwrap();
//!
//! let x = d.quantile(0.5);
//! assert!((d.cdf(x) - 0.5).abs() < 1e-8);
//! assert!((d.mean().unwrap() - 3.0).abs() < 1e-12);
//!
//! // Parameter keys and distribution names are case-insensitive, with
//! // documented aliases
//! let same = DynamicDistribution::new("GAMMA", &[("K", 2.5), ("Theta", 1.2)]).unwrap();
//! assert_eq!(d.pdf(2.0), same.pdf(2.0));
//! ```

// Re-export workspace crates
pub use dyndist_core::{Capabilities, ContinuousDistribution, Error, Param, ParamSpec, Result};

pub use dyndist_distributions::{
    family_names, make_distribution, Arcsine, Beta, Cauchy, ChiSquared, DynamicDistribution,
    Exponential, FisherF, Gamma, Laplace, LogNormal, Normal, Pareto, StudentsT, Uniform, Weibull,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        make_distribution, Capabilities, ContinuousDistribution, DynamicDistribution, Error,
        Param, Result,
    };
}
