//! Distribution families and the construct-by-name factory
//!
//! This crate provides the concrete half of the workspace:
//!
//! - [`families`] - one module per distribution family, each implementing the
//!   uniform evaluation contract over a statrs backend (or closed forms where
//!   no backend exists)
//! - [`factory`] - the declarative name registry and
//!   [`make_distribution`](factory::make_distribution)
//! - [`dynamic`] - [`DynamicDistribution`](dynamic::DynamicDistribution), the
//!   caller-facing wrapper with scoped ownership and the raw-versus-optional
//!   result asymmetry
//!
//! # Example
//!
//! ```rust
//! use dyndist_distributions::DynamicDistribution;
//!
//! let d = DynamicDistribution::new("gamma", &[("shape", 2.5), ("scale", 1.2)]).unwrap();
//! let x = d.quantile(0.5);
//! assert!((d.cdf(x) - 0.5).abs() < 1e-8);
//! assert!((d.mean().unwrap() - 3.0).abs() < 1e-12);
//! ```

pub mod dynamic;
pub mod factory;
pub mod families;
mod invert;

pub use dynamic::DynamicDistribution;
pub use factory::{family_names, make_distribution};

pub use families::{
    Arcsine, Beta, Cauchy, ChiSquared, Exponential, FisherF, Gamma, Laplace, LogNormal, Normal,
    Pareto, StudentsT, Uniform, Weibull,
};
