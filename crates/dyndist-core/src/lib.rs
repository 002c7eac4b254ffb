//! Core traits and policies for runtime-constructed distributions
//!
//! This crate provides the foundation the rest of the workspace builds on:
//!
//! 1. **Evaluation contract** - the [`ContinuousDistribution`] trait, a fixed
//!    capability set (pdf/cdf/quantile/hazard/moments) every family exposes
//! 2. **Parameter resolution** - string-keyed, alias-based, case-insensitive
//!    lookup over caller-ordered parameter lists
//! 3. **Sentinel policy** - the exception-free numeric boundary (NaN for
//!    domain errors, `+inf` for overflow, panics contained)
//!
//! # Design Philosophy
//!
//! - **Total evaluation**: pointwise functions never fail, they encode
//!   failure in the value; errors exist only at construction time
//! - **Declarative alias tables**: accepted parameter spellings are data,
//!   not conditional logic, so the compatibility surface stays auditable
//! - **Immutable instances**: a constructed distribution never changes, so
//!   concurrent reads need no synchronization

pub mod distribution;
pub mod error;
pub mod params;
pub mod sentinel;

// Re-export core types
pub use distribution::{Capabilities, ContinuousDistribution};
pub use error::{Error, Result};
pub use params::{Param, ParamSpec};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Capabilities, ContinuousDistribution, Error, Param, ParamSpec, Result};
}
