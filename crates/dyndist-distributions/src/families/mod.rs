//! Distribution families
//!
//! One module per family. Every family validates its parameters at
//! construction, wraps a statrs backend instance (or closed forms where no
//! backend exists), and implements the uniform evaluation contract.

pub mod arcsine;
pub mod beta;
pub mod cauchy;
pub mod chi_squared;
pub mod exponential;
pub mod fisher_f;
pub mod gamma;
pub mod laplace;
pub mod log_normal;
pub mod normal;
pub mod pareto;
pub mod students_t;
pub mod uniform;
pub mod weibull;

pub use arcsine::Arcsine;
pub use beta::Beta;
pub use cauchy::Cauchy;
pub use chi_squared::ChiSquared;
pub use exponential::Exponential;
pub use fisher_f::FisherF;
pub use gamma::Gamma;
pub use laplace::Laplace;
pub use log_normal::LogNormal;
pub use normal::Normal;
pub use pareto::Pareto;
pub use students_t::StudentsT;
pub use uniform::Uniform;
pub use weibull::Weibull;
