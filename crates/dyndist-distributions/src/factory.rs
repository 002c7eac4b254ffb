//! Construct-by-name factory
//!
//! The registry is a declarative table: per family, the accepted
//! case-insensitive name spellings and a builder. Declaration order is fixed
//! and first match wins, though in practice the name sets are disjoint. The
//! name spellings, like the parameter alias tables, are a public
//! compatibility surface.

use dyndist_core::{ContinuousDistribution, Error, Param, Result};
use tracing::debug;

use crate::families::{
    Arcsine, Beta, Cauchy, ChiSquared, Exponential, FisherF, Gamma, Laplace, LogNormal, Normal,
    Pareto, StudentsT, Uniform, Weibull,
};

type BuildFn = fn(&[Param<'_>]) -> Result<Box<dyn ContinuousDistribution>>;

struct FamilyEntry {
    canonical: &'static str,
    names: &'static [&'static str],
    build: BuildFn,
}

macro_rules! builder {
    ($name:ident, $family:ident) => {
        fn $name(params: &[Param<'_>]) -> Result<Box<dyn ContinuousDistribution>> {
            $family::from_params(params).map(|d| Box::new(d) as Box<dyn ContinuousDistribution>)
        }
    };
}

builder!(build_arcsine, Arcsine);
builder!(build_beta, Beta);
builder!(build_cauchy, Cauchy);
builder!(build_chi_squared, ChiSquared);
builder!(build_exponential, Exponential);
builder!(build_fisher_f, FisherF);
builder!(build_gamma, Gamma);
builder!(build_laplace, Laplace);
builder!(build_log_normal, LogNormal);
builder!(build_normal, Normal);
builder!(build_pareto, Pareto);
builder!(build_students_t, StudentsT);
builder!(build_uniform, Uniform);
builder!(build_weibull, Weibull);

macro_rules! entry {
    ($canonical:literal, $family:ident, $build:ident) => {
        FamilyEntry {
            canonical: $canonical,
            names: $family::NAMES,
            build: $build,
        }
    };
}

const REGISTRY: &[FamilyEntry] = &[
    entry!("arcsine", Arcsine, build_arcsine),
    entry!("beta", Beta, build_beta),
    entry!("cauchy", Cauchy, build_cauchy),
    entry!("chisquared", ChiSquared, build_chi_squared),
    entry!("exponential", Exponential, build_exponential),
    entry!("fisherf", FisherF, build_fisher_f),
    entry!("gamma", Gamma, build_gamma),
    entry!("laplace", Laplace, build_laplace),
    entry!("lognormal", LogNormal, build_log_normal),
    entry!("normal", Normal, build_normal),
    entry!("pareto", Pareto, build_pareto),
    entry!("studentt", StudentsT, build_students_t),
    entry!("uniform", Uniform, build_uniform),
    entry!("weibull", Weibull, build_weibull),
];

/// Construct a distribution by name from a caller-ordered parameter list.
///
/// The name is matched ASCII-case-insensitively against every accepted
/// spelling. Failure is always an `Err` value: unknown name, missing required
/// parameter, or parameters the family rejects. A successful construction is
/// fully usable; there is no partially-initialized state.
pub fn make_distribution(
    name: &str,
    params: &[Param<'_>],
) -> Result<Box<dyn ContinuousDistribution>> {
    for entry in REGISTRY {
        if entry.names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            let dist = (entry.build)(params)?;
            debug!(family = entry.canonical, params = params.len(), "constructed distribution");
            return Ok(dist);
        }
    }
    debug!(name, "unknown distribution name");
    Err(Error::UnknownDistribution(name.to_string()))
}

/// Canonical names of every registered family, in declaration order
pub fn family_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|e| e.canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_reachable_by_canonical_name() {
        let params_for = |canonical: &str| -> Vec<Param<'static>> {
            match canonical {
                "arcsine" => vec![Param::new("minx", 0.0), Param::new("maxx", 1.0)],
                "beta" => vec![Param::new("alpha", 2.0), Param::new("beta", 3.0)],
                "chisquared" => vec![Param::new("df", 4.0)],
                "fisherf" => vec![Param::new("df1", 3.0), Param::new("df2", 7.0)],
                "gamma" | "weibull" => vec![Param::new("shape", 2.0)],
                "pareto" => vec![Param::new("scale", 1.0), Param::new("shape", 3.0)],
                "studentt" => vec![Param::new("df", 5.0)],
                _ => vec![],
            }
        };

        for canonical in family_names() {
            let params = params_for(canonical);
            let dist = make_distribution(canonical, &params)
                .unwrap_or_else(|e| panic!("{canonical} failed to construct: {e}"));
            assert_eq!(dist.name(), canonical);
        }
    }

    #[test]
    fn test_name_matching_is_case_insensitive() {
        let params = [Param::new("shape", 2.5), Param::new("scale", 1.2)];
        for name in ["gamma", "GAMMA", "Gamma", "GAMMA_DISTRIBUTION"] {
            assert!(make_distribution(name, &params).is_ok(), "{name} not accepted");
        }
    }

    #[test]
    fn test_unknown_name_fails_deterministically() {
        for _ in 0..3 {
            let err = make_distribution("zipf", &[]).unwrap_err();
            match err {
                Error::UnknownDistribution(name) => assert_eq!(name, "zipf"),
                other => panic!("expected UnknownDistribution, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_no_trimming_of_names() {
        let params = [Param::new("shape", 2.0)];
        assert!(make_distribution(" gamma", &params).is_err());
        assert!(make_distribution("gamma ", &params).is_err());
    }

    #[test]
    fn test_missing_parameter_is_not_unknown_name() {
        let err = make_distribution("gamma", &[]).unwrap_err();
        assert!(matches!(err, Error::MissingParameter { .. }));
    }

    #[test]
    fn test_name_sets_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for entry in REGISTRY {
            for name in entry.names {
                assert!(seen.insert(*name), "duplicate name spelling {name}");
            }
        }
    }

    #[test]
    fn test_declaration_order_is_stable() {
        let names: Vec<_> = family_names().collect();
        assert_eq!(names.first(), Some(&"arcsine"));
        assert_eq!(names.last(), Some(&"weibull"));
        assert_eq!(names.len(), 14);
    }
}
