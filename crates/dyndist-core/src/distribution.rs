//! The uniform evaluation contract for continuous distributions
//!
//! Every distribution family, however it is parameterized internally, exposes
//! the same capability set: pointwise functions (pdf, cdf, survival, hazard,
//! quantiles) and descriptive statistics (moments, mode, median, entropy).
//! Dynamic dispatch over this trait is what lets the factory hand back a
//! `Box<dyn ContinuousDistribution>` for a name chosen at runtime.
//!
//! Pointwise functions follow the sentinel policy: they are total, returning
//! NaN for domain violations and `+inf` for overflow. Descriptive statistics
//! return `Option<f64>`, `None` meaning either "this family does not expose
//! the accessor" or "undefined at these parameters"; the static half of that
//! distinction is described separately by [`Capabilities`], so a dispatch
//! surface can leave statically unsupported slots unbound.
//!
//! A constructed instance is immutable, so concurrent reads from multiple
//! threads need no locking; the `Send + Sync` bounds state that.

use std::fmt::Debug;

/// Static availability of the optional accessors of a family.
///
/// These flags describe what the family can ever answer, not what the current
/// parameters make defined: Student's t with one degree of freedom has a mean
/// accessor (`mean: true`) that reports `None` at those parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub mean: bool,
    pub variance: bool,
    pub skewness: bool,
    pub kurtosis: bool,
    pub mode: bool,
    pub entropy: bool,
}

impl Capabilities {
    /// Every optional accessor available
    pub const ALL: Self = Self {
        mean: true,
        variance: true,
        skewness: true,
        kurtosis: true,
        mode: true,
        entropy: true,
    };

    /// Everything except entropy
    pub const fn without_entropy() -> Self {
        Self {
            entropy: false,
            ..Self::ALL
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// A continuous univariate distribution with the full evaluation surface.
///
/// Implementations provide `pdf`, `cdf`, `quantile`, and `range`; the
/// remaining pointwise functions have fixed compositions supplied as default
/// methods so every family inherits identical edge semantics.
pub trait ContinuousDistribution: Debug + Send + Sync {
    /// Canonical family name, lowercase
    fn name(&self) -> &'static str;

    /// Probability density at `x`
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the density.
    ///
    /// Fixed as the log of `pdf`, not a separately derived log-density: a
    /// zero density yields `-inf` and a negative or NaN density yields NaN,
    /// matching the sentinel policy without family-specific reasoning.
    fn ln_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative distribution function at `x`
    fn cdf(&self, x: f64) -> f64;

    /// Survival function (upper tail), `1 - cdf(x)`
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Inverse cdf at probability `p`; NaN outside `[0, 1]`
    fn quantile(&self, p: f64) -> f64;

    /// Inverse survival function at probability `q`; NaN outside `[0, 1]`
    fn quantile_complement(&self, q: f64) -> f64 {
        if q.is_nan() || !(0.0..=1.0).contains(&q) {
            f64::NAN
        } else {
            self.quantile(1.0 - q)
        }
    }

    /// Instantaneous failure rate `pdf(x) / sf(x)`.
    ///
    /// Two fixed edges: a density of exactly zero gives hazard exactly zero
    /// (never a 0/0 NaN), and a ratio that overflows gives NaN rather than
    /// `+inf` — an overflowing hazard is a numerically meaningless ratio, not
    /// a true infinite hazard.
    fn hazard(&self, x: f64) -> f64 {
        let density = self.pdf(x);
        if density == 0.0 {
            return 0.0;
        }
        let ratio = density / self.sf(x);
        if ratio.is_infinite() {
            f64::NAN
        } else {
            ratio
        }
    }

    /// Cumulative hazard `-ln(sf(x))`
    fn chf(&self, x: f64) -> f64 {
        -self.sf(x).ln()
    }

    /// Theoretical support bounds, independent of parameter finiteness
    fn range(&self) -> (f64, f64);

    /// Which optional accessors this family exposes at all
    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    fn mean(&self) -> Option<f64> {
        None
    }

    fn variance(&self) -> Option<f64> {
        None
    }

    fn std_dev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    fn skewness(&self) -> Option<f64> {
        None
    }

    /// Kurtosis proper, `kurtosis_excess + 3`
    fn kurtosis(&self) -> Option<f64> {
        self.kurtosis_excess().map(|k| k + 3.0)
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        None
    }

    fn mode(&self) -> Option<f64> {
        None
    }

    /// Median; `quantile(0.5)` unless the family knows an exact center
    fn median(&self) -> f64 {
        self.quantile(0.5)
    }

    fn entropy(&self) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Closed-form test double: Exponential(1)
    #[derive(Debug)]
    struct UnitExponential;

    impl ContinuousDistribution for UnitExponential {
        fn name(&self) -> &'static str {
            "unit_exponential"
        }

        fn pdf(&self, x: f64) -> f64 {
            if x < 0.0 {
                0.0
            } else {
                (-x).exp()
            }
        }

        fn cdf(&self, x: f64) -> f64 {
            if x < 0.0 {
                0.0
            } else {
                1.0 - (-x).exp()
            }
        }

        fn quantile(&self, p: f64) -> f64 {
            if p.is_nan() || !(0.0..=1.0).contains(&p) {
                f64::NAN
            } else {
                -(1.0 - p).ln()
            }
        }

        fn range(&self) -> (f64, f64) {
            (0.0, f64::INFINITY)
        }

        fn mean(&self) -> Option<f64> {
            Some(1.0)
        }

        fn variance(&self) -> Option<f64> {
            Some(1.0)
        }
    }

    #[test]
    fn test_ln_pdf_is_log_of_pdf() {
        let d = UnitExponential;
        assert_eq!(d.ln_pdf(2.0), d.pdf(2.0).ln());
        // Zero density logs to -inf, outside the support
        assert_eq!(d.ln_pdf(-1.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_sf_complements_cdf() {
        let d = UnitExponential;
        let x = 1.3;
        assert!((d.cdf(x) + d.sf(x) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_hazard_zero_density_edge() {
        let d = UnitExponential;
        // Density is exactly zero left of the support: hazard must be exactly
        // zero, not NaN from 0/1
        assert_eq!(d.hazard(-5.0), 0.0);
    }

    #[test]
    fn test_hazard_matches_ratio_inside_support() {
        let d = UnitExponential;
        let x = 0.7;
        let expected = d.pdf(x) / d.sf(x);
        assert_relative_eq!(d.hazard(x), expected, epsilon = 1e-12);
        // Exponential hazard is constant 1
        assert_relative_eq!(d.hazard(x), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hazard_overflow_is_nan() {
        /// Degenerate double whose sf underflows to zero while pdf stays positive
        #[derive(Debug)]
        struct Spike;
        impl ContinuousDistribution for Spike {
            fn name(&self) -> &'static str {
                "spike"
            }
            fn pdf(&self, _x: f64) -> f64 {
                1.0
            }
            fn cdf(&self, _x: f64) -> f64 {
                1.0
            }
            fn quantile(&self, _p: f64) -> f64 {
                0.0
            }
            fn range(&self) -> (f64, f64) {
                (f64::NEG_INFINITY, f64::INFINITY)
            }
        }
        assert!(Spike.hazard(0.0).is_nan());
    }

    #[test]
    fn test_chf() {
        let d = UnitExponential;
        // -ln(sf(x)) = x for the unit exponential
        assert_relative_eq!(d.chf(2.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quantile_complement() {
        let d = UnitExponential;
        let q = 0.2;
        assert!((d.quantile_complement(q) - d.quantile(0.8)).abs() < 1e-12);
        assert!(d.quantile_complement(-0.1).is_nan());
        assert!(d.quantile_complement(1.1).is_nan());
    }

    #[test]
    fn test_median_default_is_quantile_half() {
        let d = UnitExponential;
        assert_eq!(d.median(), d.quantile(0.5));
    }

    #[test]
    fn test_kurtosis_offset() {
        #[derive(Debug)]
        struct WithExcess;
        impl ContinuousDistribution for WithExcess {
            fn name(&self) -> &'static str {
                "with_excess"
            }
            fn pdf(&self, _x: f64) -> f64 {
                0.0
            }
            fn cdf(&self, _x: f64) -> f64 {
                0.0
            }
            fn quantile(&self, _p: f64) -> f64 {
                0.0
            }
            fn range(&self) -> (f64, f64) {
                (0.0, 1.0)
            }
            fn kurtosis_excess(&self) -> Option<f64> {
                Some(6.0)
            }
        }
        assert_eq!(WithExcess.kurtosis(), Some(9.0));
    }

    #[test]
    fn test_default_capabilities() {
        assert_eq!(UnitExponential.capabilities(), Capabilities::ALL);
        assert!(!Capabilities::without_entropy().entropy);
        assert!(Capabilities::without_entropy().mean);
    }

    #[test]
    fn test_trait_objects_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ContinuousDistribution>();
    }
}
