//! Quantile inversion for families without a closed-form inverse cdf
//!
//! Newton-Raphson on the cdf with a bisection fallback, seeded by the
//! backend's own inverse-cdf estimate. The backend estimate alone is not
//! precise enough to satisfy the round-trip contract
//! `cdf(quantile(p)) ≈ p`, so it is polished here against the backend's cdf
//! and pdf until the residual is at floating-point resolution.

/// Invert `cdf` at probability `p` within `support`, starting from `seed`.
///
/// `p` must already be range-checked to `[0, 1]`. The endpoints map straight
/// to the support bounds, which may be infinite.
pub(crate) fn refine(
    cdf: impl Fn(f64) -> f64,
    pdf: impl Fn(f64) -> f64,
    p: f64,
    seed: f64,
    support: (f64, f64),
) -> f64 {
    let (min, max) = support;
    if p == 0.0 {
        return min;
    }
    if p == 1.0 {
        return max;
    }

    let (mut lo, mut hi) = bracket(&cdf, p, seed, support);
    let tol = 1e3 * f64::EPSILON;
    let mut x = seed.clamp(lo, hi);
    if !x.is_finite() {
        x = 0.5 * (lo + hi);
    }

    for _ in 0..100 {
        let residual = cdf(x) - p;
        if residual.abs() < tol {
            return x;
        }
        if residual < 0.0 {
            lo = x;
        } else {
            hi = x;
        }
        let slope = pdf(x);
        if slope > f64::EPSILON {
            let next = x - residual / slope;
            if next > lo && next < hi {
                x = next;
                continue;
            }
        }
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            // Interval exhausted at f64 resolution
            return x;
        }
        x = mid;
    }
    x
}

/// Finite bracket `[lo, hi]` with `cdf(lo) <= p <= cdf(hi)`.
///
/// Infinite support edges are replaced by a doubling search outward from the
/// seed; the loops are bounded, so a pathological cdf degrades to a wide
/// bracket instead of hanging.
fn bracket(cdf: &impl Fn(f64) -> f64, p: f64, seed: f64, support: (f64, f64)) -> (f64, f64) {
    let (min, max) = support;

    let mut lo = if min.is_finite() {
        min
    } else {
        let mut lo = if seed.is_finite() { seed.min(-1.0) } else { -1.0 };
        for _ in 0..600 {
            if cdf(lo) <= p || lo <= -1e300 {
                break;
            }
            lo *= 2.0;
        }
        lo
    };

    let mut hi = if max.is_finite() {
        max
    } else {
        let mut hi = if seed.is_finite() { seed.max(1.0) } else { 1.0 };
        for _ in 0..600 {
            if cdf(hi) >= p || hi >= 1e300 {
                break;
            }
            hi *= 2.0;
        }
        hi
    };

    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    (lo, hi)
}
