//! The vtable layout and its bound thunks
//!
//! Field order and nullability are ABI: `ctx` first and never null once
//! construction succeeds, then the operation slots in fixed order (each
//! individually nullable, null meaning "unsupported for this family"), then
//! the non-nullable `free`. Foreign callers must treat a null slot as "value
//! unavailable", not as an error.
//!
//! Every thunk routes through the panic guard; no Rust panic can unwind
//! across the `extern "C"` boundary. Numeric failures inside a thunk follow
//! the sentinel policy and arrive as NaN or infinity in the return value.

use std::ffi::c_void;

use dyndist_core::sentinel::guard;
use dyndist_core::ContinuousDistribution;

/// Pointwise operation bound to a handle
pub type UnaryOp = unsafe extern "C" fn(ctx: *mut c_void, x: f64) -> f64;
/// Descriptive statistic bound to a handle
pub type NullaryOp = unsafe extern "C" fn(ctx: *mut c_void) -> f64;
/// Support-bounds operation bound to a handle
pub type RangeOp = unsafe extern "C" fn(ctx: *mut c_void, lower: *mut f64, upper: *mut f64);
/// Handle release; called exactly once by contract
pub type FreeOp = unsafe extern "C" fn(ctx: *mut c_void);

/// Heap state behind `ctx`
pub(crate) struct Handle {
    pub(crate) dist: Box<dyn ContinuousDistribution>,
}

/// Vtable of operations bound to one constructed distribution.
///
/// `#[repr(C)]` with the documented field order; do not reorder.
#[repr(C)]
pub struct DistributionVTable {
    pub ctx: *mut c_void,
    pub pdf: Option<UnaryOp>,
    pub logpdf: Option<UnaryOp>,
    pub cdf: Option<UnaryOp>,
    pub sf: Option<UnaryOp>,
    pub hazard: Option<UnaryOp>,
    pub chf: Option<UnaryOp>,
    pub quantile: Option<UnaryOp>,
    pub quantile_complement: Option<UnaryOp>,
    pub range: Option<RangeOp>,
    pub mean: Option<NullaryOp>,
    pub variance: Option<NullaryOp>,
    pub skewness: Option<NullaryOp>,
    pub kurtosis: Option<NullaryOp>,
    pub kurtosis_excess: Option<NullaryOp>,
    pub mode: Option<NullaryOp>,
    pub median: Option<NullaryOp>,
    pub entropy: Option<NullaryOp>,
    pub free: FreeOp,
}

unsafe fn handle<'a>(ctx: *mut c_void) -> &'a Handle {
    &*(ctx as *const Handle)
}

macro_rules! unary_thunk {
    ($name:ident, $method:ident) => {
        unsafe extern "C" fn $name(ctx: *mut c_void, x: f64) -> f64 {
            let h = handle(ctx);
            guard(|| h.dist.$method(x))
        }
    };
}

macro_rules! stat_thunk {
    ($name:ident, $method:ident) => {
        unsafe extern "C" fn $name(ctx: *mut c_void) -> f64 {
            let h = handle(ctx);
            guard(|| h.dist.$method().unwrap_or(f64::NAN))
        }
    };
}

unary_thunk!(pdf_thunk, pdf);
unary_thunk!(logpdf_thunk, ln_pdf);
unary_thunk!(cdf_thunk, cdf);
unary_thunk!(sf_thunk, sf);
unary_thunk!(hazard_thunk, hazard);
unary_thunk!(chf_thunk, chf);
unary_thunk!(quantile_thunk, quantile);
unary_thunk!(quantile_complement_thunk, quantile_complement);

stat_thunk!(mean_thunk, mean);
stat_thunk!(variance_thunk, variance);
stat_thunk!(skewness_thunk, skewness);
stat_thunk!(kurtosis_thunk, kurtosis);
stat_thunk!(kurtosis_excess_thunk, kurtosis_excess);
stat_thunk!(mode_thunk, mode);
stat_thunk!(entropy_thunk, entropy);

unsafe extern "C" fn median_thunk(ctx: *mut c_void) -> f64 {
    let h = handle(ctx);
    guard(|| h.dist.median())
}

unsafe extern "C" fn range_thunk(ctx: *mut c_void, lower: *mut f64, upper: *mut f64) {
    let (lo, hi) = if ctx.is_null() {
        (f64::NAN, f64::NAN)
    } else {
        let h = handle(ctx);
        h.dist.range()
    };
    if !lower.is_null() {
        *lower = lo;
    }
    if !upper.is_null() {
        *upper = hi;
    }
}

unsafe extern "C" fn free_thunk(ctx: *mut c_void) {
    if !ctx.is_null() {
        drop(Box::from_raw(ctx as *mut Handle));
    }
}

/// Bind a vtable to a constructed distribution.
///
/// Slots for accessors the family does not expose are left null; everything
/// else is bound to the heap handle the returned `ctx` points at.
pub(crate) fn bind(dist: Box<dyn ContinuousDistribution>) -> DistributionVTable {
    let caps = dist.capabilities();
    let ctx = Box::into_raw(Box::new(Handle { dist })) as *mut c_void;

    DistributionVTable {
        ctx,
        pdf: Some(pdf_thunk),
        logpdf: Some(logpdf_thunk),
        cdf: Some(cdf_thunk),
        sf: Some(sf_thunk),
        hazard: Some(hazard_thunk),
        chf: Some(chf_thunk),
        quantile: Some(quantile_thunk),
        quantile_complement: Some(quantile_complement_thunk),
        range: Some(range_thunk),
        mean: caps.mean.then_some(mean_thunk as NullaryOp),
        variance: caps.variance.then_some(variance_thunk as NullaryOp),
        skewness: caps.skewness.then_some(skewness_thunk as NullaryOp),
        kurtosis: caps.kurtosis.then_some(kurtosis_thunk as NullaryOp),
        kurtosis_excess: caps.kurtosis.then_some(kurtosis_excess_thunk as NullaryOp),
        mode: caps.mode.then_some(mode_thunk as NullaryOp),
        median: Some(median_thunk),
        entropy: caps.entropy.then_some(entropy_thunk as NullaryOp),
        free: free_thunk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyndist_distributions::make_distribution;
    use dyndist_core::Param;

    fn gamma_vtable() -> DistributionVTable {
        let params = [Param::new("shape", 2.5), Param::new("scale", 1.2)];
        bind(make_distribution("gamma", &params).unwrap())
    }

    #[test]
    fn test_ctx_is_non_null_and_slots_bound() {
        let vt = gamma_vtable();
        assert!(!vt.ctx.is_null());
        assert!(vt.pdf.is_some());
        assert!(vt.quantile.is_some());
        assert!(vt.mean.is_some());
        assert!(vt.entropy.is_some());
        unsafe { (vt.free)(vt.ctx) };
    }

    #[test]
    fn test_thunks_match_native_calls() {
        let params = [Param::new("shape", 2.5), Param::new("scale", 1.2)];
        let native = make_distribution("gamma", &params).unwrap();
        let vt = gamma_vtable();
        unsafe {
            assert_eq!((vt.pdf.unwrap())(vt.ctx, 2.0), native.pdf(2.0));
            assert_eq!((vt.cdf.unwrap())(vt.ctx, 2.0), native.cdf(2.0));
            assert_eq!((vt.hazard.unwrap())(vt.ctx, 2.0), native.hazard(2.0));
            assert_eq!(
                (vt.quantile.unwrap())(vt.ctx, 0.5),
                native.quantile(0.5)
            );
            (vt.free)(vt.ctx);
        }
    }

    #[test]
    fn test_absent_moments_surface_as_nan() {
        // Student's t with df = 1 has no mean; the slot is bound (the family
        // exposes the accessor) but reports NaN at these parameters
        let params = [Param::new("df", 1.0)];
        let vt = bind(make_distribution("studentt", &params).unwrap());
        unsafe {
            assert!((vt.mean.unwrap())(vt.ctx).is_nan());
            (vt.free)(vt.ctx);
        }
    }

    #[test]
    fn test_statically_unsupported_slots_are_null() {
        let params = [Param::new("df1", 4.0), Param::new("df2", 10.0)];
        let vt = bind(make_distribution("fisherf", &params).unwrap());
        assert!(vt.entropy.is_none());
        assert!(vt.mean.is_some());
        unsafe { (vt.free)(vt.ctx) };

        let params = [Param::new("min", 0.0), Param::new("max", 1.0)];
        let vt = bind(make_distribution("arcsine", &params).unwrap());
        assert!(vt.entropy.is_none());
        assert!(vt.mode.is_none());
        assert!(vt.mean.is_some());
        unsafe { (vt.free)(vt.ctx) };
    }

    #[test]
    fn test_range_thunk_writes_bounds() {
        let vt = gamma_vtable();
        let (mut lo, mut hi) = (0.0_f64, 0.0_f64);
        unsafe {
            (vt.range.unwrap())(vt.ctx, &mut lo, &mut hi);
            (vt.free)(vt.ctx);
        }
        assert_eq!(lo, 0.0);
        assert!(hi.is_infinite());
    }

    #[test]
    fn test_range_thunk_null_ctx_yields_nan_pair() {
        let (mut lo, mut hi) = (0.0_f64, 0.0_f64);
        unsafe { range_thunk(std::ptr::null_mut(), &mut lo, &mut hi) };
        assert!(lo.is_nan());
        assert!(hi.is_nan());
    }
}
