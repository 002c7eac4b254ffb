//! C ABI bridge for runtime-constructed distributions
//!
//! Foreign callers construct a distribution by name and a flat array of
//! string-keyed parameters, then evaluate it through a vtable of function
//! pointers bound at construction time:
//!
//! ```c
//! dyndist_vtable vt;
//! dyndist_param params[] = {{"shape", 2.5}, {"scale", 1.2}};
//! if (dyndist_make("gamma", params, 2, &vt)) {
//!     double density = vt.pdf(vt.ctx, 2.0);
//!     vt.free(vt.ctx);
//! }
//! ```
//!
//! The construction contract is a bare boolean: unknown name, missing
//! parameter, and rejected parameter all collapse to `false`, and nothing
//! unwinds across the boundary. The richer error taxonomy lives in the
//! native layer; this surface trades it for ABI stability.
//!
//! Ownership: the caller owns the handle behind `ctx` and must call the
//! vtable's `free` exactly once, after all other calls against that handle
//! have completed. The bridge does not defend against double-free.

mod vtable;

use std::ffi::{c_char, CStr};

use dyndist_core::sentinel::guard_bool;
use dyndist_core::Param;
use dyndist_distributions::make_distribution;

pub use vtable::{DistributionVTable, FreeOp, NullaryOp, RangeOp, UnaryOp};

/// One string-keyed parameter, C layout
#[repr(C)]
pub struct DistParam {
    pub key: *const c_char,
    pub value: f64,
}

/// Construct a distribution and bind its vtable into `*out`.
///
/// Returns `false` (leaving `*out` untouched) on any failure: null or
/// non-UTF-8 `name`, null `params` with nonzero `len`, unknown distribution
/// name, missing or invalid parameters.
///
/// # Safety
///
/// `name` must be a valid NUL-terminated string, `params` must point to
/// `len` readable records whose keys are valid NUL-terminated strings, and
/// `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn dyndist_make(
    name: *const c_char,
    params: *const DistParam,
    len: usize,
    out: *mut DistributionVTable,
) -> bool {
    if name.is_null() || out.is_null() || (params.is_null() && len > 0) {
        return false;
    }

    let name = match CStr::from_ptr(name).to_str() {
        Ok(n) => n,
        Err(_) => return false,
    };

    let raw: &[DistParam] = if len == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(params, len)
    };
    let mut flat = Vec::with_capacity(len);
    for record in raw {
        if record.key.is_null() {
            return false;
        }
        match CStr::from_ptr(record.key).to_str() {
            Ok(key) => flat.push(Param::new(key, record.value)),
            Err(_) => return false,
        }
    }

    // The factory is exception-free by contract; the guard enforces it even
    // if a backend assertion slips through
    let built = guard_bool(|| make_distribution(name, &flat).ok());

    match built {
        Some(dist) => {
            out.write(vtable::bind(dist));
            true
        }
        None => false,
    }
}
