//! Float comparison helpers for tests.
//!
//! Coordinate math should be checked in ULPs (units in the last place)
//! rather than absolute epsilons: the right tolerance for a kilometer-scale
//! coordinate is very different from the right tolerance for a radian-scale
//! angle, while a ULP bound scales with the magnitude automatically.

use crate::Vector3;

/// Maps a float to an ordered integer so that ULP distance is integer distance.
#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

/// Number of representable floats between `a` and `b`.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    let ua = f64_to_ordered_u64(a);
    let ub = f64_to_ordered_u64(b);
    ua.abs_diff(ub)
}

/// Asserts two floats are within `max_ulp` of each other, with context.
#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Asserts two floats are within `max_ulp` of each other.
#[track_caller]
pub fn assert_float_eq(a: f64, b: f64, max_ulp: u64) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite());
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Asserts two vectors match componentwise within `max_ulp`.
#[track_caller]
pub fn assert_vec3_eq(a: &Vector3, b: &Vector3, max_ulp: u64, ctx: &str) {
    assert_ulp_le(a.x, b.x, max_ulp, &format!("{} (x)", ctx));
    assert_ulp_le(a.y, b.y, max_ulp, &format!("{} (y)", ctx));
    assert_ulp_le(a.z, b.z, max_ulp, &format!("{} (z)", ctx));
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}
