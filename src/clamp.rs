use crate::scalar::{cast, Scalar};
use crate::Error;
use num_traits::float::FloatCore;

/// Largest amount by which [`overflow01`] accepts a value above `1.0`.
pub const OVERFLOW01_MAX_STEPS: u32 = 1 << 16;

/// Restricts `n` to `[lower, upper]`.
///
/// Works for any `PartialOrd` type. Unlike [`f32::clamp`] this never panics:
/// with `lower > upper` the result is `lower`, and a NaN `n` also gives
/// `lower`.
///
/// # Examples
///
/// ```
/// use range_mapping::clamp;
///
/// assert_eq!(clamp(12, 0, 10), 10);
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// ```
pub fn clamp<T: PartialOrd>(n: T, lower: T, upper: T) -> T {
    let n = if upper < n { upper } else { n };

    if lower < n {
        n
    } else {
        lower
    }
}

/// Restricts `n` to `[0, 1]`.
pub fn clamp01<T: Scalar>(n: T) -> T {
    clamp(n, T::zero(), T::one())
}

/// Restricts `x` to at most `top`. There is no lower bound.
pub fn limit<T: PartialOrd>(x: T, top: T) -> T {
    if x > top {
        top
    } else {
        x
    }
}

/// Wraps a normalized value that overflowed past `1.0` back into
/// `(-inf, 1.0]` by subtracting `1.0` until it fits.
///
/// Values at or below `1.0` are returned unchanged, negative values are not
/// wrapped. Returns [`Error::NonFinite`] for NaN and infinities and
/// [`Error::OutOfRange`] when `x` exceeds `1.0` by more than
/// [`OVERFLOW01_MAX_STEPS`], so the subtraction loop is always bounded.
///
/// # Examples
///
/// ```
/// use range_mapping::{overflow01, Error};
///
/// assert_eq!(overflow01(2.25), Ok(0.25));
/// assert_eq!(overflow01(1.0), Ok(1.0));
/// assert_eq!(overflow01(f32::NAN), Err(Error::NonFinite));
/// ```
pub fn overflow01<F: FloatCore>(x: F) -> Result<F, Error> {
    if !x.is_finite() {
        log::warn!("overflow01: rejecting non-finite value");
        return Err(Error::NonFinite);
    }

    let one = F::one();
    let max_steps: F = cast(OVERFLOW01_MAX_STEPS)?;
    if x - one > max_steps {
        log::warn!("overflow01: value exceeds 1.0 by more than {}", OVERFLOW01_MAX_STEPS);
        return Err(Error::OutOfRange);
    }

    let mut x = x;
    while x > one {
        x = x - one;
    }

    Ok(x)
}
