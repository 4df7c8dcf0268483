use crate::scalar::{cast, span, Scalar};
use crate::Error;
use num_traits::float::FloatCore;

/// Maps `x` from `[0, 1]` onto `[out_min, out_max]`.
///
/// Values outside `[0, 1]` are extrapolated. If the result does not fit into
/// `O` (for example a negative value for an unsigned type) `out_min` is
/// returned.
///
/// # Examples
///
/// ```
/// use range_mapping::map_range_01_to;
///
/// assert_eq!(map_range_01_to(0.5, 0u8, 255), 127);
/// assert_eq!(map_range_01_to(0.25, 10.0, 20.0), 12.5);
/// ```
pub fn map_range_01_to<F: FloatCore, O: Scalar>(x: F, out_min: O, out_max: O) -> O {
    from_unit(x, out_min, out_max).unwrap_or(out_min)
}

/// Maps `x` from `[0, 1]` onto `[0, out_max]`, which is a plain scale.
///
/// Returns zero if the result does not fit into `O`.
pub fn map_range_01_to_0n<F: FloatCore, O: Scalar>(x: F, out_max: O) -> O {
    from_unit(x, O::zero(), out_max).unwrap_or_else(|_| O::zero())
}

/// Maps `x` from `[in_min, in_max]` onto `[0, 1]`.
///
/// Values outside the input range give results outside `[0, 1]`. If the
/// input range is empty (`in_min == in_max`) this returns `in_min` itself,
/// not `0` or NaN. Any other value that cannot be represented as `F` gives
/// NaN.
///
/// # Examples
///
/// ```
/// use range_mapping::normalize_to_01;
///
/// let level: f32 = normalize_to_01(768u16, 512, 1024);
/// assert_eq!(level, 0.5);
///
/// let degenerate: f64 = normalize_to_01(5, 5, 5);
/// assert_eq!(degenerate, 5.0);
/// ```
pub fn normalize_to_01<T: Scalar, F: FloatCore>(x: T, in_min: T, in_max: T) -> F {
    match to_unit(x, in_min, in_max) {
        Ok(value) => cast(value).unwrap_or_else(|_| F::nan()),
        Err(Error::EmptyRange) => {
            log::debug!("normalize_to_01: empty input range, returning in_min");
            cast(in_min).unwrap_or_else(|_| F::nan())
        }
        Err(_) => F::nan(),
    }
}

/// Maps `x` from `[0, in_max]` onto `[0, 1]`.
///
/// Shorthand for `normalize_to_01(x, 0, in_max)`, so `in_max == 0` returns
/// `0`.
///
/// # Examples
///
/// ```
/// use range_mapping::map_range_0n_to_01;
///
/// let level: f32 = map_range_0n_to_01(1024u16, 4096);
/// assert_eq!(level, 0.25);
/// ```
pub fn map_range_0n_to_01<T: Scalar, F: FloatCore>(x: T, in_max: T) -> F {
    normalize_to_01(x, T::zero(), in_max)
}

/// Maps `x` from `[0, in_max]` onto `[1, 0]`, i.e. `1 - x / in_max`.
///
/// `in_max == 0` returns `1`.
///
/// # Examples
///
/// ```
/// use range_mapping::map_range_0n_to_10;
///
/// let level: f64 = map_range_0n_to_10(256, 1024);
/// assert_eq!(level, 0.75);
/// ```
pub fn map_range_0n_to_10<T: Scalar, F: FloatCore>(x: T, in_max: T) -> F {
    F::one() - map_range_0n_to_01::<T, F>(x, in_max)
}

fn from_unit<F: FloatCore, O: Scalar>(x: F, out_min: O, out_max: O) -> Result<O, Error> {
    let x: f64 = cast(x)?;
    let out_min: f64 = cast(out_min)?;
    let out_max: f64 = cast(out_max)?;

    cast(x * (out_max - out_min) + out_min)
}

fn to_unit<T: Scalar>(x: T, in_min: T, in_max: T) -> Result<f64, Error> {
    let (in_span, in_descending) = span(in_min, in_max);
    if in_span == T::zero() {
        return Err(Error::EmptyRange);
    }

    let (offset, below) = span(in_min, x);
    let ratio = cast::<_, f64>(offset)? / cast::<_, f64>(in_span)?;

    if below ^ in_descending {
        Ok(-ratio)
    } else {
        Ok(ratio)
    }
}
