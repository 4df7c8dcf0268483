use crate::clamp::clamp;
use crate::scalar::{cast, span, Scalar};
use crate::Error;

/// Linearly maps `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values outside the input range are extrapolated. Either range may be
/// descending, and unsigned types are handled without underflow as long as
/// the result itself is representable. Integer results are truncated toward
/// zero.
///
/// Returns [`Error::EmptyRange`] if `in_min == in_max`.
///
/// # Examples
///
/// ```
/// use range_mapping::{try_map_range, Error};
///
/// assert_eq!(try_map_range(5, 0, 10, 0, 100), Ok(50));
/// assert_eq!(try_map_range(20u16, 0, 10, 100, 50), Ok(0));
/// assert_eq!(try_map_range(5, 3, 3, 0, 100), Err(Error::EmptyRange));
/// ```
pub fn try_map_range<T: Scalar>(
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
) -> Result<T, Error> {
    let (in_span, in_descending) = span(in_min, in_max);
    if in_span == T::zero() {
        return Err(Error::EmptyRange);
    }

    let (offset, below) = span(in_min, x);
    let (out_span, out_descending) = span(out_min, out_max);
    let delta = offset * out_span / in_span;

    if below ^ in_descending ^ out_descending {
        Ok(out_min - delta)
    } else {
        Ok(out_min + delta)
    }
}

/// Linearly maps `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Same as [`try_map_range`], except that an empty input range
/// (`in_min == in_max`) returns `out_min` for every `x`, for integer and
/// float types alike.
///
/// # Examples
///
/// ```
/// use range_mapping::map_range;
///
/// assert_eq!(map_range(512, 0, 1024, 0, 255), 127);
/// assert_eq!(map_range(0.25, 0.0, 1.0, -1.0, 1.0), -0.5);
/// assert_eq!(map_range(7, 3, 3, 10, 20), 10);
/// ```
pub fn map_range<T: Scalar>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    try_map_range(x, in_min, in_max, out_min, out_max).unwrap_or_else(|_| {
        log::debug!("map_range: empty input range, returning out_min");
        out_min
    })
}

/// Linearly maps `x` between ranges of different numeric types, for example
/// ADC counts onto a float voltage.
///
/// The arithmetic is done in `f64` and the result is cast to `O`; float to
/// integer results are truncated toward zero. Returns
/// [`Error::EmptyRange`] if `in_min == in_max` and
/// [`Error::Unrepresentable`] if the result does not fit into `O`.
///
/// # Examples
///
/// ```
/// use range_mapping::{try_map_range_as, Error};
///
/// assert_eq!(try_map_range_as(2048u16, 0, 4096, 0.0f32, 3.3), Ok(1.65));
/// assert_eq!(try_map_range_as(2.0f64, 0.0, 1.0, 0u8, 200), Err(Error::Unrepresentable));
/// ```
pub fn try_map_range_as<I: Scalar, O: Scalar>(
    x: I,
    in_min: I,
    in_max: I,
    out_min: O,
    out_max: O,
) -> Result<O, Error> {
    let (in_span, in_descending) = span(in_min, in_max);
    if in_span == I::zero() {
        return Err(Error::EmptyRange);
    }

    let (offset, below) = span(in_min, x);
    let mut offset: f64 = cast(offset)?;
    if below ^ in_descending {
        offset = -offset;
    }

    let in_span: f64 = cast(in_span)?;
    let out_min_f: f64 = cast(out_min)?;
    let out_max_f: f64 = cast(out_max)?;

    cast(offset * (out_max_f - out_min_f) / in_span + out_min_f)
}

/// Mixed-type variant of [`map_range`]. Any failure of [`try_map_range_as`]
/// returns `out_min`.
///
/// # Examples
///
/// ```
/// use range_mapping::map_range_as;
///
/// let duty: u16 = map_range_as(0.5f32, 0.0, 1.0, 1000, 2000);
/// assert_eq!(duty, 1500);
/// ```
pub fn map_range_as<I: Scalar, O: Scalar>(
    x: I,
    in_min: I,
    in_max: I,
    out_min: O,
    out_max: O,
) -> O {
    try_map_range_as(x, in_min, in_max, out_min, out_max).unwrap_or_else(|err| {
        log::debug!("map_range_as: {}, returning out_min", err);
        out_min
    })
}

/// Clamps `x` into the input range, then maps it with [`map_range`], so the
/// result never leaves `[out_min, out_max]`.
///
/// The input range may be given in either order.
///
/// # Examples
///
/// ```
/// use range_mapping::map_range_clamped;
///
/// assert_eq!(map_range_clamped(-5, 0, 10, 0, 100), 0);
/// assert_eq!(map_range_clamped(15, 0, 10, 0, 100), 100);
/// assert_eq!(map_range_clamped(15, 10, 0, 0, 100), 0);
/// ```
pub fn map_range_clamped<T: Scalar>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    let x = clamp_to_input(x, in_min, in_max);
    map_range(x, in_min, in_max, out_min, out_max)
}

/// Mixed-type variant of [`map_range_clamped`].
pub fn map_range_clamped_as<I: Scalar, O: Scalar>(
    x: I,
    in_min: I,
    in_max: I,
    out_min: O,
    out_max: O,
) -> O {
    let x = clamp_to_input(x, in_min, in_max);
    map_range_as(x, in_min, in_max, out_min, out_max)
}

fn clamp_to_input<T: PartialOrd>(x: T, in_min: T, in_max: T) -> T {
    if in_max < in_min {
        clamp(x, in_max, in_min)
    } else {
        clamp(x, in_min, in_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn map_range() {
        assert_eq!(super::map_range(0, 0, 10, 0, 100), 0);
        assert_eq!(super::map_range(2, 0, 10, 0, 100), 20);
        assert_eq!(super::map_range(5, 0, 10, 0, 100), 50);
        assert_eq!(super::map_range(8, 0, 10, 0, 100), 80);
        assert_eq!(super::map_range(10, 0, 10, 0, 100), 100);
    }

    #[test]
    fn map_range_flipped_output() {
        assert_eq!(super::map_range(0u32, 0, 10, 100, 0), 100);
        assert_eq!(super::map_range(2u32, 0, 10, 100, 0), 80);
        assert_eq!(super::map_range(5u32, 0, 10, 100, 0), 50);
        assert_eq!(super::map_range(8u32, 0, 10, 100, 0), 20);
        assert_eq!(super::map_range(10u32, 0, 10, 100, 0), 0);
    }

    #[test]
    fn map_range_flipped_input() {
        assert_eq!(super::map_range(3, 10, 0, 0, 100), 70);
        assert_eq!(super::map_range(3u8, 10, 0, 0, 20), 14);
        assert_eq!(super::map_range(2.5, 5.0, 0.0, 0.0, 1.0), 0.5);
    }

    #[test]
    fn map_range_identity() {
        for x in -20..=20 {
            assert_eq!(super::map_range(x, 2, 12, 2, 12), x);
        }
        for x in [-3.5, 0.0, 0.125, 1.0, 7.75, 100.0] {
            assert_eq!(super::map_range(x, -4.0, 4.0, -4.0, 4.0), x);
        }
    }

    #[test]
    fn map_range_extrapolates() {
        assert_eq!(super::map_range(20, 0, 10, 0, 100), 200);
        assert_eq!(super::map_range(-10, 0, 10, 0, 100), -100);
        assert_eq!(super::map_range(15u8, 5, 10, 10, 20), 30);
    }

    #[test]
    fn map_range_truncates_toward_zero() {
        assert_eq!(super::map_range(7, 0, 10, 0, 3), 2);
        assert_eq!(super::map_range(-7, 0, 10, 0, 3), -2);
        assert_eq!(super::map_range(-7, 0, -10, 0, 3), 2);
    }

    #[test]
    fn empty_input_range() {
        assert_eq!(try_map_range(4, 4, 4, 0, 100), Err(Error::EmptyRange));
        assert_eq!(try_map_range(0.5, 1.0, 1.0, 0.0, 1.0), Err(Error::EmptyRange));
        assert_eq!(super::map_range(4, 4, 4, 30, 100), 30);
        assert_eq!(super::map_range(9.0, 1.0, 1.0, -2.0, 1.0), -2.0);
    }

    #[test]
    fn mixed_int_to_float() {
        assert_relative_eq!(
            map_range_as(1023u16, 0, 4095, 0.0f32, 3.3),
            0.824_395_6,
            epsilon = 1e-6
        );
        assert_eq!(map_range_as(50i32, 0, 100, 0.0f64, 1.0), 0.5);
        assert_eq!(map_range_as(0u8, 255, 0, -1.0f64, 1.0), 1.0);
    }

    #[test]
    fn mixed_float_to_int() {
        assert_eq!(map_range_as(0.5f32, 0.0, 1.0, 1000u16, 2000), 1500);
        assert_eq!(map_range_as(0.999f64, 0.0, 1.0, 0i32, 10), 9);
        assert_eq!(map_range_as(0.25f64, 0.0, 1.0, 200u8, 0), 150);
    }

    #[test]
    fn mixed_float_precisions() {
        assert_eq!(map_range_as(0.5f32, 0.0, 1.0, 0.0f64, 10.0), 5.0);
        assert_eq!(map_range_as(25.0f64, 0.0, 100.0, 0.0f32, 2.0), 0.5);
    }

    #[test]
    fn mixed_failures_return_out_min() {
        assert_eq!(try_map_range_as(1u8, 3, 3, 0.0f32, 1.0), Err(Error::EmptyRange));
        assert_eq!(try_map_range_as(-1.0f64, 0.0, 1.0, 0u8, 100), Err(Error::Unrepresentable));
        assert_eq!(map_range_as(-1.0f64, 0.0, 1.0, 7u8, 100), 7);
        assert_eq!(map_range_as(f64::NAN, 0.0, 1.0, 3i32, 100), 3);
    }

    #[test]
    fn map_range_clamped() {
        assert_eq!(super::map_range_clamped(-5, 0, 10, 0, 100), 0);
        assert_eq!(super::map_range_clamped(15, 0, 10, 0, 100), 100);
        assert_eq!(super::map_range_clamped(5, 0, 10, 0, 100), 50);
    }

    #[test]
    fn map_range_clamped_reversed_input() {
        assert_eq!(super::map_range_clamped(-5, 10, 0, 0, 100), 100);
        assert_eq!(super::map_range_clamped(15, 10, 0, 0, 100), 0);
        assert_eq!(super::map_range_clamped(0u8, 20, 10, 0, 10), 10);
    }

    #[test]
    fn map_range_clamped_nan_input() {
        assert_eq!(super::map_range_clamped(f64::NAN, 0.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(super::map_range_clamped(f32::NAN, 10.0, 0.0, 0.0, 100.0), 100.0);
        assert_eq!(map_range_clamped_as(f32::NAN, 0.0, 1.0, 1000u16, 2000), 1000);
    }

    #[test]
    fn map_range_clamped_mixed() {
        assert_eq!(map_range_clamped_as(5000u16, 0, 4096, 0.0f32, 1.0), 1.0);
        assert_eq!(map_range_clamped_as(-3.0f32, 0.0, 1.0, 1000u16, 2000), 1000);
    }
}
