use crate::Error;
use num_traits::{Num, NumCast, ToPrimitive};

/// A primitive integer or floating point value that can be mapped between
/// ranges.
///
/// Implemented for every type that satisfies the bounds, which covers all of
/// the integer and float primitives.
pub trait Scalar: Copy + PartialOrd + Num + NumCast {}

impl<T> Scalar for T where T: Copy + PartialOrd + Num + NumCast {}

/// Returns the distance from `from` to `to` as a magnitude plus a flag that
/// is set when `to` lies below `from`.
///
/// Keeps unsigned subtraction from underflowing when a range is descending.
pub(crate) fn span<T: Scalar>(from: T, to: T) -> (T, bool) {
    if to < from {
        (from - to, true)
    } else {
        (to - from, false)
    }
}

pub(crate) fn cast<S: ToPrimitive, D: NumCast>(value: S) -> Result<D, Error> {
    D::from(value).ok_or(Error::Unrepresentable)
}
