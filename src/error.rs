use core::fmt;

/// Reasons a checked mapping operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The input range is a single point (`in_min == in_max`), so there is
    /// nothing to divide by.
    EmptyRange,
    /// The value is NaN or infinite.
    NonFinite,
    /// The value is finite but too large for the operation to handle.
    OutOfRange,
    /// The result does not fit into the requested output type.
    Unrepresentable,
    /// The breakpoints of a table are not in ascending order.
    UnsortedTable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyRange => f.write_str("input range is empty (in_min == in_max)"),
            Error::NonFinite => f.write_str("value is not finite"),
            Error::OutOfRange => f.write_str("value is too large"),
            Error::Unrepresentable => f.write_str("result does not fit the output type"),
            Error::UnsortedTable => f.write_str("table inputs must be in ascending order"),
        }
    }
}

impl core::error::Error for Error {}
