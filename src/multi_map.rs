use crate::interpolate::map_range;
use crate::scalar::Scalar;
use crate::Error;

/// Maps `val` through the piecewise linear function described by the
/// breakpoints `input` and their values `output`.
///
/// `input` must be in ascending order; this is not checked. Values at or
/// below the first breakpoint return the first output and values at or
/// above the last breakpoint return the last output, there is no
/// extrapolation. Values that hit a breakpoint exactly return its output
/// without interpolating.
///
/// The matching segment is found with a linear scan, which suits the small
/// tables used on microcontrollers. Large tables should use a binary search
/// instead.
///
/// # Examples
///
/// ```
/// use range_mapping::multi_map;
///
/// let input = [0, 10, 20];
/// let output = [0, 100, 50];
///
/// assert_eq!(multi_map(5, &input, &output), 50);
/// assert_eq!(multi_map(15, &input, &output), 75);
/// assert_eq!(multi_map(25, &input, &output), 50);
/// ```
pub fn multi_map<T: Scalar, const N: usize>(val: T, input: &[T; N], output: &[T; N]) -> T {
    const { assert!(N > 0, "a breakpoint table needs at least one entry") };

    if N == 1 {
        return output[0];
    }
    if val <= input[0] {
        return output[0];
    }
    if val >= input[N - 1] {
        return output[N - 1];
    }

    let pos = input[1..]
        .iter()
        .position(|&breakpoint| val <= breakpoint)
        .map_or(N - 1, |index| index + 1);

    if val == input[pos] {
        return output[pos];
    }

    map_range(val, input[pos - 1], input[pos], output[pos - 1], output[pos])
}

/// A breakpoint table that maps values with [`multi_map`].
///
/// Owns copies of both tables and never changes them after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MultiMap<T, const N: usize> {
    input: [T; N],
    output: [T; N],
}

impl<T: Scalar, const N: usize> MultiMap<T, N> {
    /// Returns a mapper for the breakpoints `input` and their values
    /// `output`.
    ///
    /// The values in `input` must be in ascending order or this function
    /// will panic when running in debug mode. Use
    /// [`try_new`](MultiMap::try_new) to check the order in all builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use range_mapping::MultiMap;
    ///
    /// // NTC thermistor: ADC counts -> tenths of a degree
    /// let thermistor = MultiMap::new([300, 900, 2100, 3400], [850, 450, 150, -200]);
    ///
    /// assert_eq!(thermistor.map(600), 650);
    /// assert_eq!(thermistor.map(100), 850);
    /// ```
    pub fn new(input: [T; N], output: [T; N]) -> Self {
        const { assert!(N > 0, "a breakpoint table needs at least one entry") };

        debug_assert!(
            is_ascending(&input),
            "The values in input must be in ascending order"
        );

        Self { input, output }
    }

    /// Returns a mapper for the breakpoints `input` and their values
    /// `output`, or [`Error::UnsortedTable`] if `input` is not in ascending
    /// order.
    pub fn try_new(input: [T; N], output: [T; N]) -> Result<Self, Error> {
        if !is_ascending(&input) {
            log::warn!("MultiMap: rejecting table with unsorted inputs");
            return Err(Error::UnsortedTable);
        }

        Ok(Self::new(input, output))
    }

    /// Returns the value for `val`, interpolating between the two nearest
    /// breakpoints. Values outside the table saturate to the first or last
    /// output.
    #[doc(alias = "mapit")]
    pub fn map(&self, val: T) -> T {
        multi_map(val, &self.input, &self.output)
    }

    /// Returns the breakpoints.
    pub fn inputs(&self) -> &[T; N] {
        &self.input
    }

    /// Returns the value at each breakpoint.
    pub fn outputs(&self) -> &[T; N] {
        &self.output
    }

    /// Returns the smallest value that can be returned by
    /// [`map`](MultiMap::map).
    pub fn min_value(&self) -> T {
        self.output
            .iter()
            .fold(self.output[0], |min, &value| if value < min { value } else { min })
    }

    /// Returns the largest value that can be returned by
    /// [`map`](MultiMap::map).
    pub fn max_value(&self) -> T {
        self.output
            .iter()
            .fold(self.output[0], |max, &value| if value > max { value } else { max })
    }
}

fn is_ascending<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
