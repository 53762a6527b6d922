use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates for equality testing and hashing.
///
/// Coordinates remain untouched by every computation in this crate: NaN
/// propagates and no clamping is performed. Equality and hashing, however,
/// require comparable entities, so this function zeros out not-a-numbers,
/// reduces precision by one significant digit, and drops the sign of negative
/// zeros before converting to bit strings.
#[must_use = "function returns normalized bits and does not mutate original value"]
pub(crate) fn to_eq_coordinates(coordinates: &[Float; 3]) -> [Bits; 3] {
    let [c1, c2, c3] = *coordinates;
    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a
/// bit string. It is only public because the [`assert_close_enough`] test
/// macro uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}
