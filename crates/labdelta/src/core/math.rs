/// An extension trait for floating point numbers.
///
/// This trait pre-computes per-representation constants: the rounding factor
/// for equality comparisons and the half-rotation snapping window used by the
/// difference formula. Both depend on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// The window around π within which an absolute hue difference snaps to
    /// exactly π.
    ///
    /// The value is calibrated to IEEE-754 double precision. The `f32`
    /// rendition reuses the same nominal constant; it is far below single
    /// precision resolution at π and therefore inert.
    const HALF_TURN_WINDOW: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
    const HALF_TURN_WINDOW: f64 = 1e-14;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
    const HALF_TURN_WINDOW: f32 = 1e-14;
}
