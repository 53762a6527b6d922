use crate::core::FloatExt;
use crate::Float;

// Parametric weighting factors for lightness, chroma, and hue. The CIE allows
// adjusting them for viewing conditions such as textures and backgrounds; this
// crate fixes all three at unity, the reference condition.
const K_L: Float = 1.0;
const K_C: Float = 1.0;
const K_H: Float = 1.0;

const PI: Float = std::f64::consts::PI as Float;

/// 25⁷, the constant anchoring both chroma-dependent correction factors.
const POW25_7: Float = 6_103_515_625.0;

/// A choice of CIEDE2000 formulations.
///
/// The published formula leaves one step ambiguous: when the two hue angles
/// are more than π apart, the mean hue must be shifted into the correct
/// quadrant, and two shift conventions are in wide circulation. They disagree
/// by up to ±0.0003 on final color differences, so the choice is exposed
/// rather than silently made.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum De2000Version {
    /// Shift the mean hue by +π unconditionally, as done by Bruce Lindbloom's
    /// calculator and Netflix's VMAF.
    #[default]
    Lindbloom,
    /// Shift the mean hue by ±π back into `0..2π`, following Gaurav Sharma's
    /// formulation, also used by OpenJDK.
    Sharma,
}

/// Compute the CIEDE2000 difference between two Lab coordinate arrays with
/// the given formulation.
///
/// Both the evaluation order and the snap-to-π stabilization below are load
/// bearing: they keep results within 1e-10 of the other implementations of
/// this formula operating on the same doubles.
#[allow(non_snake_case)]
pub fn delta_e_2000(
    version: De2000Version,
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    // The chroma adjustment factor G, driven by the mean chroma raised to the
    // seventh power. The denominator never vanishes for finite input.
    let c_mean = (a1.hypot(b1) + a2.hypot(b2)) * 0.5;
    let c_mean7 = c_mean.powi(7);
    let g = 1.0 + 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

    // Adjusted chroma and hue angles, the latter normalized into 0..2π.
    // atan2(0, 0) == 0 by convention, which is accepted for achromatic input.
    let C1 = (a1 * g).hypot(b1);
    let C2 = (a2 * g).hypot(b2);

    let mut h1 = b1.atan2(a1 * g);
    let mut h2 = b2.atan2(a2 * g);
    if h1 < 0.0 {
        h1 += 2.0 * PI;
    }
    if h2 < 0.0 {
        h2 += 2.0 * PI;
    }

    // Cross-implementation consistent rounding: hue differences within 1e-14
    // of a half turn snap to exactly π, so that floating point noise cannot
    // flip the quadrant correction below.
    let window = <Float as FloatExt>::HALF_TURN_WINDOW;
    let mut dh = (h2 - h1).abs();
    if (PI - window..=PI + window).contains(&dh) {
        dh = PI;
    }

    // When the hue angles lie in different quadrants, the straightforward
    // average can land in the wrong quadrant. The correction applied to the
    // mean hue is where the two formulations diverge.
    let mut h_mean = (h1 + h2) * 0.5;
    let mut h_diff = (h2 - h1) * 0.5;
    if PI < dh {
        h_diff += PI;
        match version {
            De2000Version::Lindbloom => h_mean += PI,
            De2000Version::Sharma => {
                if h_mean < PI {
                    h_mean += PI;
                } else {
                    h_mean -= PI;
                }
            }
        }
    }

    // The hue rotation correction term, accounting for the non-linear
    // behavior of hue differences in the blue region.
    let p = 36.0 * h_mean - 55.0 * PI;
    let C_mean = (C1 + C2) * 0.5;
    let C_mean7 = C_mean.powi(7);
    let r_t = -2.0
        * (C_mean7 / (C_mean7 + POW25_7)).sqrt()
        * (PI / 3.0 * (p * p / (-25.0 * PI * PI)).exp()).sin();

    // Lightness.
    let L_mean = (L1 + L2) * 0.5;
    let n = (L_mean - 50.0) * (L_mean - 50.0);
    let l = (L2 - L1) / (K_L * (1.0 + 0.015 * n / (20.0 + n).sqrt()));

    // Hue, weighted by four harmonics of the mean hue.
    let t = 1.0 + 0.24 * (2.0 * h_mean + PI * 0.5).sin()
        + 0.32 * (3.0 * h_mean + 8.0 * PI / 15.0).sin()
        - 0.17 * (h_mean + PI / 3.0).sin()
        - 0.20 * (4.0 * h_mean + 3.0 * PI / 20.0).sin();
    let C_sum = C1 + C2;
    let h = 2.0 * (C1 * C2).sqrt() * h_diff.sin() / (K_H * (1.0 + 0.0075 * C_sum * t));

    // Chroma.
    let c = (C2 - C1) / (K_C * (1.0 + 0.0225 * C_sum));

    // The geometric distance in color space, which ranges from 0 to around 185.
    (l * l + h * h + c * c + c * h * r_t).sqrt()
}

/// Compute the CIEDE2000 difference between two L\*a\*b\* colors.
///
/// L ranges from 0 to 100, while a and b are unbounded and commonly clamped to
/// the range of -128 to 127. The result is non-negative and, by construction
/// of the formula, stays below roughly 185 for any finite input. Non-finite
/// coordinates propagate into a non-finite result instead of an error.
///
/// This function uses the [`De2000Version::Lindbloom`] formulation. Use
/// [`Color::distance`](crate::Color::distance) to pick the formulation
/// explicitly.
///
/// # Examples
///
/// ```
/// # use labdelta::ciede_2000;
/// let delta = ciede_2000(91.9, 66.1, 4.7, 92.2, 60.1, -4.0);
/// assert!((delta - 4.1655).abs() < 1e-3);
/// ```
pub fn ciede_2000(l1: Float, a1: Float, b1: Float, l2: Float, a2: Float, b2: Float) -> Float {
    delta_e_2000(De2000Version::default(), &[l1, a1, b1], &[l2, a2, b2])
}

// --------------------------------------------------------------------------------------------------------------------

/// Find the candidate color closest to the origin.
///
/// This function compares the origin to every candidate color, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate color—or `None` if there are no candidates.
pub(crate) fn find_closest<'c, C, F>(
    origin: &[Float; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}
