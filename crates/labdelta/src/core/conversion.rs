use super::ColorSpace;
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function assumes that the coordinates belong to an in-gamut sRGB
/// color, i.e., that they range `0..=1`. Even if that is not the case, the
/// conversion automatically clamps coordinates to the range `0x00..=0xff`.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0] * vector[0] + row1[1] * vector[1] + row1[2] * vector[2],
        row2[0] * vector[0] + row2[1] * vector[1] + row2[2] * vector[2],
        row3[0] * vector[0] + row3[1] * vector[1] + row3[2] * vector[2],
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
///
/// The crossover constant solves `c / 12.92 == ((c + 0.055) / 1.055)^2.4`, so
/// both branches agree at the threshold.
fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    #[allow(clippy::excessive_precision)]
    fn convert(value: Float) -> Float {
        if value < 0.040448236277105097 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
fn linear_srgb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    #[allow(clippy::excessive_precision)]
    fn convert(value: Float) -> Float {
        if value < 0.003130668442500634 {
            12.92 * value
        } else {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

// Both matrices are scaled so that Y ranges 0..=100 for in-gamut colors,
// matching the scale the D65 white point below is expressed in.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 41.24564390896921145, 35.75760776439090507, 18.04374830853290341 ],
    [ 21.26728514056222474, 71.51521552878181013,  7.21749933075596513 ],
    [  1.93338955823293176, 11.91919550818385936, 95.03040770337479886 ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct
/// conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  0.032404541621141049051, -0.015371385127977165753, -0.004985314095560160079 ],
    [ -0.009692660305051867686,  0.018760108454466942288,  0.00041556017530349983  ],
    [  0.000556434309591145522, -0.002040259135167538416,  0.010572251882231790398 ],
];

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// The D65 reference white point for the 2° standard observer.
const D65_WHITE: [Float; 3] = [95.047, 100.0, 108.883];

/// The threshold between the linear and cube-root segments of the CIE
/// lightness transform, i.e., (6/29)³.
const CIE_EPSILON: Float = 216.0 / 24389.0;

/// The slope of the linear segment of the CIE lightness transform.
const CIE_SLOPE: Float = 841.0 / 108.0;

/// The offset of the linear segment of the CIE lightness transform.
const CIE_OFFSET: Float = 4.0 / 29.0;

/// Convert coordinates for XYZ to Lab. This is a one-hop, direct conversion.
fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value < CIE_EPSILON {
            CIE_SLOPE * value + CIE_OFFSET
        } else {
            value.cbrt()
        }
    }

    let x = convert(value[0] / D65_WHITE[0]);
    let y = convert(value[1] / D65_WHITE[1]);
    let z = convert(value[2] / D65_WHITE[2]);

    [116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z)]
}

/// Convert coordinates for Lab to XYZ. This is a one-hop, direct conversion.
///
/// The lightness branch tests `L < 8` rather than cubing first, since
/// `8 == 116 * (6/29)³ * (29/3)³ / 116 - 16` collapses to the same crossover.
fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *value;

    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let x3 = fx * fx * fx;
    let z3 = fz * fz * fz;

    let x = if x3 < CIE_EPSILON {
        (fx - CIE_OFFSET) / CIE_SLOPE
    } else {
        x3
    };
    let y = if l < 8.0 {
        l / (24389.0 / 27.0)
    } else {
        fy * fy * fy
    };
    let z = if z3 < CIE_EPSILON {
        (fz - CIE_OFFSET) / CIE_SLOPE
    } else {
        z3
    };

    [x * D65_WHITE[0], y * D65_WHITE[1], z * D65_WHITE[2]]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to XYZ. This is a two-hop conversion.
#[inline]
fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = srgb_to_linear_srgb(value);
    linear_srgb_to_xyz(&linear_srgb)
}

/// Convert coordinates for XYZ to sRGB. This is a two-hop conversion.
#[inline]
fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = xyz_to_linear_srgb(value);
    linear_srgb_to_srgb(&linear_srgb)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// This function routes all conversions between unrelated color spaces through
/// XYZ as the root color space. It does not validate its input: non-finite
/// coordinates propagate into non-finite results, and out-of-gamut coordinates
/// produce finite but meaningless results.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    if from_space == to_space {
        return *coordinates;
    }

    // Handle the one in-branch conversion that doesn't go through root XYZ.
    match (from_space, to_space) {
        (Srgb, LinearSrgb) => return srgb_to_linear_srgb(coordinates),
        (LinearSrgb, Srgb) => return linear_srgb_to_srgb(coordinates),
        _ => (),
    }

    // Convert from the source color space to root XYZ.
    let intermediate = match from_space {
        Srgb => srgb_to_xyz(coordinates),
        LinearSrgb => linear_srgb_to_xyz(coordinates),
        Lab => lab_to_xyz(coordinates),
        Xyz => *coordinates,
    };

    // Convert from root XYZ to the target color space.
    match to_space {
        Srgb => xyz_to_srgb(&intermediate),
        LinearSrgb => xyz_to_linear_srgb(&intermediate),
        Lab => xyz_to_lab(&intermediate),
        Xyz => intermediate,
    }
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::Float;

    // The fixtures below are computed over doubles. The f32 rendition
    // amplifies its rounding error by up to 500x through the Lab scaling,
    // so every budget widens accordingly.
    #[cfg(feature = "f64")]
    const TOLERANCE: Float = 1e-9;
    #[cfg(not(feature = "f64"))]
    const TOLERANCE: Float = 1e-3;

    #[cfg(feature = "f64")]
    const WHITE_TOLERANCE: Float = 2e-5;
    #[cfg(not(feature = "f64"))]
    const WHITE_TOLERANCE: Float = 1e-3;

    #[cfg(feature = "f64")]
    const ROUND_TRIP_TOLERANCE: Float = 5e-6;
    #[cfg(not(feature = "f64"))]
    const ROUND_TRIP_TOLERANCE: Float = 1e-4;

    #[cfg(feature = "f64")]
    const INVERSE_TOLERANCE: Float = 1e-10;
    #[cfg(not(feature = "f64"))]
    const INVERSE_TOLERANCE: Float = 1e-3;

    fn assert_same(actual: &[Float; 3], expected: &[Float; 3], tolerance: Float) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (a - e).abs() < tolerance,
                "coordinates differ:\n{:?}\n{:?}",
                actual,
                expected
            );
        }
    }

    struct Representations {
        srgb: [Float; 3],
        lab: [Float; 3],
    }

    const BLACK: Representations = Representations {
        // #000000
        srgb: [0.0, 0.0, 0.0],
        lab: [0.0, 0.0, 0.0],
    };

    const NAVY: Representations = Representations {
        // #000080
        srgb: [0.0, 0.0, 128.0 / 255.0],
        lab: [12.97196596195376, 47.5022797980358, -64.70216274629861],
    };

    const FIRE_BRICK: Representations = Representations {
        // #b11f24
        srgb: [177.0 / 255.0, 31.0 / 255.0, 36.0 / 255.0],
        lab: [38.6514064716017, 56.49052696360826, 35.977762286111115],
    };

    const TANGERINE: Representations = Representations {
        // #ff9300
        srgb: [1.0, 147.0 / 255.0, 0.0],
        lab: [70.96274447213052, 33.2552893383683, 76.40471441685747],
    };

    const HONEYDEW: Representations = Representations {
        // #d4fb79
        srgb: [212.0 / 255.0, 251.0 / 255.0, 121.0 / 255.0],
        lab: [93.61165375605911, -31.7223590083795, 57.496798389895474],
    };

    const TEAL: Representations = Representations {
        // #008080
        srgb: [0.0, 128.0 / 255.0, 128.0 / 255.0],
        lab: [48.254092063477515, -28.846304206184588, -8.47688587299431],
    };

    const WHITE: Representations = Representations {
        // #ffffff
        srgb: [1.0, 1.0, 1.0],
        lab: [100.00000000003867, -3.191752417919247e-8, 4.426964372861164e-6],
    };

    const COLORS: [&Representations; 7] = [
        &BLACK,
        &NAVY,
        &FIRE_BRICK,
        &TANGERINE,
        &HONEYDEW,
        &TEAL,
        &WHITE,
    ];

    #[test]
    fn test_srgb_to_lab() {
        for color in COLORS {
            let lab = convert(ColorSpace::Srgb, ColorSpace::Lab, &color.srgb);
            assert_same(&lab, &color.lab, TOLERANCE);
        }
    }

    #[test]
    fn test_white_point() {
        let xyz = convert(ColorSpace::Srgb, ColorSpace::Xyz, &WHITE.srgb);
        // The matrix rows don't sum to the white point exactly; the residue
        // stays below the 8-bit quantization step by a wide margin.
        assert_same(&xyz, &D65_WHITE, WHITE_TOLERANCE);
    }

    #[test]
    fn test_lab_round_trip() {
        for color in COLORS {
            let lab = convert(ColorSpace::Srgb, ColorSpace::Lab, &color.srgb);
            let srgb = convert(ColorSpace::Lab, ColorSpace::Srgb, &lab);
            assert_same(&srgb, &color.srgb, ROUND_TRIP_TOLERANCE);
        }
    }

    #[test]
    fn test_xyz_lab_round_trip() {
        // Unlike the full sRGB round-trip, which loses precision to the
        // truncated matrix constants, XYZ -> Lab -> XYZ inverts exactly.
        for color in COLORS {
            let xyz = convert(ColorSpace::Srgb, ColorSpace::Xyz, &color.srgb);
            let lab = convert(ColorSpace::Xyz, ColorSpace::Lab, &xyz);
            let also_xyz = convert(ColorSpace::Lab, ColorSpace::Xyz, &lab);
            assert_same(&also_xyz, &xyz, INVERSE_TOLERANCE);
        }
    }

    #[test]
    fn test_linear_hop() {
        let linear = convert(ColorSpace::Srgb, ColorSpace::LinearSrgb, &TANGERINE.srgb);
        let srgb = convert(ColorSpace::LinearSrgb, ColorSpace::Srgb, &linear);
        assert_same(&srgb, &TANGERINE.srgb, INVERSE_TOLERANCE);

        // Both routes into XYZ must agree.
        let direct = convert(ColorSpace::Srgb, ColorSpace::Xyz, &TANGERINE.srgb);
        let via_linear = convert(ColorSpace::LinearSrgb, ColorSpace::Xyz, &linear);
        assert_same(&via_linear, &direct, INVERSE_TOLERANCE);
    }

    #[test]
    fn test_24bit() {
        assert_eq!(to_24bit(&from_24bit(0x8b, 0x65, 0x08)), [0x8b_u8, 0x65, 0x08]);
        assert_eq!(to_24bit(&[-0.1, 0.5, 1.1]), [0x00_u8, 0x80, 0xff]);
    }

    #[test]
    fn test_nan_propagation() {
        let lab = convert(ColorSpace::Srgb, ColorSpace::Lab, &[Float::NAN, 0.5, 0.5]);
        assert!(lab.iter().any(|c| c.is_nan()), "NaN input should not vanish");
    }
}
