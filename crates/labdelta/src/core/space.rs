/// The enumeration of supported color spaces.
///
/// # sRGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) comes in its familiar
/// gamma-corrected form and its linear form. For both, in-gamut coordinates
/// range from 0 to 1, inclusive. Only the gamma-corrected form has a hashed
/// hexadecimal notation.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as
/// foundational color space: all conversions between unrelated color spaces go
/// through XYZ. This crate uses the [D65 standard
/// illuminant](https://en.wikipedia.org/wiki/Standard_illuminant) with the 2°
/// observer and scales coordinates so that Y nominally ranges from 0 to 100.
///
/// # Lab
///
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) is the
/// perceptually motivated space the CIEDE2000 difference formula is defined
/// over. Lightness L nominally ranges from 0 to 100. The a and b coordinates
/// are unbounded in theory; in practice callers clamp them to -128 to 127.
/// This crate does not enforce either bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Xyz,
    Lab,
}

impl ColorSpace {
    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Srgb | Self::LinearSrgb)
    }

    /// Determine whether this color space is bounded.
    ///
    /// XYZ and Lab are *unbounded* and hence can model any color. By contrast,
    /// the RGB color spaces are *bounded*, with coordinates of in-gamut colors
    /// ranging `0..=1`.
    pub const fn is_bounded(&self) -> bool {
        self.is_rgb()
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Srgb => "sRGB",
            Self::LinearSrgb => "linear sRGB",
            Self::Xyz => "XYZ D65",
            Self::Lab => "CIELAB",
        };

        f.write_str(s)
    }
}
