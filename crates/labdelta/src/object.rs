use std::str::FromStr;

use crate::core::{
    convert, delta_e_2000, find_closest, format_hashed, from_24bit, parse_hashed, to_24bit,
    to_eq_coordinates, ColorSpace, De2000Version,
};

use crate::Float;

/// Create a new sRGB color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. However, it also is safe to use in const expressions.
///
/// Rust currently does not allow floating point operations in const functions.
/// That makes it impossible to write a const function that constructs a new
/// color object from integer coordinates. However, Rust does currently allow
/// floating point operations in const expressions, notably as arguments to a
/// const function such as a constructor. Hence, a macro can convert the
/// integer coordinates before passing them to the const function. That's just
/// what this macro does.
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $crate::ColorSpace::Srgb,
            [
                $r as $crate::Float / 255.0,
                $g as $crate::Float / 255.0,
                $b as $crate::Float / 255.0,
            ],
        )
    };
}

/// A color object.
///
/// Every color object has a [color space](ColorSpace) and three coordinates.
///
/// # Color Coordinates
///
/// For the RGB color spaces, the coordinates of in-gamut colors have unit
/// range. XYZ and Lab have no gamut bounds; L nominally ranges `0..=100` and
/// a/b conventionally stay within `-128..=127`, but neither is enforced.
///
/// Computations never validate coordinates: non-finite coordinates propagate
/// into non-finite results, and coordinates violating a color space's
/// convention produce finite but meaningless results. Callers that need
/// validation perform it before constructing a color.
///
/// # Equality Testing and Hashing
///
/// To be useful as keys, equal colors must have equal hashes. Hence this
/// struct normalizes coordinates for either operation: it replaces
/// not-a-numbers with positive zero, drops the least significant digit, and
/// replaces negative zero with positive zero after rounding. While rounding
/// isn't strictly necessary for correctness, it makes for a more robust
/// comparison without meaningfully reducing precision.
#[derive(Clone, Debug)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

impl Color {
    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use labdelta::{Color, ColorSpace};
    /// let cerulean = Color::new(ColorSpace::Lab, [48.0, -9.5, -38.2]);
    /// assert_eq!(cerulean.space(), ColorSpace::Lab);
    /// ```
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    ///
    /// ```
    /// # use labdelta::{Color, ColorSpace};
    /// let fire_brick = Color::srgb(177.0/255.0, 31.0/255.0, 36.0/255.0);
    /// assert_eq!(fire_brick.space(), ColorSpace::Srgb);
    /// ```
    #[inline]
    pub const fn srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::Srgb, [r, g, b])
    }

    /// Instantiate a new Lab color with the given lightness L, a, and b
    /// coordinates.
    ///
    /// ```
    /// # use labdelta::{Color, ColorSpace};
    /// let sky = Color::lab(60.0, -8.0, -35.0);
    /// assert_eq!(sky.space(), ColorSpace::Lab);
    /// ```
    #[inline]
    pub const fn lab(l: Float, a: Float, b: Float) -> Self {
        Self::new(ColorSpace::Lab, [l, a, b])
    }

    /// Instantiate a new sRGB color from its 24-bit integer coordinates.
    ///
    /// ```
    /// # use labdelta::{Color, ColorSpace};
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::srgb(1.0, 0.5764705882352941, 0.0));
    /// ```
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the color space.
    #[inline]
    pub const fn space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates.
    #[inline]
    pub const fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to the target color space.
    ///
    /// All conversions run through XYZ as root color space, with the one
    /// exception of gamma correction between sRGB and linear sRGB.
    ///
    /// # Examples
    ///
    /// ```
    /// # use labdelta::{Color, ColorSpace};
    /// let navy = Color::from_24bit(0x00, 0x00, 0x80);
    /// let [l, a, b] = *navy.to(ColorSpace::Lab).as_ref();
    /// assert!((l - 12.972).abs() < 1e-3);
    /// assert!((a - 47.502).abs() < 1e-3);
    /// assert!((b - -64.702).abs() < 1e-3);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, space: ColorSpace) -> Self {
        Self::new(space, convert(self.space, space, &self.coordinates))
    }

    /// Convert this color to its 24-bit integer coordinates.
    ///
    /// This method converts the color to sRGB first if necessary. It assumes
    /// an in-gamut color and clamps each coordinate to `0x00..=0xff`.
    ///
    /// ```
    /// # use labdelta::Color;
    /// let goldenrod = Color::from_24bit(0x8b, 0x65, 0x08);
    /// assert_eq!(goldenrod.to_24bit(), [0x8b_u8, 0x65, 0x08]);
    /// ```
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.to(ColorSpace::Srgb).coordinates)
    }

    /// Format this color in hashed hexadecimal notation.
    ///
    /// This method converts the color to 24-bit sRGB first if necessary. It
    /// emits the `#RGB` shorthand exactly when every coordinate's two
    /// hexadecimal digits are the same, and the full `#RRGGBB` form otherwise.
    ///
    /// ```
    /// # use labdelta::Color;
    /// assert_eq!(Color::from_24bit(0, 0, 128).to_hex(), "#000080");
    /// assert_eq!(Color::from_24bit(0xff, 0xcc, 0x00).to_hex(), "#fc0");
    /// ```
    pub fn to_hex(&self) -> String {
        format_hashed(&self.to_24bit())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the CIEDE2000 difference between the two colors.
    ///
    /// This method converts both colors to Lab and evaluates the CIEDE2000
    /// formula with the given [formulation](De2000Version). The result is
    /// symmetric in the two colors and zero exactly for identical colors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use labdelta::{Color, De2000Version};
    /// let navy = Color::from_24bit(0, 0, 128);
    /// let dark_blue = Color::from_24bit(0, 0, 139);
    /// let delta = navy.distance(&dark_blue, De2000Version::Lindbloom);
    /// assert!((delta - 1.56).abs() < 0.05);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Self, version: De2000Version) -> Float {
        delta_e_2000(
            version,
            &self.to(ColorSpace::Lab).coordinates,
            &other.to(ColorSpace::Lab).coordinates,
        )
    }

    /// Find the candidate color closest to this color.
    ///
    /// This method compares this color to every candidate color, measuring
    /// the CIEDE2000 difference in Lab with the given formulation, and
    /// returns the index of the closest candidate—or `None` if there are no
    /// candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use labdelta::{Color, De2000Version};
    /// let palette = [
    ///     Color::from_24bit(0x00, 0x00, 0x80),
    ///     Color::from_24bit(0xff, 0x93, 0x00),
    ///     Color::from_24bit(0x00, 0x80, 0x80),
    /// ];
    /// let rose = Color::from_24bit(0xe8, 0x90, 0x0c);
    /// assert_eq!(rose.find_closest(&palette, De2000Version::Lindbloom), Some(1));
    /// ```
    pub fn find_closest<'c, C>(&self, candidates: C, version: De2000Version) -> Option<usize>
    where
        C: IntoIterator<Item = &'c Self>,
    {
        let origin = self.to(ColorSpace::Lab);
        let candidates: Vec<[Float; 3]> = candidates
            .into_iter()
            .map(|color| color.to(ColorSpace::Lab).coordinates)
            .collect();

        find_closest(&origin.coordinates, candidates.iter(), |origin, candidate| {
            delta_e_2000(version, origin, candidate)
        })
    }
}

// ====================================================================================================================

impl FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Parse a color from its hashed hexadecimal representation.
    ///
    /// This method recognizes the three and six digit formats, with
    /// case-insensitive digits and a mandatory leading `#`. The result always
    /// is an sRGB color.
    ///
    /// ```
    /// # use labdelta::{Color, ColorSpace};
    /// # use labdelta::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let navy = Color::from_str("#000080")?;
    /// assert_eq!(navy.to_24bit(), [0_u8, 0, 128]);
    ///
    /// let white = "#FFF".parse::<Color>()?;
    /// assert_eq!(white.to_24bit(), [255_u8, 255, 255]);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [c1, c2, c3] = parse_hashed(s)?;
        Ok(Self::from_24bit(c1, c2, c3))
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);
        for bits in to_eq_coordinates(&self.coordinates) {
            bits.hash(state);
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.space == other.space
            && to_eq_coordinates(&self.coordinates) == to_eq_coordinates(&other.coordinates)
    }
}

impl Eq for Color {}

// ====================================================================================================================
