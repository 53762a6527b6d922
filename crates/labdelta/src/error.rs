//! Utility module with labdelta's errors.

/// An erroneous color format.
///
/// Hex parsing is the only fallible operation in this crate. Numeric
/// conversions and the difference formula never fail; they propagate
/// non-finite input into non-finite output instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with the `#` prefix.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnknownFormat => f.write_str("color format should start with `#`"),
            Self::UnexpectedCharacters => {
                f.write_str("color format should comprise 3 or 6 hexadecimal digits")
            }
            Self::MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
