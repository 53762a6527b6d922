use crate::error::ColorFormatError;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates, i.e., the `#RGB` shorthand.
pub(crate) fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let width = s.len() / 3;
        let t = s
            .get(1 + width * index..1 + width * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        // A single digit doubles, e.g., #a.. is #aa....
        Ok(if width == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Format the 24-bit color in hashed hexadecimal format.
///
/// This function emits the 4-character `#RGB` shorthand exactly when every
/// coordinate's two hexadecimal digits are the same, and the full 7-character
/// form otherwise. Digits are lowercase.
pub(crate) fn format_hashed(coordinates: &[u8; 3]) -> String {
    let [r, g, b] = *coordinates;

    if coordinates.iter().all(|c| c >> 4 == c & 0xf) {
        format!("#{:x}{:x}{:x}", r & 0xf, g & 0xf, b & 0xf)
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// ====================================================================================================================
