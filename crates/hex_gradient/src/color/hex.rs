use super::rgb::Rgb;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length {0}, expected 3 or 6 digits")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Parse a single channel of one or two hex digits.
///
/// A lone digit is duplicated, so `f` reads as `ff`.
pub fn parse_channel(digits: &str) -> Result<u8, HexError> {
    let mut value: u8 = 0;
    for ch in digits.chars() {
        let nibble = ch.to_digit(16).ok_or(HexError::InvalidDigit(ch))? as u8;
        value = (value << 4) | nibble;
    }

    match digits.len() {
        1 => Ok(value * 17),
        2 => Ok(value),
        0 => Err(HexError::Empty),
        len => Err(HexError::InvalidLength(len * 3)),
    }
}

/// Parse `#rgb`, `#rrggbb` or the same without the leading `#`.
pub fn parse_hex(input: &str) -> Result<Rgb, HexError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.is_empty() {
        return Err(HexError::Empty);
    }

    if let Some(ch) = digits.chars().find(|ch| !ch.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit(ch));
    }

    let width = match digits.len() {
        3 => 1,
        6 => 2,
        len => return Err(HexError::InvalidLength(len)),
    };

    Ok(Rgb::new(
        parse_channel(&digits[..width])?,
        parse_channel(&digits[width..width * 2])?,
        parse_channel(&digits[width * 2..])?,
    ))
}

pub fn to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}
