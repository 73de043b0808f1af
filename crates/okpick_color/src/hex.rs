//! Hex color notation
//!
//! Accepted input: optional `#` followed by exactly 3, 6 or 8 hex digits,
//! case-insensitive. Output is always `#` plus lowercase digits.
//!
//! Alpha is a percentage (0-100) everywhere else in the crate. When a display
//! hex carries alpha, it is appended as a trailing byte computed as
//! `round(alpha / 100 * 255)`.

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::take_while,
    character::complete::char,
    combinator::opt,
    IResult,
};

use crate::error::{ColorError, Result};
use crate::types::{Rgb, OPAQUE};

/// A parsed hex color, keeping the alpha byte of the 8-digit form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub rgb: Rgb,
    pub alpha: Option<u8>,
}

impl HexColor {
    /// Alpha as a percentage, 100 when the input had no alpha byte
    pub fn alpha_percent(&self) -> f64 {
        self.alpha.map_or(OPAQUE, byte_to_alpha)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rgb)?;
        if let Some(a) = self.alpha {
            write!(f, "{a:02x}")?;
        }
        Ok(())
    }
}

/// Optional `#` followed by the run of hex digits
fn hex_digits(input: &str) -> IResult<&str, &str> {
    let (input, _) = opt(char('#'))(input)?;
    take_while(|c: char| c.is_ascii_hexdigit())(input)
}

/// Byte from `len` ASCII hex digits starting at `at`; a single digit is
/// doubled (`f` -> `ff`).
fn byte_at(digits: &str, at: usize, len: usize) -> u8 {
    let value = u8::from_str_radix(&digits[at..at + len], 16).unwrap_or(0);
    if len == 1 {
        value * 17
    } else {
        value
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional)
pub fn parse_hex(hex: &str) -> Result<HexColor> {
    let (rest, digits) = hex_digits(hex).map_err(|_| ColorError::InvalidHexLength(0))?;

    if let Some(bad) = rest.chars().next() {
        return Err(ColorError::InvalidHexDigit(bad));
    }

    match digits.len() {
        3 => Ok(HexColor {
            rgb: Rgb::new(
                byte_at(digits, 0, 1),
                byte_at(digits, 1, 1),
                byte_at(digits, 2, 1),
            ),
            alpha: None,
        }),
        6 => Ok(HexColor {
            rgb: Rgb::new(
                byte_at(digits, 0, 2),
                byte_at(digits, 2, 2),
                byte_at(digits, 4, 2),
            ),
            alpha: None,
        }),
        8 => Ok(HexColor {
            rgb: Rgb::new(
                byte_at(digits, 0, 2),
                byte_at(digits, 2, 2),
                byte_at(digits, 4, 2),
            ),
            alpha: Some(byte_at(digits, 6, 2)),
        }),
        len => Err(ColorError::InvalidHexLength(len)),
    }
}

/// Hex to RGB. Returns `None` for malformed input; the alpha byte of the
/// 8-digit form is discarded.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    match parse_hex(hex) {
        Ok(parsed) => Some(parsed.rgb),
        Err(err) => {
            tracing::debug!("hex_to_rgb rejected {:?}: {}", hex, err);
            None
        }
    }
}

/// `#rrggbb`, never with an alpha suffix
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// `#rrggbb` when fully opaque, `#rrggbbaa` otherwise
pub fn rgb_to_hex_alpha(rgb: Rgb, alpha: f64) -> String {
    if alpha >= OPAQUE {
        rgb_to_hex(rgb)
    } else {
        format!("{}{:02x}", rgb_to_hex(rgb), alpha_to_byte(alpha))
    }
}

/// Alpha percentage to a byte: `round(alpha / 100 * 255)`
pub fn alpha_to_byte(alpha: f64) -> u8 {
    (alpha / OPAQUE * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Alpha byte to a whole percentage: `round(byte / 255 * 100)`
pub fn byte_to_alpha(byte: u8) -> f64 {
    (f64::from(byte) / 255.0 * OPAQUE).round()
}

/// Canonical form of a hex color: `#`, expanded to 6 digits, lowercase.
/// An 8-digit input keeps its alpha byte.
pub fn normalize_hex(hex: &str) -> Result<String> {
    parse_hex(hex).map(|parsed| parsed.to_string())
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex(s).map(|parsed| parsed.rgb)
    }
}
