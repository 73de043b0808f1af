//! Free-form color input
//!
//! Normalizes what a user types into a text field: hex, `rgb()` and `hsl()`
//! notations, plus `oklch()` / `lch()` literals for the command line.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while_m_n},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, map, map_res, opt, value},
    number::complete::double,
    sequence::{delimited, preceded},
    IResult,
};

use crate::error::{ColorError, Result};
use crate::hex::{normalize_hex, parse_hex, HexColor};
use crate::types::{ColorSpace, Lch, Oklch, Rgb, OPAQUE};

/// Longest sanitized hex entry: `#` plus 8 digits
const MAX_HEX_INPUT: usize = 9;

/// Normalize user input to a lowercase `#rrggbb`.
///
/// Accepts `#?` followed by 3 or 6 hex digits, `rgb(r, g, b)` with integer
/// channels up to 255, and `hsl(h, s%, l%)` with h up to 360 and s, l up to
/// 100. Anything else yields `None`.
pub fn parse_color_input(input: &str) -> Option<String> {
    let trimmed = input.trim();

    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if matches!(body.len(), 3 | 6) {
        if let Ok(hex) = normalize_hex(trimmed) {
            return Some(hex);
        }
    }

    if let Ok((_, (r, g, b))) = all_consuming(rgb_function)(trimmed) {
        if r <= 255 && g <= 255 && b <= 255 {
            return Some(Rgb::new(r as u8, g as u8, b as u8).to_string());
        }
    }

    if let Ok((_, (h, s, l))) = all_consuming(hsl_function)(trimmed) {
        if h <= 360 && s <= 100 && l <= 100 {
            return Some(hsl_to_rgb(f64::from(h), f64::from(s), f64::from(l)).to_string());
        }
    }

    tracing::debug!("parse_color_input rejected {:?}", input);
    None
}

/// Clean up text typed into a hex field: keep hex digits only, force a
/// single leading `#`, cap at 9 characters.
pub fn sanitize_hex_input(input: &str) -> String {
    let mut out = String::with_capacity(MAX_HEX_INPUT);
    out.push('#');
    out.extend(
        input
            .chars()
            .filter(char::is_ascii_hexdigit)
            .take(MAX_HEX_INPUT - 1),
    );
    out
}

/// `#` followed by exactly 3, 6 or 8 hex digits
pub fn is_complete_hex(input: &str) -> bool {
    match input.strip_prefix('#') {
        Some(body) => {
            matches!(body.len(), 3 | 6 | 8) && body.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Standard HSL to RGB; `h` in degrees, `s` and `l` in percent
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        return Rgb::from_unit(l, l, l);
    }

    fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_unit(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// Any color notation the command line accepts
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorInput {
    Hex(HexColor),
    Oklch(Oklch),
    Lch(Lch),
}

impl ColorInput {
    /// As OKLCH; a hex alpha byte carries over as the alpha percentage
    pub fn to_oklch(self) -> Oklch {
        match self {
            ColorInput::Hex(hex) => Oklch::from(hex.rgb).with_alpha(hex.alpha_percent()),
            ColorInput::Oklch(oklch) => oklch,
            ColorInput::Lch(lch) => Oklch::from(lch),
        }
    }

    pub fn to_lch(self) -> Lch {
        match self {
            ColorInput::Hex(hex) => Lch::from(hex.rgb).with_alpha(hex.alpha_percent()),
            ColorInput::Oklch(oklch) => Lch::from(oklch),
            ColorInput::Lch(lch) => lch,
        }
    }

    /// The space the input was written in, if it was a perceptual literal
    pub fn space(&self) -> Option<ColorSpace> {
        match self {
            ColorInput::Hex(_) => None,
            ColorInput::Oklch(_) => Some(ColorSpace::Oklch),
            ColorInput::Lch(_) => Some(ColorSpace::Lch),
        }
    }
}

/// Parse hex (including 8-digit with alpha), `rgb()`, `hsl()`,
/// `oklch(l c h [/ a])` or `lch(l c h [/ a])`.
pub fn parse_color(input: &str) -> Result<ColorInput> {
    let trimmed = input.trim();

    if let Ok((_, (space, [l, c, h], a))) = all_consuming(perceptual_function)(trimmed) {
        return Ok(match space {
            ColorSpace::Oklch => ColorInput::Oklch(Oklch::new(l, c, h, a)),
            ColorSpace::Lch => ColorInput::Lch(Lch::new(l, c, h, a)),
        });
    }

    if let Ok(hex) = parse_hex(trimmed) {
        return Ok(ColorInput::Hex(hex));
    }

    parse_color_input(trimmed)
        .and_then(|hex| parse_hex(&hex).ok())
        .map(ColorInput::Hex)
        .ok_or_else(|| ColorError::UnrecognizedInput(input.to_string()))
}

// ============================================================================
// Parsers
// ============================================================================

/// One to three decimal digits
fn small_int(input: &str) -> IResult<&str, u16> {
    map_res(
        take_while_m_n(1, 3, |c: char| c.is_ascii_digit()),
        str::parse::<u16>,
    )(input)
}

/// `,` surrounded by optional whitespace
fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

/// rgb(r, g, b)
fn rgb_function(input: &str) -> IResult<&str, (u16, u16, u16)> {
    let (input, _) = tag_no_case("rgb")(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, r) = small_int(input)?;
    let (input, _) = comma(input)?;
    let (input, g) = small_int(input)?;
    let (input, _) = comma(input)?;
    let (input, b) = small_int(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, (r, g, b)))
}

/// hsl(h, s%, l%)
fn hsl_function(input: &str) -> IResult<&str, (u16, u16, u16)> {
    let (input, _) = tag_no_case("hsl")(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, h) = small_int(input)?;
    let (input, _) = comma(input)?;
    let (input, s) = small_int(input)?;
    let (input, _) = char('%')(input)?;
    let (input, _) = comma(input)?;
    let (input, l) = small_int(input)?;
    let (input, _) = char('%')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, (h, s, l)))
}

/// `/ 0.5` or `/ 50%`, as a percentage
fn alpha_suffix(input: &str) -> IResult<&str, f64> {
    let (input, _) = delimited(multispace0, char('/'), multispace0)(input)?;
    let (input, a) = double(input)?;
    let (input, percent) = opt(char('%'))(input)?;
    Ok((input, if percent.is_some() { a } else { a * OPAQUE }))
}

/// oklch(l c h [/ a]) or lch(l c h [/ a])
fn perceptual_function(input: &str) -> IResult<&str, (ColorSpace, [f64; 3], f64)> {
    let (input, space) = alt((
        value(ColorSpace::Oklch, tag_no_case("oklch")),
        value(ColorSpace::Lch, tag_no_case("lch")),
    ))(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, l) = double(input)?;
    let (input, c) = preceded(multispace1, double)(input)?;
    let (input, h) = preceded(multispace1, double)(input)?;
    let (input, a) = map(opt(alpha_suffix), |a| a.unwrap_or(OPAQUE))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, (space, [l, c, h], a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_inputs() {
        assert_eq!(parse_color_input("  #ABC "), Some("#aabbcc".to_string()));
        assert_eq!(parse_color_input("a9a254"), Some("#a9a254".to_string()));
        // The text field normalizer only takes 3 or 6 digits
        assert_eq!(parse_color_input("#ff000080"), None);
        assert_eq!(parse_color_input("#ggg"), None);
    }

    #[test]
    fn test_rgb_inputs() {
        assert_eq!(parse_color_input("rgb(255, 0, 16)"), Some("#ff0010".to_string()));
        assert_eq!(parse_color_input("RGB( 1,2 ,3 )"), Some("#010203".to_string()));
        assert_eq!(parse_color_input("rgb(256, 0, 0)"), None);
        assert_eq!(parse_color_input("rgb(1000, 0, 0)"), None);
        assert_eq!(parse_color_input("rgb(1, 2)"), None);
        assert_eq!(parse_color_input("rgb (1, 2, 3)"), None);
    }

    #[test]
    fn test_hsl_inputs() {
        assert_eq!(parse_color_input("hsl(0, 100%, 50%)"), Some("#ff0000".to_string()));
        assert_eq!(parse_color_input("hsl(120, 100%, 25%)"), Some("#008000".to_string()));
        assert_eq!(parse_color_input("hsl(0, 0%, 50%)"), Some("#808080".to_string()));
        assert_eq!(parse_color_input("hsl(361, 100%, 50%)"), None);
        assert_eq!(parse_color_input("hsl(0, 100 %, 50%)"), None);
    }

    #[test]
    fn test_sanitize_hex_input() {
        assert_eq!(sanitize_hex_input("ff00zz00"), "#ff0000");
        assert_eq!(sanitize_hex_input("##12#34"), "#1234");
        assert_eq!(sanitize_hex_input("#0123456789abcdef"), "#01234567");
        assert_eq!(sanitize_hex_input(""), "#");
    }

    #[test]
    fn test_is_complete_hex() {
        assert!(is_complete_hex("#abc"));
        assert!(is_complete_hex("#aabbcc"));
        assert!(is_complete_hex("#aabbcc80"));
        assert!(!is_complete_hex("#aabb"));
        assert!(!is_complete_hex("aabbcc"));
        assert!(!is_complete_hex("#aabbcg"));
    }

    #[test]
    fn test_parse_perceptual_literals() {
        assert_eq!(
            parse_color("oklch(0.7 0.1 104)"),
            Ok(ColorInput::Oklch(Oklch::new(0.7, 0.1, 104.0, 100.0)))
        );
        assert_eq!(
            parse_color("LCH(70 15 104 / 0.5)"),
            Ok(ColorInput::Lch(Lch::new(70.0, 15.0, 104.0, 50.0)))
        );
        assert_eq!(
            parse_color("oklch(0.5 0 0 / 25%)"),
            Ok(ColorInput::Oklch(Oklch::new(0.5, 0.0, 0.0, 25.0)))
        );
    }

    #[test]
    fn test_parse_color_hex_and_functions() {
        let parsed = parse_color("#ff000080").unwrap();
        assert_eq!(parsed.to_oklch().a, 50.0);
        assert_eq!(parsed.space(), None);

        let parsed = parse_color("rgb(0, 0, 255)").unwrap();
        assert!((parsed.to_oklch().h - 240.0).abs() < 1e-9);

        assert_eq!(
            parse_color("chartreuse"),
            Err(ColorError::UnrecognizedInput("chartreuse".to_string()))
        );
    }
}
