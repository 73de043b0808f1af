//! Color value types
//!
//! All types are plain `Copy` values. Declared ranges are documentation only:
//! nothing here rejects out-of-range components, conversions clamp at the RGB
//! output stage instead.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound of OKLCH chroma
pub const OKLCH_MAX_CHROMA: f64 = 0.4;

/// Upper bound of LCH lightness
pub const LCH_MAX_LIGHTNESS: f64 = 100.0;

/// Upper bound of LCH chroma
pub const LCH_MAX_CHROMA: f64 = 150.0;

/// Alpha value meaning fully opaque (alpha is a percentage)
pub const OPAQUE: f64 = 100.0;

/// OKLCH color, approximated through HSL math.
///
/// `l` in [0, 1], `c` in [0, 0.4], `h` in [0, 360), `a` in [0, 100].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub a: f64,
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: f64, a: f64) -> Self {
        Self { l, c, h, a }
    }

    /// Fully opaque color
    pub const fn opaque(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h, a: OPAQUE }
    }

    /// Replace alpha and return new color
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

/// LCH color: OKLCH rescaled to `l` in [0, 100] and `c` in [0, 150].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub a: f64,
}

impl Lch {
    pub const fn new(l: f64, c: f64, h: f64, a: f64) -> Self {
        Self { l, c, h, a }
    }

    pub const fn opaque(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h, a: OPAQUE }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

/// 8-bit sRGB triple without alpha
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grayscale color
    pub const fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Build from unit-range channels, clamping to [0, 255] and rounding
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_from_unit(r),
            g: channel_from_unit(g),
            b: channel_from_unit(b),
        }
    }

    /// Channels normalized to [0, 1]
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// Scale a unit value to a byte. NaN maps to 0.
pub(crate) fn channel_from_unit(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// The perceptual space a picker is editing in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSpace {
    #[default]
    Oklch,
    Lch,
}

impl ColorSpace {
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Oklch => "OKLCH",
            ColorSpace::Lch => "LCH",
        }
    }

    /// Maximum of the lightness axis
    pub fn max_lightness(self) -> f64 {
        match self {
            ColorSpace::Oklch => 1.0,
            ColorSpace::Lch => LCH_MAX_LIGHTNESS,
        }
    }

    /// Maximum of the chroma axis
    pub fn max_chroma(self) -> f64 {
        match self {
            ColorSpace::Oklch => OKLCH_MAX_CHROMA,
            ColorSpace::Lch => LCH_MAX_CHROMA,
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
