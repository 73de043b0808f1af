//! Conversions between OKLCH, LCH and RGB
//!
//! OKLCH is treated as an HSL analog: lightness maps directly, chroma is
//! rescaled by `1 / 0.4` into saturation and hue passes through. This is not a
//! CIE-accurate OKLab transform. LCH is a linear rescale of OKLCH and every
//! LCH <-> RGB conversion is routed through OKLCH.
//!
//! The two HSL legs are not exact inverses: `rgb_to_oklch` caps chroma at 0.4
//! and RGB output is rounded, so OKLCH -> RGB -> OKLCH is approximate.

use crate::types::{
    channel_from_unit, Lch, Oklch, Rgb, LCH_MAX_CHROMA, OKLCH_MAX_CHROMA, OPAQUE,
};

/// Chroma below this renders as pure gray
pub const GRAY_CHROMA_THRESHOLD: f64 = 0.001;

/// OKLCH to RGB via HSL.
///
/// Total for all inputs: out-of-range components are not rejected, the
/// result is clamped per channel.
pub fn oklch_to_rgb(oklch: Oklch) -> Rgb {
    let Oklch { l, c, h, .. } = oklch;

    if c < GRAY_CHROMA_THRESHOLD {
        return Rgb::gray(channel_from_unit(l));
    }

    let saturation = c / OKLCH_MAX_CHROMA;
    let h = h.rem_euclid(360.0);

    let sector = h / 60.0;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    // rem_euclid can round up to exactly 360.0 for tiny negative hues
    let (r, g, b) = match (sector as u8).min(5) {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb::from_unit(r + m, g + m, b + m)
}

/// RGB to OKLCH via HSL. Alpha is always fully opaque.
pub fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    let [r, g, b] = rgb.to_unit();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Oklch::opaque(l, 0.0, 0.0);
    }

    let saturation = delta / (1.0 - (2.0 * l - 1.0).abs());
    let c = (saturation * OKLCH_MAX_CHROMA).min(OKLCH_MAX_CHROMA);

    let sector = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Oklch::new(l, c, h, OPAQUE)
}

/// Exact affine rescale, inverse of [`lch_to_oklch`]
pub fn oklch_to_lch(oklch: Oklch) -> Lch {
    Lch {
        l: oklch.l * 100.0,
        c: oklch.c * LCH_MAX_CHROMA / OKLCH_MAX_CHROMA,
        h: oklch.h,
        a: oklch.a,
    }
}

/// Exact affine rescale, inverse of [`oklch_to_lch`]
pub fn lch_to_oklch(lch: Lch) -> Oklch {
    Oklch {
        l: lch.l / 100.0,
        c: lch.c * OKLCH_MAX_CHROMA / LCH_MAX_CHROMA,
        h: lch.h,
        a: lch.a,
    }
}

pub fn lch_to_rgb(lch: Lch) -> Rgb {
    oklch_to_rgb(lch_to_oklch(lch))
}

pub fn rgb_to_lch(rgb: Rgb) -> Lch {
    oklch_to_lch(rgb_to_oklch(rgb))
}

impl From<Oklch> for Lch {
    fn from(oklch: Oklch) -> Self {
        oklch_to_lch(oklch)
    }
}

impl From<Lch> for Oklch {
    fn from(lch: Lch) -> Self {
        lch_to_oklch(lch)
    }
}

impl From<Oklch> for Rgb {
    fn from(oklch: Oklch) -> Self {
        oklch_to_rgb(oklch)
    }
}

impl From<Lch> for Rgb {
    fn from(lch: Lch) -> Self {
        lch_to_rgb(lch)
    }
}

impl From<Rgb> for Oklch {
    fn from(rgb: Rgb) -> Self {
        rgb_to_oklch(rgb)
    }
}

impl From<Rgb> for Lch {
    fn from(rgb: Rgb) -> Self {
        rgb_to_lch(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn test_gray_ignores_hue() {
        for h in [0.0, 45.0, 180.0, 359.0, 1000.0] {
            assert_eq!(oklch_to_rgb(Oklch::opaque(0.5, 0.0, h)), Rgb::gray(128));
        }
        assert_eq!(oklch_to_rgb(Oklch::opaque(0.5, 0.0009, 90.0)), Rgb::gray(128));
    }

    #[test]
    fn test_gray_is_clamped() {
        assert_eq!(oklch_to_rgb(Oklch::opaque(2.0, 0.0, 0.0)), Rgb::WHITE);
        assert_eq!(oklch_to_rgb(Oklch::opaque(-1.0, 0.0, 0.0)), Rgb::BLACK);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(oklch_to_rgb(Oklch::opaque(0.5, 0.4, 0.0)), Rgb::new(255, 0, 0));
        assert_eq!(oklch_to_rgb(Oklch::opaque(0.5, 0.4, 120.0)), Rgb::new(0, 255, 0));
        assert_eq!(oklch_to_rgb(Oklch::opaque(0.5, 0.4, 240.0)), Rgb::new(0, 0, 255));
        assert_eq!(oklch_to_rgb(Oklch::opaque(0.5, 0.4, 60.0)), Rgb::new(255, 255, 0));
        assert_eq!(oklch_to_rgb(Oklch::opaque(0.5, 0.4, 300.0)), Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_hue_wraps_around() {
        let base = oklch_to_rgb(Oklch::opaque(0.6, 0.2, 40.0));
        assert_eq!(oklch_to_rgb(Oklch::opaque(0.6, 0.2, 400.0)), base);
        assert_eq!(oklch_to_rgb(Oklch::opaque(0.6, 0.2, -320.0)), base);
        assert_eq!(
            oklch_to_rgb(Oklch::opaque(0.6, 0.2, 360.0)),
            oklch_to_rgb(Oklch::opaque(0.6, 0.2, 0.0))
        );
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        // Must not panic; u8 channels are always in range
        let rgb = oklch_to_rgb(Oklch::opaque(2.0, 1.0, 400.0));
        assert_eq!(rgb, Rgb::new(0, 255, 255));
        let _ = oklch_to_rgb(Oklch::opaque(-3.0, -0.5, -720.0));
        let _ = oklch_to_rgb(Oklch::opaque(f64::NAN, 0.2, f64::INFINITY));
    }

    #[test]
    fn test_default_picker_color() {
        assert_eq!(oklch_to_rgb(Oklch::opaque(0.7, 0.1, 104.0)), Rgb::new(170, 198, 159));
    }

    #[test]
    fn test_rgb_to_oklch_primaries() {
        let red = rgb_to_oklch(Rgb::new(255, 0, 0));
        assert!(approx(red.l, 0.5, 1e-12));
        assert!(approx(red.c, 0.4, 1e-12));
        assert!(approx(red.h, 0.0, 1e-12));
        assert_eq!(red.a, 100.0);

        let blue = rgb_to_oklch(Rgb::new(0, 0, 255));
        assert!(approx(blue.h, 240.0, 1e-9));

        let magenta = rgb_to_oklch(Rgb::new(255, 0, 128));
        assert!(magenta.h > 300.0 && magenta.h < 360.0);
    }

    #[test]
    fn test_rgb_to_oklch_achromatic() {
        let gray = rgb_to_oklch(Rgb::gray(51));
        assert!(approx(gray.l, 0.2, 1e-12));
        assert_eq!(gray.c, 0.0);
        assert_eq!(gray.h, 0.0);
    }

    #[test]
    fn test_chroma_is_capped() {
        for rgb in [Rgb::new(255, 0, 0), Rgb::new(1, 0, 0), Rgb::new(255, 254, 0)] {
            assert!(rgb_to_oklch(rgb).c <= 0.4);
        }
    }

    #[test]
    fn test_lch_rescale_is_exact() {
        let oklch = Oklch::new(0.7, 0.1, 104.0, 50.0);
        let lch = oklch_to_lch(oklch);
        assert!(approx(lch.l, 70.0, 1e-12));
        assert!(approx(lch.c, 37.5, 1e-12));
        assert_eq!(lch.h, 104.0);
        assert_eq!(lch.a, 50.0);

        let back = lch_to_oklch(lch);
        assert!(approx(back.l, oklch.l, 1e-15));
        assert!(approx(back.c, oklch.c, 1e-15));
    }

    #[test]
    fn test_lch_routes_through_oklch() {
        let lch = Lch::opaque(50.0, 150.0, 0.0);
        assert_eq!(lch_to_rgb(lch), Rgb::new(255, 0, 0));
        assert_eq!(lch_to_rgb(lch), oklch_to_rgb(lch_to_oklch(lch)));

        let back = rgb_to_lch(Rgb::new(255, 0, 0));
        assert!(approx(back.l, 50.0, 1e-9));
        assert!(approx(back.c, 150.0, 1e-9));
    }

    #[test]
    fn test_from_impls_match_functions() {
        let oklch = Oklch::opaque(0.4, 0.25, 210.0);
        assert_eq!(Rgb::from(oklch), oklch_to_rgb(oklch));
        assert_eq!(Lch::from(oklch), oklch_to_lch(oklch));
    }
}
