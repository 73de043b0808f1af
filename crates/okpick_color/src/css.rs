//! CSS text for the rendering layer
//!
//! The math modules return structured values; this is the only place that
//! knows about CSS syntax.

use crate::gradient::GradientStop;
use crate::types::{Lch, Oklch, Rgb, OPAQUE};

/// Alpha fraction at or above which the swatch is drawn as a plain hex
const SWATCH_OPAQUE_THRESHOLD: f64 = 0.99;

/// `linear-gradient(to right, #rrggbb 0%, #rrggbb 10%, ...)`
pub fn linear_gradient(stops: &[GradientStop]) -> String {
    let mut out = String::from("linear-gradient(to right");
    for stop in stops {
        out.push_str(&format!(", {} {}%", stop.color, stop.offset));
    }
    out.push(')');
    out
}

/// Background of the alpha slider: transparent to the opaque color
pub fn alpha_gradient(rgb: Rgb) -> String {
    format!("linear-gradient(to right, transparent, {rgb})")
}

/// `oklch(0.70 0.10 104)`, with ` / 0.50` appended when not opaque
pub fn format_oklch(oklch: Oklch) -> String {
    let base = format!("oklch({:.2} {:.2} {:.0}", oklch.l, oklch.c, oklch.h);
    with_alpha_suffix(base, oklch.a)
}

/// `lch(70 15 104)`, with ` / 0.50` appended when not opaque
pub fn format_lch(lch: Lch) -> String {
    let base = format!("lch({:.0} {:.0} {:.0}", lch.l, lch.c, lch.h);
    with_alpha_suffix(base, lch.a)
}

fn with_alpha_suffix(mut base: String, alpha: f64) -> String {
    if alpha < OPAQUE {
        base.push_str(&format!(" / {:.2}", alpha / OPAQUE));
    }
    base.push(')');
    base
}

/// Swatch fill: hex when (nearly) opaque, `rgba()` otherwise
pub fn swatch_color(rgb: Rgb, alpha: f64) -> String {
    let fraction = alpha / OPAQUE;
    if fraction >= SWATCH_OPAQUE_THRESHOLD {
        rgb.to_string()
    } else {
        format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{hue_gradient, lightness_gradient};
    use crate::types::ColorSpace;

    #[test]
    fn test_linear_gradient_text() {
        let stops = lightness_gradient(0.0, 0.0, ColorSpace::Oklch);
        let css = linear_gradient(&stops);
        assert!(css.starts_with("linear-gradient(to right, #000000 0%, #1a1a1a 10%, "));
        assert!(css.ends_with(", #ffffff 100%)"));
    }

    #[test]
    fn test_fractional_hue_offsets() {
        let css = linear_gradient(&hue_gradient(0.5, 0.4, ColorSpace::Oklch));
        assert!(css.starts_with("linear-gradient(to right, #ff0000 0%, #ff8000 8.333333333333334%"));
        assert!(css.contains("#00ffff 50%"));
    }

    #[test]
    fn test_empty_gradient() {
        assert_eq!(linear_gradient(&[]), "linear-gradient(to right)");
    }

    #[test]
    fn test_alpha_gradient() {
        assert_eq!(
            alpha_gradient(Rgb::new(255, 0, 0)),
            "linear-gradient(to right, transparent, #ff0000)"
        );
    }

    #[test]
    fn test_color_strings() {
        assert_eq!(format_oklch(Oklch::opaque(0.7, 0.1, 104.0)), "oklch(0.70 0.10 104)");
        assert_eq!(
            format_oklch(Oklch::new(0.7, 0.1, 104.0, 50.0)),
            "oklch(0.70 0.10 104 / 0.50)"
        );
        assert_eq!(format_lch(Lch::opaque(70.0, 15.0, 104.0)), "lch(70 15 104)");
        assert_eq!(
            format_lch(Lch::new(70.0, 15.0, 104.0, 25.0)),
            "lch(70 15 104 / 0.25)"
        );
    }

    #[test]
    fn test_swatch() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(swatch_color(rgb, 100.0), "#010203");
        assert_eq!(swatch_color(rgb, 99.5), "#010203");
        assert_eq!(swatch_color(rgb, 50.0), "rgba(1, 2, 3, 0.5)");
    }
}
