//! Slider gradient sampling
//!
//! Each function sweeps one axis across its full range while holding the
//! other two fixed, and returns the sampled colors as ordered stops. Formatting
//! the stops for a renderer is left to the caller (see [`crate::css`]).

use smallvec::SmallVec;

use crate::convert::{lch_to_rgb, oklch_to_rgb};
use crate::types::{ColorSpace, Lch, Oklch, Rgb};

/// Samples for the lightness and chroma sliders (10 equal intervals)
pub const LINEAR_SAMPLES: usize = 11;

/// Samples for the hue slider (12 intervals of 30 degrees, both ends included)
pub const HUE_SAMPLES: usize = 13;

/// Stops of one gradient, stored inline
pub type GradientStops = SmallVec<[GradientStop; HUE_SAMPLES]>;

/// A sampled color at a position along the slider
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Rgb,
    /// Position in percent, 0.0 to 100.0
    pub offset: f64,
}

impl GradientStop {
    pub fn hex(&self) -> String {
        self.color.to_string()
    }
}

/// The slider axis a gradient sweeps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientAxis {
    Lightness,
    Chroma,
    Hue,
}

impl GradientAxis {
    pub fn samples(self) -> usize {
        match self {
            GradientAxis::Lightness | GradientAxis::Chroma => LINEAR_SAMPLES,
            GradientAxis::Hue => HUE_SAMPLES,
        }
    }

    /// Sweep this axis. `a` and `b` are the two fixed axes in canonical
    /// order: (c, h) for lightness, (l, h) for chroma, (l, c) for hue.
    pub fn sample(self, a: f64, b: f64, space: ColorSpace) -> GradientStops {
        match self {
            GradientAxis::Lightness => lightness_gradient(a, b, space),
            GradientAxis::Chroma => chroma_gradient(a, b, space),
            GradientAxis::Hue => hue_gradient(a, b, space),
        }
    }
}

fn to_rgb(l: f64, c: f64, h: f64, space: ColorSpace) -> Rgb {
    match space {
        ColorSpace::Oklch => oklch_to_rgb(Oklch::opaque(l, c, h)),
        ColorSpace::Lch => lch_to_rgb(Lch::opaque(l, c, h)),
    }
}

fn sweep(samples: usize, mut color_at: impl FnMut(f64) -> Rgb) -> GradientStops {
    let intervals = (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            let t = i as f64 / intervals;
            GradientStop {
                color: color_at(t),
                // i * 100 first so whole-number offsets stay exact
                offset: i as f64 * 100.0 / intervals,
            }
        })
        .collect()
}

/// Lightness from 0 to the space's maximum at fixed chroma and hue
pub fn lightness_gradient(c: f64, h: f64, space: ColorSpace) -> GradientStops {
    tracing::trace!("lightness_gradient c={} h={} space={}", c, h, space);
    let max = space.max_lightness();
    sweep(LINEAR_SAMPLES, |t| to_rgb(t * max, c, h, space))
}

/// Chroma from 0 to the space's maximum at fixed lightness and hue
pub fn chroma_gradient(l: f64, h: f64, space: ColorSpace) -> GradientStops {
    tracing::trace!("chroma_gradient l={} h={} space={}", l, h, space);
    let max = space.max_chroma();
    sweep(LINEAR_SAMPLES, |t| to_rgb(l, t * max, h, space))
}

/// Hue from 0 to 360 degrees inclusive at fixed lightness and chroma
pub fn hue_gradient(l: f64, c: f64, space: ColorSpace) -> GradientStops {
    tracing::trace!("hue_gradient l={} c={} space={}", l, c, space);
    sweep(HUE_SAMPLES, |t| to_rgb(l, c, t * 360.0, space))
}
