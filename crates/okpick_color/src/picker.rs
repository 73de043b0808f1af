//! Picker state
//!
//! Keeps the OKLCH and LCH values of one picked color in sync with each
//! other and with the display hex. Any edit is mirrored into the other space;
//! the hex is always recomputed from the active [`ColorSpace`].

use crate::convert::{
    lch_to_oklch, lch_to_rgb, oklch_to_lch, oklch_to_rgb, rgb_to_lch, rgb_to_oklch,
};
use crate::css::{format_lch, format_oklch, swatch_color};
use crate::error::Result;
use crate::gradient::{chroma_gradient, hue_gradient, lightness_gradient, GradientStops};
use crate::hex::{parse_hex, rgb_to_hex_alpha};
use crate::types::{ColorSpace, Lch, Oklch, Rgb};

/// Slider backgrounds for the active space
#[derive(Clone, Debug, PartialEq)]
pub struct SliderGradients {
    pub lightness: GradientStops,
    pub chroma: GradientStops,
    pub hue: GradientStops,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickerState {
    space: ColorSpace,
    oklch: Oklch,
    lch: Lch,
    hex: String,
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(ColorSpace::Oklch, Oklch::opaque(0.7, 0.1, 104.0))
    }
}

impl PickerState {
    /// Start editing `oklch` in `space`
    pub fn new(space: ColorSpace, oklch: Oklch) -> Self {
        let mut state = Self {
            space,
            oklch,
            lch: oklch_to_lch(oklch),
            hex: String::new(),
        };
        state.refresh_hex();
        state
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn oklch(&self) -> Oklch {
        self.oklch
    }

    pub fn lch(&self) -> Lch {
        self.lch
    }

    /// Display hex, 8 digits when the color is translucent
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Switch the active space; the newly active value is mirrored into the
    /// other one.
    pub fn set_space(&mut self, space: ColorSpace) {
        if self.space != space {
            tracing::debug!("PickerState::set_space - {} -> {}", self.space, space);
        }
        self.space = space;
        self.sync();
    }

    pub fn set_oklch(&mut self, oklch: Oklch) {
        self.oklch = oklch;
        self.lch = oklch_to_lch(oklch);
        self.refresh_hex();
    }

    pub fn set_lch(&mut self, lch: Lch) {
        self.lch = lch;
        self.oklch = lch_to_oklch(lch);
        self.refresh_hex();
    }

    /// Replace the color from hex text.
    ///
    /// Malformed input leaves the state untouched and returns the parse
    /// error. An 8-digit hex sets alpha from its trailing byte.
    pub fn apply_hex(&mut self, hex: &str) -> Result<()> {
        let parsed = match parse_hex(hex) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!("PickerState::apply_hex - ignoring {:?}: {}", hex, err);
                return Err(err);
            }
        };

        let alpha = parsed.alpha_percent();
        match self.space {
            ColorSpace::Oklch => self.oklch = rgb_to_oklch(parsed.rgb).with_alpha(alpha),
            ColorSpace::Lch => self.lch = rgb_to_lch(parsed.rgb).with_alpha(alpha),
        }
        self.sync();
        tracing::debug!("PickerState::apply_hex - {:?} -> {}", hex, self.hex);
        Ok(())
    }

    /// Opaque RGB of the active color
    pub fn rgb(&self) -> Rgb {
        match self.space {
            ColorSpace::Oklch => oklch_to_rgb(self.oklch),
            ColorSpace::Lch => lch_to_rgb(self.lch),
        }
    }

    /// Alpha percentage of the active color
    pub fn alpha(&self) -> f64 {
        match self.space {
            ColorSpace::Oklch => self.oklch.a,
            ColorSpace::Lch => self.lch.a,
        }
    }

    /// CSS fill for the swatch
    pub fn swatch(&self) -> String {
        swatch_color(self.rgb(), self.alpha())
    }

    /// `oklch(...)` or `lch(...)` text for the active space
    pub fn display_string(&self) -> String {
        match self.space {
            ColorSpace::Oklch => format_oklch(self.oklch),
            ColorSpace::Lch => format_lch(self.lch),
        }
    }

    pub fn gradients(&self) -> SliderGradients {
        let (l, c, h) = self.axes();
        SliderGradients {
            lightness: lightness_gradient(c, h, self.space),
            chroma: chroma_gradient(l, h, self.space),
            hue: hue_gradient(l, c, self.space),
        }
    }

    /// (l, c, h) of the active space
    fn axes(&self) -> (f64, f64, f64) {
        match self.space {
            ColorSpace::Oklch => (self.oklch.l, self.oklch.c, self.oklch.h),
            ColorSpace::Lch => (self.lch.l, self.lch.c, self.lch.h),
        }
    }

    fn set_axes(&mut self, l: f64, c: f64, h: f64) {
        match self.space {
            ColorSpace::Oklch => self.oklch = Oklch { l, c, h, ..self.oklch },
            ColorSpace::Lch => self.lch = Lch { l, c, h, ..self.lch },
        }
        self.sync();
    }

    fn sync(&mut self) {
        match self.space {
            ColorSpace::Oklch => self.lch = oklch_to_lch(self.oklch),
            ColorSpace::Lch => self.oklch = lch_to_oklch(self.lch),
        }
        self.refresh_hex();
    }

    fn refresh_hex(&mut self) {
        self.hex = rgb_to_hex_alpha(self.rgb(), self.alpha());
    }
}

/// Two-axis picking surfaces. Positions are in [0, 1] with y pointing up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PickerPlane {
    /// x = chroma, y = lightness
    LightnessChroma,
    /// x = chroma, y = hue
    ChromaHue,
    /// x = hue, y = lightness
    HueLightness,
}

impl PickerPlane {
    pub const ALL: [PickerPlane; 3] = [
        PickerPlane::LightnessChroma,
        PickerPlane::ChromaHue,
        PickerPlane::HueLightness,
    ];

    /// Marker position of the state's color on this plane
    pub fn position(self, state: &PickerState) -> (f64, f64) {
        let space = state.space();
        let (l, c, h) = state.axes();
        let l = l / space.max_lightness();
        let c = c / space.max_chroma();
        let h = h / 360.0;
        match self {
            PickerPlane::LightnessChroma => (c, l),
            PickerPlane::ChromaHue => (c, h),
            PickerPlane::HueLightness => (h, l),
        }
    }

    /// Move the state's color to a point on this plane; the third axis is
    /// kept. Coordinates are clamped to [0, 1].
    pub fn apply(self, state: &mut PickerState, x: f64, y: f64) {
        let x = x.clamp(0.0, 1.0);
        let y = y.clamp(0.0, 1.0);
        let space = state.space();
        let (mut l, mut c, mut h) = state.axes();
        match self {
            PickerPlane::LightnessChroma => {
                c = x * space.max_chroma();
                l = y * space.max_lightness();
            }
            PickerPlane::ChromaHue => {
                c = x * space.max_chroma();
                h = y * 360.0;
            }
            PickerPlane::HueLightness => {
                h = x * 360.0;
                l = y * space.max_lightness();
            }
        }
        state.set_axes(l, c, h);
    }
}
