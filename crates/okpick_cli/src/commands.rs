//! Command implementations
//!
//! Each command builds a serializable report; `main` decides between text
//! and JSON output.

use anyhow::{Context, Result};
use okpick_color::css::{alpha_gradient, linear_gradient};
use okpick_color::{
    parse_color, parse_color_input, ColorSpace, GradientAxis, Lch, Oklch, PickerState, Rgb,
};
use serde::Serialize;
use std::fmt;

/// Every representation of one color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertReport {
    pub input: String,
    pub space: ColorSpace,
    pub hex: String,
    pub rgb: Rgb,
    pub oklch: Oklch,
    pub lch: Lch,
    /// `oklch(...)` / `lch(...)` text of the active space
    pub css: String,
    pub swatch: String,
    pub alpha_slider: String,
}

pub fn convert(color: &str, space: ColorSpace) -> Result<ConvertReport> {
    let parsed = parse_color(color).with_context(|| format!("Cannot read color {color:?}"))?;

    let mut state = PickerState::new(space, parsed.to_oklch());
    // Keep an LCH literal exact instead of going through OKLCH
    if let (ColorSpace::Lch, Some(ColorSpace::Lch)) = (space, parsed.space()) {
        state.set_lch(parsed.to_lch());
    }
    tracing::debug!("convert {:?} as {} -> {}", color, space, state.hex());

    Ok(ConvertReport {
        input: color.to_string(),
        space,
        hex: state.hex().to_string(),
        rgb: state.rgb(),
        oklch: state.oklch(),
        lch: state.lch(),
        css: state.display_string(),
        swatch: state.swatch(),
        alpha_slider: alpha_gradient(state.rgb()),
    })
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.rgb;
        writeln!(f, "hex     {}", self.hex)?;
        writeln!(f, "rgb     rgb({r}, {g}, {b})")?;
        writeln!(f, "oklch   {}", okpick_color::css::format_oklch(self.oklch))?;
        writeln!(f, "lch     {}", okpick_color::css::format_lch(self.lch))?;
        write!(f, "swatch  {}", self.swatch)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopReport {
    pub hex: String,
    pub offset: f64,
}

/// One sampled slider gradient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientReport {
    pub axis: &'static str,
    pub space: ColorSpace,
    pub stops: Vec<StopReport>,
    pub css: String,
}

pub fn gradient(axis: GradientAxis, a: f64, b: f64, space: ColorSpace) -> GradientReport {
    let stops = axis.sample(a, b, space);
    GradientReport {
        axis: axis_name(axis),
        space,
        css: linear_gradient(&stops),
        stops: stops
            .iter()
            .map(|stop| StopReport {
                hex: stop.hex(),
                offset: stop.offset,
            })
            .collect(),
    }
}

fn axis_name(axis: GradientAxis) -> &'static str {
    match axis {
        GradientAxis::Lightness => "lightness",
        GradientAxis::Chroma => "chroma",
        GradientAxis::Hue => "hue",
    }
}

impl fmt::Display for GradientReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:>7.2}%  {}", stop.offset, stop.hex)?;
        }
        Ok(())
    }
}

/// `Some(#rrggbb)` when the input is a hex, `rgb()` or `hsl()` color
pub fn normalize(input: &str) -> Option<String> {
    parse_color_input(input)
}
