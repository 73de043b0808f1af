//! okpick color math
//!
//! Pure conversions between the color representations of the okpick picker:
//!
//! - **OKLCH**: lightness, chroma and hue, approximated through HSL math
//! - **LCH**: OKLCH rescaled to `[0, 100]` lightness and `[0, 150]` chroma
//! - **RGB**: 8-bit sRGB channels
//! - **Hex**: `#rgb`, `#rrggbb` and `#rrggbbaa` text
//!
//! plus slider gradient sampling and the picker state that ties them together.
//! Every function is stateless and total: malformed hex yields `None` (or a
//! [`ColorError`]), out-of-range numbers are clamped at the RGB output.
//!
//! # Example
//!
//! ```rust
//! use okpick_color::{hex_to_rgb, hue_gradient, oklch_to_rgb, rgb_to_hex, ColorSpace, Oklch, Rgb};
//!
//! let rgb = oklch_to_rgb(Oklch::opaque(0.5, 0.4, 0.0));
//! assert_eq!(rgb_to_hex(rgb), "#ff0000");
//! assert_eq!(hex_to_rgb("#f00"), Some(Rgb::new(255, 0, 0)));
//!
//! let stops = hue_gradient(0.5, 0.4, ColorSpace::Oklch);
//! assert_eq!(stops.len(), 13);
//! assert_eq!(stops[0].color, stops[12].color);
//! ```

pub mod convert;
pub mod css;
pub mod error;
pub mod gradient;
pub mod hex;
pub mod input;
pub mod picker;
pub mod types;

pub use convert::{lch_to_oklch, lch_to_rgb, oklch_to_lch, oklch_to_rgb, rgb_to_lch, rgb_to_oklch};
pub use error::{ColorError, Result};
pub use gradient::{
    chroma_gradient, hue_gradient, lightness_gradient, GradientAxis, GradientStop, GradientStops,
};
pub use hex::{hex_to_rgb, parse_hex, rgb_to_hex, rgb_to_hex_alpha, HexColor};
pub use input::{parse_color, parse_color_input, ColorInput};
pub use picker::{PickerPlane, PickerState, SliderGradients};
pub use types::{ColorSpace, Lch, Oklch, Rgb};
